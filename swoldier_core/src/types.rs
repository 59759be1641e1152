//! Core domain types for the Swoldier workout generator.
//!
//! This module defines the fundamental types used throughout the system:
//! - Muscle groups, split types and goals
//! - Exercise pools and the catalog layout
//! - Goal schemes (reps, sets, rest, tempo)
//! - Generation requests and generated workouts
//! - History records and the user profile

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::Error;

// ============================================================================
// Muscle Groups
// ============================================================================

/// A trainable muscle region
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Quads,
    Hamstrings,
    Glutes,
    Calves,
    Abs,
}

impl MuscleGroup {
    pub const ALL: [MuscleGroup; 10] = [
        MuscleGroup::Chest,
        MuscleGroup::Back,
        MuscleGroup::Shoulders,
        MuscleGroup::Biceps,
        MuscleGroup::Triceps,
        MuscleGroup::Quads,
        MuscleGroup::Hamstrings,
        MuscleGroup::Glutes,
        MuscleGroup::Calves,
        MuscleGroup::Abs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "chest",
            MuscleGroup::Back => "back",
            MuscleGroup::Shoulders => "shoulders",
            MuscleGroup::Biceps => "biceps",
            MuscleGroup::Triceps => "triceps",
            MuscleGroup::Quads => "quads",
            MuscleGroup::Hamstrings => "hamstrings",
            MuscleGroup::Glutes => "glutes",
            MuscleGroup::Calves => "calves",
            MuscleGroup::Abs => "abs",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MuscleGroup {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let key = group_key(s);
        MuscleGroup::ALL
            .into_iter()
            .find(|m| m.as_str() == key)
            .ok_or(())
    }
}

// ============================================================================
// Split Types and Goals
// ============================================================================

/// Training philosophy that decides how muscle groups are bucketed
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SplitType {
    /// Flat list of muscle groups, up to three picked directly
    Individual,
    BroSplit,
    BodybuilderSplit,
    UpperLower,
}

impl SplitType {
    pub const ALL: [SplitType; 4] = [
        SplitType::Individual,
        SplitType::BroSplit,
        SplitType::BodybuilderSplit,
        SplitType::UpperLower,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SplitType::Individual => "individual",
            SplitType::BroSplit => "bro_split",
            SplitType::BodybuilderSplit => "bodybuilder_split",
            SplitType::UpperLower => "upper_lower",
        }
    }

    /// Human readable label ("bro split")
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }

    pub fn description(&self) -> &'static str {
        match self {
            SplitType::Individual => {
                "Focus on specific muscle groups with exercises targeting those areas directly."
            }
            SplitType::BroSplit => {
                "Classic bodybuilding approach dividing workouts into push, pull, and leg days."
            }
            SplitType::BodybuilderSplit => {
                "Comprehensive split targeting specific body parts on different days."
            }
            SplitType::UpperLower => {
                "Efficient approach alternating between upper body and lower body workouts."
            }
        }
    }

    /// Whether the user picks raw muscle groups rather than a single bucket
    pub fn is_individual(&self) -> bool {
        matches!(self, SplitType::Individual)
    }
}

impl fmt::Display for SplitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SplitType {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        SplitType::ALL
            .into_iter()
            .find(|split| split.as_str() == key)
            .ok_or_else(|| Error::InvalidSplit(s.to_string()))
    }
}

/// Training objective
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    StrengthPower,
    GrowthHypertrophy,
    CardiovascularEndurance,
}

impl Goal {
    pub const ALL: [Goal; 3] = [
        Goal::StrengthPower,
        Goal::GrowthHypertrophy,
        Goal::CardiovascularEndurance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::StrengthPower => "strength_power",
            Goal::GrowthHypertrophy => "growth_hypertrophy",
            Goal::CardiovascularEndurance => "cardiovascular_endurance",
        }
    }

    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Goal::ALL
            .into_iter()
            .find(|goal| goal.as_str() == key)
            .ok_or_else(|| Error::UnknownGoal(s.to_string()))
    }
}

// ============================================================================
// Schemes
// ============================================================================

/// Inclusive repetition range, e.g. 8-12
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepRange {
    pub min: u32,
    pub max: u32,
}

impl fmt::Display for RepRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

/// Parameter bundle attached verbatim to every exercise generated for a goal
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Scheme {
    pub reps: RepRange,
    pub sets: u32,
    pub rest_seconds: u32,
    /// Eccentric / pause / concentric seconds, e.g. "3 0 1"
    pub tempo: String,
}

// ============================================================================
// Catalog Types
// ============================================================================

/// A candidate exercise inside one catalog pool
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExercisePoolEntry {
    pub name: String,
    pub muscles: Vec<MuscleGroup>,
}

/// A named sub-bucket of a non-individual split ("push", "upper", ...)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Bucket {
    /// Muscle groups this bucket trains
    pub targets: Vec<MuscleGroup>,
    pub pool: Vec<ExercisePoolEntry>,
}

/// Layout of one split type's pools
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum CatalogCell {
    /// Pools keyed directly by muscle group
    Flat {
        groups: BTreeMap<MuscleGroup, Vec<ExercisePoolEntry>>,
    },
    /// Pools keyed by bucket name
    Bucketed { buckets: BTreeMap<String, Bucket> },
}

/// The complete reference catalog: exercise pools per split and goal schemes
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Catalog {
    pub splits: BTreeMap<SplitType, CatalogCell>,
    pub schemes: BTreeMap<Goal, Scheme>,
}

// ============================================================================
// Generation Types
// ============================================================================

/// Generator input as submitted by a selection form
///
/// Identifiers are kept as raw strings; the engine parses and validates them.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutRequest {
    pub split: String,
    pub groups: Vec<String>,
    pub goal: String,
}

impl WorkoutRequest {
    pub fn new<S: Into<String>>(
        split: impl Into<String>,
        groups: impl IntoIterator<Item = S>,
        goal: impl Into<String>,
    ) -> Self {
        Self {
            split: split.into(),
            groups: groups.into_iter().map(Into::into).collect(),
            goal: goal.into(),
        }
    }
}

/// Canonical form of a selected group: trimmed and lowercased
///
/// Muscle group keys and bucket names are stored in this form, so two
/// selections naming the same group always compare equal.
pub fn group_key(group: &str) -> String {
    group.trim().to_lowercase()
}

/// One exercise of a generated workout
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratedExercise {
    pub name: String,
    pub muscles: Vec<MuscleGroup>,
    /// Selected group or bucket this exercise was drawn for
    pub source_group: String,
    pub reps: RepRange,
    pub sets: u32,
    pub rest_seconds: u32,
    pub tempo: String,
}

/// Ordered exercises, one run per selected group in selection order
pub type Workout = Vec<GeneratedExercise>;

// ============================================================================
// History and Profile Types
// ============================================================================

/// A completed workout as persisted in history
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorkoutHistoryRecord {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub split: SplitType,
    pub groups: Vec<String>,
    pub goal: Goal,
    pub exercises: Workout,
}

/// User profile counters
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub name: String,
    pub level: String,
    pub workouts_completed: u32,
    pub streak: u32,
    pub last_workout: Option<DateTime<Utc>>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "User".into(),
            level: "Beginner".into(),
            workouts_completed: 0,
            streak: 0,
            last_workout: None,
        }
    }
}
