//! Default catalog of exercise pools and goal schemes.
//!
//! The catalog is plain data: pools keyed by split type and group (or bucket),
//! and one scheme per goal. The built-in copy is built once and shared; an
//! edited copy can be loaded from JSON.

use crate::types::*;
use crate::{Error, Result};
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog_internal);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Builds the default catalog
///
/// **Note**: For production use, prefer `get_default_catalog()` which returns a
/// cached reference. This function is retained for tests and custom catalogs.
pub fn build_default_catalog() -> Catalog {
    build_default_catalog_internal()
}

fn ex(name: &str, muscles: &[MuscleGroup]) -> ExercisePoolEntry {
    ExercisePoolEntry {
        name: name.into(),
        muscles: muscles.to_vec(),
    }
}

fn bucket(targets: &[MuscleGroup], pool: Vec<ExercisePoolEntry>) -> Bucket {
    Bucket {
        targets: targets.to_vec(),
        pool,
    }
}

fn build_default_catalog_internal() -> Catalog {
    use MuscleGroup::*;

    let mut splits = BTreeMap::new();
    let mut schemes = BTreeMap::new();

    // ========================================================================
    // Individual (flat pools per muscle group)
    // ========================================================================

    let mut groups = BTreeMap::new();
    groups.insert(
        Chest,
        vec![
            ex("Barbell Bench Press", &[Chest, Triceps]),
            ex("Incline Dumbbell Press", &[Chest, Shoulders]),
            ex("Cable Fly", &[Chest]),
            ex("Weighted Dip", &[Chest, Triceps]),
            ex("Push-up", &[Chest, Triceps]),
            ex("Pec Deck", &[Chest]),
        ],
    );
    groups.insert(
        Back,
        vec![
            ex("Pull-up", &[Back, Biceps]),
            ex("Barbell Row", &[Back]),
            ex("Lat Pulldown", &[Back, Biceps]),
            ex("Seated Cable Row", &[Back]),
            ex("Single-arm Dumbbell Row", &[Back]),
            ex("Straight-arm Pulldown", &[Back]),
        ],
    );
    groups.insert(
        Shoulders,
        vec![
            ex("Overhead Press", &[Shoulders, Triceps]),
            ex("Seated Dumbbell Press", &[Shoulders, Triceps]),
            ex("Lateral Raise", &[Shoulders]),
            ex("Rear Delt Fly", &[Shoulders]),
            ex("Face Pull", &[Shoulders, Back]),
            ex("Arnold Press", &[Shoulders]),
        ],
    );
    groups.insert(
        Biceps,
        vec![
            ex("Barbell Curl", &[Biceps]),
            ex("Hammer Curl", &[Biceps]),
            ex("Incline Dumbbell Curl", &[Biceps]),
            ex("Preacher Curl", &[Biceps]),
            ex("Cable Curl", &[Biceps]),
        ],
    );
    groups.insert(
        Triceps,
        vec![
            ex("Close-grip Bench Press", &[Triceps, Chest]),
            ex("Skull Crusher", &[Triceps]),
            ex("Rope Pushdown", &[Triceps]),
            ex("Overhead Cable Extension", &[Triceps]),
            ex("Bench Dip", &[Triceps, Chest]),
        ],
    );
    groups.insert(
        Quads,
        vec![
            ex("Back Squat", &[Quads, Glutes]),
            ex("Front Squat", &[Quads]),
            ex("Leg Press", &[Quads, Glutes]),
            ex("Bulgarian Split Squat", &[Quads, Glutes]),
            ex("Leg Extension", &[Quads]),
            ex("Walking Lunge", &[Quads, Glutes]),
        ],
    );
    groups.insert(
        Hamstrings,
        vec![
            ex("Romanian Deadlift", &[Hamstrings, Glutes]),
            ex("Lying Leg Curl", &[Hamstrings]),
            ex("Nordic Curl", &[Hamstrings]),
            ex("Good Morning", &[Hamstrings, Back]),
            ex("Seated Leg Curl", &[Hamstrings]),
        ],
    );
    groups.insert(
        Glutes,
        vec![
            ex("Hip Thrust", &[Glutes]),
            ex("Glute Bridge", &[Glutes]),
            ex("Cable Kickback", &[Glutes]),
            ex("Sumo Deadlift", &[Glutes, Hamstrings, Quads]),
            ex("Step-up", &[Glutes, Quads]),
        ],
    );
    groups.insert(
        Calves,
        vec![
            ex("Standing Calf Raise", &[Calves]),
            ex("Seated Calf Raise", &[Calves]),
            ex("Single-leg Calf Raise", &[Calves]),
            ex("Leg Press Calf Raise", &[Calves]),
        ],
    );
    groups.insert(
        Abs,
        vec![
            ex("Hanging Leg Raise", &[Abs]),
            ex("Cable Crunch", &[Abs]),
            ex("Ab Wheel Rollout", &[Abs]),
            ex("Plank", &[Abs]),
            ex("Russian Twist", &[Abs]),
        ],
    );
    splits.insert(SplitType::Individual, CatalogCell::Flat { groups });

    // ========================================================================
    // Bro split (push / pull / legs)
    // ========================================================================

    let mut buckets = BTreeMap::new();
    buckets.insert(
        "push".to_string(),
        bucket(
            &[Chest, Shoulders, Triceps],
            vec![
                ex("Barbell Bench Press", &[Chest, Triceps]),
                ex("Incline Dumbbell Press", &[Chest, Shoulders]),
                ex("Overhead Press", &[Shoulders, Triceps]),
                ex("Lateral Raise", &[Shoulders]),
                ex("Weighted Dip", &[Chest, Triceps]),
                ex("Rope Pushdown", &[Triceps]),
                ex("Cable Fly", &[Chest]),
            ],
        ),
    );
    buckets.insert(
        "pull".to_string(),
        bucket(
            &[Back, Biceps, Shoulders],
            vec![
                ex("Deadlift", &[Back, Hamstrings, Glutes]),
                ex("Pull-up", &[Back, Biceps]),
                ex("Barbell Row", &[Back]),
                ex("Seated Cable Row", &[Back]),
                ex("Face Pull", &[Shoulders, Back]),
                ex("Barbell Curl", &[Biceps]),
                ex("Hammer Curl", &[Biceps]),
            ],
        ),
    );
    buckets.insert(
        "legs".to_string(),
        bucket(
            &[Quads, Hamstrings, Glutes, Calves],
            vec![
                ex("Back Squat", &[Quads, Glutes]),
                ex("Romanian Deadlift", &[Hamstrings, Glutes]),
                ex("Leg Press", &[Quads, Glutes]),
                ex("Walking Lunge", &[Quads, Glutes]),
                ex("Lying Leg Curl", &[Hamstrings]),
                ex("Hip Thrust", &[Glutes]),
                ex("Standing Calf Raise", &[Calves]),
            ],
        ),
    );
    splits.insert(SplitType::BroSplit, CatalogCell::Bucketed { buckets });

    // ========================================================================
    // Bodybuilder split (one body part per day)
    // ========================================================================

    let mut buckets = BTreeMap::new();
    buckets.insert(
        "chest".to_string(),
        bucket(
            &[Chest],
            vec![
                ex("Barbell Bench Press", &[Chest, Triceps]),
                ex("Incline Barbell Press", &[Chest, Shoulders]),
                ex("Decline Dumbbell Press", &[Chest]),
                ex("Cable Fly", &[Chest]),
                ex("Pec Deck", &[Chest]),
                ex("Weighted Dip", &[Chest, Triceps]),
            ],
        ),
    );
    buckets.insert(
        "back".to_string(),
        bucket(
            &[Back],
            vec![
                ex("Deadlift", &[Back, Hamstrings, Glutes]),
                ex("Pull-up", &[Back, Biceps]),
                ex("T-bar Row", &[Back]),
                ex("Lat Pulldown", &[Back, Biceps]),
                ex("Seated Cable Row", &[Back]),
                ex("Straight-arm Pulldown", &[Back]),
            ],
        ),
    );
    buckets.insert(
        "shoulders".to_string(),
        bucket(
            &[Shoulders],
            vec![
                ex("Overhead Press", &[Shoulders, Triceps]),
                ex("Arnold Press", &[Shoulders]),
                ex("Lateral Raise", &[Shoulders]),
                ex("Cable Lateral Raise", &[Shoulders]),
                ex("Rear Delt Fly", &[Shoulders]),
                ex("Upright Row", &[Shoulders]),
            ],
        ),
    );
    buckets.insert(
        "legs".to_string(),
        bucket(
            &[Quads, Hamstrings, Glutes, Calves],
            vec![
                ex("Back Squat", &[Quads, Glutes]),
                ex("Hack Squat", &[Quads]),
                ex("Romanian Deadlift", &[Hamstrings, Glutes]),
                ex("Leg Extension", &[Quads]),
                ex("Seated Leg Curl", &[Hamstrings]),
                ex("Hip Thrust", &[Glutes]),
                ex("Seated Calf Raise", &[Calves]),
            ],
        ),
    );
    buckets.insert(
        "arms".to_string(),
        bucket(
            &[Biceps, Triceps],
            vec![
                ex("Barbell Curl", &[Biceps]),
                ex("Preacher Curl", &[Biceps]),
                ex("Hammer Curl", &[Biceps]),
                ex("Close-grip Bench Press", &[Triceps, Chest]),
                ex("Skull Crusher", &[Triceps]),
                ex("Rope Pushdown", &[Triceps]),
            ],
        ),
    );
    buckets.insert(
        "abs".to_string(),
        bucket(
            &[Abs],
            vec![
                ex("Hanging Leg Raise", &[Abs]),
                ex("Cable Crunch", &[Abs]),
                ex("Ab Wheel Rollout", &[Abs]),
                ex("Decline Sit-up", &[Abs]),
                ex("Plank", &[Abs]),
            ],
        ),
    );
    splits.insert(SplitType::BodybuilderSplit, CatalogCell::Bucketed { buckets });

    // ========================================================================
    // Upper / lower
    // ========================================================================

    let mut buckets = BTreeMap::new();
    buckets.insert(
        "upper".to_string(),
        bucket(
            &[Chest, Back, Shoulders, Biceps, Triceps],
            vec![
                ex("Barbell Bench Press", &[Chest, Triceps]),
                ex("Barbell Row", &[Back]),
                ex("Overhead Press", &[Shoulders, Triceps]),
                ex("Pull-up", &[Back, Biceps]),
                ex("Incline Dumbbell Press", &[Chest, Shoulders]),
                ex("Lateral Raise", &[Shoulders]),
                ex("Barbell Curl", &[Biceps]),
                ex("Rope Pushdown", &[Triceps]),
            ],
        ),
    );
    buckets.insert(
        "lower".to_string(),
        bucket(
            &[Quads, Hamstrings, Glutes, Calves, Abs],
            vec![
                ex("Back Squat", &[Quads, Glutes]),
                ex("Romanian Deadlift", &[Hamstrings, Glutes]),
                ex("Bulgarian Split Squat", &[Quads, Glutes]),
                ex("Leg Press", &[Quads, Glutes]),
                ex("Lying Leg Curl", &[Hamstrings]),
                ex("Standing Calf Raise", &[Calves]),
                ex("Hanging Leg Raise", &[Abs]),
            ],
        ),
    );
    splits.insert(SplitType::UpperLower, CatalogCell::Bucketed { buckets });

    // ========================================================================
    // Goal schemes
    // ========================================================================

    schemes.insert(
        Goal::StrengthPower,
        Scheme {
            reps: RepRange { min: 3, max: 6 },
            sets: 5,
            rest_seconds: 180,
            tempo: "2 1 1".into(),
        },
    );
    schemes.insert(
        Goal::GrowthHypertrophy,
        Scheme {
            reps: RepRange { min: 8, max: 12 },
            sets: 4,
            rest_seconds: 90,
            tempo: "3 0 1".into(),
        },
    );
    schemes.insert(
        Goal::CardiovascularEndurance,
        Scheme {
            reps: RepRange { min: 15, max: 20 },
            sets: 3,
            rest_seconds: 45,
            tempo: "1 0 1".into(),
        },
    );

    Catalog { splits, schemes }
}

impl Catalog {
    /// Load a catalog from a JSON file and validate it
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let catalog: Catalog = serde_json::from_str(&contents)?;

        let errors = catalog.validate();
        if !errors.is_empty() {
            return Err(Error::CatalogValidation(errors.join("; ")));
        }

        tracing::info!("Loaded catalog from {:?}", path);
        Ok(catalog)
    }

    /// Look up the cell for a split type
    pub fn cell(&self, split: SplitType) -> Result<&CatalogCell> {
        self.splits
            .get(&split)
            .ok_or_else(|| Error::InvalidSplit(split.to_string()))
    }

    /// Pool of candidate exercises for a group (or bucket) under a split
    pub fn pool_for(&self, split: SplitType, group: &str) -> Result<&[ExercisePoolEntry]> {
        let unknown = || Error::UnknownGroup {
            split,
            group: group.to_string(),
        };

        match self.cell(split)? {
            CatalogCell::Flat { groups } => {
                let muscle: MuscleGroup = group.parse().map_err(|_| unknown())?;
                groups
                    .get(&muscle)
                    .map(Vec::as_slice)
                    .ok_or_else(unknown)
            }
            CatalogCell::Bucketed { buckets } => buckets
                .get(group_key(group).as_str())
                .map(|b| b.pool.as_slice())
                .ok_or_else(unknown),
        }
    }

    /// Scheme for a goal
    pub fn scheme_for(&self, goal: Goal) -> Result<&Scheme> {
        self.schemes
            .get(&goal)
            .ok_or_else(|| Error::UnknownGoal(goal.to_string()))
    }

    /// Selectable keys of a split: muscle groups or bucket names
    pub fn groups_for(&self, split: SplitType) -> Result<Vec<String>> {
        let keys = match self.cell(split)? {
            CatalogCell::Flat { groups } => groups.keys().map(|m| m.to_string()).collect(),
            CatalogCell::Bucketed { buckets } => buckets.keys().cloned().collect(),
        };
        Ok(keys)
    }

    /// Validate catalog integrity
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for split in SplitType::ALL {
            let Some(cell) = self.splits.get(&split) else {
                errors.push(format!("Split {} has no catalog cell", split));
                continue;
            };

            match cell {
                CatalogCell::Flat { groups } => {
                    if groups.is_empty() {
                        errors.push(format!("Split {} has no groups", split));
                    }
                    for (muscle, pool) in groups {
                        let key = format!("{}/{}", split, muscle);
                        validate_pool(&key, pool, &mut errors);
                        for entry in pool {
                            if !entry.muscles.contains(muscle) {
                                errors.push(format!(
                                    "{}: exercise '{}' does not work {}",
                                    key, entry.name, muscle
                                ));
                            }
                        }
                    }
                }
                CatalogCell::Bucketed { buckets } => {
                    if buckets.is_empty() {
                        errors.push(format!("Split {} has no buckets", split));
                    }
                    for (name, bucket) in buckets {
                        let key = format!("{}/{}", split, name);
                        if *name != group_key(name) {
                            errors.push(format!(
                                "{}: bucket name must be trimmed lowercase",
                                key
                            ));
                        }
                        if bucket.targets.is_empty() {
                            errors.push(format!("{}: bucket has no target muscles", key));
                        }
                        validate_pool(&key, &bucket.pool, &mut errors);
                        for entry in &bucket.pool {
                            if !entry.muscles.iter().any(|m| bucket.targets.contains(m)) {
                                errors.push(format!(
                                    "{}: exercise '{}' misses every bucket target",
                                    key, entry.name
                                ));
                            }
                        }
                    }
                }
            }
        }

        for goal in Goal::ALL {
            match self.schemes.get(&goal) {
                None => errors.push(format!("Goal {} has no scheme", goal)),
                Some(scheme) => {
                    if scheme.reps.min == 0 || scheme.reps.min > scheme.reps.max {
                        errors.push(format!(
                            "Goal {}: invalid rep range {}",
                            goal, scheme.reps
                        ));
                    }
                    if scheme.sets == 0 {
                        errors.push(format!("Goal {}: set count must be positive", goal));
                    }
                    if scheme.tempo.trim().is_empty() {
                        errors.push(format!("Goal {}: tempo is empty", goal));
                    }
                }
            }
        }

        errors
    }
}

fn validate_pool(key: &str, pool: &[ExercisePoolEntry], errors: &mut Vec<String>) {
    if pool.is_empty() {
        errors.push(format!("{}: pool is empty", key));
    }

    let mut seen = HashSet::new();
    for entry in pool {
        if entry.name.trim().is_empty() {
            errors.push(format!("{}: exercise with empty name", key));
        }
        if entry.muscles.is_empty() {
            errors.push(format!("{}: exercise '{}' has no muscles", key, entry.name));
        }
        if !seen.insert(entry.name.as_str()) {
            errors.push(format!("{}: duplicate exercise '{}'", key, entry.name));
        }
    }
}
