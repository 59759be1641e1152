//! Workout history: recording, querying and summarizing completed workouts.

use crate::{group_key, Goal, Result, SplitType, Workout, WorkoutHistoryRecord, WorkoutRequest};
use chrono::{DateTime, Datelike, Utc};
use std::collections::HashMap;
use uuid::Uuid;

/// Estimated duration of one workout, used for the time-spent summary
pub const ESTIMATED_MINUTES_PER_WORKOUT: u32 = 45;

/// Number of groups reported in the summary
const TOP_GROUPS: usize = 3;

/// Snapshot a finished workout into a history record
pub fn complete_workout(
    request: &WorkoutRequest,
    workout: &Workout,
    now: DateTime<Utc>,
) -> Result<WorkoutHistoryRecord> {
    let split: SplitType = request.split.parse()?;
    let goal: Goal = request.goal.parse()?;

    Ok(WorkoutHistoryRecord {
        id: Uuid::new_v4(),
        date: now,
        split,
        groups: request.groups.iter().map(|g| group_key(g)).collect(),
        goal,
        exercises: workout.clone(),
    })
}

/// Filter for browsing history
#[derive(Clone, Debug, Default)]
pub struct HistoryQuery {
    /// Case-insensitive substring matched against groups, split and goal
    pub search: Option<String>,
    pub goal: Option<Goal>,
}

impl HistoryQuery {
    pub fn matches(&self, record: &WorkoutHistoryRecord) -> bool {
        if let Some(goal) = self.goal {
            if record.goal != goal {
                return false;
            }
        }

        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                record
                    .groups
                    .iter()
                    .any(|g| g.to_lowercase().contains(&term))
                    || record.split.as_str().contains(&term)
                    || record.goal.as_str().contains(&term)
            }
        }
    }

    /// Matching records, newest first
    pub fn apply(&self, records: &[WorkoutHistoryRecord]) -> Vec<WorkoutHistoryRecord> {
        let mut matched: Vec<_> = records
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.date.cmp(&a.date));
        matched
    }
}

/// Group records by calendar month ("October 2026"), keeping input order
pub fn group_by_month(
    records: &[WorkoutHistoryRecord],
) -> Vec<(String, Vec<&WorkoutHistoryRecord>)> {
    let mut months: Vec<(String, Vec<&WorkoutHistoryRecord>)> = Vec::new();

    for record in records {
        let label = format!("{} {}", month_name(record.date.month()), record.date.year());
        match months.iter_mut().find(|(l, _)| *l == label) {
            Some((_, bucket)) => bucket.push(record),
            None => months.push((label, vec![record])),
        }
    }

    months
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}

/// Summary figures over a set of records
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryStats {
    pub total_workouts: usize,
    pub estimated_minutes: u32,
    pub favorite_goal: Option<Goal>,
    pub top_groups: Vec<String>,
}

impl HistoryStats {
    /// Compute stats; records are expected newest first and ties go to the
    /// value seen first
    pub fn compute(records: &[WorkoutHistoryRecord]) -> Self {
        let mut goal_counts: Vec<(Goal, usize)> = Vec::new();
        let mut group_counts: HashMap<&str, (usize, usize)> = HashMap::new();

        for record in records {
            match goal_counts.iter_mut().find(|(g, _)| *g == record.goal) {
                Some((_, count)) => *count += 1,
                None => goal_counts.push((record.goal, 1)),
            }

            for group in &record.groups {
                let first_seen = group_counts.len();
                group_counts.entry(group.as_str()).or_insert((0, first_seen)).0 += 1;
            }
        }

        // max_by_key keeps the last maximum, so scan in reverse to favour the first
        let favorite_goal = goal_counts
            .iter()
            .rev()
            .max_by_key(|(_, count)| *count)
            .map(|(goal, _)| *goal);

        let mut groups: Vec<_> = group_counts.into_iter().collect();
        groups.sort_by(|(_, (ca, fa)), (_, (cb, fb))| cb.cmp(ca).then(fa.cmp(fb)));
        let top_groups = groups
            .into_iter()
            .take(TOP_GROUPS)
            .map(|(g, _)| g.to_string())
            .collect();

        Self {
            total_workouts: records.len(),
            estimated_minutes: records.len() as u32 * ESTIMATED_MINUTES_PER_WORKOUT,
            favorite_goal,
            top_groups,
        }
    }
}
