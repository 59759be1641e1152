//! Workout generation engine.
//!
//! Maps a (split, groups, goal) request onto a concrete workout:
//! - Validate the request against the catalog
//! - Draw a bounded number of distinct exercises per selected group
//! - Attach the goal's scheme to every drawn exercise
//!
//! The engine is a pure function over the catalog and the request. The only
//! source of variation is the injected random number generator.

use crate::{
    group_key, Catalog, Error, ExercisePoolEntry, GeneratedExercise, Goal, Result, Scheme,
    SplitType, Workout, WorkoutRequest,
};
use rand::seq::index;
use rand::Rng;

/// Default number of exercises drawn per selected group
pub const DEFAULT_EXERCISES_PER_GROUP: usize = 4;

/// Tunable generation parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerateOptions {
    pub exercises_per_group: usize,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            exercises_per_group: DEFAULT_EXERCISES_PER_GROUP,
        }
    }
}

impl GenerateOptions {
    pub fn with_exercises_per_group(exercises_per_group: usize) -> Self {
        Self {
            exercises_per_group,
        }
    }
}

/// Generate a workout for a request
///
/// ## Validation order
///
/// 1. No groups → `EmptySelection`
/// 2. Unrecognized split → `InvalidSplit`
/// 3. Unrecognized goal, or goal without scheme → `UnknownGoal`
/// 4. Any group not valid for the split → `UnknownGroup`
///
/// Every group is resolved before anything is drawn, so a failing request
/// never yields a partial workout.
///
/// ## Selection
///
/// Each group contributes `min(exercises_per_group, pool size)` exercises drawn
/// uniformly without replacement. Groups are concatenated in request order and
/// never de-duplicated against each other.
pub fn generate<R: Rng + ?Sized>(
    catalog: &Catalog,
    request: &WorkoutRequest,
    options: &GenerateOptions,
    rng: &mut R,
) -> Result<Workout> {
    if request.groups.is_empty() {
        return Err(Error::EmptySelection);
    }
    if options.exercises_per_group == 0 {
        return Err(Error::Config(
            "exercises_per_group must be at least 1".into(),
        ));
    }

    let split: SplitType = request.split.parse()?;
    let goal: Goal = request.goal.parse()?;
    let scheme = catalog.scheme_for(goal)?;

    let pools = request
        .groups
        .iter()
        .map(|group| {
            catalog
                .pool_for(split, group)
                .map(|pool| (group_key(group), pool))
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::info!(
        "Generating {} workout for {:?} ({})",
        split,
        request.groups,
        goal
    );

    let mut workout = Vec::new();
    for (group, pool) in pools {
        let drawn = draw(pool, options.exercises_per_group, rng);
        tracing::debug!(
            "Drew {} of {} exercises for {}",
            drawn.len(),
            pool.len(),
            group
        );
        workout.extend(drawn.into_iter().map(|entry| prescribe(entry, &group, scheme)));
    }

    Ok(workout)
}

/// Draw up to `count` distinct entries; a short pool is returned whole
fn draw<'a, R: Rng + ?Sized>(
    pool: &'a [ExercisePoolEntry],
    count: usize,
    rng: &mut R,
) -> Vec<&'a ExercisePoolEntry> {
    if pool.len() <= count {
        return pool.iter().collect();
    }

    index::sample(rng, pool.len(), count)
        .into_iter()
        .map(|i| &pool[i])
        .collect()
}

fn prescribe(entry: &ExercisePoolEntry, group: &str, scheme: &Scheme) -> GeneratedExercise {
    GeneratedExercise {
        name: entry.name.clone(),
        muscles: entry.muscles.clone(),
        source_group: group.to_string(),
        reps: scheme.reps,
        sets: scheme.sets,
        rest_seconds: scheme.rest_seconds,
        tempo: scheme.tempo.clone(),
    }
}
