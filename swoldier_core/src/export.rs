//! CSV export of workout history.
//!
//! One row per exercise, so a spreadsheet can pivot by group or exercise.

use crate::{Result, WorkoutHistoryRecord};
use std::fs::File;
use std::path::Path;

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
struct CsvRow<'a> {
    record_id: String,
    date: String,
    split: &'a str,
    goal: &'a str,
    group: &'a str,
    exercise: &'a str,
    sets: u32,
    reps: String,
    rest_seconds: u32,
    tempo: &'a str,
}

/// Write history records to a CSV file, replacing any previous export
///
/// The file is fsynced before returning. Returns the number of rows written.
pub fn export_csv(records: &[WorkoutHistoryRecord], path: &Path) -> Result<usize> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(file);

    let mut rows = 0;
    for record in records {
        let record_id = record.id.to_string();
        let date = record.date.to_rfc3339();

        for exercise in &record.exercises {
            writer.serialize(CsvRow {
                record_id: record_id.clone(),
                date: date.clone(),
                split: record.split.as_str(),
                goal: record.goal.as_str(),
                group: &exercise.source_group,
                exercise: &exercise.name,
                sets: exercise.sets,
                reps: exercise.reps.to_string(),
                rest_seconds: exercise.rest_seconds,
                tempo: &exercise.tempo,
            })?;
            rows += 1;
        }
    }

    writer.flush()?;
    let file = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    file.sync_all()?;

    tracing::info!(
        "Exported {} rows from {} workouts to {:?}",
        rows,
        records.len(),
        path
    );

    Ok(rows)
}
