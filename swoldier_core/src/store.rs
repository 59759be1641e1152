//! Append-only workout history store.
//!
//! Records are appended to a JSONL (JSON Lines) file with file locking
//! so several processes can log workouts at once.

use crate::{Result, WorkoutHistoryRecord};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Persistence boundary for completed workouts
pub trait HistoryStore {
    fn append(&mut self, record: &WorkoutHistoryRecord) -> Result<()>;
    fn load_all(&self) -> Result<Vec<WorkoutHistoryRecord>>;
}

/// JSONL-backed history store with file locking
pub struct JsonlHistoryStore {
    path: PathBuf,
}

impl JsonlHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl HistoryStore for JsonlHistoryStore {
    fn append(&mut self, record: &WorkoutHistoryRecord) -> Result<()> {
        self.ensure_parent_dir()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.lock_exclusive()?;

        let mut writer = std::io::BufWriter::new(&file);
        let line = serde_json::to_string(record)?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        drop(writer);

        file.unlock()?;

        tracing::debug!("Appended workout {} to history", record.id);
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<WorkoutHistoryRecord>> {
        read_records(&self.path)
    }
}

/// Read all records from a history file, oldest first
///
/// Lines that fail to parse are skipped with a warning.
pub fn read_records(path: &Path) -> Result<Vec<WorkoutHistoryRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    file.lock_shared()?;

    let reader = BufReader::new(&file);
    let mut records = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<WorkoutHistoryRecord>(&line) {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!("Failed to parse history record at line {}: {}", line_num + 1, e);
            }
        }
    }

    file.unlock()?;
    tracing::debug!("Read {} records from history", records.len());
    Ok(records)
}
