//! User profile persistence with file locking.
//!
//! The profile is a small JSON document rewritten atomically on every change.

use crate::{Error, Result, UserProfile};
use chrono::{DateTime, Utc};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

impl UserProfile {
    /// Count a finished workout
    pub fn record_completion(&mut self, now: DateTime<Utc>) {
        self.workouts_completed += 1;
        self.streak += 1;
        self.last_workout = Some(now);
    }

    /// Load the profile with shared locking
    ///
    /// Returns the default profile if the file doesn't exist.
    /// If the file is corrupted, logs a warning and returns the default profile.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("No profile found, using default profile");
            return Ok(Self::default());
        }

        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) => {
                tracing::warn!("Unable to open profile {:?}: {}. Using defaults.", path, e);
                return Ok(Self::default());
            }
        };

        if let Err(e) = file.lock_shared() {
            tracing::warn!("Unable to lock profile {:?}: {}. Using defaults.", path, e);
            return Ok(Self::default());
        }

        let mut contents = String::new();
        let mut reader = std::io::BufReader::new(&file);
        if let Err(e) = reader.read_to_string(&mut contents) {
            let _ = file.unlock();
            tracing::warn!("Failed to read profile {:?}: {}. Using defaults.", path, e);
            return Ok(Self::default());
        }

        file.unlock()?;

        match serde_json::from_str::<UserProfile>(&contents) {
            Ok(profile) => {
                tracing::debug!("Loaded profile from {:?}", path);
                Ok(profile)
            }
            Err(e) => {
                tracing::warn!("Failed to parse profile {:?}: {}. Using defaults.", path, e);
                Ok(Self::default())
            }
        }
    }

    /// Save the profile under the profile lock
    ///
    /// Writes to a temp file in the same directory, syncs it, then renames it
    /// over the original.
    pub fn save(&self, path: &Path) -> Result<()> {
        let lock = ProfileLock::acquire(path)?;
        self.write_atomic(path)?;
        lock.release()
    }

    /// Load the profile, modify it, and save it back
    ///
    /// The profile lock is held from load through rename.
    pub fn update<F>(path: &Path, f: F) -> Result<Self>
    where
        F: FnOnce(&mut UserProfile) -> Result<()>,
    {
        let lock = ProfileLock::acquire(path)?;
        let mut profile = Self::load(path)?;
        f(&mut profile)?;
        profile.write_atomic(path)?;
        lock.release()?;
        Ok(profile)
    }

    fn write_atomic(&self, path: &Path) -> Result<()> {
        let parent = path.parent().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::Other, "profile path missing parent")
        })?;
        let temp = NamedTempFile::new_in(parent)?;

        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            let contents = serde_json::to_string_pretty(self)?;
            writer.write_all(contents.as_bytes())?;
            writer.flush()?;
        }

        temp.as_file().sync_all()?;
        temp.persist(path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Saved profile to {:?}", path);
        Ok(())
    }
}

/// Exclusive lock on the `<profile>.lock` sidecar
///
/// The profile itself is replaced by rename on every save, so the lock lives
/// on a file that is never renamed.
struct ProfileLock {
    file: File,
}

impl ProfileLock {
    fn acquire(profile_path: &Path) -> Result<Self> {
        if let Some(parent) = profile_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .open(lock_path(profile_path))?;
        file.lock_exclusive()?;
        Ok(Self { file })
    }

    fn release(self) -> Result<()> {
        self.file.unlock()?;
        Ok(())
    }
}

fn lock_path(profile_path: &Path) -> PathBuf {
    let mut name = profile_path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "profile".into());
    name.push(".lock");
    profile_path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("profile.json");

        let mut profile = UserProfile {
            name: "Sam".into(),
            level: "Intermediate".into(),
            ..UserProfile::default()
        };
        profile.record_completion(Utc::now());
        profile.save(&path).unwrap();

        let loaded = UserProfile::load(&path).unwrap();
        assert_eq!(loaded, profile);
        assert_eq!(loaded.workouts_completed, 1);
    }

    #[test]
    fn test_load_nonexistent_returns_default() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let profile = UserProfile::load(&path).unwrap();
        assert_eq!(profile.name, "User");
        assert_eq!(profile.level, "Beginner");
        assert_eq!(profile.workouts_completed, 0);
        assert!(profile.last_workout.is_none());
    }

    #[test]
    fn test_record_completion_bumps_counters() {
        let mut profile = UserProfile::default();
        let now = Utc::now();

        profile.record_completion(now);
        profile.record_completion(now);

        assert_eq!(profile.workouts_completed, 2);
        assert_eq!(profile.streak, 2);
        assert_eq!(profile.last_workout, Some(now));
    }

    #[test]
    fn test_update_pattern() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("profile.json");

        UserProfile::update(&path, |profile| {
            profile.name = "Alex".into();
            Ok(())
        })
        .unwrap();

        let loaded = UserProfile::load(&path).unwrap();
        assert_eq!(loaded.name, "Alex");
    }

    #[test]
    fn test_corrupted_profile_returns_default() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("corrupted.json");

        std::fs::write(&path, "{ invalid json }").unwrap();

        let profile = UserProfile::load(&path).unwrap();
        assert_eq!(profile, UserProfile::default());
    }

    #[test]
    fn test_atomic_save() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("profile.json");

        UserProfile::default().save(&path).unwrap();

        assert!(path.exists());
        let extras: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name() != "profile.json" && e.file_name() != "profile.json.lock")
            .collect();
        assert!(
            extras.is_empty(),
            "Expected only profile.json and its lock, found extras: {:?}",
            extras
        );
    }

    #[test]
    fn test_lock_path_is_sidecar() {
        assert_eq!(
            lock_path(Path::new("/data/profile.json")),
            PathBuf::from("/data/profile.json.lock")
        );
    }

    #[test]
    fn test_concurrent_updates_are_not_lost() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("profile.json");

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let path = path.clone();
                std::thread::spawn(move || {
                    for _ in 0..5 {
                        UserProfile::update(&path, |profile| {
                            profile.record_completion(Utc::now());
                            Ok(())
                        })
                        .unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let profile = UserProfile::load(&path).unwrap();
        assert_eq!(profile.workouts_completed, 40);
        assert_eq!(profile.streak, 40);
    }
}
