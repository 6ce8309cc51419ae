use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::{PrayerError, PrayerResult};

/// Key-value blob storage the settings are persisted into.
pub trait Storage: Send + Sync {
    /// `Ok(None)` when nothing has been stored under `key` yet.
    fn read(&self, key: &str) -> PrayerResult<Option<String>>;
    fn write(&self, key: &str, value: &str) -> PrayerResult<()>;
    fn remove(&self, key: &str) -> PrayerResult<()>;
}

/// One `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> PrayerResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PrayerError::Storage(format!(
                "failed to read {}: {}",
                self.path_for(key).display(),
                e
            ))),
        }
    }

    fn write(&self, key: &str, value: &str) -> PrayerResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            PrayerError::Storage(format!("failed to create {}: {}", self.dir.display(), e))
        })?;

        // Write beside the target and rename so a crash never leaves half a blob.
        let target = self.path_for(key);
        let staging = self.dir.join(format!(".{}.json.tmp", key));
        fs::write(&staging, value).map_err(|e| {
            PrayerError::Storage(format!("failed to write {}: {}", staging.display(), e))
        })?;
        fs::rename(&staging, &target).map_err(|e| {
            PrayerError::Storage(format!("failed to replace {}: {}", target.display(), e))
        })?;

        Ok(())
    }

    fn remove(&self, key: &str) -> PrayerResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PrayerError::IoError(e)),
        }
    }
}

/// In-process storage. Clones share the same map, so a test can keep one
/// handle and inspect what the store wrote through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
    fail_writes: Arc<Mutex<bool>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following write fail, for exercising error paths.
    pub fn set_fail_writes(&self, fail: bool) {
        if let Ok(mut flag) = self.fail_writes.lock() {
            *flag = fail;
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok().and_then(|map| map.get(key).cloned())
    }

    fn lock_entries(&self) -> PrayerResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| PrayerError::Storage("memory storage lock poisoned".to_string()))
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> PrayerResult<Option<String>> {
        Ok(self.lock_entries()?.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> PrayerResult<()> {
        if self.fail_writes.lock().map(|flag| *flag).unwrap_or(false) {
            return Err(PrayerError::Storage(format!("write to '{}' rejected", key)));
        }
        self.lock_entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> PrayerResult<()> {
        self.lock_entries()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested"));

        assert_eq!(storage.read("prefs").unwrap(), None);
        storage.write("prefs", r#"{"a":1}"#).unwrap();
        assert_eq!(storage.read("prefs").unwrap().as_deref(), Some(r#"{"a":1}"#));
        assert!(storage.path_for("prefs").exists());

        storage.remove("prefs").unwrap();
        assert_eq!(storage.read("prefs").unwrap(), None);
        // removing twice is fine
        storage.remove("prefs").unwrap();
    }

    #[test]
    fn test_memory_storage_shares_state_between_clones() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();
        storage.write("k", "v").unwrap();
        assert_eq!(handle.get("k").as_deref(), Some("v"));

        handle.set_fail_writes(true);
        assert!(storage.write("k", "w").is_err());
        assert_eq!(storage.get("k").as_deref(), Some("v"));
    }
}
