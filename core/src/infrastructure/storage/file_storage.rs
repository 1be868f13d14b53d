use std::{
    fs, io,
    path::PathBuf,
};

use crate::domain::{common::entities::app_errors::CoreError, state::ports::StatePersistence};

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStatePersistence {
    dir: PathBuf,
}

impl FileStatePersistence {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StatePersistence for FileStatePersistence {
    fn read(&self, key: &str) -> Result<Option<String>, CoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CoreError::StorageError(format!(
                "Failed to read {}: {}",
                self.path_for(key).display(),
                e
            ))),
        }
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), CoreError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");

        fs::create_dir_all(&self.dir)
            .and_then(|_| fs::write(&tmp, payload))
            .and_then(|_| fs::rename(&tmp, &path))
            .map_err(|e| {
                tracing::error!("Failed to persist state to {}: {}", path.display(), e);
                CoreError::StorageError(format!("Failed to write {}: {}", path.display(), e))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        localization::Language,
        state::{entities::{AppState, STORAGE_KEY}, services::StateStore},
    };

    #[test]
    fn test_missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let persistence = FileStatePersistence::new(dir.path());
        assert_eq!(persistence.read(STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_write_creates_directory_and_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let persistence = FileStatePersistence::new(dir.path().join("nested"));

        persistence.write("k", "{\"a\":1}").unwrap();

        assert_eq!(persistence.read("k").unwrap().as_deref(), Some("{\"a\":1}"));
        assert!(persistence.path_for("k").ends_with("k.json"));
    }

    #[test]
    fn test_store_survives_reload() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = StateStore::load(FileStatePersistence::new(dir.path()), STORAGE_KEY);
        store.set_language(Language::En).unwrap();
        let saved = store.state().clone();

        let reloaded = StateStore::load(FileStatePersistence::new(dir.path()), STORAGE_KEY);
        assert_eq!(reloaded.state(), &saved);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(format!("{STORAGE_KEY}.json")), "not json").unwrap();

        let store = StateStore::load(FileStatePersistence::new(dir.path()), STORAGE_KEY);
        assert_eq!(store.state(), &AppState::default());
    }
}
