use crate::{KeyValueStorage, SessionError, SessionResult};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";
const RECORD_EXTENSION: &str = "json";

/// One JSON file per key under a profile directory.
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

    /// Path of the file holding `key`.
    pub fn record_path(&self, key: &str) -> SessionResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

        if !valid {
            return Err(SessionError::storage(format!(
                "Invalid record key '{key}'"
            )));
        }

        Ok(self.dir.join(format!("{key}.{RECORD_EXTENSION}")))
    }

    /// Renames a corrupted record to `<key>.json.corrupted.{timestamp}`.
    ///
    /// Returns the backup path, or `None` when there was nothing to move.
    pub fn backup_corrupted(&self, key: &str) -> SessionResult<Option<PathBuf>> {
        let path = self.record_path(key)?;

        if !path.exists() {
            return Ok(None);
        }

        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self
            .dir
            .join(format!("{key}.{RECORD_EXTENSION}.corrupted.{timestamp}"));

        fs::rename(&path, &backup_path)
            .map_err(|e| SessionError::atomic_rename(path.clone(), backup_path.clone(), e))?;

        warn!("Backed up corrupted record '{key}' to {backup_path:?}");
        Ok(Some(backup_path))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        let path = self.record_path(key)?;

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SessionError::file_read(path, e)),
        }
    }

    /// Writes through a temp file, fsync, then atomic rename.
    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        let final_path = self.record_path(key)?;

        fs::create_dir_all(&self.dir).map_err(|e| SessionError::file_write(self.dir.clone(), e))?;

        // Dropping the handle on any early return removes the temp file.
        let mut temp = tempfile::Builder::new()
            .prefix(&format!("{key}.{RECORD_EXTENSION}.tmp."))
            .tempfile_in(&self.dir)
            .map_err(|e| SessionError::file_write(self.dir.clone(), e))?;
        let temp_path = temp.path().to_path_buf();

        temp.write_all(value.as_bytes())
            .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

        temp.as_file()
            .sync_all()
            .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

        temp.persist(&final_path)
            .map_err(|e| SessionError::atomic_rename(temp_path, final_path.clone(), e.error))?;

        debug!("Wrote record '{key}' to {final_path:?}");
        Ok(())
    }

    fn delete(&self, key: &str) -> SessionResult<()> {
        let path = self.record_path(key)?;

        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed record '{key}'");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::file_write(path, e)),
        }
    }
}
