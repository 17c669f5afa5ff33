//! JSON file store
//!
//! The boss list is a pretty-printed JSON array:
//!
//! ```json
//! [
//!   {
//!     "map": "Dxun",
//!     "level": "Master",
//!     "refresh_interval": "1:30:00"
//!   }
//! ]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use bosswatch_types::BossRecord;

use super::{BossStore, StorageError};

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BossStore for JsonFileStore {
    /// A missing file is an empty list, not an error.
    fn load(&self) -> Result<Vec<BossRecord>, StorageError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "No boss list yet, starting empty");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| StorageError::ReadFile {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| StorageError::Decode {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, records: &[BossRecord]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StorageError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = serde_json::to_string_pretty(records).map_err(StorageError::Encode)?;

        fs::write(&self.path, content).map_err(|source| StorageError::WriteFile {
            path: self.path.clone(),
            source,
        })
    }
}
