//! Error types for boss list storage

use std::path::PathBuf;
use thiserror::Error;

use crate::boss::RegistryError;

/// Errors while loading or saving the boss list
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read boss list {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write boss list {path}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create data directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode boss list {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode boss list")]
    Encode(#[source] serde_json::Error),

    #[error("invalid boss entry in stored list")]
    InvalidRecord(#[from] RegistryError),
}
