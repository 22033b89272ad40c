//! Error types for hulk

use std::path::PathBuf;
use thiserror::Error;

use crate::store::StoreKey;

/// Errors raised by the service, store and backup layers.
#[derive(Debug, Error)]
pub enum HulkError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Backup of {} failed, refusing to overwrite: {source}", path.display())]
    Backup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown store key '{0}'. Must be one of: aliases, env, bashrc")]
    UnknownKey(String),

    #[error("No {operation} configured for store key '{key}'")]
    Unmapped {
        key: StoreKey,
        operation: &'static str,
    },

    #[error("Store key '{0}' has not been loaded")]
    NotLoaded(StoreKey),

    #[error("Home directory could not be determined")]
    NoHomeDir,

    #[error("Invalid configuration in {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl HulkError {
    /// Wrap an I/O error, mapping `NotFound` to [`HulkError::FileNotFound`].
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            HulkError::FileNotFound(path)
        } else {
            HulkError::Io { path, source }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, HulkError::FileNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, HulkError>;
