//! Application configuration structures

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{HulkError, Result};

/// Main configuration structure, stored as `~/.config/hulk/config.json`
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub backup: BackupConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Backup configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BackupConfig {
    /// Number of timestamped backups kept per file
    #[serde(default = "default_max_count")]
    pub max_count: usize,
    /// Keep timestamped copies in addition to the sidecar backup
    #[serde(default = "default_history")]
    pub history: bool,
}

fn default_max_count() -> usize {
    20
}

fn default_history() -> bool {
    true
}

impl Default for BackupConfig {
    fn default() -> Self {
        BackupConfig {
            max_count: default_max_count(),
            history: default_history(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LogConfig {
    /// `tracing` filter directive, overridden by `HULK_LOG`
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: default_level(),
        }
    }
}

impl Config {
    /// Load configuration from file, or return default if file doesn't exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| HulkError::io(path, e))?;
        serde_json::from_str(&content).map_err(|source| HulkError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| HulkError::io(parent, e))?;
        }
        let content = serde_json::to_string_pretty(self).map_err(|source| HulkError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, content).map_err(|e| HulkError::io(path, e))
    }
}
