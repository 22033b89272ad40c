//! Core data models for hulk

mod alias;
mod config;
mod env;
mod paths;

pub use alias::{AliasRecord, QuoteStyle, DEFAULT_GROUP};
pub use config::{BackupConfig, Config, LogConfig};
pub use env::EnvRecord;
pub use paths::{backup_path, FileKind, HulkPaths, BACKUP_SUFFIX};
