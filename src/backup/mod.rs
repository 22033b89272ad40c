//! Backup management module
//!
//! Two kinds of backup are written before a file is overwritten:
//!
//! - the sidecar `<file>.hulk-backup`, always holding the last pre-edit content
//! - timestamped copies in `~/.config/hulk/backups`, pruned to `max_count`
//!
//! [`BackupManager::guarded_write`] refuses to touch the target when either
//! backup fails.

use std::path::{Path, PathBuf};
use time::OffsetDateTime;

use crate::error::{HulkError, Result};
use crate::model::{backup_path, Config, HulkPaths};
use crate::utils::path::write_atomic;

/// Backup entry information
#[derive(Debug, Clone)]
pub struct BackupEntry {
    pub id: String,
    pub path: PathBuf,
    pub timestamp: String,
    /// File name of the backed-up file, e.g. `.aliases`
    pub source_name: String,
    pub size: u64,
}

/// Backup manager
#[derive(Debug, Clone)]
pub struct BackupManager {
    backup_dir: PathBuf,
    max_count: usize,
    history: bool,
}

impl BackupManager {
    pub fn new(paths: &HulkPaths, config: &Config) -> Self {
        Self {
            backup_dir: paths.backups_dir(),
            max_count: config.backup.max_count,
            history: config.backup.history,
        }
    }

    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    /// Ensure backup directory exists
    fn ensure_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.backup_dir).map_err(|source| HulkError::Backup {
            path: self.backup_dir.clone(),
            source,
        })
    }

    /// Copy `source_file` to its sidecar backup.
    ///
    /// Returns `None` when there is nothing to back up yet.
    pub fn write_sidecar(&self, source_file: &Path) -> Result<Option<PathBuf>> {
        if !source_file.exists() {
            return Ok(None);
        }
        let target = backup_path(source_file);
        std::fs::copy(source_file, &target).map_err(|source| HulkError::Backup {
            path: target.clone(),
            source,
        })?;
        tracing::debug!(backup = %target.display(), "wrote sidecar backup");
        Ok(Some(target))
    }

    /// Create a timestamped backup of the specified file
    pub fn create_backup(&self, source_file: &Path) -> Result<PathBuf> {
        self.ensure_dir()?;

        let now = OffsetDateTime::now_utc();
        let timestamp = format!(
            "{:04}-{:02}-{:02}_{:02}{:02}{:02}-{:03}",
            now.year(),
            now.month() as u8,
            now.day(),
            now.hour(),
            now.minute(),
            now.second(),
            now.millisecond()
        );

        let filename = source_file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "config".to_string());

        let backup_name = format!("{}_{}.bak", timestamp, filename);
        let backup_path = self.backup_dir.join(&backup_name);

        std::fs::copy(source_file, &backup_path).map_err(|source| HulkError::Backup {
            path: backup_path.clone(),
            source,
        })?;
        tracing::debug!(backup = %backup_path.display(), "wrote timestamped backup");

        self.cleanup_old_backups()?;

        Ok(backup_path)
    }

    /// Back up the current content of `target`, then atomically replace it.
    ///
    /// If any backup step fails the target is left untouched.
    pub fn guarded_write(&self, target: &Path, content: &str) -> Result<()> {
        if target.exists() {
            self.write_sidecar(target)?;
            if self.history {
                self.create_backup(target)?;
            }
        }
        write_atomic(target, content)?;
        tracing::info!(file = %target.display(), bytes = content.len(), "rewrote file");
        Ok(())
    }

    /// List all backups, newest first
    pub fn list_backups(&self) -> Result<Vec<BackupEntry>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let read_err = |e| HulkError::io(&self.backup_dir, e);
        let mut entries = Vec::new();

        for entry in std::fs::read_dir(&self.backup_dir).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;
            let path = entry.path();

            if !path.extension().map(|e| e == "bak").unwrap_or(false) {
                continue;
            }

            let filename = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            let id = filename.trim_end_matches(".bak").to_string();

            // <date>_<time>_<source name>
            let mut parts = id.splitn(3, '_');
            let (Some(date), Some(clock), Some(source_name)) =
                (parts.next(), parts.next(), parts.next())
            else {
                continue;
            };

            let size = entry.metadata().map_err(read_err)?.len();

            entries.push(BackupEntry {
                timestamp: format!("{}_{}", date, clock),
                source_name: source_name.to_string(),
                id,
                path,
                size,
            });
        }

        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        Ok(entries)
    }

    /// Get a specific backup by ID (exact, or a unique-enough fragment)
    pub fn get_backup(&self, id: &str) -> Result<Option<BackupEntry>> {
        let backups = self.list_backups()?;
        Ok(backups
            .into_iter()
            .find(|b| b.id == id || b.id.contains(id)))
    }

    /// Restore a backup by ID over `target_file`
    pub fn restore_backup(&self, id: &str, target_file: &Path) -> Result<()> {
        let backup = self.get_backup(id)?.ok_or_else(|| {
            HulkError::FileNotFound(self.backup_dir.join(format!("{}.bak", id)))
        })?;

        let content = crate::utils::path::read_file(&backup.path)?;
        self.guarded_write(target_file, &content)?;
        tracing::info!(backup = %backup.id, file = %target_file.display(), "restored backup");

        Ok(())
    }

    /// Clean up old backups, keeping only the configured number
    pub fn cleanup_old_backups(&self) -> Result<usize> {
        self.cleanup_keep(self.max_count)
    }

    /// Clean up backups, keeping only the specified number
    pub fn cleanup_keep(&self, keep: usize) -> Result<usize> {
        let backups = self.list_backups()?;

        if backups.len() <= keep {
            return Ok(0);
        }

        let mut removed = 0;
        for backup in backups.into_iter().skip(keep) {
            std::fs::remove_file(&backup.path).map_err(|e| HulkError::io(&backup.path, e))?;
            removed += 1;
        }

        Ok(removed)
    }
}
