//! Service object exposing the file operations a front end calls into
//!
//! [`HulkApi`] is constructed explicitly from a home directory and a
//! [`Config`], then passed by reference to whatever consumes it: the CLI
//! commands, the [`RecordStore`](crate::store::RecordStore) (as its
//! [`Backend`]) and the JSON request loop in [`request`].

pub mod request;

use std::path::{Path, PathBuf};

use crate::backup::BackupManager;
use crate::error::{HulkError, Result};
use crate::formatter::{AliasFormatter, Formatter};
use crate::model::{AliasRecord, Config, EnvRecord, FileKind, HulkPaths};
use crate::parser::{split_lines, AliasParser, EnvParser, Parser};
use crate::store::{Backend, Record, StoreKey};
use crate::utils::path::read_file;

pub use request::{Request, Response};

/// File access service for `~/.aliases`, `~/.env` and `~/.bashrc`
#[derive(Debug, Clone)]
pub struct HulkApi {
    paths: HulkPaths,
    config: Config,
    backups: BackupManager,
}

impl HulkApi {
    pub fn new(paths: HulkPaths, config: Config) -> Self {
        let backups = BackupManager::new(&paths, &config);
        Self {
            paths,
            config,
            backups,
        }
    }

    /// Build the service for `home`, loading `config.json` if present
    pub fn for_home(home: impl Into<PathBuf>) -> Result<Self> {
        let paths = HulkPaths::new(home);
        let config = Config::load(&paths.config_file())?;
        Ok(Self::new(paths, config))
    }

    pub fn paths(&self) -> &HulkPaths {
        &self.paths
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn backups(&self) -> &BackupManager {
        &self.backups
    }

    /// Parse `~/.aliases`, writing the sidecar backup first.
    ///
    /// A failed backup fails the whole request.
    pub fn get_aliases(&self) -> Result<Vec<AliasRecord>> {
        let path = self.paths.aliases();
        self.backups.write_sidecar(&path)?;
        let content = read_file(&path)?;
        let records = AliasParser::new().parse(&content);
        tracing::debug!(file = %path.display(), count = records.len(), "parsed aliases");
        Ok(records)
    }

    /// Parse `~/.env`.
    pub fn get_env(&self) -> Result<Vec<EnvRecord>> {
        let path = self.paths.env();
        let content = read_file(&path)?;
        let records = EnvParser::new().parse(&content);
        tracing::debug!(file = %path.display(), count = records.len(), "parsed env");
        Ok(records)
    }

    /// Raw lines of `~/.bashrc`.
    pub fn get_bashrc(&self) -> Result<Vec<String>> {
        let content = read_file(&self.paths.bashrc())?;
        Ok(split_lines(&content).map(|(_, line)| line.to_string()).collect())
    }

    /// Serialize `records` and overwrite `~/.aliases`, backing it up first.
    pub fn save_aliases(&self, records: &[AliasRecord]) -> Result<()> {
        let content = AliasFormatter::new().format(records);
        self.backups.guarded_write(&self.paths.aliases(), &content)
    }

    /// Whether `~/.config/hulk/config.json` exists
    pub fn has_hulk_config(&self) -> bool {
        self.paths.config_file().is_file()
    }

    pub fn get_home_dir(&self) -> &Path {
        self.paths.home()
    }

    /// Create an empty file of `kind` if it does not exist yet.
    ///
    /// Returns `false` when the file was already there.
    pub fn create_file(&self, kind: FileKind) -> Result<bool> {
        let path = self.paths.file(kind);
        if path.exists() {
            return Ok(false);
        }
        crate::utils::path::write_atomic(&path, "")?;
        tracing::info!(file = %path.display(), "created file");
        Ok(true)
    }

    /// Write `config.json` with the current settings if it does not exist.
    ///
    /// Returns `false` when the config was already there.
    pub fn init_config(&self) -> Result<bool> {
        if self.has_hulk_config() {
            return Ok(false);
        }
        self.config.save(&self.paths.config_file())?;
        Ok(true)
    }
}

impl Backend for HulkApi {
    fn retrieve(&self, key: StoreKey) -> Result<Vec<Record>> {
        Ok(match key {
            StoreKey::Aliases => self.get_aliases()?.into_iter().map(Record::Alias).collect(),
            StoreKey::Env => self.get_env()?.into_iter().map(Record::Env).collect(),
            StoreKey::BashRc => self.get_bashrc()?.into_iter().map(Record::Raw).collect(),
        })
    }

    fn persist(&self, key: StoreKey, records: &[Record]) -> Result<()> {
        match key {
            StoreKey::Aliases => {
                let aliases: Vec<AliasRecord> =
                    records.iter().filter_map(Record::as_alias).cloned().collect();
                self.save_aliases(&aliases)
            }
            StoreKey::Env | StoreKey::BashRc => Err(HulkError::Unmapped {
                key,
                operation: "persistence",
            }),
        }
    }
}
