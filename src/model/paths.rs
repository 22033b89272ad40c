//! Fixed file locations derived from the home directory

use std::path::{Path, PathBuf};

use crate::error::{HulkError, Result};

/// Name of the sidecar suffix appended to a file before it is overwritten.
pub const BACKUP_SUFFIX: &str = ".hulk-backup";

/// The files hulk reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Aliases,
    Env,
    BashRc,
}

impl FileKind {
    pub fn file_name(&self) -> &'static str {
        match self {
            FileKind::Aliases => ".aliases",
            FileKind::Env => ".env",
            FileKind::BashRc => ".bashrc",
        }
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Paths resolved against one home directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HulkPaths {
    home: PathBuf,
}

impl HulkPaths {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    /// Resolve paths against the current user's home directory
    pub fn from_env() -> Result<Self> {
        dirs::home_dir().map(Self::new).ok_or(HulkError::NoHomeDir)
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn file(&self, kind: FileKind) -> PathBuf {
        self.home.join(kind.file_name())
    }

    pub fn aliases(&self) -> PathBuf {
        self.file(FileKind::Aliases)
    }

    pub fn env(&self) -> PathBuf {
        self.file(FileKind::Env)
    }

    pub fn bashrc(&self) -> PathBuf {
        self.file(FileKind::BashRc)
    }

    /// `~/.config/hulk`
    pub fn config_dir(&self) -> PathBuf {
        self.home.join(".config").join("hulk")
    }

    /// `~/.config/hulk/config.json`, whose presence marks an initialized setup
    pub fn config_file(&self) -> PathBuf {
        self.config_dir().join("config.json")
    }

    /// `~/.config/hulk/backups`
    pub fn backups_dir(&self) -> PathBuf {
        self.config_dir().join("backups")
    }
}

/// Sidecar backup location for `path`: the file name with [`BACKUP_SUFFIX`] appended.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(BACKUP_SUFFIX);
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_paths() {
        let paths = HulkPaths::new("/home/bruce");
        assert_eq!(paths.aliases(), PathBuf::from("/home/bruce/.aliases"));
        assert_eq!(paths.env(), PathBuf::from("/home/bruce/.env"));
        assert_eq!(paths.bashrc(), PathBuf::from("/home/bruce/.bashrc"));
        assert_eq!(
            paths.config_file(),
            PathBuf::from("/home/bruce/.config/hulk/config.json")
        );
    }

    #[test]
    fn test_backup_path_appends_suffix() {
        assert_eq!(
            backup_path(Path::new("/home/bruce/.aliases")),
            PathBuf::from("/home/bruce/.aliases.hulk-backup")
        );
    }
}
