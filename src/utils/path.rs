//! Path and file utilities

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{HulkError, Result};

/// Expand tilde (~) in path to home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix('~') {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped.trim_start_matches('/'));
        }
    }
    PathBuf::from(path)
}

/// Read file content, reporting a missing file as [`HulkError::FileNotFound`]
pub fn read_file(path: &Path) -> Result<String> {
    if path.exists() && !path.is_file() {
        return Err(HulkError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a file"),
        });
    }
    fs::read_to_string(path).map_err(|e| HulkError::io(path, e))
}

/// Replace file content through a sibling temp file and a rename, so readers
/// never observe a partially written file.
///
/// A symlinked `path` is written through: the link stays in place and the
/// file it points to is replaced. The existing file's permissions carry over.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let target = resolve_link(path)?;
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| HulkError::io(parent, e))?;
    }

    let temp_path = temp_path_for(&target);
    fs::write(&temp_path, content).map_err(|e| HulkError::io(&temp_path, e))?;

    let result = match fs::metadata(&target) {
        Ok(meta) => fs::set_permissions(&temp_path, meta.permissions())
            .and_then(|()| fs::rename(&temp_path, &target)),
        Err(_) => fs::rename(&temp_path, &target),
    };
    if let Err(e) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(HulkError::io(&target, e));
    }

    Ok(())
}

/// Follow `path` to the file it names when it is a symlink.
///
/// A dangling link resolves to its immediate destination so the write creates
/// the file the link expects.
fn resolve_link(path: &Path) -> Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => match fs::canonicalize(path) {
            Ok(resolved) => Ok(resolved),
            Err(_) => {
                let dest = fs::read_link(path).map_err(|e| HulkError::io(path, e))?;
                Ok(match path.parent() {
                    Some(parent) if dest.is_relative() => parent.join(dest),
                    _ => dest,
                })
            }
        },
        _ => Ok(path.to_path_buf()),
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".hulk-tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_expand_tilde() {
        let path = expand_tilde("~/.aliases");
        assert!(!path.to_string_lossy().starts_with('~'));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let err = read_file(&dir.path().join(".aliases")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_read_directory_is_error() {
        let dir = tempdir().unwrap();
        let err = read_file(dir.path()).unwrap_err();
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_write_atomic_replaces_and_cleans_up() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".aliases");
        fs::write(&path, "old").unwrap();

        write_atomic(&path, "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert!(!temp_path_for(&path).exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_through_symlink() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let real = dir.path().join("dotfiles").join("aliases");
        fs::create_dir_all(real.parent().unwrap()).unwrap();
        fs::write(&real, "old").unwrap();
        fs::set_permissions(&real, fs::Permissions::from_mode(0o600)).unwrap();
        let link = dir.path().join(".aliases");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        write_atomic(&link, "new").unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&real).unwrap(), "new");
        assert_eq!(
            fs::metadata(&real).unwrap().permissions().mode() & 0o777,
            0o600
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_dangling_symlink_creates_target() {
        let dir = tempdir().unwrap();
        let link = dir.path().join(".aliases");
        std::os::unix::fs::symlink("dotfiles-aliases", &link).unwrap();

        write_atomic(&link, "alias a=\"b\"").unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(
            fs::read_to_string(dir.path().join("dotfiles-aliases")).unwrap(),
            "alias a=\"b\""
        );
    }

    #[test]
    fn test_write_atomic_creates_parent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(".aliases");
        write_atomic(&path, "alias a=\"b\"").unwrap();
        assert!(path.exists());
    }
}
