//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use chrono::{DateTime, Utc};
use walkdir::WalkDir;

use launchpad_core::{
    application::{ApplicationError, DirEntryInfo, Filesystem},
    error::{LaunchpadError, LaunchpadResult},
};

/// Production filesystem implementation using `std::fs` and `walkdir`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> LaunchpadResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, &e))
    }

    fn write_file(&self, path: &Path, content: &str) -> LaunchpadResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, &e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_dir(&self, path: &Path) -> LaunchpadResult<Vec<DirEntryInfo>> {
        let mut entries = Vec::new();

        // Depth pinned to 1: the scanner contract is explicitly
        // non-recursive per registered folder.
        for entry in WalkDir::new(path).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| match e.io_error() {
                Some(io_err) => map_io_error_kind(path, io_err.kind(), &e.to_string()),
                None => ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                }
                .into(),
            })?;

            let metadata = entry.metadata().ok();
            let created = metadata
                .as_ref()
                .and_then(|m| m.created().or_else(|_| m.modified()).ok())
                .map(DateTime::<Utc>::from);

            entries.push(DirEntryInfo {
                path: entry.path().to_path_buf(),
                file_name: entry.file_name().to_string_lossy().into_owned(),
                is_file: entry.file_type().is_file(),
                created,
            });
        }

        Ok(entries)
    }
}

/// Map an I/O failure onto the core taxonomy: permission refusals and
/// unusable paths get their own variants, everything else stays generic.
fn map_io_error(path: &Path, e: &io::Error) -> LaunchpadError {
    map_io_error_kind(path, e.kind(), &e.to_string())
}

fn map_io_error_kind(path: &Path, kind: io::ErrorKind, message: &str) -> LaunchpadError {
    let err = match kind {
        io::ErrorKind::PermissionDenied => ApplicationError::PermissionDenied {
            path: path.to_path_buf(),
        },
        io::ErrorKind::NotFound | io::ErrorKind::InvalidInput | io::ErrorKind::NotADirectory => {
            ApplicationError::PathInvalid {
                path: path.to_path_buf(),
                reason: message.to_string(),
            }
        }
        _ => ApplicationError::Filesystem {
            path: path.to_path_buf(),
            reason: message.to_string(),
        },
    };
    err.into()
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn create_dir_all_and_exists() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let nested = temp.path().join("a/b/c");

        fs.create_dir_all(&nested).unwrap();
        assert!(fs.exists(&nested));
        assert!(fs.is_dir(&nested));
    }

    #[test]
    fn write_file_creates_empty_file() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let file = temp.path().join("README.md");

        fs.write_file(&file, "").unwrap();
        assert!(fs.exists(&file));
        assert!(!fs.is_dir(&file));
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "");
    }

    #[test]
    fn list_dir_is_non_recursive() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        std::fs::create_dir(temp.path().join("sub")).unwrap();
        std::fs::write(temp.path().join("sub/inner.aep"), "").unwrap();
        std::fs::write(temp.path().join("top.aep"), "").unwrap();

        let listing = fs.list_dir(temp.path()).unwrap();
        let names: Vec<&str> = listing.iter().map(|e| e.file_name.as_str()).collect();
        assert!(names.contains(&"top.aep"));
        assert!(names.contains(&"sub"));
        assert!(!names.contains(&"inner.aep"));
    }

    #[test]
    fn list_dir_reports_file_flag_and_timestamp() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        std::fs::write(temp.path().join("cut.prproj"), "").unwrap();

        let listing = fs.list_dir(temp.path()).unwrap();
        let entry = listing.iter().find(|e| e.file_name == "cut.prproj").unwrap();
        assert!(entry.is_file);
        assert!(entry.created.is_some());
    }

    #[test]
    fn list_dir_of_missing_path_is_path_invalid() {
        let fs = LocalFilesystem::new();
        let err = fs.list_dir(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(
            err,
            LaunchpadError::Application(ApplicationError::PathInvalid { .. })
        ));
    }
}
