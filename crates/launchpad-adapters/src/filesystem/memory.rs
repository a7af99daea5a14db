//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use launchpad_core::{
    application::{ApplicationError, DirEntryInfo, Filesystem},
    error::LaunchpadResult,
};

/// In-memory filesystem for tests. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    /// Paths whose operations fail with PermissionDenied.
    denied: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().unwrap();
        inner.files.get(path).cloned()
    }

    /// Pre-populate a file, creating parent directories implicitly.
    pub fn add_file(&self, path: impl Into<PathBuf>, content: &str) {
        let path = path.into();
        let mut inner = self.inner.write().unwrap();
        if let Some(parent) = path.parent() {
            insert_dir_chain(&mut inner.directories, parent);
        }
        inner.files.insert(path, content.to_string());
    }

    /// Pre-populate a directory.
    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        let mut inner = self.inner.write().unwrap();
        insert_dir_chain(&mut inner.directories, &path.into());
    }

    /// Make every operation under `path` fail with PermissionDenied.
    pub fn deny(&self, path: impl Into<PathBuf>) {
        self.inner.write().unwrap().denied.insert(path.into());
    }

    /// Snapshot of the whole tree, sorted — handy for idempotence checks.
    pub fn snapshot(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        let mut all: Vec<PathBuf> = inner
            .files
            .keys()
            .chain(inner.directories.iter())
            .cloned()
            .collect();
        all.sort();
        all
    }

    fn check_denied(&self, path: &Path) -> LaunchpadResult<()> {
        let inner = self.inner.read().unwrap();
        if inner.denied.iter().any(|d| path.starts_with(d)) {
            return Err(ApplicationError::PermissionDenied {
                path: path.to_path_buf(),
            }
            .into());
        }
        Ok(())
    }
}

fn insert_dir_chain(directories: &mut HashSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> LaunchpadResult<()> {
        self.check_denied(path)?;
        let mut inner = self.inner.write().unwrap();
        insert_dir_chain(&mut inner.directories, path);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> LaunchpadResult<()> {
        self.check_denied(path)?;
        let mut inner = self.inner.write().unwrap();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::PathInvalid {
                    path: path.to_path_buf(),
                    reason: "parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner.read().unwrap().directories.contains(path)
    }

    fn list_dir(&self, path: &Path) -> LaunchpadResult<Vec<DirEntryInfo>> {
        self.check_denied(path)?;
        let inner = self.inner.read().unwrap();

        if !inner.directories.contains(path) {
            return Err(ApplicationError::PathInvalid {
                path: path.to_path_buf(),
                reason: "no such directory".into(),
            }
            .into());
        }

        let mut entries: Vec<DirEntryInfo> = inner
            .files
            .keys()
            .filter(|p| p.parent() == Some(path))
            .map(|p| entry_info(p, true))
            .chain(
                inner
                    .directories
                    .iter()
                    .filter(|p| p.parent() == Some(path))
                    .map(|p| entry_info(p, false)),
            )
            .collect();

        // Deterministic enumeration order for tests.
        entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(entries)
    }
}

fn entry_info(path: &Path, is_file: bool) -> DirEntryInfo {
    DirEntryInfo {
        path: path.to_path_buf(),
        file_name: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        is_file,
        created: None,
    }
}
