//! Driven ports - implemented by infrastructure.
//!
//! These traits define what the application needs from the host
//! environment. The `launchpad-adapters` crate provides the production
//! implementations and the in-memory test doubles.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::domain::{FoldersDocument, Settings};
use crate::error::LaunchpadResult;

/// One entry of a directory listing, as the scanner consumes it.
#[derive(Debug, Clone, PartialEq)]
pub struct DirEntryInfo {
    pub path: PathBuf,
    pub file_name: String,
    pub is_file: bool,
    /// Creation timestamp from filesystem metadata; `None` on platforms
    /// or filesystems that do not report one.
    pub created: Option<DateTime<Utc>>,
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `launchpad_adapters::filesystem::LocalFilesystem` (production)
/// - `launchpad_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all missing parent segments.
    fn create_dir_all(&self, path: &Path) -> LaunchpadResult<()>;

    /// Write content to a file, replacing any previous content.
    /// Callers that must not overwrite check `exists` first.
    fn write_file(&self, path: &Path, content: &str) -> LaunchpadResult<()>;

    /// Check whether a path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Check whether a path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Non-recursive directory listing.
    fn list_dir(&self, path: &Path) -> LaunchpadResult<Vec<DirEntryInfo>>;
}

/// Port for durable state: the JSON documents in the app data directory.
///
/// The durable copy is the single source of truth across restarts;
/// session state is reloaded from it, never merged into it.
pub trait StateStore: Send + Sync {
    fn load_folders(&self) -> LaunchpadResult<FoldersDocument>;
    fn save_folders(&self, doc: &FoldersDocument) -> LaunchpadResult<()>;
    fn load_settings(&self) -> LaunchpadResult<Settings>;
    fn save_settings(&self, settings: &Settings) -> LaunchpadResult<()>;
}

/// Port for OS shell integration: revealing folders and launching
/// applications or project files as detached processes.
pub trait AppLauncher: Send + Sync {
    /// Open a folder in the OS file browser.
    fn reveal(&self, path: &Path) -> LaunchpadResult<()>;

    /// Launch an application bundle/executable or open a document with
    /// its associated application, detached from this process.
    fn launch(&self, path: &Path) -> LaunchpadResult<()>;
}
