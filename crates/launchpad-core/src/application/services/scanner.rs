//! Project scanner: enumerates recognized project files in registered
//! folders.

use std::collections::HashSet;

use tracing::{debug, instrument, warn};

use crate::application::ports::Filesystem;
use crate::domain::{FolderRecord, ScannedProject};

/// Extensions recognized by default: After Effects and Premiere Pro
/// project files.
pub fn default_extensions() -> HashSet<String> {
    [".aep", ".prproj"].iter().map(|s| s.to_string()).collect()
}

/// Read-only enumeration over registered folders.
///
/// Never mutates the registry. A folder that cannot be read (deleted
/// externally, permissions revoked) is skipped with a warning so one bad
/// folder does not block scanning the rest.
pub struct ProjectScanner {
    filesystem: Box<dyn Filesystem>,
}

impl ProjectScanner {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Scan each folder non-recursively and collect entries whose
    /// dot-suffix matches `extensions` (case-insensitive).
    ///
    /// Ordering: folder input order, then filesystem enumeration order
    /// within a folder. Callers re-sort for display if they need to.
    #[instrument(skip_all, fields(folders = folders.len()))]
    pub fn scan(
        &self,
        folders: &[FolderRecord],
        extensions: &HashSet<String>,
    ) -> Vec<ScannedProject> {
        let extensions: HashSet<String> =
            extensions.iter().map(|e| e.to_ascii_lowercase()).collect();

        let mut projects = Vec::new();

        for folder in folders {
            let entries = match self.filesystem.list_dir(&folder.path) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(
                        folder = %folder.name,
                        path = %folder.path.display(),
                        error = %e,
                        "skipping unreadable folder"
                    );
                    continue;
                }
            };

            for entry in entries {
                if !entry.is_file {
                    continue;
                }
                let Some(extension) = dot_suffix(&entry.file_name) else {
                    continue;
                };
                if !extensions.contains(&extension.to_ascii_lowercase()) {
                    continue;
                }

                let name = entry
                    .file_name
                    .strip_suffix(&extension)
                    .unwrap_or(&entry.file_name)
                    .to_string();

                projects.push(ScannedProject {
                    name,
                    path: entry.path,
                    folder: folder.name.clone(),
                    extension,
                    created: entry.created,
                });
            }
        }

        debug!(found = projects.len(), "scan finished");
        projects
    }
}

/// Extension of a file name including the leading dot, or `None` for
/// names without one (`Renders`, `.hidden`).
fn dot_suffix(file_name: &str) -> Option<String> {
    let idx = file_name.rfind('.')?;
    if idx == 0 {
        return None;
    }
    Some(file_name[idx..].to_string())
}
