//! Project scaffolder: materializes a template under a target directory.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::application::ports::Filesystem;
use crate::domain::{EntryKind, Template, TemplateEntry};
use crate::error::LaunchpadResult;

/// What a scaffold run actually changed.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaffoldReport {
    /// The project root (created by this run or pre-existing).
    pub root: PathBuf,
    /// Entries created by this run, in template order. Empty on a re-run
    /// over an already-scaffolded tree.
    pub created: Vec<TemplateEntry>,
    /// Entry names skipped because they already existed on disk.
    pub skipped: Vec<String>,
}

/// Turns a template definition into a concrete directory tree.
///
/// Filesystem mutation only: recording the result in the registry is the
/// caller's decision. Failures abort the run, leaving any entries created
/// so far on disk (at-least-once, not atomic) — a re-run picks up where
/// the failed one stopped, because every step skips what already exists.
pub struct Scaffolder {
    filesystem: Box<dyn Filesystem>,
}

impl Scaffolder {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Scaffold `template` under `target_dir`, skipping entries named in
    /// `disabled`.
    ///
    /// Idempotent: running twice with the same arguments produces an
    /// identical tree and no error; the second report simply lists
    /// everything as skipped.
    #[instrument(skip_all, fields(target = %target_dir.display(), template = %template.id))]
    pub fn scaffold(
        &self,
        target_dir: &Path,
        template: &Template,
        disabled: &HashSet<String>,
    ) -> LaunchpadResult<ScaffoldReport> {
        // The root itself: created with all missing parents. A failure
        // here aborts before any entry is touched.
        if !self.filesystem.exists(target_dir) {
            self.filesystem.create_dir_all(target_dir)?;
            info!("created project root");
        }

        let mut created = Vec::new();
        let mut skipped = Vec::new();

        for entry in template.enabled_entries(disabled) {
            let entry_path = target_dir.join(&entry.name);

            if self.filesystem.exists(&entry_path) {
                // Never overwrite user data: existing files and
                // directories are left untouched.
                debug!(entry = %entry.name, "entry already exists, skipping");
                skipped.push(entry.name.clone());
                continue;
            }

            match entry.kind {
                EntryKind::Directory => {
                    self.filesystem.create_dir_all(&entry_path)?;
                }
                EntryKind::File => {
                    if let Some(parent) = entry_path.parent() {
                        if !self.filesystem.exists(parent) {
                            self.filesystem.create_dir_all(parent)?;
                        }
                    }
                    self.filesystem.write_file(&entry_path, "")?;
                }
            }

            debug!(entry = %entry.name, kind = %entry.kind, "entry created");
            created.push(entry.clone());
        }

        info!(
            created = created.len(),
            skipped = skipped.len(),
            "scaffold finished"
        );

        Ok(ScaffoldReport {
            root: target_dir.to_path_buf(),
            created,
            skipped,
        })
    }
}
