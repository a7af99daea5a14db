//! Folder/project registry: the persisted list of quick-access shortcuts.

use std::path::Path;

use chrono::Utc;
use tracing::{debug, info, instrument, warn};

use crate::application::ports::StateStore;
use crate::domain::{FolderRecord, FoldersDocument, RecordId};
use crate::error::LaunchpadResult;

/// Ordered, path-deduplicated list of [`FolderRecord`]s.
///
/// The registry exclusively owns the in-memory list for the session; the
/// [`StateStore`] owns the durable copy and is the source of truth across
/// restarts. Every mutating operation persists immediately — there is no
/// deferred or batched write.
///
/// A persist failure is returned to the caller but does **not** roll back
/// the in-memory mutation: memory and disk stay diverged until the next
/// successful save (or a restart, which reloads from disk and discards
/// the divergent change). This is a stated property of the system, not a
/// defect to mask.
pub struct FolderRegistry {
    records: Vec<FolderRecord>,
    store: Box<dyn StateStore>,
}

impl FolderRegistry {
    /// Load the registry from the durable copy. A missing document is an
    /// empty registry; a corrupt or unreadable one is an error.
    pub fn load(store: Box<dyn StateStore>) -> LaunchpadResult<Self> {
        let doc = store.load_folders()?;
        debug!(count = doc.folders.len(), "registry loaded");
        Ok(Self {
            records: doc.folders,
            store,
        })
    }

    /// Register a folder shortcut. Upsert by path: a known path gets its
    /// `name` refreshed in place; a fresh one is appended. Returns the
    /// record and whether it was newly created.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn add(&mut self, path: &Path, name: &str) -> LaunchpadResult<(FolderRecord, bool)> {
        let (record, inserted) = self.upsert(path, name, Position::Append, None);
        self.persist()?;
        Ok((record, inserted))
    }

    /// Register a freshly scaffolded project. Same upsert-by-path rule,
    /// but fresh records are *prepended* so new projects surface first,
    /// and carry a creation timestamp plus the template they came from.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn add_project(
        &mut self,
        path: &Path,
        name: &str,
        template: Option<String>,
    ) -> LaunchpadResult<(FolderRecord, bool)> {
        let (record, inserted) = self.upsert(path, name, Position::Prepend, template);
        self.persist()?;
        Ok((record, inserted))
    }

    /// Remove a record by id. Returns `false` (and persists nothing) when
    /// the id is unknown.
    pub fn remove(&mut self, id: RecordId) -> LaunchpadResult<bool> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);

        if self.records.len() == before {
            debug!(%id, "remove: no such record");
            return Ok(false);
        }

        info!(%id, "record removed");
        self.persist()?;
        Ok(true)
    }

    /// Current in-memory snapshot, in display order.
    pub fn list(&self) -> &[FolderRecord] {
        &self.records
    }

    pub fn get(&self, id: RecordId) -> Option<&FolderRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn find_by_path(&self, path: &Path) -> Option<&FolderRecord> {
        self.records.iter().find(|r| r.path == path)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Write the current list to the durable store.
    pub fn persist(&self) -> LaunchpadResult<()> {
        let doc = FoldersDocument {
            folders: self.records.clone(),
        };
        self.store.save_folders(&doc).inspect_err(|e| {
            warn!(error = %e, "persist failed; in-memory registry kept");
        })
    }

    fn upsert(
        &mut self,
        path: &Path,
        name: &str,
        position: Position,
        template: Option<String>,
    ) -> (FolderRecord, bool) {
        if let Some(existing) = self.records.iter_mut().find(|r| r.path == path) {
            existing.name = name.to_string();
            if template.is_some() {
                existing.template = template;
            }
            debug!(id = %existing.id, "existing record refreshed");
            return (existing.clone(), false);
        }

        let mut record = FolderRecord::new(name, path);
        if template.is_some() {
            record.template = template;
            record.created = Some(Utc::now());
        }

        match position {
            Position::Append => self.records.push(record.clone()),
            Position::Prepend => self.records.insert(0, record.clone()),
        }
        info!(id = %record.id, "record added");
        (record, true)
    }
}

enum Position {
    Append,
    Prepend,
}
