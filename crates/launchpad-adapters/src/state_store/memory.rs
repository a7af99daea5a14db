//! In-memory state store for testing.

use std::sync::{
    Arc, RwLock,
    atomic::{AtomicBool, Ordering},
};

use launchpad_core::{
    application::{ApplicationError, StateStore},
    domain::{FoldersDocument, Settings},
    error::LaunchpadResult,
};

/// In-memory state store. Clones share the same state, so a test can keep
/// a handle and inspect what a service persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStateStore {
    inner: Arc<RwLock<MemoryStateStoreInner>>,
    /// When set, the next save fails once — used to exercise the
    /// "in-memory state kept on persist failure" contract.
    fail_next_save: Arc<AtomicBool>,
}

#[derive(Debug, Default)]
struct MemoryStateStoreInner {
    folders: FoldersDocument,
    settings: Settings,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a one-shot save failure.
    pub fn fail_next_save(&self) {
        self.fail_next_save.store(true, Ordering::SeqCst);
    }

    /// What is currently "on disk" (testing helper).
    pub fn persisted_folders(&self) -> FoldersDocument {
        self.inner.read().unwrap().folders.clone()
    }

    fn check_save(&self, document: &'static str) -> LaunchpadResult<()> {
        if self.fail_next_save.swap(false, Ordering::SeqCst) {
            return Err(ApplicationError::Persistence {
                document,
                operation: "write",
                reason: "injected failure".into(),
            }
            .into());
        }
        Ok(())
    }
}

impl StateStore for MemoryStateStore {
    fn load_folders(&self) -> LaunchpadResult<FoldersDocument> {
        Ok(self.inner.read().unwrap().folders.clone())
    }

    fn save_folders(&self, doc: &FoldersDocument) -> LaunchpadResult<()> {
        self.check_save("folders")?;
        self.inner.write().unwrap().folders = doc.clone();
        Ok(())
    }

    fn load_settings(&self) -> LaunchpadResult<Settings> {
        Ok(self.inner.read().unwrap().settings.clone())
    }

    fn save_settings(&self, settings: &Settings) -> LaunchpadResult<()> {
        self.check_save("settings")?;
        self.inner.write().unwrap().settings = settings.clone();
        Ok(())
    }
}
