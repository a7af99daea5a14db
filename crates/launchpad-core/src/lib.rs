//! Launchpad core — the reusable heart of the quick folder launcher.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        host shell (CLI / GUI)           │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Services           │
//! │  (Catalog, Scaffolder, Registry,        │
//! │   Scanner)                              │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │  (Filesystem, StateStore, AppLauncher)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    launchpad-adapters (Infrastructure)  │
//! │  (LocalFilesystem, JsonStateStore,      │
//! │   ShellLauncher, ...)                   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The domain layer (`domain`) holds the pure types — templates, registry
//! records, settings, scan results — with no I/O and no external calls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use launchpad_core::application::{
//!     FolderRegistry, Scaffolder, TemplateCatalog,
//! };
//!
//! # fn demo(
//! #     templates: Vec<launchpad_core::domain::Template>,
//! #     filesystem: Box<dyn launchpad_core::application::Filesystem>,
//! #     store: Box<dyn launchpad_core::application::StateStore>,
//! # ) -> launchpad_core::error::LaunchpadResult<()> {
//! let catalog = TemplateCatalog::new(templates)?;
//! let scaffolder = Scaffolder::new(filesystem);
//! let mut registry = FolderRegistry::load(store)?;
//!
//! let template = catalog.get_or_default("developer");
//! let report = scaffolder.scaffold(
//!     "/projects/Alpha".as_ref(),
//!     template,
//!     &Default::default(),
//! )?;
//! registry.add_project(&report.root, "Alpha", Some(template.id.clone()))?;
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what host shells should use
pub mod prelude {
    pub use crate::application::{
        AppLauncher, DEFAULT_TEMPLATE_ID, Filesystem, FolderRegistry, ProjectScanner,
        ScaffoldReport, Scaffolder, StateStore, TemplateCatalog, default_extensions,
    };
    pub use crate::domain::{
        EntryKind, FolderRecord, RecordId, ScannedProject, Settings, Template, TemplateEntry,
    };
    pub use crate::error::{LaunchpadError, LaunchpadResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
