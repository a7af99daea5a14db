//! Application layer.
//!
//! This layer contains:
//! - **Services**: the catalog, scaffolder, registry, and scanner
//! - **Ports**: trait definitions for filesystem, persistence, launching
//! - **Errors**: failures of port operations
//!
//! Business rules live in `crate::domain`; this layer orchestrates them
//! against the outside world.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::{AppLauncher, DirEntryInfo, Filesystem, StateStore};
pub use services::{
    DEFAULT_TEMPLATE_ID, FolderRegistry, ProjectScanner, ScaffoldReport, Scaffolder,
    TemplateCatalog, default_extensions, template_from_listing,
};
