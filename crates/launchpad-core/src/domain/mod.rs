//! Core domain layer.
//!
//! Pure business types and rules — no I/O, no async, no external calls.
//! Filesystem, persistence, and process launching are reached through the
//! ports defined in [`crate::application::ports`].

pub mod entities;
pub mod error;
pub mod validation;

// Re-exports for convenience
pub use entities::{
    DEFAULT_TEMPLATE_ID, EntryKind, EntryToggle, FolderRecord, FoldersDocument, RecordId,
    ScannedProject, Settings, Template, TemplateBuilder, TemplateEntry, TemplateOverride,
    TemplateSelection,
};
pub use error::{DomainError, ErrorCategory};
pub use validation::{validate_display_name, validate_folder_path};
