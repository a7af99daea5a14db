//! Domain entities: templates, registry records, settings, scan results.

pub mod folder;
pub mod project;
pub mod settings;
pub mod template;

pub use folder::{FolderRecord, FoldersDocument, RecordId};
pub use project::ScannedProject;
pub use settings::{EntryToggle, Settings, TemplateOverride, TemplateSelection};
pub use template::{DEFAULT_TEMPLATE_ID, EntryKind, Template, TemplateBuilder, TemplateEntry};
