//! Application services: the four use-case components.
//!
//! Control flow between them is owned by the host shell:
//! catalog → scaffolder (create) → registry (record) → persistence,
//! and registry → scanner (enumerate) → launcher (open).

pub mod catalog;
pub mod registry;
pub mod scaffold;
pub mod scanner;

pub use catalog::{DEFAULT_TEMPLATE_ID, TemplateCatalog, template_from_listing};
pub use registry::FolderRegistry;
pub use scaffold::{ScaffoldReport, Scaffolder};
pub use scanner::{ProjectScanner, default_extensions};
