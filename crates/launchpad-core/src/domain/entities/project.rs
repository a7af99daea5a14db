//! Scan results.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A recognized project file found inside a registered folder.
///
/// Derived data: recomputed on every scan, never persisted. Serializable
/// only so host shells can emit machine-readable listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScannedProject {
    /// File stem, without the extension.
    pub name: String,
    /// Full path to the project file.
    pub path: PathBuf,
    /// Display name of the registry record the file was found under.
    pub folder: String,
    /// Matched extension, with leading dot (`.aep`, `.prproj`).
    pub extension: String,
    /// Filesystem creation timestamp, when the platform reports one.
    pub created: Option<DateTime<Utc>>,
}
