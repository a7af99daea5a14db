//! Folder and project shortcut records.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque stable identifier for a registry record.
///
/// UUID-backed; serialized as its hyphenated string form inside
/// `folders.json`. Callers treat it as a token — there is no ordering or
/// structure to rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user-supplied id string (CLI arguments, persisted data).
    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Self)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One quick-access folder or created project tracked by the registry.
///
/// `path` is the identity for deduplication: re-adding a path refreshes
/// `name` on the existing record instead of creating a second one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderRecord {
    pub id: RecordId,
    /// Display label, typically the last path segment.
    pub name: String,
    pub path: PathBuf,
    /// Set for scaffolded projects; plain shortcuts leave it empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// Template the project was scaffolded from, when applicable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

impl FolderRecord {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            id: RecordId::generate(),
            name: name.into(),
            path: path.into(),
            created: None,
            template: None,
        }
    }

    /// Derive a display label from the last path segment, falling back to
    /// the whole path when there is no usable file name (e.g. `/`).
    pub fn name_from_path(path: &Path) -> String {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    }
}

/// The persisted shape of `folders.json`: `{ "folders": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoldersDocument {
    #[serde(default)]
    pub folders: Vec<FolderRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_ids_are_unique() {
        assert_ne!(RecordId::generate(), RecordId::generate());
    }

    #[test]
    fn record_id_round_trips_through_display() {
        let id = RecordId::generate();
        assert_eq!(RecordId::parse(&id.to_string()), Some(id));
    }

    #[test]
    fn record_id_parse_rejects_garbage() {
        assert_eq!(RecordId::parse("not-a-uuid"), None);
    }

    #[test]
    fn name_from_path_takes_last_segment() {
        assert_eq!(
            FolderRecord::name_from_path(Path::new("/projects/Alpha")),
            "Alpha"
        );
    }

    #[test]
    fn folders_document_deserializes_minimal_records() {
        // Records written by older versions carry neither `created` nor
        // `template`; both must default cleanly.
        let doc: FoldersDocument = serde_json::from_str(
            r#"{"folders":[{"id":"67e55044-10b1-426f-9247-bb680e5fe0c8","name":"A","path":"/a"}]}"#,
        )
        .unwrap();
        assert_eq!(doc.folders.len(), 1);
        assert_eq!(doc.folders[0].created, None);
        assert_eq!(doc.folders[0].template, None);
    }

    #[test]
    fn folders_document_defaults_to_empty() {
        let doc: FoldersDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.folders.is_empty());
    }
}
