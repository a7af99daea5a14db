//! JSON-backed state store.
//!
//! Two whole-document files in the application data directory:
//!
//! - `folders.json`  — the folder/project registry
//! - `settings.json` — applications, entry toggles, template selection
//!
//! Writes replace the entire document (last write wins). A missing file
//! loads as the default document; a corrupt one is a `Persistence` error
//! with the parse failure in the message so the user can fix or delete
//! the file by hand.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use launchpad_core::{
    application::{ApplicationError, StateStore},
    domain::{FoldersDocument, Settings, Template, TemplateOverride},
    error::LaunchpadResult,
};

const FOLDERS_FILE: &str = "folders.json";
const SETTINGS_FILE: &str = "settings.json";

/// Production state store writing pretty JSON under a data directory.
#[derive(Debug, Clone)]
pub struct JsonStateStore {
    folders_path: PathBuf,
    settings_path: PathBuf,
}

impl JsonStateStore {
    /// Create a store rooted at `data_dir`, creating the directory if
    /// needed.
    pub fn new(data_dir: &Path) -> LaunchpadResult<Self> {
        std::fs::create_dir_all(data_dir).map_err(|e| ApplicationError::Persistence {
            document: "data directory",
            operation: "create",
            reason: format!("{}: {e}", data_dir.display()),
        })?;

        Ok(Self {
            folders_path: data_dir.join(FOLDERS_FILE),
            settings_path: data_dir.join(SETTINGS_FILE),
        })
    }

    /// First-run seeding: write both documents if they do not exist yet.
    /// The settings document is seeded with the built-in template
    /// definitions so the user can see and edit them.
    pub fn initialize(&self, builtin: &[Template]) -> LaunchpadResult<()> {
        if !self.folders_path.exists() {
            info!(path = %self.folders_path.display(), "seeding folders document");
            self.save_folders(&FoldersDocument::default())?;
        }

        if !self.settings_path.exists() {
            info!(path = %self.settings_path.display(), "seeding settings document");
            let mut settings = Settings::default();
            for template in builtin {
                settings.templates.insert(
                    template.id.clone(),
                    TemplateOverride {
                        name: template.name.clone(),
                        folders: template.entries.iter().map(|e| e.name.clone()).collect(),
                    },
                );
            }
            self.save_settings(&settings)?;
        }

        Ok(())
    }

    /// Where the settings document lives (shown by `config path`).
    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    fn read_document<T>(&self, path: &Path, document: &'static str) -> LaunchpadResult<Option<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        if !path.exists() {
            debug!(%document, "document missing, using defaults");
            return Ok(None);
        }

        let file = File::open(path).map_err(|e| ApplicationError::Persistence {
            document,
            operation: "read",
            reason: e.to_string(),
        })?;

        serde_json::from_reader(BufReader::new(file))
            .map(Some)
            .map_err(|e| {
                ApplicationError::Persistence {
                    document,
                    operation: "parse",
                    reason: format!("{e} (fix or delete {})", path.display()),
                }
                .into()
            })
    }

    fn write_document<T>(&self, path: &Path, document: &'static str, value: &T) -> LaunchpadResult<()>
    where
        T: serde::Serialize,
    {
        let file = File::create(path).map_err(|e| ApplicationError::Persistence {
            document,
            operation: "write",
            reason: e.to_string(),
        })?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, value).map_err(|e| {
            ApplicationError::Persistence {
                document,
                operation: "write",
                reason: e.to_string(),
            }
        })?;
        writer.flush().map_err(|e| {
            ApplicationError::Persistence {
                document,
                operation: "write",
                reason: e.to_string(),
            }
            .into()
        })
    }
}

impl StateStore for JsonStateStore {
    fn load_folders(&self) -> LaunchpadResult<FoldersDocument> {
        Ok(self
            .read_document(&self.folders_path, "folders")?
            .unwrap_or_default())
    }

    fn save_folders(&self, doc: &FoldersDocument) -> LaunchpadResult<()> {
        self.write_document(&self.folders_path, "folders", doc)
    }

    fn load_settings(&self) -> LaunchpadResult<Settings> {
        Ok(self
            .read_document(&self.settings_path, "settings")?
            .unwrap_or_default())
    }

    fn save_settings(&self, settings: &Settings) -> LaunchpadResult<()> {
        self.write_document(&self.settings_path, "settings", settings)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use launchpad_core::domain::FolderRecord;
    use launchpad_core::error::LaunchpadError;
    use tempfile::TempDir;

    #[test]
    fn missing_documents_load_as_defaults() {
        let temp = TempDir::new().unwrap();
        let store = JsonStateStore::new(temp.path()).unwrap();

        assert!(store.load_folders().unwrap().folders.is_empty());
        assert_eq!(store.load_settings().unwrap(), Settings::default());
    }

    #[test]
    fn folders_round_trip() {
        let temp = TempDir::new().unwrap();
        let store = JsonStateStore::new(temp.path()).unwrap();

        let doc = FoldersDocument {
            folders: vec![FolderRecord::new("Alpha", "/projects/Alpha")],
        };
        store.save_folders(&doc).unwrap();
        assert_eq!(store.load_folders().unwrap(), doc);
    }

    #[test]
    fn corrupt_document_is_a_persistence_error() {
        let temp = TempDir::new().unwrap();
        let store = JsonStateStore::new(temp.path()).unwrap();
        std::fs::write(temp.path().join("settings.json"), "{not json").unwrap();

        let err = store.load_settings().unwrap_err();
        assert!(matches!(
            err,
            LaunchpadError::Application(ApplicationError::Persistence { .. })
        ));
    }

    #[test]
    fn initialize_seeds_settings_with_builtin_templates() {
        let temp = TempDir::new().unwrap();
        let store = JsonStateStore::new(temp.path()).unwrap();
        store
            .initialize(&crate::builtin_templates::all())
            .unwrap();

        let settings = store.load_settings().unwrap();
        assert!(settings.templates.contains_key("developer"));
        assert!(settings.templates.contains_key("default"));

        // The on-disk document keeps the legacy field spelling.
        let raw = std::fs::read_to_string(temp.path().join("settings.json")).unwrap();
        assert!(raw.contains("\"folderStructure\""));
    }

    #[test]
    fn initialize_does_not_clobber_existing_documents() {
        let temp = TempDir::new().unwrap();
        let store = JsonStateStore::new(temp.path()).unwrap();

        let doc = FoldersDocument {
            folders: vec![FolderRecord::new("Keep", "/keep")],
        };
        store.save_folders(&doc).unwrap();
        store
            .initialize(&crate::builtin_templates::all())
            .unwrap();

        assert_eq!(store.load_folders().unwrap(), doc);
    }
}
