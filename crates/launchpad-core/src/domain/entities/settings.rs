//! User settings: application paths, per-entry toggles, template selection.
//!
//! Settings are loaded once at startup and persisted as a whole document
//! (replace, not merge). The JSON field names are camelCase to stay
//! compatible with the `settings.json` documents written by earlier
//! releases of the launcher.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Enable/disable switch for a single template entry, with a description
/// shown in the settings surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryToggle {
    pub enabled: bool,
    #[serde(default)]
    pub description: String,
}

impl EntryToggle {
    pub fn enabled(description: impl Into<String>) -> Self {
        Self {
            enabled: true,
            description: description.into(),
        }
    }
}

/// A user-defined template carried inside `settings.json`.
///
/// Entries are stored as bare names (`folders`) exactly as the settings
/// document has always spelled them; they are classified into file vs.
/// directory entries when merged into the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateOverride {
    pub name: String,
    #[serde(default)]
    pub folders: Vec<String>,
}

/// Which template is active, plus the custom template-folder override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSelection {
    /// Active template id. Falls back to the catalog default when the id
    /// no longer exists.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// When set, `custom_path` is listed at scaffold time and its
    /// top-level entries become the template, overriding `name`.
    #[serde(default)]
    pub use_custom_path: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_path: Option<PathBuf>,
    /// Placeholder project name used by custom template folders.
    #[serde(default)]
    pub placeholder_name: String,
}

impl Default for TemplateSelection {
    fn default() -> Self {
        Self {
            name: crate::domain::entities::template::DEFAULT_TEMPLATE_ID.to_string(),
            path: None,
            use_custom_path: false,
            custom_path: None,
            placeholder_name: "Temp".to_string(),
        }
    }
}

/// The whole persisted settings document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Logical application key → executable/bundle path
    /// (e.g. `afterEffects` → `/Applications/Adobe After Effects.app`).
    #[serde(default)]
    pub applications: BTreeMap<String, PathBuf>,

    /// User-defined templates merged into the catalog at startup.
    #[serde(default)]
    pub templates: BTreeMap<String, TemplateOverride>,

    /// Per-entry enable/disable toggles applied before scaffolding.
    /// Keys that match no template entry are tolerated and ignored.
    #[serde(default, rename = "folderStructure")]
    pub folder_structure: BTreeMap<String, EntryToggle>,

    #[serde(default)]
    pub template: TemplateSelection,
}

impl Settings {
    /// Entry names the user has switched off. Passed to the scaffolder as
    /// its `disabled` set; unknown names are harmless there.
    pub fn disabled_entries(&self) -> std::collections::HashSet<String> {
        self.folder_structure
            .iter()
            .filter(|(_, toggle)| !toggle.enabled)
            .map(|(name, _)| name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selection_points_at_default_template() {
        let settings = Settings::default();
        assert_eq!(settings.template.name, "default");
        assert!(!settings.template.use_custom_path);
    }

    #[test]
    fn disabled_entries_collects_only_switched_off() {
        let mut settings = Settings::default();
        settings
            .folder_structure
            .insert("docs".into(), EntryToggle::enabled("Documentation"));
        settings.folder_structure.insert(
            "build".into(),
            EntryToggle {
                enabled: false,
                description: "Build output".into(),
            },
        );

        let disabled = settings.disabled_entries();
        assert!(disabled.contains("build"));
        assert!(!disabled.contains("docs"));
    }

    #[test]
    fn settings_json_uses_legacy_field_names() {
        let mut settings = Settings::default();
        settings
            .folder_structure
            .insert("src".into(), EntryToggle::enabled("Source"));

        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"folderStructure\""));
        assert!(json.contains("\"useCustomPath\""));
        assert!(json.contains("\"placeholderName\""));
    }

    #[test]
    fn settings_tolerate_missing_sections() {
        // An empty document must load; every section has a default.
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert!(settings.applications.is_empty());
        assert_eq!(settings.template.placeholder_name, "Temp");
    }
}
