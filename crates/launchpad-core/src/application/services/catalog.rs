//! Template catalog: the immutable-at-runtime set of named templates.

use tracing::{debug, warn};

use crate::domain::{DomainError, Template, TemplateEntry, TemplateOverride};
use crate::error::LaunchpadResult;

pub use crate::domain::entities::template::DEFAULT_TEMPLATE_ID;

/// Read-only, ordered collection of templates.
///
/// Built once at startup from the built-in definitions plus any
/// user-defined templates carried in settings; immutable afterwards.
/// Construction validates every template, so holders never see an
/// invalid one.
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl TemplateCatalog {
    /// Build a catalog, enforcing the catalog-level invariants: every
    /// template valid, ids unique, and the `default` template present.
    pub fn new(templates: Vec<Template>) -> LaunchpadResult<Self> {
        let mut seen = std::collections::HashSet::new();
        for template in &templates {
            template.validate()?;
            if !seen.insert(template.id.as_str()) {
                return Err(DomainError::DuplicateTemplateId {
                    id: template.id.clone(),
                }
                .into());
            }
        }

        if !seen.contains(DEFAULT_TEMPLATE_ID) {
            return Err(DomainError::MissingDefaultTemplate {
                default_id: DEFAULT_TEMPLATE_ID,
            }
            .into());
        }

        debug!(count = templates.len(), "template catalog built");
        Ok(Self { templates })
    }

    /// Build a catalog from built-ins plus user-defined overrides from
    /// settings. An override whose id matches a built-in replaces that
    /// template's name and entries in place (position and presentation
    /// metadata kept — the settings document only carries name + folders);
    /// unknown ids append new templates. Malformed overrides are skipped
    /// with a warning rather than poisoning startup.
    pub fn with_overrides(
        builtins: Vec<Template>,
        overrides: &std::collections::BTreeMap<String, TemplateOverride>,
    ) -> LaunchpadResult<Self> {
        let mut templates = builtins;

        for (id, over) in overrides {
            let candidate = Template::builder(id.clone())
                .name(over.name.clone())
                .profession("Custom")
                .entries_from_names(over.folders.iter().cloned())
                .build();

            let candidate = match candidate {
                Ok(t) => t,
                Err(e) => {
                    warn!(template = %id, error = %e, "skipping invalid template from settings");
                    continue;
                }
            };

            match templates.iter_mut().find(|t| t.id == *id) {
                Some(existing) => {
                    existing.name = candidate.name;
                    existing.entries = candidate.entries;
                }
                None => templates.push(candidate),
            }
        }

        Self::new(templates)
    }

    /// All templates, in catalog order.
    pub fn list(&self) -> &[Template] {
        &self.templates
    }

    /// Look up a template by id.
    pub fn get(&self, id: &str) -> Result<&Template, DomainError> {
        self.templates
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| DomainError::TemplateNotFound { id: id.to_string() })
    }

    /// Look up a template, falling back to the `default` template when
    /// the id is unknown (e.g. a stale selection in settings).
    pub fn get_or_default(&self, id: &str) -> &Template {
        self.get(id).unwrap_or_else(|_| {
            warn!(template = %id, "unknown template id, falling back to default");
            self.default_template()
        })
    }

    /// The `default` template. Guaranteed present by construction.
    pub fn default_template(&self) -> &Template {
        self.templates
            .iter()
            .find(|t| t.id == DEFAULT_TEMPLATE_ID)
            .expect("catalog construction guarantees a default template")
    }
}

/// Build an ad-hoc template from the top-level listing of a custom
/// template folder (the settings `template.customPath` override).
///
/// Each listed name is classified with the same `.` rule as built-in
/// entries. The listing order is whatever the filesystem reports.
pub fn template_from_listing(
    id: impl Into<String>,
    name: impl Into<String>,
    entry_names: impl IntoIterator<Item = String>,
) -> Result<Template, DomainError> {
    let mut builder = Template::builder(id)
        .name(name)
        .profession("Custom")
        .description("Template read from a custom template folder");
    for entry_name in entry_names {
        builder = builder.entry(TemplateEntry::from_name(entry_name));
    }
    builder.build()
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn default_template() -> Template {
        Template::builder(DEFAULT_TEMPLATE_ID)
            .name("Default")
            .entries_from_names(["AEP", "prePro"])
            .build()
            .unwrap()
    }

    fn developer_template() -> Template {
        Template::builder("developer")
            .name("Developer")
            .entries_from_names(["src", "docs", "tests", "assets", "build", "README.md"])
            .build()
            .unwrap()
    }

    #[test]
    fn catalog_requires_default_template() {
        let result = TemplateCatalog::new(vec![developer_template()]);
        assert!(result.is_err());
    }

    #[test]
    fn catalog_rejects_duplicate_ids() {
        let result =
            TemplateCatalog::new(vec![default_template(), default_template()]);
        assert!(result.is_err());
    }

    #[test]
    fn list_preserves_order() {
        let catalog =
            TemplateCatalog::new(vec![default_template(), developer_template()]).unwrap();
        let ids: Vec<&str> = catalog.list().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["default", "developer"]);
    }

    #[test]
    fn get_finds_by_id() {
        let catalog =
            TemplateCatalog::new(vec![default_template(), developer_template()]).unwrap();
        assert_eq!(catalog.get("developer").unwrap().name, "Developer");
        assert!(matches!(
            catalog.get("missing"),
            Err(DomainError::TemplateNotFound { .. })
        ));
    }

    #[test]
    fn get_or_default_falls_back() {
        let catalog =
            TemplateCatalog::new(vec![default_template(), developer_template()]).unwrap();
        assert_eq!(catalog.get_or_default("missing").id, DEFAULT_TEMPLATE_ID);
        assert_eq!(catalog.get_or_default("developer").id, "developer");
    }

    #[test]
    fn overrides_extend_and_replace() {
        let mut overrides = std::collections::BTreeMap::new();
        overrides.insert(
            "podcast".to_string(),
            TemplateOverride {
                name: "Podcast".into(),
                folders: vec!["Audio_Raw".into(), "Episodes".into(), "notes.md".into()],
            },
        );
        overrides.insert(
            "developer".to_string(),
            TemplateOverride {
                name: "Developer (custom)".into(),
                folders: vec!["code".into()],
            },
        );

        let catalog = TemplateCatalog::with_overrides(
            vec![default_template(), developer_template()],
            &overrides,
        )
        .unwrap();

        // replaced in place, position and presentation metadata kept
        assert_eq!(catalog.list()[1].name, "Developer (custom)");
        assert_eq!(catalog.list()[1].entries.len(), 1);
        // new template appended
        let podcast = catalog.get("podcast").unwrap();
        assert_eq!(podcast.entries.len(), 3);
        assert_eq!(
            podcast.entries[2].kind,
            crate::domain::EntryKind::File
        );
    }

    #[test]
    fn invalid_override_is_skipped_not_fatal() {
        let mut overrides = std::collections::BTreeMap::new();
        overrides.insert(
            "broken".to_string(),
            TemplateOverride {
                name: "Broken".into(),
                folders: vec![],
            },
        );

        let catalog =
            TemplateCatalog::with_overrides(vec![default_template()], &overrides).unwrap();
        assert!(catalog.get("broken").is_err());
    }

    #[test]
    fn template_from_listing_classifies_entries() {
        let template = template_from_listing(
            "custom",
            "Custom",
            vec!["Footage".to_string(), "notes.txt".to_string()],
        )
        .unwrap();
        assert_eq!(template.entries[0].kind, crate::domain::EntryKind::Directory);
        assert_eq!(template.entries[1].kind, crate::domain::EntryKind::File);
    }
}
