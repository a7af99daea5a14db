//! Template domain aggregate.
//!
//! A [`Template`] is a named, ordered list of entries defining a project
//! skeleton for one profession (VFX artist, developer, photographer, ...).
//! Templates are defined at process start and immutable thereafter; the
//! catalog never grows at runtime.
//!
//! ## Entry kinds
//!
//! Each entry is a tagged [`TemplateEntry`] — either a directory or a file
//! to create empty. The legacy convention "a name containing `.` is a file"
//! is applied exactly once, at definition time, by
//! [`TemplateEntry::from_name`]. Nothing downstream re-inspects strings:
//! the scaffolder dispatches on [`EntryKind`] alone.
//!
//! ## Invariants (enforced by `validate()`)
//!
//! 1. `id` is a non-empty slug
//! 2. `entries` is non-empty (a template must create something)
//! 3. entry names are unique within the template

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Id of the template every catalog must contain. Lookups with an unknown
/// id fall back to it.
pub const DEFAULT_TEMPLATE_ID: &str = "default";

/// What a single template entry materializes as on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A directory, created recursively (intermediate segments included).
    Directory,
    /// An empty file. Existing files are never overwritten.
    File,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory => write!(f, "directory"),
            Self::File => write!(f, "file"),
        }
    }
}

/// One entry of a template: a kind plus a path segment relative to the
/// project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateEntry {
    pub kind: EntryKind,
    pub name: String,
}

impl TemplateEntry {
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Directory,
            name: name.into(),
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::File,
            name: name.into(),
        }
    }

    /// Classify a bare entry name using the legacy convention: a name
    /// containing `.` denotes a file, anything else a directory.
    ///
    /// This is the only place the convention exists. Entries loaded from
    /// user settings or custom template folders pass through here once;
    /// after that the kind tag is authoritative.
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        let kind = if name.contains('.') {
            EntryKind::File
        } else {
            EntryKind::Directory
        };
        Self { kind, name }
    }
}

impl fmt::Display for TemplateEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}

/// A named project skeleton.
///
/// `name`, `description`, `profession`, `icon`, and `color` are
/// presentation metadata — opaque to the core, consumed only by host
/// shells when listing templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Stable slug, unique within the catalog (e.g. `vfx-artist`).
    pub id: String,
    /// Human-readable display name (e.g. "VFX Artist").
    pub name: String,
    pub description: String,
    pub profession: String,
    pub icon: String,
    pub color: String,
    /// Ordered entries to materialize. Order is significant for progress
    /// reporting only; entries are independent.
    pub entries: Vec<TemplateEntry>,
}

impl Template {
    pub fn builder(id: impl Into<String>) -> TemplateBuilder {
        TemplateBuilder::new(id)
    }

    /// Validate all invariants. Catalog construction calls this for every
    /// template, so a catalog in hand implies valid templates.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.is_empty() {
            return Err(DomainError::InvalidTemplate(
                "template id cannot be empty".into(),
            ));
        }

        if self.entries.is_empty() {
            return Err(DomainError::EmptyTemplate {
                template_id: self.id.clone(),
            });
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            if !seen.insert(entry.name.as_str()) {
                return Err(DomainError::DuplicateEntry {
                    template_id: self.id.clone(),
                    entry: entry.name.clone(),
                });
            }
        }

        Ok(())
    }

    /// Entries that survive the user's per-entry disable toggles.
    pub fn enabled_entries<'a>(
        &'a self,
        disabled: &'a HashSet<String>,
    ) -> impl Iterator<Item = &'a TemplateEntry> {
        self.entries.iter().filter(|e| !disabled.contains(&e.name))
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} entries)", self.id, self.entries.len())
    }
}

/// Fluent construction for built-in template definitions.
///
/// All metadata fields default to empty strings; `build()` enforces the
/// same invariants as [`Template::validate`].
pub struct TemplateBuilder {
    id: String,
    name: String,
    description: String,
    profession: String,
    icon: String,
    color: String,
    entries: Vec<TemplateEntry>,
}

impl TemplateBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            description: String::new(),
            profession: String::new(),
            icon: String::new(),
            color: String::new(),
            entries: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn profession(mut self, profession: impl Into<String>) -> Self {
        self.profession = profession.into();
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Add entries from bare names, classifying each with the `.` rule.
    pub fn entries_from_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .extend(names.into_iter().map(TemplateEntry::from_name));
        self
    }

    pub fn entry(mut self, entry: TemplateEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn build(self) -> Result<Template, DomainError> {
        let template = Template {
            id: self.id,
            name: self.name,
            description: self.description,
            profession: self.profession,
            icon: self.icon,
            color: self.color,
            entries: self.entries,
        };
        template.validate()?;
        Ok(template)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
