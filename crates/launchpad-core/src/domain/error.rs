use thiserror::Error;

/// Business-rule violations and lookups that came up empty.
///
/// Everything here is recoverable at the call-site: validation errors are
/// corrected by re-prompting the user, and `TemplateNotFound` has a
/// designated fallback (the catalog default, which exists by construction).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ── Validation ───────────────────────────────────────────────────────
    #[error("Invalid {field}: {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Template '{template_id}' has no entries")]
    EmptyTemplate { template_id: String },

    #[error("Duplicate entry '{entry}' in template '{template_id}'")]
    DuplicateEntry { template_id: String, entry: String },

    #[error("Duplicate template id in catalog: {id}")]
    DuplicateTemplateId { id: String },

    #[error("Catalog is missing the '{default_id}' template")]
    MissingDefaultTemplate { default_id: &'static str },

    // ── Not found ────────────────────────────────────────────────────────
    #[error("Template not found: {id}")]
    TemplateNotFound { id: String },

    #[error("Folder record not found: {id}")]
    RecordNotFound { id: String },
}

impl DomainError {
    /// Error category for display styling and exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } | Self::RecordNotFound { .. } => ErrorCategory::NotFound,
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_variants_categorize_as_not_found() {
        let err = DomainError::TemplateNotFound { id: "x".into() };
        assert_eq!(err.category(), ErrorCategory::NotFound);
        let err = DomainError::RecordNotFound { id: "x".into() };
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn validation_variants_categorize_as_validation() {
        let err = DomainError::Validation {
            field: "name",
            reason: "empty".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
    }
}
