//! Unified error handling for the launcher core.
//!
//! Wraps domain and application errors behind a single type so host
//! shells can match one enum, ask for a category, and render suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for core operations.
#[derive(Debug, Error, Clone)]
pub enum LaunchpadError {
    /// Business-rule violation or failed lookup.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Port operation failure (filesystem, persistence, launch).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl LaunchpadError {
    /// Error category for display styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// User-actionable suggestions, rendered by the host shell below the
    /// error message.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(DomainError::TemplateNotFound { id }) => vec![
                format!("No template with id '{id}'"),
                "List available templates with: launchpad templates".into(),
            ],
            Self::Domain(DomainError::RecordNotFound { id }) => vec![
                format!("No registered folder with id '{id}'"),
                "List registered folders with: launchpad list".into(),
            ],
            Self::Domain(_) => vec!["Check your input and try again".into()],
            Self::Application(e) => e.suggestions(),
        }
    }
}

/// Error categories for UI display and exit-code mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type LaunchpadResult<T> = Result<T, LaunchpadError>;
