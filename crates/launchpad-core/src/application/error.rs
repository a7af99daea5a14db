//! Application layer errors.
//!
//! These represent failures of the outside world reached through ports —
//! filesystem refusals, persistence failures, launch failures. Business
//! rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while orchestrating port operations.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The OS refused a filesystem mutation.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// The path cannot exist (bad component, missing drive, too long...).
    #[error("Invalid path {path}: {reason}")]
    PathInvalid { path: PathBuf, reason: String },

    /// Any other filesystem failure.
    #[error("Filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// Reading or writing a persisted JSON document failed.
    ///
    /// The in-memory state that triggered the write is kept, so the user
    /// can retry the save; memory and disk stay diverged until a save
    /// succeeds or the process restarts.
    #[error("Could not {operation} {document}: {reason}")]
    Persistence {
        document: &'static str,
        operation: &'static str,
        reason: String,
    },

    /// Spawning a process or opening a document failed.
    #[error("Could not launch {path}: {reason}")]
    Launch { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::PermissionDenied { path } => vec![
                format!("No permission to write to: {}", path.display()),
                "Check the directory's permissions, or pick another location".into(),
            ],
            Self::PathInvalid { path, .. } => vec![
                format!("The path is not usable: {}", path.display()),
                "Check for typos or illegal characters in the path".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that the path exists and the disk is available".into(),
            ],
            Self::Persistence { document, .. } => vec![
                format!("The {document} document could not be saved/loaded"),
                "Your change is still held in memory; retry the operation".into(),
                "Check free disk space and data-directory permissions".into(),
            ],
            Self::Launch { path, .. } => vec![
                format!("Tried to launch: {}", path.display()),
                "Check that the file still exists".into(),
                "Fix the registered application path with: launchpad config set applications.<key> <path>"
                    .into(),
            ],
        }
    }

    pub fn category(&self) -> crate::error::ErrorCategory {
        use crate::error::ErrorCategory;
        match self {
            Self::Persistence { .. } => ErrorCategory::Configuration,
            _ => ErrorCategory::Internal,
        }
    }
}
