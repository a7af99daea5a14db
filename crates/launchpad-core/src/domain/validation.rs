//! Input validation shared by every host shell.
//!
//! User-supplied strings are validated before any service is invoked, so
//! the services themselves can assume well-formed input.

use std::path::Path;

use crate::domain::error::DomainError;

/// Validate a project/folder display name.
///
/// Rules match what the settings surface has always accepted: non-empty
/// after trimming, no path separators (the name becomes a single path
/// segment under the chosen location).
pub fn validate_display_name(name: &str) -> Result<(), DomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation {
            field: "name",
            reason: "name cannot be empty".into(),
        });
    }
    if trimmed.contains('/') || trimmed.contains('\\') {
        return Err(DomainError::Validation {
            field: "name",
            reason: "name cannot contain path separators".into(),
        });
    }
    Ok(())
}

/// Validate a user-supplied folder path: non-empty.
///
/// Existence is deliberately not checked here — callers decide whether a
/// missing path is an error (registering a shortcut) or an instruction
/// (scaffolding a new project).
pub fn validate_folder_path(path: &Path) -> Result<(), DomainError> {
    if path.as_os_str().is_empty() {
        return Err(DomainError::Validation {
            field: "path",
            reason: "path cannot be empty".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn empty_name_is_invalid() {
        assert!(validate_display_name("").is_err());
        assert!(validate_display_name("   ").is_err());
    }

    #[test]
    fn separators_in_name_are_invalid() {
        assert!(validate_display_name("a/b").is_err());
        assert!(validate_display_name("a\\b").is_err());
    }

    #[test]
    fn ordinary_names_pass() {
        for name in ["Alpha", "client shoot 04", "My_Project", "reel-2026"] {
            assert!(validate_display_name(name).is_ok(), "failed for: {name}");
        }
    }

    #[test]
    fn empty_path_is_invalid() {
        assert!(validate_folder_path(&PathBuf::new()).is_err());
        assert!(validate_folder_path(Path::new("/projects/x")).is_ok());
    }
}
