//! Error types for pygate operations.
//!
//! This module defines [`PygateError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Errors are reserved for configuration and usage problems (bad flags,
//!   unreadable manifests) and map to exit code 2
//! - A probe that concludes "not found" is never an error: the gate always
//!   terminates with a definite [`GateOutcome`](crate::gate::GateOutcome)
//! - Use `anyhow::Error` (via `PygateError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pygate operations.
#[derive(Debug, Error)]
pub enum PygateError {
    /// Manifest file not found at the expected location.
    #[error("Manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// Failed to parse a manifest file.
    #[error("Failed to parse manifest at {path}: {message}")]
    ManifestParseError { path: PathBuf, message: String },

    /// Manifest parsed but its contents are invalid.
    #[error("Invalid manifest: {message}")]
    ManifestValidationError { message: String },

    /// A minimum version string could not be parsed.
    #[error("Invalid minimum version '{value}': expected MAJOR or MAJOR.MINOR")]
    InvalidMinimum { value: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for pygate operations.
pub type Result<T> = std::result::Result<T, PygateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_not_found_displays_path() {
        let err = PygateError::ManifestNotFound {
            path: PathBuf::from("/proj/.pygate.yml"),
        };
        assert!(err.to_string().contains("/proj/.pygate.yml"));
    }

    #[test]
    fn manifest_parse_error_displays_path_and_message() {
        let err = PygateError::ManifestParseError {
            path: PathBuf::from("/proj/pygate.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/proj/pygate.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn manifest_validation_error_displays_message() {
        let err = PygateError::ManifestValidationError {
            message: "requirement 'pycf' has unparseable minimum".into(),
        };
        assert!(err.to_string().contains("unparseable minimum"));
    }

    #[test]
    fn invalid_minimum_displays_value() {
        let err = PygateError::InvalidMinimum {
            value: "one.two".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("one.two"));
        assert!(msg.contains("MAJOR"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PygateError = io_err.into();
        assert!(matches!(err, PygateError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(PygateError::ManifestValidationError {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
