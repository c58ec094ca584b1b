//! Error types for monostrap operations.
//!
//! This module defines [`SetupError`], the error type used by configuration
//! loading and version parsing, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Subprocess failures are never errors: they come back as a
//!   [`CommandResult`](crate::shell::CommandResult) with a non-zero exit code
//! - Toolchain and per-package failures are recorded as values in a
//!   [`SetupReport`](crate::setup::SetupReport)
//! - `SetupError` covers what remains: bad configuration and malformed versions

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for monostrap operations.
#[derive(Debug, Error)]
pub enum SetupError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A version string has a component that is not a non-negative integer.
    #[error("Malformed version '{input}': expected dot-separated non-negative integers")]
    MalformedVersion { input: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for monostrap operations.
pub type Result<T> = std::result::Result<T, SetupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = SetupError::ConfigNotFound {
            path: PathBuf::from("/repo/monostrap.yml"),
        };
        assert!(err.to_string().contains("/repo/monostrap.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = SetupError::ConfigParseError {
            path: PathBuf::from("/monostrap.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/monostrap.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn config_validation_error_displays_message() {
        let err = SetupError::ConfigValidationError {
            message: "no packages configured".into(),
        };
        assert!(err.to_string().contains("no packages configured"));
    }

    #[test]
    fn malformed_version_displays_input() {
        let err = SetupError::MalformedVersion {
            input: "3.x.1".into(),
        };
        assert!(err.to_string().contains("'3.x.1'"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: SetupError = io_err.into();
        assert!(matches!(err, SetupError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts() {
        let err: SetupError = anyhow::anyhow!("unexpected").into();
        assert!(matches!(err, SetupError::Other(_)));
        assert_eq!(err.to_string(), "unexpected");
    }
}
