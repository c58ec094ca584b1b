//! Configuration validation rules.
//!
//! This module validates configuration for correctness:
//! - The toolchain command and version label must be non-empty
//! - The minimum version must parse as dotted integers
//! - At least one package must be configured
//! - Package names must be non-empty and unique
//! - The installer must have a command to run

use crate::config::schema::SetupConfig;
use crate::error::{Result, SetupError};
use crate::toolchain::Version;
use std::collections::HashSet;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Package name if error is package-specific
    pub package: Option<String>,
}

impl ValidationError {
    fn new(rule: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
            package: None,
        }
    }
}

/// Validate a configuration and return all errors.
///
/// This function collects all validation errors rather than stopping
/// at the first one, allowing users to fix multiple issues at once.
pub fn validate_config(config: &SetupConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_toolchain(config));
    errors.extend(validate_install(config));
    errors.extend(validate_packages(config));

    errors
}

/// Validate toolchain settings.
fn validate_toolchain(config: &SetupConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let toolchain = &config.toolchain;

    if toolchain.command.trim().is_empty() {
        errors.push(ValidationError::new(
            "empty-toolchain-command",
            "toolchain.command must not be empty".to_string(),
        ));
    }

    if toolchain.version_label.trim().is_empty() {
        errors.push(ValidationError::new(
            "empty-version-label",
            "toolchain.version_label must not be empty".to_string(),
        ));
    }

    if let Err(e) = Version::parse(&toolchain.minimum_version) {
        errors.push(ValidationError::new(
            "malformed-minimum-version",
            format!("toolchain.minimum_version: {}", e),
        ));
    }

    errors
}

/// Validate the installer command.
fn validate_install(config: &SetupConfig) -> Vec<ValidationError> {
    let argv = config.install_argv();
    if argv.first().map_or(true, |program| program.trim().is_empty()) {
        vec![ValidationError::new(
            "empty-install-command",
            "install.command must not be empty".to_string(),
        )]
    } else {
        Vec::new()
    }
}

/// Validate package definitions.
fn validate_packages(config: &SetupConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.packages.is_empty() {
        errors.push(ValidationError::new(
            "no-packages",
            "at least one package must be configured".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for entry in &config.packages {
        let name = entry.name();
        if name.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-package-name",
                "package names must not be empty".to_string(),
            ));
            continue;
        }

        if !seen.insert(name) {
            errors.push(ValidationError {
                package: Some(name.to_string()),
                ..ValidationError::new(
                    "duplicate-package",
                    format!("Package '{}' is listed more than once", name),
                )
            });
        }
    }

    errors
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &SetupConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(SetupError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
