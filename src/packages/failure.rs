//! Per-package failure taxonomy.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Why a package could not be set up.
///
/// A missing directory is detected before anything runs; a failed install is
/// reported by the external command. Both fail the package, but callers can
/// tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PackageFailure {
    /// The configured package directory does not exist.
    #[error("Package directory not found: {}", path.display())]
    DirectoryMissing { path: PathBuf },

    /// The dependency-resolution command exited non-zero.
    #[error("Dependency installation failed with exit code {exit_code}")]
    InstallFailed { exit_code: i32, stderr: String },
}

impl PackageFailure {
    /// Diagnostic text for display: the directory message, or the captured
    /// stderr of the installer (possibly empty).
    pub fn error_text(&self) -> String {
        match self {
            Self::DirectoryMissing { .. } => self.to_string(),
            Self::InstallFailed { stderr, .. } => stderr.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_missing_text_names_path() {
        let failure = PackageFailure::DirectoryMissing {
            path: PathBuf::from("/repo/packages/client"),
        };
        assert_eq!(
            failure.error_text(),
            "Package directory not found: /repo/packages/client"
        );
    }

    #[test]
    fn install_failed_text_is_stderr() {
        let failure = PackageFailure::InstallFailed {
            exit_code: 69,
            stderr: "network unreachable".to_string(),
        };
        assert_eq!(failure.error_text(), "network unreachable");
        assert!(failure.to_string().contains("69"));
    }

    #[test]
    fn serializes_with_kind_tag() {
        let failure = PackageFailure::InstallFailed {
            exit_code: 1,
            stderr: String::new(),
        };
        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["kind"], "install_failed");
        assert_eq!(json["exit_code"], 1);
    }
}
