//! Configuration schema definitions for monostrap.
//!
//! This module contains the structs that map to `monostrap.yml`. Every field
//! has a default, so an absent file (or an empty one) describes the EntiDB
//! Sync monorepo: Dart SDK 3.10.1 or newer and `dart pub get` in three
//! packages under `packages/`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::packages::Package;

/// Root configuration structure for monostrap.yml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupConfig {
    /// Project name (for display purposes)
    pub app_name: String,

    /// Toolchain detection and minimum version
    pub toolchain: ToolchainConfig,

    /// Per-package dependency installation command
    pub install: InstallConfig,

    /// Directory (relative to the project root) that holds bare-named packages
    pub packages_root: PathBuf,

    /// Packages in installation order
    pub packages: Vec<PackageEntry>,

    /// Hints printed after a successful setup
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub next_steps: Vec<String>,

    /// Kill any command (version query or install) that runs longer than
    /// this many seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_timeout_secs: Option<u64>,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            app_name: "EntiDB Sync".to_string(),
            toolchain: ToolchainConfig::default(),
            install: InstallConfig::default(),
            packages_root: PathBuf::from("packages"),
            packages: ["entidb_sync_protocol", "entidb_sync_client", "entidb_sync_server"]
                .into_iter()
                .map(|name| PackageEntry::Name(name.to_string()))
                .collect(),
            next_steps: vec![
                "Review documentation: doc/architecture.md".to_string(),
                "Run tests: dart test packages/<package>/test".to_string(),
                "Start development: see CONTRIBUTING.md".to_string(),
            ],
            command_timeout_secs: None,
        }
    }
}

impl SetupConfig {
    /// Resolve the package list against a project root, preserving order.
    ///
    /// Bare names land under `packages_root`; explicit paths are relative to
    /// the project root unless absolute.
    pub fn resolve_packages(&self, project_root: &Path) -> Vec<Package> {
        let packages_root = project_root.join(&self.packages_root);
        self.packages
            .iter()
            .map(|entry| match entry {
                PackageEntry::Name(name) => Package::new(name, packages_root.join(name)),
                PackageEntry::Detailed { name, path } => Package::new(name, project_root.join(path)),
            })
            .collect()
    }

    /// Timeout applied to every command of a run, if one is configured.
    pub fn command_timeout(&self) -> Option<Duration> {
        self.command_timeout_secs.map(Duration::from_secs)
    }

    /// The full installer command line.
    pub fn install_argv(&self) -> Vec<String> {
        let program = self
            .install
            .command
            .clone()
            .unwrap_or_else(|| self.toolchain.command.clone());
        std::iter::once(program)
            .chain(self.install.args.iter().cloned())
            .collect()
    }
}

/// Toolchain detection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainConfig {
    /// Human-readable toolchain name
    pub name: String,

    /// Executable to run for the version query
    pub command: String,

    /// Arguments for the version query
    pub version_args: Vec<String>,

    /// Label that precedes the version token in the query output
    pub version_label: String,

    /// Minimum required version (dotted integers)
    pub minimum_version: String,

    /// Shown when the toolchain is not found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_hint: Option<String>,

    /// Shown when the toolchain is older than the minimum
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade_hint: Option<String>,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            name: "Dart SDK".to_string(),
            command: "dart".to_string(),
            version_args: vec!["--version".to_string()],
            version_label: "Dart SDK version".to_string(),
            minimum_version: "3.10.1".to_string(),
            install_hint: Some("Please install from https://dart.dev/get-dart".to_string()),
            upgrade_hint: Some("Upgrade with: dart channel stable && dart upgrade".to_string()),
        }
    }
}

impl ToolchainConfig {
    /// The full version query command line.
    pub fn version_argv(&self) -> Vec<String> {
        std::iter::once(self.command.clone())
            .chain(self.version_args.iter().cloned())
            .collect()
    }
}

/// Dependency installation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    /// Executable to run (defaults to the toolchain command)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Arguments passed to the installer
    pub args: Vec<String>,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            command: None,
            args: vec!["pub".to_string(), "get".to_string()],
        }
    }
}

/// A package in the configured list.
///
/// ```yaml
/// packages:
///   - entidb_sync_protocol           # packages_root/entidb_sync_protocol
///   - name: tools
///     path: tooling/tools            # relative to the project root
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PackageEntry {
    /// Package directory named after the package under `packages_root`.
    Name(String),

    /// Package with an explicit directory.
    Detailed { name: String, path: PathBuf },
}

impl PackageEntry {
    /// The package name.
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Detailed { name, .. } => name,
        }
    }
}
