//! Setup orchestration.
//!
//! The orchestrator gates on the toolchain, then installs every package in
//! order. The toolchain gate is fail-fast; the package loop is collect-all,
//! so one broken package never hides the state of the others.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::SetupConfig;
use crate::error::Result;
use crate::packages::{Package, PackageFailure, PackageInstaller};
use crate::shell::CommandRunner;
use crate::toolchain::{ToolchainProbe, Version};

use super::outcome::{PackageOutcome, SetupOutcome, SetupProgress, SetupReport, ToolchainStatus};

/// Runs the toolchain check and the per-package installs for one project.
pub struct SetupOrchestrator<'a> {
    project_root: PathBuf,
    probe: ToolchainProbe<'a>,
    minimum: Version,
    installer: PackageInstaller<'a>,
    packages: Vec<Package>,
}

impl<'a> SetupOrchestrator<'a> {
    /// Build an orchestrator for `project_root` from its configuration.
    ///
    /// # Errors
    ///
    /// Returns `MalformedVersion` if the configured minimum version does not
    /// parse, or `ConfigValidationError` if the version label is unusable.
    pub fn new(
        config: &SetupConfig,
        project_root: &Path,
        runner: &'a dyn CommandRunner,
    ) -> Result<Self> {
        Ok(Self {
            project_root: project_root.to_path_buf(),
            probe: ToolchainProbe::from_config(runner, &config.toolchain)?,
            minimum: Version::parse(&config.toolchain.minimum_version)?,
            installer: PackageInstaller::new(runner, config.install_argv()),
            packages: config.resolve_packages(project_root),
        })
    }

    /// The project root package paths were resolved against.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// The minimum toolchain version.
    pub fn minimum_version(&self) -> &Version {
        &self.minimum
    }

    /// Packages in installation order.
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    /// Detect the toolchain and compare it against the minimum.
    pub fn check_toolchain(&self) -> ToolchainStatus {
        let Some(found) = self.probe.detect_version() else {
            return ToolchainStatus::NotDetected;
        };

        if found.is_at_least(&self.minimum) {
            ToolchainStatus::Satisfied { version: found }
        } else {
            ToolchainStatus::TooLow {
                found,
                minimum: self.minimum.clone(),
            }
        }
    }

    /// Set up one package: check its directory, then install.
    pub fn install_package(&self, package: &Package) -> PackageOutcome {
        if !package.exists() {
            debug!("Package directory {} is missing", package.root_path.display());
            return PackageOutcome::failed(
                package.clone(),
                PackageFailure::DirectoryMissing {
                    path: package.root_path.clone(),
                },
            );
        }

        match self.installer.install_dependencies(package) {
            Ok(()) => PackageOutcome::installed(package.clone()),
            Err(failure) => PackageOutcome::failed(package.clone(), failure),
        }
    }

    /// Install every package in order without stopping at failures.
    pub fn install_packages(&self, mut on_progress: impl FnMut(SetupProgress<'_>)) -> SetupOutcome {
        let total = self.packages.len();
        let mut outcome = SetupOutcome::new();

        for (index, package) in self.packages.iter().enumerate() {
            on_progress(SetupProgress::PackageStarting {
                package,
                index,
                total,
            });

            let result = self.install_package(package);
            on_progress(SetupProgress::PackageFinished {
                outcome: &result,
                index,
                total,
            });
            outcome.record(result);
        }

        outcome
    }

    /// Run the whole setup.
    pub fn run(&self) -> SetupReport {
        self.run_with_progress(|_| {})
    }

    /// Run the whole setup, reporting progress as it happens.
    pub fn run_with_progress(&self, mut on_progress: impl FnMut(SetupProgress<'_>)) -> SetupReport {
        let toolchain = self.check_toolchain();
        on_progress(SetupProgress::ToolchainChecked { status: &toolchain });

        if !toolchain.is_satisfied() {
            debug!("Toolchain gate failed: {:?}", toolchain);
            return SetupReport::stopped(toolchain);
        }

        let outcome = self.install_packages(on_progress);
        debug!(
            "Processed {} packages, {} failed",
            outcome.packages().len(),
            outcome.failures().count()
        );

        SetupReport {
            toolchain,
            outcome: Some(outcome),
        }
    }
}
