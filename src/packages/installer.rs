//! Per-package dependency installation.
//!
//! The installer delegates entirely to the external dependency-resolution
//! command (for example `dart pub get`). Lockfiles and caches it writes into
//! the package directory belong to that command.

use tracing::debug;

use crate::shell::{command_line, CommandRunner};

use super::package::Package;
use super::PackageFailure;

/// Runs the dependency-resolution command inside package directories.
pub struct PackageInstaller<'a> {
    runner: &'a dyn CommandRunner,
    argv: Vec<String>,
}

impl<'a> PackageInstaller<'a> {
    /// Create an installer that runs `argv` in each package directory.
    pub fn new(runner: &'a dyn CommandRunner, argv: Vec<String>) -> Self {
        Self { runner, argv }
    }

    /// The command line run for every package.
    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    /// Install dependencies for one package.
    ///
    /// Exit code 0 is success regardless of stdout. Any other exit code is an
    /// [`PackageFailure::InstallFailed`] carrying the captured stderr, which
    /// may be empty.
    pub fn install_dependencies(&self, package: &Package) -> Result<(), PackageFailure> {
        debug!(
            "Installing dependencies for {} with `{}`",
            package.name,
            command_line(&self.argv)
        );

        let result = self.runner.run(&self.argv, Some(package.root_path()));
        if result.success() {
            Ok(())
        } else {
            Err(PackageFailure::InstallFailed {
                exit_code: result.exit_code,
                stderr: result.stderr,
            })
        }
    }
}
