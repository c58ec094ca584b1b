//! Toolchain version detection.
//!
//! The probe runs the toolchain's version query (for example `dart --version`)
//! and looks for a labelled version token such as
//! `Dart SDK version: 3.10.4 (stable)` in the combined output. Some toolchains
//! print their banner on stderr, so both streams are searched.
//!
//! A non-zero exit, output without the token and an unparsable token all
//! produce `None`: the caller cannot tell "not installed" from "installed but
//! broken", and does not need to.
//!
//! # Example
//!
//! ```no_run
//! use monostrap::config::ToolchainConfig;
//! use monostrap::shell::SystemRunner;
//! use monostrap::toolchain::ToolchainProbe;
//!
//! let runner = SystemRunner::new();
//! let probe = ToolchainProbe::from_config(&runner, &ToolchainConfig::default()).unwrap();
//! match probe.detect_version() {
//!     Some(version) => println!("found {}", version),
//!     None => println!("toolchain not found"),
//! }
//! ```

use regex::Regex;
use tracing::{debug, warn};

use crate::config::ToolchainConfig;
use crate::error::{Result, SetupError};
use crate::shell::{command_line, CommandRunner};

use super::version::Version;

/// Detects the installed toolchain version through a [`CommandRunner`].
pub struct ToolchainProbe<'a> {
    runner: &'a dyn CommandRunner,
    argv: Vec<String>,
    pattern: Regex,
}

impl<'a> ToolchainProbe<'a> {
    /// Create a probe that runs `argv` and looks for `<label>: X.Y.Z`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidationError` if the label cannot be turned into a
    /// search pattern.
    pub fn new(runner: &'a dyn CommandRunner, argv: Vec<String>, label: &str) -> Result<Self> {
        Ok(Self {
            runner,
            argv,
            pattern: version_pattern(label)?,
        })
    }

    /// Create a probe from toolchain configuration.
    pub fn from_config(runner: &'a dyn CommandRunner, toolchain: &ToolchainConfig) -> Result<Self> {
        Self::new(runner, toolchain.version_argv(), &toolchain.version_label)
    }

    /// The command line this probe runs.
    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    /// Run the version query and extract the version, if any.
    pub fn detect_version(&self) -> Option<Version> {
        let result = self.runner.run(&self.argv, None);

        if !result.success() {
            debug!(
                "`{}` exited with code {}: {}",
                command_line(&self.argv),
                result.exit_code,
                result.stderr.trim()
            );
            return None;
        }

        let version = extract_version(&result.combined_output(), &self.pattern);
        if version.is_none() {
            debug!(
                "No version token in output of `{}`",
                command_line(&self.argv)
            );
        }
        version
    }
}

/// Build the search pattern for a version label.
pub fn version_pattern(label: &str) -> Result<Regex> {
    let pattern = format!(r"{}:\s*(\d+\.\d+\.\d+)", regex::escape(label));
    Regex::new(&pattern).map_err(|e| SetupError::ConfigValidationError {
        message: format!("invalid version label '{}': {}", label, e),
    })
}

/// Extract the first labelled version token from `output`.
///
/// A token that matches the pattern but does not parse (a component too large
/// for `u64`) is treated as no match.
pub fn extract_version(output: &str, pattern: &Regex) -> Option<Version> {
    let token = pattern.captures(output)?.get(1)?.as_str();
    match Version::parse(token) {
        Ok(version) => Some(version),
        Err(e) => {
            warn!("Ignoring version token: {}", e);
            None
        }
    }
}
