//! Host platform and CI detection.

use std::fmt;

/// Operating system and CPU architecture of the current host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformInfo {
    /// Operating system name (linux, macos, windows, ...).
    pub os: &'static str,

    /// CPU architecture (x86_64, aarch64, ...).
    pub arch: &'static str,
}

impl PlatformInfo {
    /// Describe the platform this binary is running on.
    pub fn current() -> Self {
        Self {
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
        }
    }
}

impl fmt::Display for PlatformInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.os, self.arch)
    }
}

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}
