//! Structured results of a setup run.
//!
//! Nothing in here prints. The CLI renders these values; `--json` serializes
//! them as they are.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::packages::{Package, PackageFailure};
use crate::toolchain::Version;

/// Result of the toolchain gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ToolchainStatus {
    /// No usable version was detected (missing, failing or unrecognised output).
    NotDetected,

    /// A version was detected but it is older than the minimum.
    TooLow { found: Version, minimum: Version },

    /// The detected version meets the minimum.
    Satisfied { version: Version },
}

impl ToolchainStatus {
    /// Whether setup may continue past the toolchain gate.
    pub fn is_satisfied(&self) -> bool {
        matches!(self, Self::Satisfied { .. })
    }
}

/// Outcome of one package's installation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageOutcome {
    package: Package,
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    failure: Option<PackageFailure>,
}

impl PackageOutcome {
    /// A package whose dependencies were installed.
    pub fn installed(package: Package) -> Self {
        Self {
            package,
            success: true,
            failure: None,
        }
    }

    /// A package that failed.
    pub fn failed(package: Package, failure: PackageFailure) -> Self {
        Self {
            package,
            success: false,
            failure: Some(failure),
        }
    }

    /// The package this outcome is for.
    pub fn package(&self) -> &Package {
        &self.package
    }

    /// Whether the package was set up.
    pub fn success(&self) -> bool {
        self.success
    }

    /// Why the package failed, if it did.
    pub fn failure(&self) -> Option<&PackageFailure> {
        self.failure.as_ref()
    }

    /// Diagnostic text for a failed package.
    pub fn error_text(&self) -> Option<String> {
        self.failure.as_ref().map(PackageFailure::error_text)
    }
}

/// Ordered per-package outcomes, built up one package at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupOutcome {
    packages: Vec<PackageOutcome>,
}

impl SetupOutcome {
    /// Create an empty outcome.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the outcome of the next package.
    pub fn record(&mut self, outcome: PackageOutcome) {
        self.packages.push(outcome);
    }

    /// Outcomes in processing order.
    pub fn packages(&self) -> &[PackageOutcome] {
        &self.packages
    }

    /// Outcomes of packages that failed, in processing order.
    pub fn failures(&self) -> impl Iterator<Item = &PackageOutcome> {
        self.packages.iter().filter(|o| !o.success())
    }

    /// True when every package succeeded (vacuously true when empty).
    pub fn overall_success(&self) -> bool {
        self.packages.iter().all(PackageOutcome::success)
    }
}

impl Serialize for SetupOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SetupOutcome", 2)?;
        state.serialize_field("packages", &self.packages)?;
        state.serialize_field("overall_success", &self.overall_success())?;
        state.end()
    }
}

/// Everything a setup run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupReport {
    /// Result of the toolchain gate.
    pub toolchain: ToolchainStatus,

    /// Package outcomes; `None` when the run stopped at the toolchain gate.
    pub outcome: Option<SetupOutcome>,
}

impl SetupReport {
    /// A run that stopped before any package was attempted.
    pub fn stopped(toolchain: ToolchainStatus) -> Self {
        Self {
            toolchain,
            outcome: None,
        }
    }

    /// Whether the toolchain was satisfied and every package succeeded.
    pub fn success(&self) -> bool {
        self.toolchain.is_satisfied()
            && self
                .outcome
                .as_ref()
                .is_some_and(SetupOutcome::overall_success)
    }

    /// Process exit status: 0 on full success, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.success() {
            0
        } else {
            1
        }
    }
}

impl Serialize for SetupReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SetupReport", 4)?;
        state.serialize_field("toolchain", &self.toolchain)?;
        state.serialize_field("outcome", &self.outcome)?;
        state.serialize_field("success", &self.success())?;
        state.serialize_field("exit_code", &self.exit_code())?;
        state.end()
    }
}

/// Progress notifications emitted while a setup run is in flight.
#[derive(Debug)]
pub enum SetupProgress<'a> {
    /// The toolchain gate finished.
    ToolchainChecked { status: &'a ToolchainStatus },

    /// A package is about to be processed.
    PackageStarting {
        package: &'a Package,
        index: usize,
        total: usize,
    },

    /// A package finished, successfully or not.
    PackageFinished {
        outcome: &'a PackageOutcome,
        index: usize,
        total: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    fn ok(name: &str) -> PackageOutcome {
        PackageOutcome::installed(Package::new(name, format!("/repo/{}", name)))
    }

    fn missing(name: &str) -> PackageOutcome {
        PackageOutcome::failed(
            Package::new(name, format!("/repo/{}", name)),
            PackageFailure::DirectoryMissing {
                path: PathBuf::from(format!("/repo/{}", name)),
            },
        )
    }

    #[test]
    fn empty_outcome_is_vacuously_successful() {
        assert!(SetupOutcome::new().overall_success());
    }

    #[test]
    fn any_failure_fails_overall() {
        let mut outcome = SetupOutcome::new();
        outcome.record(ok("a"));
        outcome.record(missing("b"));
        outcome.record(ok("c"));

        assert!(!outcome.overall_success());
        let failed: Vec<_> = outcome.failures().map(|o| o.package().name.as_str()).collect();
        assert_eq!(failed, ["b"]);
    }

    #[test]
    fn record_preserves_order() {
        let mut outcome = SetupOutcome::new();
        for name in ["a", "b", "c"] {
            outcome.record(ok(name));
        }
        let names: Vec<_> = outcome.packages().iter().map(|o| o.package().name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn failed_outcome_exposes_error_text() {
        let outcome = missing("client");
        assert!(!outcome.success());
        assert!(outcome.error_text().unwrap().contains("/repo/client"));
        assert!(ok("a").error_text().is_none());
    }

    #[test]
    fn stopped_report_exits_one() {
        assert_eq!(SetupReport::stopped(ToolchainStatus::NotDetected).exit_code(), 1);
        let too_low = ToolchainStatus::TooLow {
            found: v("3.9.9"),
            minimum: v("3.10.1"),
        };
        assert_eq!(SetupReport::stopped(too_low).exit_code(), 1);
    }

    #[test]
    fn satisfied_report_follows_outcome() {
        let mut outcome = SetupOutcome::new();
        outcome.record(ok("a"));
        let report = SetupReport {
            toolchain: ToolchainStatus::Satisfied { version: v("3.10.5") },
            outcome: Some(outcome.clone()),
        };
        assert_eq!(report.exit_code(), 0);

        outcome.record(missing("b"));
        let report = SetupReport {
            toolchain: ToolchainStatus::Satisfied { version: v("3.10.5") },
            outcome: Some(outcome),
        };
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn report_serializes_status_and_exit_code() {
        let report = SetupReport::stopped(ToolchainStatus::TooLow {
            found: v("3.9.9"),
            minimum: v("3.10.1"),
        });
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["toolchain"]["status"], "too_low");
        assert_eq!(json["toolchain"]["found"], "3.9.9");
        assert!(json["outcome"].is_null());
        assert_eq!(json["exit_code"], 1);
        assert_eq!(json["success"], false);
    }

    #[test]
    fn outcome_serializes_per_package_success() {
        let mut outcome = SetupOutcome::new();
        outcome.record(ok("a"));
        outcome.record(missing("b"));
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["packages"][0]["success"], true);
        assert!(json["packages"][0].get("failure").is_none());
        assert_eq!(json["packages"][1]["failure"]["kind"], "directory_missing");
        assert_eq!(json["overall_success"], false);
    }
}
