//! Setup orchestration and its structured results.
//!
//! - [`orchestrator`] - Toolchain gate followed by the collect-all package loop
//! - [`outcome`] - Reports, per-package outcomes and progress events
//!
//! # Example
//!
//! ```no_run
//! use monostrap::config::SetupConfig;
//! use monostrap::setup::SetupOrchestrator;
//! use monostrap::shell::SystemRunner;
//! use std::path::Path;
//!
//! let config = SetupConfig::default();
//! let runner = SystemRunner::new();
//! let orchestrator = SetupOrchestrator::new(&config, Path::new("."), &runner).unwrap();
//! let report = orchestrator.run();
//! std::process::exit(report.exit_code());
//! ```

pub mod orchestrator;
pub mod outcome;

pub use orchestrator::SetupOrchestrator;
pub use outcome::{PackageOutcome, SetupOutcome, SetupProgress, SetupReport, ToolchainStatus};
