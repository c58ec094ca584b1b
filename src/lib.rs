//! monostrap - Toolchain check and dependency bootstrap for monorepos.
//!
//! monostrap verifies that a toolchain (the Dart SDK by default) is installed
//! at a minimum version, then runs the dependency-resolution command in each
//! package of a fixed, ordered list. Every package is attempted; the result
//! is a structured report and a 0/1 exit code.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`packages`] - Packages and per-package dependency installation
//! - [`setup`] - The toolchain gate and the collect-all package loop
//! - [`shell`] - Subprocess execution and platform detection
//! - [`toolchain`] - Version parsing, comparison and detection
//! - [`ui`] - Spinners and terminal output
//!
//! # Example
//!
//! ```
//! use monostrap::toolchain::Version;
//!
//! let found: Version = "3.10.5".parse().unwrap();
//! let minimum: Version = "3.10.1".parse().unwrap();
//! assert!(found.is_at_least(&minimum));
//! ```
//!
//! For whole runs against a fake runner, see the integration tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod packages;
pub mod setup;
pub mod shell;
pub mod toolchain;
pub mod ui;

pub use error::{Result, SetupError};
