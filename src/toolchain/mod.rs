//! Toolchain detection and version checks.
//!
//! - [`probe`] - Runs the toolchain's version query and extracts the version
//! - [`version`] - Numeric dotted versions and minimum-version comparison

pub mod probe;
pub mod version;

pub use probe::{extract_version, version_pattern, ToolchainProbe};
pub use version::Version;
