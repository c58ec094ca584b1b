//! Monorepo packages and their dependency installation.
//!
//! - [`package`] - Package name and directory
//! - [`installer`] - Runs the dependency-resolution command per package
//! - [`failure`] - Why a package could not be set up

pub mod failure;
pub mod installer;
pub mod package;

pub use failure::PackageFailure;
pub use installer::PackageInstaller;
pub use package::Package;
