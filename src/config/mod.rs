//! Configuration loading, parsing, and validation for monostrap.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use monostrap::config::{load_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("monostrap.yml"), "app_name: demo").unwrap();
//!
//! let config = load_config(temp.path()).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.app_name, "demo");
//! ```
//!
//! # Configuration File
//!
//! `monostrap.yml` lives at the project root. It is optional; every field
//! falls back to a built-in default.

pub mod loader;
pub mod schema;
pub mod validator;

// Schema re-exports
pub use schema::{InstallConfig, PackageEntry, SetupConfig, ToolchainConfig};

// Loader re-exports
pub use loader::{
    config_path, find_project_root, load_config, load_config_file, parse_config,
    CONFIG_FILE_NAME,
};

// Validator re-exports
pub use validator::{validate, validate_config, ValidationError};
