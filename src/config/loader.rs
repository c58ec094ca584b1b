//! Configuration file discovery and loading.
//!
//! The configuration file is optional. When it is missing the built-in
//! defaults apply, which keeps `monostrap` usable as a zero-argument,
//! zero-config entry point.

use crate::config::schema::SetupConfig;
use crate::error::{Result, SetupError};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the project configuration.
pub const CONFIG_FILE_NAME: &str = "monostrap.yml";

/// Find the project root by walking up from `start`.
///
/// The project root is the nearest directory containing `monostrap.yml`.
///
/// # Returns
///
/// The path to the project root, or None if no ancestor has a config file.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_FILE_NAME).is_file() {
            return Some(current);
        }

        // Move up one directory
        if !current.pop() {
            return None;
        }
    }
}

/// Path of the config file for a project root.
pub fn config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_FILE_NAME)
}

/// Load a single config file and parse it into SetupConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<SetupConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SetupError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            SetupError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into SetupConfig.
///
/// Empty or comment-only content yields the defaults.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<SetupConfig> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| SetupError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

    if value.is_null() {
        return Ok(SetupConfig::default());
    }

    serde_yaml::from_value(value).map_err(|e| SetupError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the configuration for a project root, falling back to defaults.
///
/// # Errors
///
/// Returns `ConfigParseError` if the file exists but is invalid.
pub fn load_config(project_root: &Path) -> Result<SetupConfig> {
    let path = config_path(project_root);
    match load_config_file(&path) {
        Ok(config) => Ok(config),
        Err(SetupError::ConfigNotFound { .. }) => {
            tracing::debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, project_root.display());
            Ok(SetupConfig::default())
        }
        Err(e) => Err(e),
    }
}
