//! Package identity.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// One monorepo package with its own dependency manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Package {
    /// Package name.
    pub name: String,

    /// Directory the installer runs in.
    pub root_path: PathBuf,
}

impl Package {
    /// Create a package.
    pub fn new(name: impl Into<String>, root_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root_path: root_path.into(),
        }
    }

    /// The package directory.
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Whether the package directory exists.
    pub fn exists(&self) -> bool {
        self.root_path.is_dir()
    }
}
