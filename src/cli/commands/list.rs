//! List command implementation.
//!
//! The `monostrap list` command shows the packages in installation order.

use std::path::{Path, PathBuf};

use crate::config::SetupConfig;
use crate::error::Result;
use crate::shell::command_line;
use crate::ui::theme::SetupTheme;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    project_root: PathBuf,
    config: SetupConfig,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(project_root: &Path, config: SetupConfig) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let theme = SetupTheme::detect();
        let toolchain = &self.config.toolchain;

        ui.message(&format!(
            "Toolchain: {} {}+ ({})",
            toolchain.name,
            toolchain.minimum_version,
            command_line(&toolchain.version_argv())
        ));
        ui.message(&format!(
            "Installer: {}",
            command_line(&self.config.install_argv())
        ));
        ui.message("");
        ui.message("Packages:");

        for (index, package) in self
            .config
            .resolve_packages(&self.project_root)
            .iter()
            .enumerate()
        {
            let state = if package.exists() {
                String::new()
            } else {
                format!(" {}", theme.warning.apply_to("(missing)"))
            };
            ui.message(&format!(
                "  {}. {} {}{}",
                index + 1,
                theme.highlight.apply_to(&package.name),
                theme.dim.apply_to(package.root_path().display()),
                state
            ));
        }

        Ok(CommandResult::success())
    }
}
