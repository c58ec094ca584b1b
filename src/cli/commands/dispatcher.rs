//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, RunArgs};
use crate::config::{load_config, load_config_file, validate, SetupConfig};
use crate::error::Result;
use crate::ui::UserInterface;

use super::check::CheckCommand;
use super::list::ListCommand;
use super::run::RunCommand;

/// Exit code for configuration problems detected before anything runs.
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Create a result from a process exit code.
    pub fn from_exit_code(exit_code: i32) -> Self {
        if exit_code == 0 {
            Self::success()
        } else {
            Self::failure(exit_code)
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            config_path: None,
        }
    }

    /// Read configuration from an explicit file instead of the project root.
    pub fn with_config_path(mut self, config_path: Option<PathBuf>) -> Self {
        self.config_path = config_path;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Load and validate the configuration for this project.
    ///
    /// An explicit config path must exist; without one, a missing
    /// `monostrap.yml` means built-in defaults.
    pub fn load_config(&self) -> Result<SetupConfig> {
        let config = match &self.config_path {
            Some(path) => load_config_file(path)?,
            None => load_config(&self.project_root)?,
        };
        validate(&config)?;
        Ok(config)
    }

    /// Dispatch and execute a command.
    ///
    /// Configuration errors are reported through `ui` and yield exit code 2
    /// without running anything.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match self.load_config() {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!("Configuration rejected: {:?}", e);
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_CONFIG_ERROR));
            }
        };

        match &cli.command {
            Some(Commands::Run(args)) => {
                RunCommand::new(&self.project_root, config, args.clone()).execute(ui)
            }
            Some(Commands::Check) => CheckCommand::new(&self.project_root, config).execute(ui),
            Some(Commands::List) => ListCommand::new(&self.project_root, config).execute(ui),
            None => RunCommand::new(&self.project_root, config, RunArgs::default()).execute(ui),
        }
    }
}
