//! Check command implementation.
//!
//! The `monostrap check` command runs only the toolchain gate.

use std::path::{Path, PathBuf};

use crate::config::SetupConfig;
use crate::error::Result;
use crate::setup::SetupOrchestrator;
use crate::shell::{CommandRunner, SystemRunner};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::show_toolchain_status;

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config: SetupConfig,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, config: SetupConfig) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
        }
    }

    /// Execute against a specific command runner.
    pub fn execute_with(
        &self,
        runner: &dyn CommandRunner,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let orchestrator = SetupOrchestrator::new(&self.config, &self.project_root, runner)?;

        ui.message(&format!("Checking {} version...", self.config.toolchain.name));
        let status = orchestrator.check_toolchain();
        show_toolchain_status(ui, &self.config.toolchain, &status);

        if status.is_satisfied() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let runner = SystemRunner::with_timeout(self.config.command_timeout());
        self.execute_with(&runner, ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::CommandResult as ProcessResult;
    use crate::ui::MockUI;
    use std::cell::Cell;
    use std::time::Duration;
    use tempfile::TempDir;

    struct VersionOnly {
        output: &'static str,
        calls: Cell<usize>,
    }

    impl CommandRunner for VersionOnly {
        fn run(&self, argv: &[String], _cwd: Option<&Path>) -> ProcessResult {
            self.calls.set(self.calls.get() + 1);
            assert_eq!(argv, ["dart", "--version"]);
            ProcessResult::new(0, self.output.to_string(), String::new(), Duration::ZERO)
        }
    }

    #[test]
    fn satisfied_toolchain_succeeds_without_installing() {
        let temp = TempDir::new().unwrap();
        let runner = VersionOnly {
            output: "Dart SDK version: 3.10.1 (stable)",
            calls: Cell::new(0),
        };
        let mut ui = MockUI::new();

        let result = CheckCommand::new(temp.path(), SetupConfig::default())
            .execute_with(&runner, &mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(runner.calls.get(), 1);
        assert_eq!(ui.successes(), ["Found Dart SDK 3.10.1"]);
    }

    #[test]
    fn unrecognised_output_fails() {
        let temp = TempDir::new().unwrap();
        let runner = VersionOnly {
            output: "something else entirely",
            calls: Cell::new(0),
        };
        let mut ui = MockUI::new();

        let result = CheckCommand::new(temp.path(), SetupConfig::default())
            .execute_with(&runner, &mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.errors()[0].contains("not found"));
    }
}
