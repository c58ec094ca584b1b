//! Run command implementation.
//!
//! The `monostrap run` command checks the toolchain and installs the
//! dependencies of every configured package.

use std::path::{Path, PathBuf};

use crate::cli::args::RunArgs;
use crate::config::SetupConfig;
use crate::error::{Result, SetupError};
use crate::setup::{SetupOrchestrator, SetupProgress, SetupReport};
use crate::shell::{command_line, CommandRunner, SystemRunner};
use crate::ui::{SpinnerHandle, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::display::{package_result_line, show_banner, show_summary, show_toolchain_status};

/// The run command implementation.
pub struct RunCommand {
    project_root: PathBuf,
    config: SetupConfig,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(project_root: &Path, config: SetupConfig, args: RunArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the configuration this command runs with.
    pub fn config(&self) -> &SetupConfig {
        &self.config
    }

    /// Get the command arguments.
    pub fn args(&self) -> &RunArgs {
        &self.args
    }

    /// Execute against a specific command runner.
    pub fn execute_with(
        &self,
        runner: &dyn CommandRunner,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let orchestrator = SetupOrchestrator::new(&self.config, &self.project_root, runner)?;

        if self.args.json {
            let report = orchestrator.run();
            let output =
                serde_json::to_string_pretty(&report).map_err(|e| SetupError::Other(e.into()))?;
            println!("{}", output);
            return Ok(CommandResult::from_exit_code(report.exit_code()));
        }

        show_banner(ui, &self.config);
        ui.message(&format!("Checking {} version...", self.config.toolchain.name));

        let report = self.run_with_display(&orchestrator, ui);

        if report.toolchain.is_satisfied() {
            show_summary(ui, &self.config, report.success());
        }

        Ok(CommandResult::from_exit_code(report.exit_code()))
    }

    fn run_with_display(
        &self,
        orchestrator: &SetupOrchestrator<'_>,
        ui: &mut dyn UserInterface,
    ) -> SetupReport {
        let mode = ui.output_mode();
        let install_line = command_line(&self.config.install_argv());
        let mut spinner: Option<Box<dyn SpinnerHandle>> = None;

        orchestrator.run_with_progress(|event| match event {
            SetupProgress::ToolchainChecked { status } => {
                show_toolchain_status(ui, &self.config.toolchain, status);
                if status.is_satisfied() {
                    ui.message("");
                    ui.message("Installing dependencies...");
                    ui.message("");
                }
            }
            SetupProgress::PackageStarting { package, .. } => {
                ui.message(&format!("📦 {}", package.name));
                if mode.shows_details() {
                    ui.message(&format!(
                        "  $ {}  (in {})",
                        install_line,
                        package.root_path().display()
                    ));
                }
                spinner = Some(ui.start_spinner("Resolving dependencies..."));
            }
            SetupProgress::PackageFinished { outcome, .. } => {
                let mut line = package_result_line(outcome);
                if !mode.shows_messages() {
                    line = format!("{}: {}", outcome.package().name, line);
                }
                if let Some(mut handle) = spinner.take() {
                    if outcome.success() {
                        handle.finish_success(&line);
                    } else {
                        handle.finish_error(&line);
                    }
                }
            }
        })
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let runner = SystemRunner::with_timeout(self.config.command_timeout());
        self.execute_with(&runner, ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::CommandResult as ProcessResult;
    use crate::ui::{MockUI, OutputMode, SpinnerStatus};
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;

    /// Answers `--version` with a fixed banner and `pub get` with a fixed code.
    struct FakeDart {
        version_output: Option<&'static str>,
        install_code: i32,
    }

    impl CommandRunner for FakeDart {
        fn run(&self, argv: &[String], _cwd: Option<&Path>) -> ProcessResult {
            if argv.iter().any(|a| a == "--version") {
                return match self.version_output {
                    Some(out) => ProcessResult::new(0, out.to_string(), String::new(), Duration::ZERO),
                    None => ProcessResult::failure(127, "Command not found: dart".to_string(), Duration::ZERO),
                };
            }
            let stderr = if self.install_code == 0 { "" } else { "version solving failed" };
            ProcessResult::new(self.install_code, String::new(), stderr.to_string(), Duration::ZERO)
        }
    }

    fn project_with_packages() -> TempDir {
        let temp = TempDir::new().unwrap();
        for name in SetupConfig::default().packages.iter().map(|p| p.name().to_string()) {
            fs::create_dir_all(temp.path().join("packages").join(name)).unwrap();
        }
        temp
    }

    #[test]
    fn run_command_creation() {
        let temp = TempDir::new().unwrap();
        let cmd = RunCommand::new(temp.path(), SetupConfig::default(), RunArgs::default());
        assert_eq!(cmd.project_root(), temp.path());
        assert!(!cmd.args().json);
        assert_eq!(cmd.config().app_name, "EntiDB Sync");
    }

    #[test]
    fn successful_run_prints_next_steps() {
        let temp = project_with_packages();
        let cmd = RunCommand::new(temp.path(), SetupConfig::default(), RunArgs::default());
        let runner = FakeDart {
            version_output: Some("Dart SDK version: 3.10.5 (stable)"),
            install_code: 0,
        };
        let mut ui = MockUI::new();

        let result = cmd.execute_with(&runner, &mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.headers(), ["EntiDB Sync - Development Setup"]);
        assert!(ui.messages().contains(&"Checking Dart SDK version...".to_string()));
        assert!(ui.messages().contains(&"📦 entidb_sync_client".to_string()));
        assert_eq!(ui.spinner_results().len(), 3);
        assert!(ui
            .spinner_results()
            .iter()
            .all(|(status, line)| *status == SpinnerStatus::Success
                && line == "Dependencies installed"));
        assert!(ui.successes().contains(&"Setup complete!".to_string()));
        assert!(ui.messages().contains(&"Next steps:".to_string()));
    }

    #[test]
    fn missing_toolchain_stops_before_installing() {
        let temp = project_with_packages();
        let cmd = RunCommand::new(temp.path(), SetupConfig::default(), RunArgs::default());
        let runner = FakeDart {
            version_output: None,
            install_code: 0,
        };
        let mut ui = MockUI::new();

        let result = cmd.execute_with(&runner, &mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.errors()[0].starts_with("Dart SDK not found."));
        assert!(ui.spinners().is_empty());
        assert!(!ui.has_output("Setup complete"));
    }

    #[test]
    fn old_toolchain_warns_and_fails() {
        let temp = project_with_packages();
        let cmd = RunCommand::new(temp.path(), SetupConfig::default(), RunArgs::default());
        let runner = FakeDart {
            version_output: Some("Dart SDK version: 3.9.0 (stable)"),
            install_code: 0,
        };
        let mut ui = MockUI::new();

        let result = cmd.execute_with(&runner, &mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.warnings()[0].contains("(you have 3.9.0)"));
        assert!(ui.spinners().is_empty());
    }

    #[test]
    fn missing_package_directory_is_reported_and_others_continue() {
        let temp = project_with_packages();
        fs::remove_dir(temp.path().join("packages").join("entidb_sync_client")).unwrap();
        let cmd = RunCommand::new(temp.path(), SetupConfig::default(), RunArgs::default());
        let runner = FakeDart {
            version_output: Some("Dart SDK version: 3.10.5"),
            install_code: 0,
        };
        let mut ui = MockUI::new();

        let result = cmd.execute_with(&runner, &mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        let results = ui.spinner_results();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].0, SpinnerStatus::Success);
        assert_eq!(results[1].0, SpinnerStatus::Error);
        assert!(results[1].1.starts_with("Package directory not found: "));
        assert_eq!(results[2].0, SpinnerStatus::Success);
        assert_eq!(ui.errors(), ["Setup completed with errors"]);
    }

    #[test]
    fn install_failures_show_stderr() {
        let temp = project_with_packages();
        let cmd = RunCommand::new(temp.path(), SetupConfig::default(), RunArgs::default());
        let runner = FakeDart {
            version_output: Some("Dart SDK version: 3.10.1"),
            install_code: 65,
        };
        let mut ui = MockUI::new();

        let result = cmd.execute_with(&runner, &mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui
            .spinner_results()
            .iter()
            .all(|(_, line)| line == "Failed: version solving failed"));
    }

    #[test]
    fn quiet_mode_prefixes_results_with_package_name() {
        let temp = project_with_packages();
        let cmd = RunCommand::new(temp.path(), SetupConfig::default(), RunArgs::default());
        let runner = FakeDart {
            version_output: Some("Dart SDK version: 3.10.5"),
            install_code: 0,
        };
        let mut ui = MockUI::with_mode(OutputMode::Quiet);

        cmd.execute_with(&runner, &mut ui).unwrap();

        assert_eq!(
            ui.spinner_results()[0].1,
            "entidb_sync_protocol: Dependencies installed"
        );
    }

    #[test]
    fn verbose_mode_shows_command_lines() {
        let temp = project_with_packages();
        let cmd = RunCommand::new(temp.path(), SetupConfig::default(), RunArgs::default());
        let runner = FakeDart {
            version_output: Some("Dart SDK version: 3.10.5"),
            install_code: 0,
        };
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        cmd.execute_with(&runner, &mut ui).unwrap();

        assert!(ui.has_output("$ dart pub get"));
    }
}
