//! Shared display helpers for setup status.
//!
//! Used by `run` and `check` so toolchain and package results read the same
//! everywhere.

use crate::config::{SetupConfig, ToolchainConfig};
use crate::packages::PackageFailure;
use crate::setup::{PackageOutcome, ToolchainStatus};
use crate::shell::PlatformInfo;
use crate::ui::UserInterface;

/// Title shown at the top of a setup run.
pub fn setup_title(config: &SetupConfig) -> String {
    format!("{} - Development Setup", config.app_name)
}

/// Print the banner and the platform line.
pub fn show_banner(ui: &mut dyn UserInterface, config: &SetupConfig) {
    ui.show_header(&setup_title(config));
    ui.message(&format!("Platform: {}", PlatformInfo::current()));
    ui.message("");
}

/// Print the result of the toolchain gate with the configured hints.
pub fn show_toolchain_status(
    ui: &mut dyn UserInterface,
    toolchain: &ToolchainConfig,
    status: &ToolchainStatus,
) {
    match status {
        ToolchainStatus::NotDetected => {
            let mut line = format!("{} not found.", toolchain.name);
            if let Some(hint) = &toolchain.install_hint {
                line.push(' ');
                line.push_str(hint);
            }
            ui.error(&line);
        }
        ToolchainStatus::TooLow { found, minimum } => {
            ui.success(&format!("Found {} {}", toolchain.name, found));
            ui.warning(&format!(
                "Warning: {} {}+ is required (you have {})",
                toolchain.name, minimum, found
            ));
            if let Some(hint) = &toolchain.upgrade_hint {
                ui.message(&format!("  {}", hint));
            }
        }
        ToolchainStatus::Satisfied { version } => {
            ui.success(&format!("Found {} {}", toolchain.name, version));
        }
    }
}

/// The line a package spinner finishes with.
pub fn package_result_line(outcome: &PackageOutcome) -> String {
    match outcome.failure() {
        None => "Dependencies installed".to_string(),
        Some(failure @ PackageFailure::DirectoryMissing { .. }) => failure.to_string(),
        Some(PackageFailure::InstallFailed { exit_code, stderr }) => {
            let stderr = stderr.trim();
            if stderr.is_empty() {
                format!("Failed: exit code {}", exit_code)
            } else {
                format!("Failed: {}", stderr)
            }
        }
    }
}

/// Print the closing lines of a run.
pub fn show_summary(ui: &mut dyn UserInterface, config: &SetupConfig, success: bool) {
    ui.message("");
    if success {
        ui.success("Setup complete!");
        if !config.next_steps.is_empty() {
            ui.message("");
            ui.message("Next steps:");
            for step in &config.next_steps {
                ui.message(&format!("  • {}", step));
            }
        }
    } else {
        ui.error("Setup completed with errors");
    }
}
