//! monostrap CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use monostrap::cli::{Cli, CommandDispatcher};
use monostrap::config::find_project_root;
use monostrap::shell::is_ci;
use monostrap::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("monostrap=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("monostrap=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Pick the project root: `--project`, then the directory of `--config`,
/// then the nearest ancestor holding `monostrap.yml`, then the current
/// directory.
fn resolve_project_root(cli: &Cli) -> PathBuf {
    if let Some(project) = &cli.project {
        return project.clone();
    }

    let cwd = std::env::current_dir().unwrap_or_default();

    // A bare file name has an empty parent: the config lives in the cwd.
    if let Some(config) = &cli.config {
        return match config.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => cwd,
        };
    }

    find_project_root(&cwd).unwrap_or(cwd)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("monostrap starting with args: {:?}", cli);

    let output_mode = OutputMode::from_flags(cli.verbose, cli.quiet);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let project_root = resolve_project_root(&cli);
    tracing::debug!("Project root: {}", project_root.display());

    let mut ui = create_ui(!is_ci(), output_mode);

    let dispatcher = CommandDispatcher::new(project_root).with_config_path(cli.config.clone());

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
