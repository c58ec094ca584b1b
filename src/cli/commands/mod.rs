//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which loads and
//! validates configuration once and routes CLI subcommands to their
//! implementations. This allows:
//! - Single binary with subcommands (`monostrap run`, `monostrap check`)
//! - Shared configuration error handling (exit code 2)
//! - Consistent global flag handling

pub mod check;
pub mod dispatcher;
pub mod display;
pub mod list;
pub mod run;

pub use check::CheckCommand;
pub use dispatcher::{Command, CommandDispatcher, CommandResult, EXIT_CONFIG_ERROR};
pub use list::ListCommand;
pub use run::RunCommand;
