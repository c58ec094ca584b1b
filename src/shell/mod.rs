//! External command execution and host platform detection.

pub mod command;
pub mod platform;

pub use command::{
    command_line, CommandResult, CommandRunner, SystemRunner, EXIT_CANNOT_EXECUTE,
    EXIT_NOT_FOUND, EXIT_TIMED_OUT,
};
pub use platform::{is_ci, PlatformInfo};
