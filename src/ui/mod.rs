//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for asserting on output in tests
//!
//! # Example
//!
//! ```
//! use monostrap::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("My App");
//! ui.success("Setup complete!");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI, SpinnerStatus};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use spinner::{LineSpinner, ProgressSpinner};
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, SetupTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display an informational message (hidden in quiet mode).
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Start a spinner for an operation.
    ///
    /// The finish line is always shown; quiet mode only drops the animation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);
}
