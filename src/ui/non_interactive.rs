//! Non-interactive UI for CI/headless environments.

use super::theme::SetupTheme;
use super::{LineSpinner, OutputMode, SpinnerHandle, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Spinners are replaced by plain lines since animated output is noise in
/// log-based environments. Warnings and errors go to stderr.
pub struct NonInteractiveUI {
    mode: OutputMode,
    theme: SetupTheme,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: SetupTheme::detect(),
        }
    }

    /// Create with an explicit theme.
    pub fn with_theme(mode: OutputMode, theme: SetupTheme) -> Self {
        Self { mode, theme }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_messages() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("  {}", message);
        }
        Box::new(LineSpinner::stdout(2, self.theme.clone()))
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_messages() {
            println!("{}", self.theme.format_header(title));
        }
    }
}
