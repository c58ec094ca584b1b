//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use super::{
    LineSpinner, NonInteractiveUI, OutputMode, ProgressSpinner, SetupTheme, SpinnerHandle,
    UserInterface,
};

/// Indent of per-package spinner and result lines.
const SPINNER_INDENT: usize = 2;

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: SetupTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        Self::with_theme(mode, SetupTheme::detect())
    }

    /// Create with an explicit theme.
    pub fn with_theme(mode: OutputMode, theme: SetupTheme) -> Self {
        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }

    /// Result-line handle used when the animation is suppressed.
    fn line_spinner<W: Write>(&self, out: W) -> LineSpinner<W> {
        LineSpinner::with_writer(out, SPINNER_INDENT, self.theme.clone())
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_messages() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::with_indent(
                message,
                SPINNER_INDENT,
                self.theme.clone(),
            ))
        } else {
            Box::new(self.line_spinner(std::io::stdout()))
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_messages() {
            writeln!(self.term, "{}", self.theme.format_header(title)).ok();
        }
    }
}

/// Create the appropriate UI based on context.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
