//! Progress spinners.
//!
//! Both spinner kinds end with one result line written through a
//! [`LineSpinner`], so interactive and plain output land on the same stream.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

use super::theme::SetupTheme;
use super::SpinnerHandle;

/// Spinner stand-in that only writes the final result line.
pub struct LineSpinner<W: Write = io::Stdout> {
    out: W,
    indent: usize,
    theme: SetupTheme,
}

impl LineSpinner {
    /// Write result lines to stdout.
    pub fn stdout(indent: usize, theme: SetupTheme) -> Self {
        Self::with_writer(io::stdout(), indent, theme)
    }
}

impl<W: Write> LineSpinner<W> {
    /// Write result lines to `out`.
    pub fn with_writer(out: W, indent: usize, theme: SetupTheme) -> Self {
        Self { out, indent, theme }
    }

    /// Consume the spinner and return its writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: String) {
        writeln!(self.out, "{}{}", " ".repeat(self.indent), line).ok();
        self.out.flush().ok();
    }
}

impl<W: Write> SpinnerHandle for LineSpinner<W> {
    fn finish_success(&mut self, msg: &str) {
        let line = self.theme.format_success(msg);
        self.write_line(line);
    }

    fn finish_error(&mut self, msg: &str) {
        let line = self.theme.format_error(msg);
        self.write_line(line);
    }
}

/// An animated spinner for long-running operations.
pub struct ProgressSpinner<W: Write = io::Stdout> {
    bar: ProgressBar,
    result: LineSpinner<W>,
}

impl ProgressSpinner {
    /// Create a spinner drawn on stdout with indentation.
    pub fn with_indent(message: &str, indent: usize, theme: SetupTheme) -> Self {
        Self::with_result(
            message,
            ProgressDrawTarget::stdout(),
            LineSpinner::stdout(indent, theme),
        )
    }
}

impl<W: Write> ProgressSpinner<W> {
    /// Create a spinner on `target` whose result line goes through `result`.
    pub fn with_result(message: &str, target: ProgressDrawTarget, result: LineSpinner<W>) -> Self {
        let bar = ProgressBar::with_draw_target(None, target);
        let prefix = " ".repeat(result.indent);
        bar.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template(&format!("{}{{spinner:.magenta}} {{msg}}", prefix))
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar, result }
    }

    /// Consume the spinner and return the result writer.
    pub fn into_inner(self) -> W {
        self.result.into_inner()
    }
}

impl<W: Write> SpinnerHandle for ProgressSpinner<W> {
    fn finish_success(&mut self, msg: &str) {
        self.bar.finish_and_clear();
        self.result.finish_success(msg);
    }

    fn finish_error(&mut self, msg: &str) {
        self.bar.finish_and_clear();
        self.result.finish_error(msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_spinner_writes_indented_result() {
        let mut spinner = LineSpinner::with_writer(Vec::new(), 2, SetupTheme::plain());
        spinner.finish_success("Dependencies installed");
        assert_eq!(
            String::from_utf8(spinner.into_inner()).unwrap(),
            "  ✓ Dependencies installed\n"
        );
    }

    #[test]
    fn progress_spinner_result_goes_through_line_writer() {
        let mut spinner = ProgressSpinner::with_result(
            "Resolving dependencies...",
            ProgressDrawTarget::hidden(),
            LineSpinner::with_writer(Vec::new(), 2, SetupTheme::plain()),
        );
        spinner.finish_error("Failed: version solving failed");

        assert!(spinner.bar.is_finished());
        assert_eq!(
            String::from_utf8(spinner.into_inner()).unwrap(),
            "  ✗ Failed: version solving failed\n"
        );
    }
}
