//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion, including how each spinner finished.
//!
//! # Example
//!
//! ```
//! use monostrap::ui::{MockUI, SpinnerStatus, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Installing dependencies...");
//! let mut spinner = ui.start_spinner("Running dart pub get...");
//! spinner.finish_success("Dependencies installed");
//!
//! assert!(ui.messages().contains(&"Installing dependencies...".to_string()));
//! assert_eq!(ui.spinner_results()[0].0, SpinnerStatus::Success);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::{OutputMode, SpinnerHandle, UserInterface};

type SpinnerLog = Rc<RefCell<Vec<(SpinnerStatus, String)>>>;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    spinners: Vec<String>,
    spinner_log: SpinnerLog,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get the messages spinners were started with.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Get how each finished spinner ended, in finish order.
    pub fn spinner_results(&self) -> Vec<(SpinnerStatus, String)> {
        self.spinner_log.borrow().clone()
    }

    /// Check whether any output line contains `needle`.
    pub fn has_output(&self, needle: &str) -> bool {
        self.messages
            .iter()
            .chain(&self.successes)
            .chain(&self.warnings)
            .chain(&self.errors)
            .chain(&self.headers)
            .any(|line| line.contains(needle))
            || self
                .spinner_log
                .borrow()
                .iter()
                .any(|(_, line)| line.contains(needle))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner::recording(Rc::clone(&self.spinner_log)))
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }
}

/// Mock spinner that captures finish messages.
#[derive(Debug, Default)]
pub struct MockSpinner {
    finish_message: Option<String>,
    status: Option<SpinnerStatus>,
    log: Option<SpinnerLog>,
}

/// Status of a mock spinner when finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerStatus {
    /// Finished successfully.
    Success,
    /// Finished with error.
    Error,
}

impl MockSpinner {
    /// Create a new mock spinner.
    pub fn new() -> Self {
        Self::default()
    }

    fn recording(log: SpinnerLog) -> Self {
        Self {
            log: Some(log),
            ..Default::default()
        }
    }

    /// Get the final finish message.
    pub fn finish_message(&self) -> Option<&str> {
        self.finish_message.as_deref()
    }

    /// Get the final status.
    pub fn status(&self) -> Option<SpinnerStatus> {
        self.status
    }

    fn finish(&mut self, status: SpinnerStatus, msg: &str) {
        self.finish_message = Some(msg.to_string());
        self.status = Some(status);
        if let Some(log) = &self.log {
            log.borrow_mut().push((status, msg.to_string()));
        }
    }
}

impl SpinnerHandle for MockSpinner {
    fn finish_success(&mut self, msg: &str) {
        self.finish(SpinnerStatus::Success, msg);
    }

    fn finish_error(&mut self, msg: &str) {
        self.finish(SpinnerStatus::Error, msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_messages_by_kind() {
        let mut ui = MockUI::new();
        ui.message("hello");
        ui.success("done");
        ui.warning("careful");
        ui.error("broken");
        ui.show_header("Setup");

        assert_eq!(ui.messages(), ["hello"]);
        assert_eq!(ui.successes(), ["done"]);
        assert_eq!(ui.warnings(), ["careful"]);
        assert_eq!(ui.errors(), ["broken"]);
        assert_eq!(ui.headers(), ["Setup"]);
    }

    #[test]
    fn spinner_results_are_shared_with_ui() {
        let mut ui = MockUI::new();
        let mut first = ui.start_spinner("one");
        let mut second = ui.start_spinner("two");
        second.finish_error("failed");
        first.finish_success("ok");

        assert_eq!(ui.spinners(), ["one", "two"]);
        assert_eq!(
            ui.spinner_results(),
            vec![
                (SpinnerStatus::Error, "failed".to_string()),
                (SpinnerStatus::Success, "ok".to_string()),
            ]
        );
    }

    #[test]
    fn standalone_spinner_tracks_state() {
        let mut spinner = MockSpinner::new();
        assert_eq!(spinner.status(), None);
        spinner.finish_success("finished");

        assert_eq!(spinner.finish_message(), Some("finished"));
        assert_eq!(spinner.status(), Some(SpinnerStatus::Success));
    }

    #[test]
    fn has_output_searches_every_channel() {
        let mut ui = MockUI::with_mode(OutputMode::Quiet);
        ui.start_spinner("x").finish_error("Package directory not found");
        assert!(ui.has_output("directory not found"));
        assert!(!ui.has_output("Setup complete"));
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }
}
