//! Visual theme and styling.

use console::Style;

/// Terminal theme for setup output.
#[derive(Debug, Clone)]
pub struct SetupTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for informational/running elements (magenta).
    pub info: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (magenta bold).
    pub header: Style,
}

impl Default for SetupTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().magenta(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().magenta(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
        }
    }

    /// Pick the colored or plain theme for the current terminal.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        let rule = "=".repeat(title.chars().count());
        format!(
            "{}\n{}",
            self.header.apply_to(title),
            self.dim.apply_to(rule)
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
