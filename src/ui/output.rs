//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show everything, including the commands being run.
    Verbose,
    /// Show progress and status.
    #[default]
    Normal,
    /// Show only per-package results, warnings and errors.
    Quiet,
}

impl OutputMode {
    /// Pick a mode from the `--verbose` / `--quiet` flags (quiet wins).
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this mode shows detail lines such as command lines.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows informational messages and headers.
    pub fn shows_messages(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows progress spinners.
    pub fn shows_spinners(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_from_flags() {
        assert_eq!(OutputMode::from_flags(false, false), OutputMode::Normal);
        assert_eq!(OutputMode::from_flags(true, false), OutputMode::Verbose);
        assert_eq!(OutputMode::from_flags(true, true), OutputMode::Quiet);
    }

    #[test]
    fn output_mode_visibility() {
        assert!(OutputMode::Verbose.shows_details());
        assert!(!OutputMode::Normal.shows_details());
        assert!(OutputMode::Normal.shows_messages());
        assert!(!OutputMode::Quiet.shows_messages());
        assert!(!OutputMode::Quiet.shows_spinners());
    }

    #[test]
    fn output_mode_default() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }
}
