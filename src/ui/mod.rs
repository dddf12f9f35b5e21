//! Terminal theme and console output.
//!
//! Status lines go to stdout; diagnostics go to stderr so they land in
//! build logs even when stdout is reserved for a machine-readable format.

pub mod theme;

pub use theme::{should_use_colors, Theme};

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show status plus subprocess detail.
    Verbose,
    /// Show status lines.
    #[default]
    Normal,
    /// Machine output and diagnostics only.
    Quiet,
    /// Show nothing except errors.
    Silent,
}

impl OutputMode {
    /// Check if this mode shows status lines.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows subprocess detail.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows warning diagnostics.
    pub fn shows_diagnostics(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}

/// Console that routes status to stdout and diagnostics to stderr.
#[derive(Debug)]
pub struct Console {
    theme: Theme,
    mode: OutputMode,
}

impl Console {
    /// Create a console for the given mode.
    pub fn new(mode: OutputMode, use_color: bool) -> Self {
        let theme = if use_color {
            Theme::new()
        } else {
            Theme::plain()
        };
        Self { theme, mode }
    }

    /// The active output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// The active theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Write a status line to stdout if the mode allows it.
    pub fn status(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    /// Write a warning diagnostic to stderr.
    pub fn warn(&self, msg: &str) {
        if self.mode.shows_diagnostics() {
            eprintln!("{}", self.theme.format_warning(msg));
        }
    }

    /// Write an error to stderr. Errors are never suppressed.
    pub fn error(&self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    /// Write dim detail to stderr in verbose mode.
    pub fn detail(&self, msg: &str) {
        if self.mode.shows_detail() {
            eprintln!("{}", self.theme.dim.apply_to(msg));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_shows_status() {
        assert!(OutputMode::Verbose.shows_status());
        assert!(OutputMode::Normal.shows_status());
        assert!(!OutputMode::Quiet.shows_status());
        assert!(!OutputMode::Silent.shows_status());
    }

    #[test]
    fn output_mode_shows_detail() {
        assert!(OutputMode::Verbose.shows_detail());
        assert!(!OutputMode::Normal.shows_detail());
    }

    #[test]
    fn output_mode_shows_diagnostics() {
        assert!(OutputMode::Verbose.shows_diagnostics());
        assert!(OutputMode::Normal.shows_diagnostics());
        assert!(OutputMode::Quiet.shows_diagnostics());
        assert!(!OutputMode::Silent.shows_diagnostics());
    }

    #[test]
    fn output_mode_default() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }

    #[test]
    fn console_new_and_mode() {
        let console = Console::new(OutputMode::Quiet, false);
        assert_eq!(console.mode(), OutputMode::Quiet);
    }
}
