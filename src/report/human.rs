//! Human-readable output formatter.
//!
//! Formats probe reports for terminal display with optional color
//! support. The full failure diagnostics go to stderr separately; the
//! stdout lines here are the short per-module verdicts.

use std::io::Write;

use super::{ProbeReport, ReportFormatter};
use crate::ui::Theme;

/// Formats probe output for human consumption.
pub struct HumanFormatter {
    theme: Theme,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        let theme = if use_color {
            Theme::new()
        } else {
            Theme::plain()
        };
        Self { theme }
    }

    fn verdict_line(&self, report: &ProbeReport) -> String {
        if report.found {
            let version = report
                .version
                .as_deref()
                .map(|v| format!(" {}", v))
                .unwrap_or_default();
            self.theme.format_success(&format!(
                "{}{} ({})",
                report.module,
                version,
                report.interpreter.display()
            ))
        } else {
            self.theme
                .format_error(&format!("{} not found", report.module))
        }
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, reports: &[ProbeReport], writer: &mut W) -> std::io::Result<()> {
        for report in reports {
            writeln!(writer, "{}", self.verdict_line(report))?;
        }

        if reports.len() > 1 {
            let found = reports.iter().filter(|r| r.found).count();
            writeln!(
                writer,
                "{} of {} requirements satisfied",
                found,
                reports.len()
            )?;
        }

        Ok(())
    }
}
