//! JSON output formatter.
//!
//! A single probe serializes as one object; a batch serializes as an
//! array, preserving manifest order.

use std::io::Write;

use super::{ProbeReport, ReportFormatter};

/// Formats probe output as JSON.
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, reports: &[ProbeReport], writer: &mut W) -> std::io::Result<()> {
        match reports {
            [single] => serde_json::to_writer_pretty(&mut *writer, single)?,
            many => serde_json::to_writer_pretty(&mut *writer, many)?,
        }
        writeln!(writer)?;
        Ok(())
    }
}
