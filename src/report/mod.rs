//! Probe report formatting.
//!
//! This module provides formatters for outputting probe results in
//! different formats (human-readable, JSON, and KEY=VALUE build
//! variables).

pub mod human;
pub mod json;
pub mod vars;

use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;

use crate::gate::{GateOutcome, GateSpec};
use crate::interpreter::Interpreter;

/// Output format for probe results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Themed terminal lines.
    #[default]
    Human,
    /// One JSON object (or array, for batch runs).
    Json,
    /// `PREFIX_FOUND=` / `PREFIX_VERSION=` lines for shell consumption.
    Vars,
}

/// Why a probe concluded "not found".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureReason {
    ImportFailed,
    VersionTooOld,
    VersionUnreadable,
}

/// Serializable summary of one probe.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    /// Module that was probed.
    pub module: String,

    /// Interpreter the probe ran against.
    pub interpreter: PathBuf,

    /// The found flag consumed by build logic.
    pub found: bool,

    /// Version reported by the module, when one was extracted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Configured minimum, when one was set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<String>,

    /// Failure classification on the not-found paths.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<FailureReason>,

    /// Free-form failure detail (last stderr line, parse context).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ProbeReport {
    /// Summarize one probe outcome.
    pub fn new(spec: &GateSpec, interpreter: &Interpreter, outcome: &GateOutcome) -> Self {
        let mut report = Self {
            module: spec.module.clone(),
            interpreter: interpreter.path().to_path_buf(),
            found: outcome.found(),
            version: outcome.version().map(|v| v.raw().to_string()),
            minimum: spec.minimum.map(|m| m.to_string()),
            reason: None,
            detail: None,
        };

        match outcome {
            GateOutcome::Found { .. } => {}
            GateOutcome::ImportFailed {
                interpreter,
                detail,
            } => {
                report.interpreter = interpreter.clone();
                report.reason = Some(FailureReason::ImportFailed);
                report.detail = detail.clone();
            }
            GateOutcome::VersionTooOld { minimum, .. } => {
                report.reason = Some(FailureReason::VersionTooOld);
                report.minimum = Some(minimum.to_string());
            }
            GateOutcome::VersionUnreadable { detail } => {
                report.reason = Some(FailureReason::VersionUnreadable);
                report.detail = Some(detail.clone());
            }
        }

        report
    }

    /// The warning line for the failure paths.
    ///
    /// Import failures name the interpreter; version failures name the
    /// required minimum. Returns `None` for found reports.
    pub fn diagnostic(&self) -> Option<String> {
        let reason = self.reason?;
        let line = match reason {
            FailureReason::ImportFailed => match &self.detail {
                Some(detail) => format!(
                    "module '{}' is not importable in {} ({})",
                    self.module,
                    self.interpreter.display(),
                    detail
                ),
                None => format!(
                    "module '{}' is not importable in {}",
                    self.module,
                    self.interpreter.display()
                ),
            },
            FailureReason::VersionTooOld => format!(
                "module '{}' version {} is older than the required minimum {}",
                self.module,
                self.version.as_deref().unwrap_or("?"),
                self.minimum.as_deref().unwrap_or("?"),
            ),
            FailureReason::VersionUnreadable => match &self.detail {
                Some(detail) => format!(
                    "could not read the version of module '{}': {}",
                    self.module, detail
                ),
                None => format!("could not read the version of module '{}'", self.module),
            },
        };
        Some(line)
    }
}

/// Trait for formatting probe reports.
pub trait ReportFormatter {
    /// Format reports to the given writer.
    fn format<W: Write>(&self, reports: &[ProbeReport], writer: &mut W) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
pub use vars::VarsFormatter;
