//! Probe outcome types.
//!
//! Every probe terminates with exactly one [`GateOutcome`]; failure paths
//! never escape as errors. The found flag consumed by build logic is
//! derived from the variant alone.

use std::path::PathBuf;

use crate::version::{MinVersion, Version};

/// The result of probing one module in one interpreter.
#[derive(Debug, Clone)]
pub enum GateOutcome {
    /// Module imported and the reported version meets the minimum.
    ///
    /// `version` is `None` only when no minimum was configured and the
    /// module reports no readable version; with a minimum configured an
    /// unreadable version is [`GateOutcome::VersionUnreadable`] instead.
    Found { version: Option<Version> },

    /// Import failed, or the interpreter itself could not be executed.
    ImportFailed {
        interpreter: PathBuf,
        detail: Option<String>,
    },

    /// Module present but below the configured minimum.
    VersionTooOld {
        version: Version,
        minimum: MinVersion,
    },

    /// Module imported but no version could be read while a minimum was
    /// configured.
    VersionUnreadable { detail: String },
}

impl GateOutcome {
    /// The found flag consumed by conditional build logic.
    pub fn found(&self) -> bool {
        matches!(self, GateOutcome::Found { .. })
    }

    /// The reported version, when one was extracted.
    pub fn version(&self) -> Option<&Version> {
        match self {
            GateOutcome::Found { version } => version.as_ref(),
            GateOutcome::VersionTooOld { version, .. } => Some(version),
            _ => None,
        }
    }
}
