//! Version parsing and minimum-version comparison.
//!
//! Reported versions arrive as whatever string the probed module stores in
//! its version attribute: `1.5.1`, `1.5.1b1`, sometimes a longer banner.
//! [`Version::extract`] pulls the leading dotted numeric run out of that
//! noise. The gate only ever compares major and minor components, so
//! [`MinVersion`] carries exactly those two, and [`Version::satisfies`]
//! implements the major-then-minor comparison with equality accepted.

use std::fmt;
use std::str::FromStr;

use crate::error::PygateError;

/// A dotted numeric version reported by a probed module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    components: Vec<u32>,
    raw: String,
}

impl Version {
    /// Extract a version from possibly-noisy output.
    ///
    /// Takes the first dotted numeric run in the text, so `1.5.1b1` and
    /// `libcf version 1.5` both yield something comparable. Returns `None`
    /// when the output contains no digits at all.
    pub fn extract(output: &str) -> Option<Self> {
        let pattern = r"(\d+(?:\.\d+)*)";
        let re = regex::Regex::new(pattern).ok()?;
        let matched = re.captures(output)?.get(1)?;

        let components: Vec<u32> = matched
            .as_str()
            .split('.')
            .filter_map(|c| c.parse().ok())
            .collect();

        if components.is_empty() {
            return None;
        }

        Some(Self {
            components,
            raw: matched.as_str().to_string(),
        })
    }

    /// Major component.
    pub fn major(&self) -> u32 {
        // components is non-empty by construction in extract()
        self.components[0]
    }

    /// Minor component; a bare `3` counts as `3.0`.
    pub fn minor(&self) -> u32 {
        self.components.get(1).copied().unwrap_or(0)
    }

    /// Compare against a minimum: major first, then minor.
    ///
    /// Components past minor are ignored and an exact match is accepted,
    /// so `1.2.3` satisfies a minimum of `1.2` and `1.1.9` does not.
    pub fn satisfies(&self, minimum: &MinVersion) -> bool {
        if self.major() != minimum.major {
            return self.major() > minimum.major;
        }
        self.minor() >= minimum.minor
    }

    /// The matched version text as reported.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Minimum acceptable version: major and minor only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinVersion {
    pub major: u32,
    pub minor: u32,
}

impl FromStr for MinVersion {
    type Err = PygateError;

    /// Parse `MAJOR` or `MAJOR.MINOR`. Components past minor are ignored
    /// with a debug log since the comparison never reads them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PygateError::InvalidMinimum {
            value: s.to_string(),
        };

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(invalid());
        }

        let mut parts = trimmed.split('.');
        let major = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        let minor = match parts.next() {
            Some(p) => p.parse().map_err(|_| invalid())?,
            None => 0,
        };

        if parts.next().is_some() {
            tracing::debug!(
                "minimum '{}' has components past minor; ignoring them",
                trimmed
            );
        }

        Ok(Self { major, minor })
    }
}

impl fmt::Display for MinVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
