//! Build-variable output formatter.
//!
//! Emits `PREFIX_FOUND=1|0` and `PREFIX_VERSION=...` lines so shell or
//! make build logic can capture the found flag directly:
//!
//! ```sh
//! eval "$(pygate check pycf --min 1.5 --format vars)"
//! test "$PYCF_FOUND" = 1 && enable_geometry_backend
//! ```

use std::io::Write;

use super::{ProbeReport, ReportFormatter};

/// Formats probe output as KEY=VALUE build variables.
#[derive(Debug, Default)]
pub struct VarsFormatter {
    prefix: Option<String>,
}

impl VarsFormatter {
    /// Create a vars formatter; `prefix` overrides the per-module default.
    pub fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    fn prefix_for(&self, report: &ProbeReport) -> String {
        match &self.prefix {
            Some(prefix) => prefix.clone(),
            None => sanitize_prefix(&report.module),
        }
    }
}

impl ReportFormatter for VarsFormatter {
    fn format<W: Write>(&self, reports: &[ProbeReport], writer: &mut W) -> std::io::Result<()> {
        for report in reports {
            let prefix = self.prefix_for(report);
            writeln!(writer, "{}_FOUND={}", prefix, u8::from(report.found))?;
            if let Some(version) = &report.version {
                writeln!(writer, "{}_VERSION={}", prefix, version)?;
            }
        }
        Ok(())
    }
}

/// Turn a module import name into a variable prefix: uppercased, with
/// anything outside `[A-Za-z0-9]` flattened to `_`.
fn sanitize_prefix(module: &str) -> String {
    module
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn report(module: &str, found: bool, version: Option<&str>) -> ProbeReport {
        ProbeReport {
            module: module.to_string(),
            interpreter: PathBuf::from("/usr/bin/python3"),
            found,
            version: version.map(str::to_string),
            minimum: None,
            reason: None,
            detail: None,
        }
    }

    fn render(formatter: &VarsFormatter, reports: &[ProbeReport]) -> String {
        let mut output = Vec::new();
        formatter.format(reports, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn found_module_emits_flag_and_version() {
        let output = render(
            &VarsFormatter::new(None),
            &[report("pycf", true, Some("1.5.1"))],
        );
        assert!(output.contains("PYCF_FOUND=1\n"));
        assert!(output.contains("PYCF_VERSION=1.5.1\n"));
    }

    #[test]
    fn missing_module_emits_zero_and_no_version() {
        let output = render(&VarsFormatter::new(None), &[report("pycf", false, None)]);
        assert!(output.contains("PYCF_FOUND=0\n"));
        assert!(!output.contains("PYCF_VERSION"));
    }

    #[test]
    fn explicit_prefix_overrides_module_name() {
        let output = render(
            &VarsFormatter::new(Some("GEOLIB".to_string())),
            &[report("pycf", true, Some("1.5.1"))],
        );
        assert!(output.contains("GEOLIB_FOUND=1\n"));
        assert!(output.contains("GEOLIB_VERSION=1.5.1\n"));
    }

    #[test]
    fn dotted_module_names_are_sanitized() {
        assert_eq!(sanitize_prefix("scipy.linalg"), "SCIPY_LINALG");
        assert_eq!(sanitize_prefix("my-pkg"), "MY_PKG");
    }

    #[test]
    fn batch_emits_one_block_per_module() {
        let output = render(
            &VarsFormatter::new(None),
            &[
                report("pycf", true, Some("1.5.1")),
                report("numpy", false, None),
            ],
        );
        assert!(output.contains("PYCF_FOUND=1"));
        assert!(output.contains("NUMPY_FOUND=0"));
    }
}
