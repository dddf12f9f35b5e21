//! The dependency version gate.
//!
//! Two sequential blocking subprocess runs per probe: an import check,
//! then a version read. The gate always terminates with a definite
//! [`GateOutcome`]; interpreter spawn failures fold into
//! [`GateOutcome::ImportFailed`] so a missing or non-executable
//! interpreter reads the same as a missing module.

pub mod outcome;
pub mod script;

pub use outcome::GateOutcome;

use std::time::Duration;

use crate::exec::{self, ExecResult};
use crate::interpreter::Interpreter;
use crate::version::{MinVersion, Version};

/// Attribute read when none is configured.
pub const DEFAULT_VERSION_ATTRIBUTE: &str = "__version__";

/// What to probe for.
#[derive(Debug, Clone)]
pub struct GateSpec {
    /// Python module to import (e.g. `pycf`).
    pub module: String,

    /// Minimum acceptable version, compared major-then-minor.
    pub minimum: Option<MinVersion>,

    /// Attribute holding the module's version string.
    pub attribute: String,
}

impl GateSpec {
    /// Spec for a module with no minimum and the default version attribute.
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            minimum: None,
            attribute: DEFAULT_VERSION_ATTRIBUTE.to_string(),
        }
    }

    /// Require a minimum version.
    pub fn with_minimum(mut self, minimum: MinVersion) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Read a different version attribute.
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = attribute.into();
        self
    }
}

/// Probe one module in one interpreter.
///
/// Implements the gate contract: import check first (any failure there,
/// including failure to execute the interpreter at all, is terminal),
/// then version extraction and the major-then-minor comparison. Repeated
/// invocations with identical inputs and an unchanged environment produce
/// identical outcomes.
pub fn evaluate(interpreter: &Interpreter, spec: &GateSpec) -> GateOutcome {
    tracing::debug!(
        "probing module '{}' in {}",
        spec.module,
        interpreter.path().display()
    );

    let import_script = script::import_check(&spec.module);
    let import_result = match exec::run_captured(interpreter.path(), &["-c", &import_script]) {
        Ok(result) => result,
        Err(err) => {
            return GateOutcome::ImportFailed {
                interpreter: interpreter.path().to_path_buf(),
                detail: Some(err.to_string()),
            };
        }
    };

    if !import_result.success {
        return GateOutcome::ImportFailed {
            interpreter: interpreter.path().to_path_buf(),
            detail: last_line(&import_result.stderr),
        };
    }

    let version_script = script::version_print(&spec.module, &spec.attribute);
    let version_result = match exec::run_captured(interpreter.path(), &["-c", &version_script]) {
        Ok(result) => result,
        // The interpreter ran a moment ago; a spawn failure now still only
        // costs us the version, not the import verdict.
        Err(err) => ExecResult::failure(None, String::new(), err.to_string(), Duration::ZERO),
    };

    let version = if version_result.success {
        Version::extract(&version_result.stdout)
    } else {
        None
    };

    match (version, spec.minimum) {
        (Some(found), Some(minimum)) if !found.satisfies(&minimum) => GateOutcome::VersionTooOld {
            version: found,
            minimum,
        },
        (Some(found), _) => GateOutcome::Found {
            version: Some(found),
        },
        (None, Some(_)) => GateOutcome::VersionUnreadable {
            detail: describe_unreadable(&spec.attribute, &version_result),
        },
        (None, None) => GateOutcome::Found { version: None },
    }
}

/// Last non-empty line of subprocess stderr, for diagnostics.
fn last_line(stderr: &str) -> Option<String> {
    stderr
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

fn describe_unreadable(attribute: &str, result: &ExecResult) -> String {
    if result.exit_code == Some(script::MISSING_ATTRIBUTE_EXIT) {
        return format!("attribute {} is absent", attribute);
    }
    if !result.success {
        return match last_line(&result.stderr) {
            Some(line) => format!("version read failed: {}", line),
            None => "version read failed".to_string(),
        };
    }
    let printed = result.stdout.trim();
    if printed.is_empty() {
        format!("attribute {} is empty", attribute)
    } else {
        format!("no parseable version in '{}'", printed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Write an executable interpreter stand-in that runs `body` no matter
    /// what script it is handed.
    #[cfg(unix)]
    fn fake_interpreter(dir: &Path, name: &str, body: &str) -> Interpreter {
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        Interpreter::from_path(path)
    }

    fn min(s: &str) -> MinVersion {
        s.parse().unwrap()
    }

    #[cfg(unix)]
    #[test]
    fn satisfied_version_is_found() {
        let temp = TempDir::new().unwrap();
        let interp = fake_interpreter(temp.path(), "python3", "echo 1.5.1");

        let spec = GateSpec::new("pycf").with_minimum(min("1.5"));
        let outcome = evaluate(&interp, &spec);

        assert!(outcome.found());
        assert_eq!(outcome.version().unwrap().raw(), "1.5.1");
    }

    #[cfg(unix)]
    #[test]
    fn patch_level_is_ignored_by_the_gate() {
        let temp = TempDir::new().unwrap();
        let interp = fake_interpreter(temp.path(), "python3", "echo 1.2.3");

        let outcome = evaluate(&interp, &GateSpec::new("pycf").with_minimum(min("1.2")));
        assert!(outcome.found());
    }

    #[cfg(unix)]
    #[test]
    fn old_version_is_rejected() {
        let temp = TempDir::new().unwrap();
        let interp = fake_interpreter(temp.path(), "python3", "echo 1.1.9");

        let outcome = evaluate(&interp, &GateSpec::new("pycf").with_minimum(min("1.2")));
        assert!(!outcome.found());
        assert!(matches!(outcome, GateOutcome::VersionTooOld { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn newer_major_passes_any_minor_minimum() {
        let temp = TempDir::new().unwrap();
        let interp = fake_interpreter(temp.path(), "python3", "echo 2.0.0");

        let outcome = evaluate(&interp, &GateSpec::new("pycf").with_minimum(min("1.9")));
        assert!(outcome.found());
    }

    #[cfg(unix)]
    #[test]
    fn failed_import_is_terminal() {
        let temp = TempDir::new().unwrap();
        let interp = fake_interpreter(
            temp.path(),
            "python3",
            "echo 'No module named pycf' >&2; exit 1",
        );

        let outcome = evaluate(&interp, &GateSpec::new("pycf").with_minimum(min("1.2")));
        match outcome {
            GateOutcome::ImportFailed {
                interpreter,
                detail,
            } => {
                assert!(interpreter.ends_with("python3"));
                assert_eq!(detail.as_deref(), Some("No module named pycf"));
            }
            other => panic!("expected ImportFailed, got {:?}", other),
        }
    }

    #[test]
    fn missing_interpreter_folds_into_import_failed() {
        let interp = Interpreter::from_path("/nonexistent/interpreter-xyz");

        let outcome = evaluate(&interp, &GateSpec::new("pycf").with_minimum(min("1.2")));
        match outcome {
            GateOutcome::ImportFailed { interpreter, .. } => {
                assert_eq!(interpreter, PathBuf::from("/nonexistent/interpreter-xyz"));
            }
            other => panic!("expected ImportFailed, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_version_with_minimum_is_rejected() {
        let temp = TempDir::new().unwrap();
        let interp = fake_interpreter(temp.path(), "python3", "echo 'no digits at all'");

        let outcome = evaluate(&interp, &GateSpec::new("pycf").with_minimum(min("1.2")));
        assert!(!outcome.found());
        assert!(matches!(outcome, GateOutcome::VersionUnreadable { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_version_without_minimum_still_counts_as_found() {
        let temp = TempDir::new().unwrap();
        let interp = fake_interpreter(temp.path(), "python3", "echo 'no digits at all'");

        let outcome = evaluate(&interp, &GateSpec::new("pycf"));
        assert!(outcome.found());
        assert!(outcome.version().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn missing_attribute_exit_is_described() {
        let temp = TempDir::new().unwrap();
        // Succeeds for the import check only because the version script
        // arrives second; a constant-exit-3 fake would fail the import
        // step first, so branch on the script text.
        let interp = fake_interpreter(
            temp.path(),
            "python3",
            r#"case "$2" in *getattr*) exit 3;; *) exit 0;; esac"#,
        );

        let outcome = evaluate(&interp, &GateSpec::new("pycf").with_minimum(min("1.2")));
        match outcome {
            GateOutcome::VersionUnreadable { detail } => {
                assert!(detail.contains("__version__"));
                assert!(detail.contains("absent"));
            }
            other => panic!("expected VersionUnreadable, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn evaluate_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let interp = fake_interpreter(temp.path(), "python3", "echo 1.5.1");
        let spec = GateSpec::new("pycf").with_minimum(min("1.5"));

        let first = evaluate(&interp, &spec);
        let second = evaluate(&interp, &spec);
        assert_eq!(first.found(), second.found());
        assert_eq!(
            first.version().map(|v| v.raw().to_string()),
            second.version().map(|v| v.raw().to_string())
        );
    }

    #[test]
    fn spec_builder_defaults() {
        let spec = GateSpec::new("pycf");
        assert_eq!(spec.module, "pycf");
        assert_eq!(spec.attribute, DEFAULT_VERSION_ATTRIBUTE);
        assert!(spec.minimum.is_none());

        let spec = spec.with_minimum(min("1.5")).with_attribute("VERSION");
        assert_eq!(spec.minimum, Some(min("1.5")));
        assert_eq!(spec.attribute, "VERSION");
    }

    #[test]
    fn last_line_picks_last_non_empty() {
        let stderr = "Traceback (most recent call last):\n  ...\nImportError: nope\n\n";
        assert_eq!(last_line(stderr).as_deref(), Some("ImportError: nope"));
        assert!(last_line("").is_none());
        assert!(last_line("\n  \n").is_none());
    }
}
