//! Python interpreter discovery and resolution.
//!
//! The probe needs one interpreter to aim at. An explicit path always
//! wins; otherwise the PATH is searched for well-known executable names.
//! Resolution never fails outright: with nothing on PATH the preferred
//! candidate name is used bare, and the resulting spawn failure surfaces
//! through the gate as an ordinary import failure naming that interpreter.

use std::path::{Path, PathBuf};

use crate::exec;
use crate::gate::script;
use crate::version::Version;

/// Candidate executable names searched on PATH, in preference order.
const CANDIDATE_NAMES: &[&str] = &["python3", "python", "python2"];

/// A Python interpreter to probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpreter {
    path: PathBuf,
}

impl Interpreter {
    /// Use an executable path as-is.
    ///
    /// The path is not validated here: a missing or non-executable
    /// interpreter is reported at probe time as an import failure, never
    /// as an escaped error.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The executable path (possibly a bare name resolved by the OS).
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ask the interpreter for its own runtime version.
    ///
    /// Returns `None` when the interpreter cannot be executed or prints
    /// nothing parseable.
    pub fn runtime_version(&self) -> Option<Version> {
        let result = exec::run_captured(&self.path, &["-c", script::RUNTIME_VERSION]).ok()?;
        if !result.success {
            return None;
        }
        Version::extract(&result.stdout)
    }
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. Does NOT use
/// the `which` command — `which` behavior varies across systems and
/// is sometimes a shell builtin with inconsistent error handling.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Resolve the interpreter to probe against the system PATH.
pub fn resolve(explicit: Option<&Path>) -> Interpreter {
    resolve_with_path(explicit, &parse_system_path())
}

/// Resolve the interpreter against a given list of PATH entries.
///
/// Preference order: explicit path, then the first PATH candidate, then
/// the preferred candidate name bare (letting the later spawn fail and be
/// reported as an import failure).
pub fn resolve_with_path(explicit: Option<&Path>, path_entries: &[PathBuf]) -> Interpreter {
    if let Some(path) = explicit {
        return Interpreter::from_path(path);
    }

    for name in CANDIDATE_NAMES {
        if let Some(found) = resolve_tool_path(name, path_entries) {
            tracing::debug!("resolved interpreter {} at {}", name, found.display());
            return Interpreter::from_path(found);
        }
    }

    tracing::debug!("no interpreter candidate on PATH; falling back to bare name");
    Interpreter::from_path(CANDIDATE_NAMES[0])
}

/// Discover every PATH candidate, for `pygate interpreters`.
pub fn discover_all() -> Vec<(String, Interpreter)> {
    discover_all_with_path(&parse_system_path())
}

/// Discover candidates against a given list of PATH entries.
pub fn discover_all_with_path(path_entries: &[PathBuf]) -> Vec<(String, Interpreter)> {
    CANDIDATE_NAMES
        .iter()
        .filter_map(|name| {
            resolve_tool_path(name, path_entries)
                .map(|path| (name.to_string(), Interpreter::from_path(path)))
        })
        .collect()
}
