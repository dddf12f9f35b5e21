//! Subprocess execution with captured output.
//!
//! The probe spawns the target interpreter directly by argv, never through
//! a shell: the inline script is a single argument and must reach the
//! interpreter byte-for-byte. Each run blocks until the child exits, so the
//! subprocess is fully reaped before the caller continues.

use std::path::Path;
use std::process::Command;
use std::time::{Duration, Instant};

/// Result of running a subprocess to completion.
#[derive(Debug, Clone)]
pub struct ExecResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the command succeeded (exit code 0).
    pub success: bool,
}

impl ExecResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }
}

/// Run a program with arguments, blocking until it exits.
///
/// Output is captured and decoded lossily. Spawn failures (program
/// missing, permission denied) surface as `Err`; the gate folds those
/// into its import-failed outcome rather than letting them escape.
pub fn run_captured(program: &Path, args: &[&str]) -> std::io::Result<ExecResult> {
    let start = Instant::now();

    let output = Command::new(program).args(args).output()?;

    let duration = start.elapsed();
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    if output.status.success() {
        Ok(ExecResult::success(stdout, stderr, duration))
    } else {
        Ok(ExecResult::failure(
            output.status.code(),
            stdout,
            stderr,
            duration,
        ))
    }
}
