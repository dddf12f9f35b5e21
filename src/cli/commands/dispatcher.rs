//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::Console;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution
/// logic.
pub trait Command {
    /// Execute the command.
    ///
    /// Returns a [`CommandResult`] carrying the process exit code:
    /// 0 when everything probed was found, 1 when something was not.
    /// Usage and manifest problems are `Err` and exit 2.
    fn execute(&self, console: &Console) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Result for a probe that concluded "not found".
    pub fn not_found() -> Self {
        Self::failure(1)
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, console: &Console) -> Result<CommandResult> {
        match &cli.command {
            Commands::Check(args) => {
                let cmd = super::check::CheckCommand::new(args.clone());
                cmd.execute(console)
            }
            Commands::Batch(args) => {
                let cmd = super::batch::BatchCommand::new(&self.project_root, args.clone());
                cmd.execute(console)
            }
            Commands::Interpreters => {
                let cmd = super::interpreters::InterpretersCommand::new();
                cmd.execute(console)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(console)
            }
        }
    }
}
