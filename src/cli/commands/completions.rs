//! The `completions` command: generate shell completions.

use clap::CommandFactory;

use crate::cli::args::{Cli, CompletionsArgs};
use crate::cli::commands::dispatcher::{Command, CommandResult};
use crate::error::Result;
use crate::ui::Console;

/// Generates completion scripts for the given shell.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, _console: &Console) -> Result<CommandResult> {
        let mut cmd = Cli::command();
        clap_complete::generate(
            self.args.shell,
            &mut cmd,
            "pygate",
            &mut std::io::stdout(),
        );
        Ok(CommandResult::success())
    }
}
