//! The `interpreters` command: list PATH candidates.

use crate::cli::commands::dispatcher::{Command, CommandResult};
use crate::error::Result;
use crate::interpreter;
use crate::ui::Console;

/// Lists every Python interpreter discoverable on PATH.
#[derive(Debug, Default)]
pub struct InterpretersCommand;

impl InterpretersCommand {
    /// Create a new interpreters command.
    pub fn new() -> Self {
        Self
    }
}

impl Command for InterpretersCommand {
    fn execute(&self, console: &Console) -> Result<CommandResult> {
        let discovered = interpreter::discover_all();

        if discovered.is_empty() {
            console.warn("no Python interpreter found on PATH (searched python3, python, python2)");
            return Ok(CommandResult::not_found());
        }

        for (name, interp) in &discovered {
            let version = interp
                .runtime_version()
                .map(|v| v.raw().to_string())
                .unwrap_or_else(|| "unknown version".to_string());
            console.status(&console.theme().format_success(&format!(
                "{} {} ({})",
                name,
                version,
                interp.path().display()
            )));
        }

        Ok(CommandResult::success())
    }
}
