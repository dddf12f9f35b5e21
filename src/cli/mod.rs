//! Command-line interface and argument parsing.

pub mod args;
pub mod commands;

pub use args::{BatchArgs, CheckArgs, Cli, Commands, CompletionsArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
