//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::report::OutputFormat;

/// Pygate - build-time probe for Python dependencies.
#[derive(Debug, Parser)]
#[command(name = "pygate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (where manifests are discovered)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Probe one module in the target interpreter
    Check(CheckArgs),

    /// Probe every requirement in a manifest
    Batch(BatchArgs),

    /// List Python interpreters discoverable on PATH
    Interpreters,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Module to import (e.g. pycf)
    pub module: String,

    /// Minimum acceptable version, MAJOR or MAJOR.MINOR
    #[arg(short, long)]
    pub min: Option<String>,

    /// Attribute holding the module's version string
    #[arg(long, default_value = crate::gate::DEFAULT_VERSION_ATTRIBUTE)]
    pub attribute: String,

    /// Interpreter to probe (path or executable name)
    #[arg(long, env = "PYGATE_PYTHON", value_name = "PATH")]
    pub python: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Variable prefix for --format vars (default: module name uppercased)
    #[arg(long)]
    pub prefix: Option<String>,
}

/// Arguments for the `batch` command.
#[derive(Debug, Clone, clap::Args)]
pub struct BatchArgs {
    /// Manifest path (default: .pygate.yml or pygate.yml in the project root)
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Interpreter to probe (overrides the manifest's)
    #[arg(long, env = "PYGATE_PYTHON", value_name = "PATH")]
    pub python: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
