//! Pygate CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use pygate::cli::{Cli, CommandDispatcher};
use pygate::ui::{should_use_colors, Console, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr: stdout is reserved for machine-readable output.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("pygate=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pygate=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("pygate starting with args: {:?}", cli);

    // Determine output mode
    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Determine project root
    let project_root = cli
        .project
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let console = Console::new(output_mode, should_use_colors());
    let dispatcher = CommandDispatcher::new(project_root);

    match dispatcher.dispatch(&cli, &console) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            console.error(&format!("Error: {}", e));
            ExitCode::from(2)
        }
    }
}
