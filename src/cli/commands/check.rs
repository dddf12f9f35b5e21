//! The `check` command: probe one module.

use std::io::Write;

use crate::cli::args::CheckArgs;
use crate::cli::commands::dispatcher::{Command, CommandResult};
use crate::error::Result;
use crate::gate::{self, GateSpec};
use crate::interpreter;
use crate::report::{
    HumanFormatter, JsonFormatter, OutputFormat, ProbeReport, ReportFormatter, VarsFormatter,
};
use crate::ui::Console;
use crate::version::MinVersion;

/// Probes a single module and reports the found flag.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }
}

impl Command for CheckCommand {
    fn execute(&self, console: &Console) -> Result<CommandResult> {
        let minimum = self
            .args
            .min
            .as_deref()
            .map(str::parse::<MinVersion>)
            .transpose()?;

        let mut spec = GateSpec::new(&self.args.module).with_attribute(&self.args.attribute);
        if let Some(minimum) = minimum {
            spec = spec.with_minimum(minimum);
        }

        let interpreter = interpreter::resolve(self.args.python.as_deref());
        console.detail(&format!(
            "probing with interpreter {}",
            interpreter.path().display()
        ));

        let outcome = gate::evaluate(&interpreter, &spec);
        let report = ProbeReport::new(&spec, &interpreter, &outcome);

        if let Some(diagnostic) = report.diagnostic() {
            console.warn(&diagnostic);
        }

        emit(console, self.args.format, self.args.prefix.clone(), &[report])?;

        Ok(if outcome.found() {
            CommandResult::success()
        } else {
            CommandResult::not_found()
        })
    }
}

/// Write reports to stdout in the requested format.
///
/// Shared with the batch command; the human format respects the quiet
/// modes while the machine formats always print.
pub(super) fn emit(
    console: &Console,
    format: OutputFormat,
    prefix: Option<String>,
    reports: &[ProbeReport],
) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    match format {
        OutputFormat::Human => {
            if console.mode().shows_status() {
                let use_color = crate::ui::should_use_colors();
                HumanFormatter::new(use_color).format(reports, &mut stdout)?;
            }
        }
        OutputFormat::Json => JsonFormatter::new().format(reports, &mut stdout)?,
        OutputFormat::Vars => VarsFormatter::new(prefix).format(reports, &mut stdout)?,
    }
    stdout.flush()?;
    Ok(())
}
