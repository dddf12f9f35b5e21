//! The `batch` command: probe every requirement in a manifest.

use std::path::{Path, PathBuf};

use crate::cli::args::BatchArgs;
use crate::cli::commands::check::emit;
use crate::cli::commands::dispatcher::{Command, CommandResult};
use crate::error::{PygateError, Result};
use crate::gate;
use crate::interpreter::{self, Interpreter};
use crate::manifest;
use crate::report::ProbeReport;
use crate::ui::Console;

/// Probes every module a manifest requires.
pub struct BatchCommand {
    project_root: PathBuf,
    args: BatchArgs,
}

impl BatchCommand {
    /// Create a new batch command.
    pub fn new(project_root: &Path, args: BatchArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    fn manifest_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.args.manifest {
            return Ok(path.clone());
        }
        manifest::discover(&self.project_root).ok_or_else(|| PygateError::ManifestNotFound {
            path: self.project_root.join(".pygate.yml"),
        })
    }

    /// Interpreter preference: `--python` flag, then the manifest's entry,
    /// then normal PATH resolution.
    fn resolve_interpreter(&self, manifest: &manifest::Manifest) -> Interpreter {
        if let Some(python) = &self.args.python {
            return interpreter::resolve(Some(python.as_path()));
        }
        if let Some(name) = &manifest.interpreter {
            return Interpreter::from_path(name);
        }
        interpreter::resolve(None)
    }
}

impl Command for BatchCommand {
    fn execute(&self, console: &Console) -> Result<CommandResult> {
        let path = self.manifest_path()?;
        let manifest = manifest::load(&path)?;
        tracing::debug!(
            "loaded manifest {} with {} requirements",
            path.display(),
            manifest.requires.len()
        );

        let interpreter = self.resolve_interpreter(&manifest);
        console.detail(&format!(
            "probing with interpreter {}",
            interpreter.path().display()
        ));

        let mut reports = Vec::with_capacity(manifest.requires.len());
        for (module, requirement) in &manifest.requires {
            let spec = requirement.to_spec(module)?;
            let outcome = gate::evaluate(&interpreter, &spec);
            let report = ProbeReport::new(&spec, &interpreter, &outcome);
            if let Some(diagnostic) = report.diagnostic() {
                console.warn(&diagnostic);
            }
            reports.push(report);
        }

        emit(console, self.args.format, None, &reports)?;

        Ok(if reports.iter().all(|r| r.found) {
            CommandResult::success()
        } else {
            CommandResult::not_found()
        })
    }
}
