//! Batch manifest discovery and loading.
//!
//! A manifest declares every Python requirement a project's build gates
//! on, so one `pygate batch` run can stand in for a pile of individual
//! checks:
//!
//! ```yaml
//! interpreter: python3
//! requires:
//!   pycf:
//!     min: "1.5"
//!   numpy:
//!     min: "1.16"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{PygateError, Result};
use crate::gate::GateSpec;
use crate::version::MinVersion;

/// Manifest file names searched in the project root, in priority order.
const MANIFEST_NAMES: &[&str] = &[".pygate.yml", "pygate.yml"];

/// A batch manifest: one entry per required module.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Interpreter override (path or bare executable name).
    #[serde(default)]
    pub interpreter: Option<String>,

    /// Required modules keyed by import name.
    #[serde(default)]
    pub requires: BTreeMap<String, Requirement>,
}

/// One required module.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Requirement {
    /// Minimum acceptable version, `MAJOR` or `MAJOR.MINOR`.
    #[serde(default)]
    pub min: Option<String>,

    /// Attribute holding the version string (default `__version__`).
    #[serde(default)]
    pub attribute: Option<String>,
}

impl Requirement {
    /// Build the gate spec for this requirement.
    ///
    /// The minimum was validated at load time; re-parsing here keeps the
    /// type honest for specs built outside [`load`].
    pub fn to_spec(&self, module: &str) -> Result<GateSpec> {
        let mut spec = GateSpec::new(module);
        if let Some(min) = &self.min {
            spec = spec.with_minimum(min.parse::<MinVersion>()?);
        }
        if let Some(attribute) = &self.attribute {
            spec = spec.with_attribute(attribute.clone());
        }
        Ok(spec)
    }
}

/// Find a manifest in the project root.
pub fn discover(project_root: &Path) -> Option<PathBuf> {
    for name in MANIFEST_NAMES {
        let path = project_root.join(name);
        if path.exists() {
            return Some(path);
        }
    }
    None
}

/// Load and validate a manifest file.
pub fn load(path: &Path) -> Result<Manifest> {
    if !path.exists() {
        return Err(PygateError::ManifestNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    let manifest: Manifest =
        serde_yaml::from_str(&content).map_err(|e| PygateError::ManifestParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    validate(&manifest)?;
    Ok(manifest)
}

fn validate(manifest: &Manifest) -> Result<()> {
    for (module, requirement) in &manifest.requires {
        if module.trim().is_empty() {
            return Err(PygateError::ManifestValidationError {
                message: "requirement with empty module name".to_string(),
            });
        }
        if let Some(min) = &requirement.min {
            min.parse::<MinVersion>()
                .map_err(|_| PygateError::ManifestValidationError {
                    message: format!(
                        "requirement '{}' has unparseable minimum '{}'",
                        module, min
                    ),
                })?;
        }
    }
    Ok(())
}
