//! Pygate - build-time probe for Python module availability and versions.
//!
//! Pygate answers one question for conditional build logic: is a given
//! Python module importable in the target interpreter, and is its version
//! at least a configured minimum? It runs once per build-configuration
//! pass, synchronously, and always terminates with a definite found flag.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`exec`] - Subprocess execution with captured output
//! - [`gate`] - The dependency version gate itself
//! - [`interpreter`] - Python interpreter discovery and resolution
//! - [`manifest`] - Batch manifest loading for multi-module probes
//! - [`report`] - Human- and machine-readable probe reports
//! - [`ui`] - Terminal theme and console output
//! - [`version`] - Version parsing and minimum-version comparison
//!
//! # Example
//!
//! ```
//! use pygate::version::{MinVersion, Version};
//!
//! // A patch-level suffix never affects the gate: only major and minor
//! // are compared, and equality is accepted.
//! let version = Version::extract("1.2.3").unwrap();
//! let minimum: MinVersion = "1.2".parse().unwrap();
//! assert!(version.satisfies(&minimum));
//! ```
//!
//! For end-to-end probe runs against real interpreters, see the
//! integration tests.

pub mod cli;
pub mod error;
pub mod exec;
pub mod gate;
pub mod interpreter;
pub mod manifest;
pub mod report;
pub mod ui;
pub mod version;

pub use error::{PygateError, Result};
