//! Error types for the bootstrap sequence.
//!
//! Invariants:
//! - Every failure here is fatal for the bootstrap: there is no partial
//!   success and nothing to retry.
//! - Dotenv errors NEVER include raw file line contents, so credentials in
//!   an override file cannot leak into error output.

use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or validating the environment.
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// One or more required variables are absent or empty after loading.
    #[error("Missing required environment variables: {}", keys.join(", "))]
    MissingRequired { keys: Vec<String> },

    /// An override file exists but has invalid dotenv syntax.
    ///
    /// Only the index of the failure is reported, never the offending line.
    #[error("Failed to parse {} at position {error_index}", path.display())]
    DotenvParse { path: PathBuf, error_index: usize },

    /// An override file exists but could not be read.
    #[error("Failed to read {}: {kind}", path.display())]
    DotenvIo { path: PathBuf, kind: ErrorKind },

    /// Unknown dotenv error (future variants from the dotenvy crate).
    #[error("Failed to load {}", path.display())]
    DotenvUnknown { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
