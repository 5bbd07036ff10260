//! Override-file overlay.
//!
//! Responsibilities:
//! - Parse one dotenv-format file and overlay it onto the store.
//!
//! Does NOT handle:
//! - Candidate-list construction (see sources.rs).
//! - Required-key validation (see builder.rs).
//!
//! Invariants:
//! - A missing file is not an error; anything else is fatal.
//! - Canonical (process-inherited or reconciled) values are never replaced.
//! - Error mapping drops line contents so values cannot leak.

use std::path::Path;

use tracing::debug;

use super::error::BootstrapError;
use crate::store::EnvStore;

/// Overlay one override file onto the store.
///
/// Returns `Ok(false)` when the file does not exist. Within file-sourced
/// names, this file replaces values loaded from earlier candidates.
pub(super) fn apply_file(store: &mut EnvStore, path: &Path) -> Result<bool, BootstrapError> {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if is_not_found(&e) => return Ok(false),
        Err(e) => return Err(map_dotenv_error(e, path)),
    };

    let mut applied = 0usize;
    for item in iter {
        let (name, value) = item.map_err(|e| map_dotenv_error(e, path))?;
        if store.overlay_file_value(&name, &value) {
            applied += 1;
        }
    }

    debug!(path = %path.display(), applied, "loaded override file");
    Ok(true)
}

/// Check if a dotenv error indicates the file was not found.
fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
    )
}

fn map_dotenv_error(err: dotenvy::Error, path: &Path) -> BootstrapError {
    match err {
        dotenvy::Error::LineParse(_, error_index) => BootstrapError::DotenvParse {
            path: path.to_path_buf(),
            error_index,
        },
        dotenvy::Error::Io(io_err) => BootstrapError::DotenvIo {
            path: path.to_path_buf(),
            kind: io_err.kind(),
        },
        _ => BootstrapError::DotenvUnknown {
            path: path.to_path_buf(),
        },
    }
}
