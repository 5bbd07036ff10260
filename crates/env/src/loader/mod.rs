//! Bootstrap sequence for the runtime environment map.
//!
//! Responsibilities:
//! - Orchestrate the linear sequence: snapshot the inherited environment,
//!   reconcile native variables, overlay override files, validate required
//!   keys, coerce values, publish the process-wide constants.
//! - Map dotenv and validation failures into `BootstrapError`.
//!
//! Does NOT handle:
//! - Value typing rules (see value.rs).
//! - Native-source copy rules (see reconcile.rs).
//!
//! Invariants / Assumptions:
//! - The sequence runs once at process start, on a single thread.
//! - Candidate files load lowest precedence first; later files win.
//! - Required-key validation happens before coercion.

mod builder;
mod dotenv;
mod error;

#[cfg(test)]
mod tests;

pub use builder::{Bootstrap, Bootstrapper};
pub use error::BootstrapError;
