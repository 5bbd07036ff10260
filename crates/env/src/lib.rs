//! Environment bootstrapping for web application runtimes.
//!
//! This crate populates a canonical environment map from the inherited
//! process environment, an optional native per-request variable source, and
//! `.env`-style override files, then coerces raw string values into typed
//! values and derives a small set of process-wide constants (root path,
//! environment tier).
//!
//! The whole sequence runs once at process start. On success the caller
//! receives a read-only [`FrozenEnv`]; on failure the caller decides whether
//! to abort (see [`Bootstrapper::load_or_exit`]).

pub mod constants;
mod loader;
pub mod reconcile;
pub mod runtime;
mod sources;
mod store;
mod tier;
mod value;

pub use loader::{Bootstrap, BootstrapError, Bootstrapper};
pub use reconcile::ReconcileOptions;
pub use sources::override_candidates;
pub use store::{EnvStore, FrozenEnv};
pub use tier::Tier;
pub use value::EnvValue;
