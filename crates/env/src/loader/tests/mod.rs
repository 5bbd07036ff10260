//! Tests for the bootstrap sequence builder.
//!
//! Responsibilities:
//! - Test override-file loading, precedence, and error mapping.
//! - Test required-key validation and the full builder sequence.
//!
//! Does NOT handle:
//! - Value coercion rules (tested in value.rs).
//! - Reconciliation rules (tested in reconcile.rs).
//!
//! Invariants:
//! - Tests supply the inherited environment explicitly via
//!   `with_inherited_vars` so they never depend on the real process
//!   environment; the shared lock only guards the few that do.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;


/// Returns the global test lock for process-environment isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
