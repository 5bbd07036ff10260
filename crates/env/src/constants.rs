//! Centralized defaults for the bootstrap sequence.
//!
//! This module contains the conventional names and key sets used when a
//! [`Bootstrapper`](crate::Bootstrapper) is built without overrides.

use crate::tier::Tier;

/// Base name of the override file, resolved against the bootstrap root.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Variables that must be present and non-empty after loading.
pub const DEFAULT_REQUIRED_KEYS: &[&str] = &["DB_HOST", "DB_NAME", "DB_USER", "DB_PASSWORD"];

/// Variable consulted for the environment tier and the override-file suffix.
pub const DEFAULT_TIER_KEY: &str = "APP_ENV";

/// Tier assumed when the tier variable is absent or empty.
pub const DEFAULT_TIER: Tier = Tier::Production;

/// OS-level variables that mark the start of system noise in a native
/// per-request source (see [`reconcile`](crate::reconcile)).
pub const DEFAULT_SYSTEM_VARS: &[&str] = &["PATH", "USER", "HOME", "SHELL", "PWD"];
