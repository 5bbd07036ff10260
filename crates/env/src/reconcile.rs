//! Native-source reconciliation.
//!
//! Responsibilities:
//! - Copy variables from a web server's native per-request source into the
//!   environment map when the process environment was not populated from it.
//! - Filter OS-level noise out of the copy, either by prefix or by stopping
//!   at the first known system variable.
//!
//! Does NOT handle:
//! - Override-file loading (see loader).
//! - Value coercion (see value.rs).
//!
//! Invariants / Assumptions:
//! - Names already present in the store are never overwritten.
//! - Sequential mode assumes application variables appear before system
//!   variables in the source's natural order. This is an environment layout
//!   convention, not a guaranteed contract.
//! - Copied names become canonical: override files cannot replace them.

use tracing::debug;

use crate::constants::DEFAULT_SYSTEM_VARS;
use crate::store::EnvStore;

/// Options for [`reconcile`].
#[derive(Debug, Clone)]
pub struct ReconcileOptions {
    /// Copy only names starting with one of these prefixes. When empty,
    /// sequential mode is used instead.
    pub prefixes: Vec<String>,
    /// Names treated as OS-level variables. In sequential mode the first
    /// match stops the iteration entirely; in prefix mode matches are
    /// skipped.
    pub system_vars: Vec<String>,
    /// When the platform already mirrors the native source into the process
    /// environment, reconciliation is a no-op.
    pub env_already_populated: bool,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self {
            prefixes: Vec::new(),
            system_vars: DEFAULT_SYSTEM_VARS.iter().map(|s| s.to_string()).collect(),
            env_already_populated: false,
        }
    }
}

/// Copy variables from a native per-request source into the store.
///
/// Some deployments only populate the web server's native variable source
/// and never the process environment; this brings the application's
/// variables across without pulling in unrelated OS noise.
///
/// Returns the copied pairs, in copy order, for observability.
pub fn reconcile<I>(
    store: &mut EnvStore,
    native: I,
    options: &ReconcileOptions,
) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (String, String)>,
{
    if options.env_already_populated {
        return Vec::new();
    }

    let mut copied = Vec::new();

    if options.prefixes.is_empty() {
        // Sequential mode: copy from the start of the source until the
        // first system variable.
        for (name, value) in native {
            if options.system_vars.contains(&name) {
                break;
            }
            if store.insert_canonical(&name, &value) {
                copied.push((name, value));
            }
        }
    } else {
        // Prefix mode: full iteration, copy only prefix matches.
        for (name, value) in native {
            if options.system_vars.contains(&name) {
                continue;
            }
            if options.prefixes.iter().any(|p| name.starts_with(p.as_str()))
                && store.insert_canonical(&name, &value)
            {
                copied.push((name, value));
            }
        }
    }

    if !copied.is_empty() {
        // Names only; native values may hold credentials.
        let names: Vec<&str> = copied.iter().map(|(n, _)| n.as_str()).collect();
        debug!(?names, "copied native variables into the environment map");
    }

    copied
}
