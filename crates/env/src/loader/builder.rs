//! Bootstrap sequence builder.
//!
//! Responsibilities:
//! - Provide a builder-pattern `Bootstrapper` for configuring the one-shot
//!   bootstrap sequence.
//! - Run the sequence: snapshot, reconcile, overlay, validate, coerce,
//!   publish constants, finalize.
//!
//! Does NOT handle:
//! - Dotenv parsing (delegated to dotenv.rs).
//! - Native-source copy rules (delegated to reconcile.rs).
//!
//! Invariants / Assumptions:
//! - Override files never replace canonical (process-inherited or
//!   reconciled) values.
//! - Required keys are validated before the coercion pass runs.
//! - The process-wide constants are published at most once; re-running the
//!   sequence leaves them untouched.

use std::path::PathBuf;

use tracing::info;

use super::dotenv::apply_file;
use super::error::BootstrapError;
use crate::constants::{DEFAULT_ENV_FILE, DEFAULT_REQUIRED_KEYS, DEFAULT_TIER, DEFAULT_TIER_KEY};
use crate::reconcile::{ReconcileOptions, reconcile};
use crate::runtime;
use crate::sources::override_candidates;
use crate::store::{EnvStore, FrozenEnv};
use crate::tier::{Tier, derive_tier};

/// Result of a completed bootstrap sequence.
#[derive(Debug)]
pub struct Bootstrap {
    /// The coerced, read-only environment map.
    pub env: FrozenEnv,
    /// The derived tier, when the tier variable named a recognized tier or
    /// was falsy enough to fall back.
    pub tier: Option<Tier>,
    /// Variables copied from the native source during reconciliation.
    pub copied: Vec<(String, String)>,
}

/// Builder for the one-shot bootstrap sequence.
pub struct Bootstrapper {
    root: Option<PathBuf>,
    env_file: String,
    tier_key: String,
    tier_hint: Option<String>,
    required: Vec<String>,
    native_vars: Option<Vec<(String, String)>>,
    reconcile_options: ReconcileOptions,
    inherited: Option<Vec<(String, String)>>,
}

impl Default for Bootstrapper {
    fn default() -> Self {
        Self::new()
    }
}

impl Bootstrapper {
    /// Create a bootstrapper with the conventional defaults.
    pub fn new() -> Self {
        Self {
            root: None,
            env_file: DEFAULT_ENV_FILE.to_string(),
            tier_key: DEFAULT_TIER_KEY.to_string(),
            tier_hint: None,
            required: DEFAULT_REQUIRED_KEYS.iter().map(|k| k.to_string()).collect(),
            native_vars: None,
            reconcile_options: ReconcileOptions::default(),
            inherited: None,
        }
    }

    /// Directory override files are resolved against. Defaults to the
    /// current working directory.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Base override-file name (default `.env`).
    pub fn with_env_file(mut self, name: impl Into<String>) -> Self {
        self.env_file = name.into();
        self
    }

    /// Variable consulted for the tier and the second override-file suffix
    /// (default `APP_ENV`).
    pub fn with_tier_key(mut self, key: impl Into<String>) -> Self {
        self.tier_key = key.into();
        self
    }

    /// Pinned tier contributing the first override-file suffix, for
    /// deployments that bake the tier in at build time.
    pub fn with_tier_hint(mut self, tier: impl Into<String>) -> Self {
        self.tier_hint = Some(tier.into());
        self
    }

    /// Replace the required-key set (default `DB_HOST`, `DB_NAME`,
    /// `DB_USER`, `DB_PASSWORD`).
    pub fn with_required_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Provide the native per-request variables to reconcile, in their
    /// natural source order.
    pub fn with_native_vars<I>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.native_vars = Some(vars.into_iter().collect());
        self
    }

    /// Copy only native variables starting with one of these prefixes.
    pub fn with_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reconcile_options.prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the system-variable list used by reconciliation.
    pub fn with_system_vars<I, S>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reconcile_options.system_vars = vars.into_iter().map(Into::into).collect();
        self
    }

    /// Skip reconciliation because the platform already populates the
    /// process environment from the native source.
    pub fn assume_env_populated(mut self, populated: bool) -> Self {
        self.reconcile_options.env_already_populated = populated;
        self
    }

    /// Replace the inherited environment snapshot (primarily for testing).
    pub fn with_inherited_vars<I>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.inherited = Some(vars.into_iter().collect());
        self
    }

    /// Run the bootstrap sequence once.
    ///
    /// # Errors
    ///
    /// Returns an error if an override file exists but cannot be parsed or
    /// read, or if a required variable is absent or empty after loading.
    /// Missing override files are silently skipped.
    pub fn load(self) -> Result<Bootstrap, BootstrapError> {
        let mut store = match self.inherited {
            Some(pairs) => EnvStore::from_canonical_pairs(pairs),
            None => EnvStore::from_process_env(),
        };

        let copied = match self.native_vars {
            Some(native) => reconcile(&mut store, native, &self.reconcile_options),
            None => Vec::new(),
        };

        let root = match self.root {
            Some(root) => root,
            None => std::env::current_dir()?,
        };

        let native_tier = store.raw(&self.tier_key).map(str::to_string);
        let candidates = override_candidates(
            &self.env_file,
            self.tier_hint.as_deref(),
            native_tier.as_deref(),
        );
        for candidate in &candidates {
            apply_file(&mut store, &root.join(candidate))?;
        }

        let missing: Vec<String> = self
            .required
            .iter()
            .filter(|key| !has_non_empty(&store, key.as_str()))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(BootstrapError::MissingRequired { keys: missing });
        }

        store.coerce_all();

        let tier = derive_tier(store.get(&self.tier_key), DEFAULT_TIER);

        runtime::set_root(root);
        if let Some(tier) = tier {
            runtime::set_tier(tier);
        }

        info!(vars = store.len(), tier = ?tier, "environment bootstrap complete");

        Ok(Bootstrap {
            env: store.finalize(),
            tier,
            copied,
        })
    }

    /// Run the bootstrap sequence, terminating the process on failure.
    ///
    /// This preserves fatal startup semantics for callers with nothing
    /// useful to do past a failed bootstrap: the message is printed to
    /// stderr and the process exits with a non-zero status. Callers that
    /// want to handle errors use [`load`](Self::load).
    pub fn load_or_exit(self) -> Bootstrap {
        match self.load() {
            Ok(bootstrap) => bootstrap,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}

/// Present with a non-empty raw value.
fn has_non_empty(store: &EnvStore, key: &str) -> bool {
    store.raw(key).is_some_and(|value| !value.is_empty())
}
