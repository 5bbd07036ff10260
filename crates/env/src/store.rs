//! The canonical environment map.
//!
//! Responsibilities:
//! - Hold the name → value map populated during the bootstrap sequence.
//! - Track which names are canonical for the process (inherited from the OS
//!   environment or copied in by reconciliation) so that override files
//!   never replace them.
//! - Run the one-shot coercion pass and the finalize transition to a
//!   read-only view.
//!
//! Does NOT handle:
//! - Override-file parsing (see loader).
//! - Native-source reconciliation (see reconcile.rs).
//!
//! Invariants:
//! - Canonical names are never replaced by file-sourced values.
//! - Later file overlays replace earlier file-sourced values for the same
//!   name.
//! - After `finalize()` the map can no longer be mutated.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::value::EnvValue;

/// Mutable environment map used during the bootstrap sequence.
#[derive(Debug, Default, Clone)]
pub struct EnvStore {
    vars: BTreeMap<String, EnvValue>,
    /// Names that are canonical for this process. File overlays skip them.
    canonical: BTreeSet<String>,
}

impl EnvStore {
    /// Snapshot the inherited process environment.
    pub fn from_process_env() -> Self {
        Self::from_canonical_pairs(std::env::vars())
    }

    /// Build a store from explicit canonical pairs (primarily for testing).
    pub fn from_canonical_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut store = Self::default();
        for (name, value) in pairs {
            store.canonical.insert(name.clone());
            store.vars.insert(name, EnvValue::Str(value));
        }
        store
    }

    /// Look up a value by name.
    pub fn get(&self, name: &str) -> Option<&EnvValue> {
        self.vars.get(name)
    }

    /// True when the name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// The raw string form of a value that has not been coerced yet.
    pub(crate) fn raw(&self, name: &str) -> Option<&str> {
        self.vars.get(name).and_then(EnvValue::as_str)
    }

    /// Insert a canonical variable; existing names are kept untouched.
    ///
    /// Returns true when the value was inserted.
    pub(crate) fn insert_canonical(&mut self, name: &str, value: &str) -> bool {
        if self.vars.contains_key(name) {
            return false;
        }
        self.canonical.insert(name.to_string());
        self.vars
            .insert(name.to_string(), EnvValue::Str(value.to_string()));
        true
    }

    /// Overlay one file-sourced variable.
    ///
    /// Canonical names win; names set by earlier files are replaced.
    /// Returns true when the value was applied.
    pub(crate) fn overlay_file_value(&mut self, name: &str, value: &str) -> bool {
        if self.canonical.contains(name) {
            return false;
        }
        self.vars
            .insert(name.to_string(), EnvValue::Str(value.to_string()));
        true
    }

    /// Run the coercion pass: one pass, each value independently, in map
    /// iteration order. Only raw strings change.
    pub fn coerce_all(&mut self) {
        for value in self.vars.values_mut() {
            if let EnvValue::Str(raw) = value {
                *value = EnvValue::coerce(raw);
            }
        }
    }

    /// Number of variables in the map.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// True when the map holds no variables.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Freeze the map into the read-only view handed to the rest of the
    /// process.
    pub fn finalize(self) -> FrozenEnv {
        FrozenEnv { vars: self.vars }
    }
}

/// Read-only view of the environment map for the remainder of the process
/// lifetime.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct FrozenEnv {
    vars: BTreeMap<String, EnvValue>,
}

impl FrozenEnv {
    /// Look up a value by name.
    pub fn get(&self, name: &str) -> Option<&EnvValue> {
        self.vars.get(name)
    }

    /// The string value of a variable, when it stayed a string.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.vars.get(name).and_then(EnvValue::as_str)
    }

    /// The integer value of a variable, when it coerced to an integer.
    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.vars.get(name).and_then(EnvValue::as_int)
    }

    /// The boolean value of a variable, when it coerced to a boolean.
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.vars.get(name).and_then(EnvValue::as_bool)
    }

    /// True when the variable is present but explicitly null.
    pub fn is_null(&self, name: &str) -> bool {
        self.vars.get(name).is_some_and(EnvValue::is_null)
    }

    /// True when the name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Iterate over all variables in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EnvValue)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of variables in the map.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// True when the map holds no variables.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
