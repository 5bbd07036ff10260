//! Environment tier classification.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::EnvValue;

/// Deployment context recognized by the bootstrapper.
///
/// Only the exact lowercase names are recognized; anything else leaves the
/// tier undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Local,
    Development,
    Staging,
    Production,
}

impl Tier {
    /// All recognized tiers.
    pub const ALL: [Tier; 4] = [
        Tier::Local,
        Tier::Development,
        Tier::Staging,
        Tier::Production,
    ];

    /// The canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Local => "local",
            Tier::Development => "development",
            Tier::Staging => "staging",
            Tier::Production => "production",
        }
    }

    /// Match a tier by its exact canonical name.
    pub fn from_name(name: &str) -> Option<Tier> {
        Tier::ALL.into_iter().find(|tier| tier.as_str() == name)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derive the tier from the coerced value of the tier variable.
///
/// Falsy values (absent, explicit null, empty string, `false`, `0`) fall
/// back to the given tier. A remaining string is accepted only if it exactly
/// names a recognized tier; any other typed value yields no tier.
pub(crate) fn derive_tier(value: Option<&EnvValue>, fallback: Tier) -> Option<Tier> {
    match value {
        None | Some(EnvValue::Null) => Some(fallback),
        Some(EnvValue::Str(s)) if s.is_empty() => Some(fallback),
        Some(EnvValue::Bool(false)) => Some(fallback),
        Some(EnvValue::Int(0)) => Some(fallback),
        Some(EnvValue::Str(s)) => Tier::from_name(s),
        Some(_) => None,
    }
}
