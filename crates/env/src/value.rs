//! Typed environment values and string coercion.
//!
//! Responsibilities:
//! - Define the value model for the environment map (string, integer,
//!   boolean, explicit null).
//! - Coerce raw string values into typed values using the recognized
//!   integer, boolean, and null forms.
//!
//! Does NOT handle:
//! - Map-level iteration or precedence (see store.rs).
//! - Override-file parsing (see loader).
//!
//! Invariants:
//! - Coercion is idempotent: non-string inputs are returned unchanged, and a
//!   string that survives coercion coerces to itself.
//! - Boolean detection only applies to non-empty, non-numeric values.
//! - `null` matching is case-insensitive under Unicode lowercasing.

use serde::{Deserialize, Serialize};

/// Truthy boolean tokens, matched case-insensitively after trimming.
const TRUE_TOKENS: &[&str] = &["1", "true", "on", "yes"];

/// Falsy boolean tokens, matched case-insensitively after trimming.
const FALSE_TOKENS: &[&str] = &["0", "false", "off", "no"];

/// A typed environment value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnvValue {
    /// Explicitly null: the raw value was empty or the literal `null`.
    Null,
    Bool(bool),
    Int(i64),
    Str(String),
}

impl EnvValue {
    /// Coerce a raw string value into a typed value.
    ///
    /// Rules, in order:
    /// - all ASCII decimal digits → [`Int`](EnvValue::Int);
    /// - non-empty, not numeric, and a recognized boolean token →
    ///   [`Bool`](EnvValue::Bool);
    /// - empty, or `null` ignoring case → [`Null`](EnvValue::Null);
    /// - anything else is kept as the original string.
    ///
    /// Note that a value like `yes` coerces to `Bool(true)` even when the
    /// author meant the literal string; callers that need the raw form must
    /// not route it through coercion.
    pub fn coerce(raw: &str) -> EnvValue {
        if is_digits(raw) {
            if let Ok(n) = raw.parse::<i64>() {
                return EnvValue::Int(n);
            }
            // Digit runs too long for i64 keep their original form.
            return EnvValue::Str(raw.to_string());
        }
        if !raw.is_empty()
            && !is_numeric(raw)
            && let Some(b) = bool_token(raw)
        {
            return EnvValue::Bool(b);
        }
        if raw.is_empty() || raw.to_lowercase() == "null" {
            return EnvValue::Null;
        }
        EnvValue::Str(raw.to_string())
    }

    /// The string form, for values that are (still) strings.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            EnvValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The integer form, if this value coerced to an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            EnvValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The boolean form, if this value coerced to a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            EnvValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// True for the explicit null value.
    pub fn is_null(&self) -> bool {
        matches!(self, EnvValue::Null)
    }
}

/// True when the value is one or more ASCII decimal digits.
fn is_digits(raw: &str) -> bool {
    !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit())
}

/// Loose numeric check used to exclude numbers from boolean detection.
fn is_numeric(raw: &str) -> bool {
    raw.trim().parse::<f64>().is_ok()
}

/// Match a recognized boolean token, ignoring case and surrounding whitespace.
fn bool_token(raw: &str) -> Option<bool> {
    let token = raw.trim();
    if TRUE_TOKENS.iter().any(|t| token.eq_ignore_ascii_case(t)) {
        return Some(true);
    }
    if FALSE_TOKENS.iter().any(|t| token.eq_ignore_ascii_case(t)) {
        return Some(false);
    }
    None
}
