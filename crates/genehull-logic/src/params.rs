//! Parameter set — named design inputs with documented default fallbacks.
//!
//! A [`ParameterSet`] is built once per computation run, either from the
//! bundled schema defaults or from caller-supplied overrides, and is
//! immutable for the duration of a compute. Resolution policy:
//!
//! - an *absent* key silently falls back to its documented default;
//! - a *supplied* value that cannot be coerced to a number fails loudly
//!   with [`InvalidParameterError`] — defaults are never substituted for
//!   malformed input.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::InvalidParameterError;

/// Documented default values for every parameter the engine consumes.
///
/// These mirror the bundled schema document; `schema::tests` asserts the
/// two stay in sync.
pub mod defaults {
    /// Length of waterline (m).
    pub const LWL: f64 = 8.0;
    /// Maximum draft (m).
    pub const TC: f64 = 0.37;
    /// Position of maximum draft (% Lwl).
    pub const X_TC: f64 = 50.0;
    /// Sheer line width / beam reference (m).
    pub const BG: f64 = 2.196;
    /// Sheer line reference position (% Lwl).
    pub const X_BG: f64 = 43.0;
    /// Bow forward distance (m).
    pub const XBOW: f64 = 9.0;
    /// Bow freeboard height (m).
    pub const ZBOW: f64 = 0.85;
    /// Transom rear position (m).
    pub const X_TAB_AR: f64 = -1.3;
    /// Transom height (m).
    pub const Z_TAB_AR: f64 = 0.24;
    /// Aft sheer reference (m).
    pub const X_LIV_AR: f64 = -0.6;
    /// Midship freeboard (m).
    pub const Z_LIV_M: f64 = 0.72;
    /// Aft freeboard (m).
    pub const Z_LIV_AR: f64 = 0.74;
    /// Bow shape coefficient.
    pub const CET: f64 = 3.0;
    /// Sheer Y-direction polynomial exponent.
    pub const PUI_LIV_Y: f64 = 2.0;
}

/// A raw parameter value as supplied by a schema document or a caller.
///
/// Values arrive either as numbers or as free text (spreadsheet cells,
/// CLI overrides). Text that parses as a number is accepted; anything
/// else is rejected at resolution time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Number(f64),
    Text(String),
}

impl ParamValue {
    /// Coerce to `f64`, or report which parameter was malformed.
    fn as_number(&self, name: &str) -> Result<f64, InvalidParameterError> {
        match self {
            ParamValue::Number(n) => Ok(*n),
            ParamValue::Text(s) => {
                s.trim().parse::<f64>().map_err(|_| InvalidParameterError {
                    name: name.to_string(),
                    value: s.clone(),
                })
            }
        }
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Number(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Text(v)
    }
}

/// Mapping from parameter name to supplied value.
///
/// Backed by a `BTreeMap` so iteration and serialization order are
/// stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet {
    values: BTreeMap<String, ParamValue>,
}

impl ParameterSet {
    /// Empty set — every engine lookup resolves to its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a parameter value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Number of supplied parameters.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether a value was supplied for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Resolve a parameter to a number, falling back to `default` only
    /// when the key is absent. A supplied non-numeric value is an error.
    pub fn resolve(&self, name: &str, default: f64) -> Result<f64, InvalidParameterError> {
        match self.values.get(name) {
            Some(value) => value.as_number(name),
            None => Ok(default),
        }
    }

    /// Iterate supplied (name, value) pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, ParamValue)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (String, ParamValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_falls_back_to_default() {
        let params = ParameterSet::new();
        assert_eq!(params.resolve("Lwl", defaults::LWL).unwrap(), 8.0);
    }

    #[test]
    fn supplied_number_wins_over_default() {
        let mut params = ParameterSet::new();
        params.set("Lwl", 10.0);
        assert_eq!(params.resolve("Lwl", defaults::LWL).unwrap(), 10.0);
    }

    #[test]
    fn numeric_text_is_coerced() {
        let mut params = ParameterSet::new();
        params.set("Tc", " 0.45 ");
        assert_eq!(params.resolve("Tc", defaults::TC).unwrap(), 0.45);
    }

    #[test]
    fn non_numeric_text_fails_loudly() {
        let mut params = ParameterSet::new();
        params.set("Lwl", "eight meters");
        let err = params.resolve("Lwl", defaults::LWL).unwrap_err();
        assert_eq!(err.name, "Lwl");
        assert_eq!(err.value, "eight meters");
    }

    #[test]
    fn iteration_order_is_name_sorted() {
        let mut params = ParameterSet::new();
        params.set("Zbow", 0.85);
        params.set("Bg", 2.196);
        params.set("Lwl", 8.0);
        let names: Vec<&str> = params.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Bg", "Lwl", "Zbow"]);
    }

    #[test]
    fn json_round_trip_preserves_values() {
        let mut params = ParameterSet::new();
        params.set("Lwl", 8.0);
        params.set("Note", "free text");
        let json = serde_json::to_string(&params).unwrap();
        let back: ParameterSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}
