//! Safe access to raw request parameters.
//!
//! A [`RequestParams`] wraps the decoded query-string map exactly as it
//! arrived. Accessors enforce the two universal rules before any formula
//! runs: a parameter that is absent or empty counts as missing, and a
//! parameter that is present must parse to a finite `f64`.

use std::collections::HashMap;

use crate::error::{CalcError, CalcResult};

/// Wire message shared by every formula when a supplied value fails to parse.
pub const INVALID_NUMERIC_VALUES: &str = "Invalid numeric values";

/// Parse a single raw value into a finite float.
///
/// Returns `None` for anything `str::parse::<f64>` rejects and for values
/// that parse but are NaN or infinite.
pub fn parse_f64(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Raw query parameters for one calculation request.
#[derive(Debug, Clone, Default)]
pub struct RequestParams {
    values: HashMap<String, String>,
}

impl RequestParams {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Convenience constructor used heavily by tests.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self::new(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
    }

    /// The raw value for `name`, treating an empty value as absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str).filter(|raw| !raw.is_empty())
    }

    /// Whether `name` was supplied with a non-empty value.
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Require every listed parameter and parse each as a finite float.
    ///
    /// Presence is checked for the whole group first so the caller's
    /// `missing_message` (which names all the parameters) is returned even
    /// when only one is absent; parsing failures then share the generic
    /// [`INVALID_NUMERIC_VALUES`] message.
    pub fn require_f64s<const N: usize>(
        &self,
        names: [&str; N],
        missing_message: &str,
    ) -> CalcResult<[f64; N]> {
        if names.iter().any(|name| !self.has(name)) {
            return Err(CalcError::missing(missing_message));
        }
        let mut parsed = [0.0_f64; N];
        for (slot, name) in parsed.iter_mut().zip(names) {
            *slot = self
                .get(name)
                .and_then(parse_f64)
                .ok_or_else(|| CalcError::invalid_number(INVALID_NUMERIC_VALUES))?;
        }
        Ok(parsed)
    }

    /// Parse `name` if it was supplied; absent parameters are `Ok(None)`.
    pub fn optional_f64(&self, name: &str) -> CalcResult<Option<f64>> {
        match self.get(name) {
            None => Ok(None),
            Some(raw) => parse_f64(raw)
                .map(Some)
                .ok_or_else(|| CalcError::invalid_number(INVALID_NUMERIC_VALUES)),
        }
    }
}

/// Which two of the three electrical quantities a request supplied.
///
/// Resolved once during validation; the compute step pattern-matches on the
/// variant instead of re-checking which fields are present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GivenPair {
    VoltageCurrent { voltage: f64, current: f64 },
    VoltageResistance { voltage: f64, resistance: f64 },
    CurrentResistance { current: f64, resistance: f64 },
}

impl GivenPair {
    /// First complete pair wins, in source order: voltage+current, then
    /// voltage+resistance, then current+resistance. A caller that supplies
    /// all three therefore always lands on `VoltageCurrent`.
    pub fn resolve(
        voltage: Option<f64>,
        current: Option<f64>,
        resistance: Option<f64>,
    ) -> Option<Self> {
        match (voltage, current, resistance) {
            (Some(voltage), Some(current), _) => {
                Some(GivenPair::VoltageCurrent { voltage, current })
            }
            (Some(voltage), None, Some(resistance)) => {
                Some(GivenPair::VoltageResistance { voltage, resistance })
            }
            (None, Some(current), Some(resistance)) => {
                Some(GivenPair::CurrentResistance { current, resistance })
            }
            _ => None,
        }
    }
}
