//! `normalization` rule checks.
//!
//! The value must be a mapping whose keys stay inside the allowed set
//! (`maximum`, `minimum`, `gated_value`) and whose values are all numeric.

use serde_yaml::{Mapping, Value};

use mdn_model::{CheckFailure, FailureCode, display_value};

pub fn check(value: &Value, allowed: &[String]) -> Result<Mapping, CheckFailure> {
    let Some(mapping) = value.as_mapping() else {
        return Err(CheckFailure::new(FailureCode::NotADictionary));
    };

    let mut not_allowed = Vec::new();
    for (key, _) in mapping.iter() {
        let name = display_value(key);
        if !allowed.contains(&name) {
            not_allowed.push(name);
        }
    }
    if !not_allowed.is_empty() {
        not_allowed.sort();
        return Err(CheckFailure::with(FailureCode::NotAllowed, not_allowed));
    }

    let mut not_numeric = Vec::new();
    for (key, entry) in mapping.iter() {
        if !entry.is_number() {
            not_numeric.push(display_value(key));
        }
    }
    if !not_numeric.is_empty() {
        return Err(CheckFailure::with(FailureCode::NotNumeric, not_numeric));
    }

    Ok(mapping.clone())
}
