//! `remap` rule checks.
//!
//! The value must be a mapping where every key and every value is a
//! string, integer or floating-point scalar. YAML booleans do not count.

use serde_yaml::{Mapping, Value};

use mdn_model::{CheckFailure, FailureCode, display_value};

pub fn check(value: &Value) -> Result<Mapping, CheckFailure> {
    let Some(mapping) = value.as_mapping() else {
        return Err(CheckFailure::new(FailureCode::NotADictionary));
    };

    let mut wrong = Vec::new();
    for (key, entry) in mapping.iter() {
        if !is_scalar(key) || !is_scalar(entry) {
            wrong.push(format!("{}: {}", display_value(key), display_value(entry)));
        }
    }
    if !wrong.is_empty() {
        return Err(CheckFailure::with(FailureCode::NotScalar, wrong));
    }

    Ok(mapping.clone())
}

fn is_scalar(value: &Value) -> bool {
    value.is_string() || value.is_number()
}
