//! `validation` rule checks.
//!
//! The value must be a two-level mapping whose keys stay inside the
//! allowed schema (top-level key such as `force_to_blank_if`, nested
//! condition such as `is null`) and whose nested values are sequences of
//! column names.

use std::collections::BTreeMap;

use serde_yaml::{Mapping, Value};

use mdn_model::{CheckFailure, FailureCode, display_value};

pub fn check(
    value: &Value,
    allowed: &BTreeMap<String, Vec<String>>,
) -> Result<Mapping, CheckFailure> {
    let Some(mapping) = value.as_mapping() else {
        return Err(CheckFailure::new(FailureCode::NotADictionary));
    };

    let mut not_allowed = Vec::new();
    for (key, _) in mapping.iter() {
        let name = display_value(key);
        if !allowed.contains_key(&name) {
            not_allowed.push(name);
        }
    }
    if !not_allowed.is_empty() {
        not_allowed.sort();
        return Err(CheckFailure::with(FailureCode::NotAllowed, not_allowed));
    }

    for (key, nested) in mapping.iter() {
        let Some(conditions) = allowed.get(&display_value(key)) else {
            continue;
        };
        let Some(nested_mapping) = nested.as_mapping() else {
            return Err(CheckFailure::new(FailureCode::NotANestedDictionary));
        };
        for (condition, columns) in nested_mapping.iter() {
            let condition_name = display_value(condition);
            if !conditions.contains(&condition_name) {
                return Err(CheckFailure::with(
                    FailureCode::NotAllowed,
                    vec![condition_name],
                ));
            }
            if !columns.is_sequence() {
                return Err(CheckFailure::with(
                    FailureCode::NotAList,
                    vec![display_value(columns)],
                ));
            }
        }
    }

    Ok(mapping.clone())
}
