//! Controlled-text checks shared by `ontology`, `blank`, `missing` and
//! `format`.
//!
//! The value must be a string belonging to the rule's allowed set. The
//! raw user string is returned so the verbatim-write contract holds even
//! for the case-insensitive `format` match.

use serde_yaml::Value;

use mdn_model::{CheckFailure, FailureCode};

/// Exact-membership check (`ontology`, `blank`, `missing`).
pub fn check_text(value: &Value, allowed: &[String]) -> Result<String, CheckFailure> {
    let Some(text) = value.as_str() else {
        return Err(CheckFailure::new(FailureCode::NotAString));
    };
    if !allowed.iter().any(|candidate| candidate == text) {
        return Err(CheckFailure::with(
            FailureCode::NotAllowed,
            vec![text.to_string()],
        ));
    }
    Ok(text.to_string())
}

/// Case-insensitive membership check (`format`).
pub fn check_text_any_case(value: &Value, allowed: &[String]) -> Result<String, CheckFailure> {
    let Some(text) = value.as_str() else {
        return Err(CheckFailure::new(FailureCode::NotAString));
    };
    if !allowed
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(text))
    {
        return Err(CheckFailure::with(
            FailureCode::NotAllowed,
            vec![text.to_string()],
        ));
    }
    Ok(text.to_string())
}
