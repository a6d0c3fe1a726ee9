//! Rule schema checkers.
//!
//! One module per rule-value shape. Each checker is a pure function over
//! the raw parsed value (plus reference data where the rule constrains
//! values to a controlled set) and returns the typed payload on success or
//! a [`CheckFailure`] sub-code with offending detail on failure. Checkers
//! never touch the error log, so callers can fail fast or batch.

mod allowed;
mod expected;
mod normalization;
mod remap;
mod validation;

use serde_yaml::Value;

use mdn_model::{CheckFailure, CheckedRule, RuleKind};

use crate::reference::AllowedValues;

/// Checks a raw rule value against the schema of its kind.
pub fn check(
    kind: RuleKind,
    value: &Value,
    reference: &AllowedValues,
) -> Result<CheckedRule, CheckFailure> {
    match kind {
        RuleKind::Expected => expected::check(value).map(CheckedRule::Expected),
        RuleKind::Ontology => {
            allowed::check_text(value, &reference.ontology).map(CheckedRule::Ontology)
        }
        RuleKind::Remap => remap::check(value).map(CheckedRule::Remap),
        RuleKind::Validation => {
            validation::check(value, &reference.validation).map(CheckedRule::Validation)
        }
        RuleKind::Normalization => {
            normalization::check(value, &reference.normalization).map(CheckedRule::Normalization)
        }
        RuleKind::Blank => allowed::check_text(value, &reference.blank).map(CheckedRule::Blank),
        RuleKind::Missing => {
            allowed::check_text(value, &reference.missing).map(CheckedRule::Missing)
        }
        RuleKind::Format => {
            allowed::check_text_any_case(value, &reference.format).map(CheckedRule::Format)
        }
    }
}
