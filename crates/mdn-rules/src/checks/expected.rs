//! `expected` rule checks.
//!
//! The value must be an ordered sequence of strings.

use serde_yaml::Value;

use mdn_model::{CheckFailure, FailureCode, display_value};

pub fn check(value: &Value) -> Result<Vec<String>, CheckFailure> {
    let Some(items) = value.as_sequence() else {
        return Err(CheckFailure::new(FailureCode::NotAList));
    };

    let mut wrong = Vec::new();
    for item in items {
        if !item.is_string() {
            wrong.push(display_value(item));
        }
    }
    if !wrong.is_empty() {
        return Err(CheckFailure::with(FailureCode::NotAString, wrong));
    }

    let mut values = Vec::with_capacity(items.len());
    for item in items {
        if let Some(text) = item.as_str() {
            values.push(text.to_string());
        }
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(text: &str) -> Value {
        serde_yaml::from_str(text).unwrap()
    }

    #[test]
    fn string_sequences_pass_in_order() {
        assert_eq!(check(&yaml("[val]")).unwrap(), vec!["val"]);
        assert_eq!(check(&yaml("['1', '2']")).unwrap(), vec!["1", "2"]);
    }

    #[test]
    fn non_sequences_are_not_a_list() {
        for text in ["val", "1", "{a: 1}"] {
            let failure = check(&yaml(text)).unwrap_err();
            assert_eq!(failure.code, FailureCode::NotAList);
            assert!(failure.offending.is_empty());
        }
    }

    #[test]
    fn non_string_items_are_listed() {
        let failure = check(&yaml("[val, 1, '1', 2.5]")).unwrap_err();
        assert_eq!(failure.code, FailureCode::NotAString);
        assert_eq!(failure.offending, vec!["1", "2.5"]);
    }
}
