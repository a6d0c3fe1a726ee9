//! Concrete rule-checking scenarios, driven through the fail-fast
//! dispatcher.

use serde_yaml::Value;

use mdn_model::{FailureCode, RuleBucket};
use mdn_rules::{AllowedValues, RulesCollection, RulesError};

fn yaml(text: &str) -> Value {
    serde_yaml::from_str(text).unwrap()
}

fn collection() -> RulesCollection {
    RulesCollection::new(AllowedValues::default())
}

#[test]
fn normalization_with_text_minimum_is_not_numeric() {
    let mut collection = collection();
    let issue = collection
        .check_rule("age", "normalization", &yaml("{maximum: 1, minimum: a}"))
        .unwrap_err();
    assert_eq!(issue.failure.code, FailureCode::NotNumeric);
    assert_eq!(issue.failure.offending, vec!["minimum"]);
    assert_eq!(issue.bucket, Some(RuleBucket::Edits));
}

#[test]
fn nested_validation_is_stored_verbatim() {
    let mut collection = collection();
    let value = yaml("{force_to_blank_if: {is null: [host_taxid]}}");
    collection
        .check_rule("host_subject_id", "validation", &value)
        .unwrap();
    let stored = &collection.variable_rules("host_subject_id").unwrap().rules;
    assert_eq!(
        Value::Mapping(stored.edits.validation.clone()),
        value
    );
}

#[test]
fn mixed_scalar_remap_is_stored_verbatim() {
    let mut collection = collection();
    let value = yaml("{'US': 1, 'Yes': 'y'}");
    collection.check_rule("country", "remap", &value).unwrap();
    let stored = &collection.variable_rules("country").unwrap().rules;
    assert_eq!(Value::Mapping(stored.edits.remap.clone()), value);
}

#[test]
fn underscored_ontology_name_is_not_allowed() {
    let mut collection = collection();
    let issue = collection
        .check_rule("country", "ontology", &yaml("Gazetteer_ontology"))
        .unwrap_err();
    assert_eq!(issue.failure.code, FailureCode::NotAllowed);
    assert_eq!(issue.failure.offending, vec!["Gazetteer_ontology"]);
    assert_eq!(issue.value, yaml("Gazetteer_ontology"));
    // the rendered diagnostic locates the rule and reproduces the value
    let message = issue.message();
    assert!(message.starts_with("Wrong formatting for \"ontology\" rule; variable country:"));
    assert!(message.contains("\t# Gazetteer_ontology"));
    assert!(message.ends_with("-> not allowed: Gazetteer_ontology"));
}

#[test]
fn numeric_missing_token_is_not_a_string() {
    let mut collection = collection();
    let issue = collection
        .check_rule("host_age", "missing", &yaml("0"))
        .unwrap_err();
    assert_eq!(issue.failure.code, FailureCode::NotAString);
    assert_eq!(issue.rule, "missing");
}

#[test]
fn rule_free_directory_fails_before_validation() {
    let dir = tempfile::tempdir().unwrap();
    let err = RulesCollection::from_dir(dir.path()).unwrap_err();
    match err {
        RulesError::DirectoryEmpty { path } => assert_eq!(path, dir.path()),
        other => panic!("expected DirectoryEmpty, got {other}"),
    }
}
