//! End-to-end tests for rule collection loading and batch validation.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use mdn_model::FailureCode;
use mdn_rules::{RulesCollection, RulesError};

fn write(dir: &Path, name: &str, body: &str) {
    fs::write(dir.join(name), body).unwrap();
}

fn rules_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "age.yml",
        "expected: ['Yes', 'No']\nnormalization: {maximum: 120, minimum: 0, gated_value: -1}\nmissing: not provided\n",
    );
    write(
        dir.path(),
        "country.yml",
        "ontology: Gazetteer_ontology\nremap: {US: USA}\nblank: 5\nbogus: 1\n",
    );
    write(dir.path(), "broken.yml", "expected: [unclosed\n");
    dir
}

#[test]
fn full_run_batches_every_issue() {
    let dir = rules_dir();
    let mut collection = RulesCollection::from_dir(dir.path()).unwrap();

    // the broken document is skipped, not fatal
    assert_eq!(collection.log().parse_failure_count(), 1);
    assert_eq!(collection.log().parse_failures[0].variable, "broken");
    let names = collection.variable_names();
    assert!(names.contains("age") && names.contains("country"));
    assert!(!names.contains("broken"));

    let focus = collection.focus(["age", "country", "weight"]);
    let expected_focus: BTreeSet<String> =
        ["age", "country"].map(String::from).into_iter().collect();
    assert_eq!(focus, expected_focus);

    collection.check_variables_rules(&focus);

    // every sound rule landed in its bucket
    let age = &collection.variable_rules("age").unwrap().rules;
    assert_eq!(age.lookups.expected, vec!["Yes", "No"]);
    assert_eq!(age.edits.normalization.len(), 3);
    assert_eq!(age.allowed.missing.as_deref(), Some("not provided"));

    let country = &collection.variable_rules("country").unwrap().rules;
    assert!(!country.edits.remap.is_empty());
    // failed rules were never written
    assert_eq!(country.lookups.ontology, None);
    assert_eq!(country.allowed.blank, None);

    // issues arrive in focus order, then document order
    let issues = &collection.log().issues;
    assert_eq!(issues.len(), 3);
    assert!(issues.iter().all(|issue| issue.variable == "country"));
    assert_eq!(issues[0].rule, "ontology");
    assert_eq!(issues[0].failure.code, FailureCode::NotAllowed);
    assert_eq!(issues[1].rule, "blank");
    assert_eq!(issues[1].failure.code, FailureCode::NotAString);
    assert_eq!(issues[2].rule, "bogus");
    assert_eq!(issues[2].failure.code, FailureCode::RuleNotRecognized);
}

#[test]
fn revalidation_is_idempotent() {
    let dir = rules_dir();
    let mut collection = RulesCollection::from_dir(dir.path()).unwrap();
    let focus = collection.focus(["age", "country"]);

    collection.check_variables_rules(&focus);
    let first_pass = collection.clone();

    collection.check_variables_rules(&focus);
    assert_eq!(collection, first_pass);
}

#[test]
fn variables_outside_the_focus_are_never_checked() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "ghost.yml", "blank: 5\n");
    let mut collection = RulesCollection::from_dir(dir.path()).unwrap();

    let focus = collection.focus(["age", "weight"]);
    assert!(focus.is_empty());

    collection.check_variables_rules(&focus);
    assert!(collection.log().is_empty());
    assert!(!collection.variable_rules("ghost").unwrap().is_checked());
}

#[test]
fn duplicate_stems_keep_the_later_document() {
    let dir = tempfile::tempdir().unwrap();
    // "a.YAML" sorts before "a.yml", so the .yml document is parsed last
    write(dir.path(), "a.YAML", "missing: not provided\n");
    write(dir.path(), "a.yml", "missing: not collected\n");

    let mut collection = RulesCollection::from_dir(dir.path()).unwrap();
    assert_eq!(collection.variable_names().len(), 1);

    let focus = collection.focus(["a"]);
    collection.check_variables_rules(&focus);
    let rules = &collection.variable_rules("a").unwrap().rules;
    assert_eq!(rules.allowed.missing.as_deref(), Some("not collected"));
}

#[test]
fn missing_directory_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no_rules_here");
    let err = RulesCollection::from_dir(&missing).unwrap_err();
    assert!(matches!(err, RulesError::DirectoryNotFound { path } if path == missing));
}

#[test]
fn empty_directory_is_fatal_before_any_validation() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "README.txt", "no rule documents");
    let err = RulesCollection::from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, RulesError::DirectoryEmpty { path } if path == dir.path()));
}
