//! Rule collection management.
//!
//! Owns every variable's rule container, the shared allowed-values
//! reference and the error log for a validation run. Validation is
//! batched: one bad rule does not stop its variable, one bad variable
//! does not stop the collection.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};

use mdn_model::{
    CheckFailure, ErrorLog, FailureCode, ParseFailure, RuleIssue, RuleKind, VariableRules,
    display_value,
};

use crate::checks;
use crate::discovery::{list_rule_files, variable_name};
use crate::error::Result;
use crate::reference::AllowedValues;
use crate::variable::Rules;

/// All variables' rules for one normalization run.
#[derive(Debug, Clone, PartialEq)]
pub struct RulesCollection {
    variables_rules: BTreeMap<String, Rules>,
    reference: AllowedValues,
    log: ErrorLog,
}

impl RulesCollection {
    /// Creates an empty collection around the given reference sets.
    pub fn new(reference: AllowedValues) -> Self {
        Self {
            variables_rules: BTreeMap::new(),
            reference,
            log: ErrorLog::default(),
        }
    }

    /// Discovers and loads every rule document in a directory, using the
    /// built-in reference sets.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        Self::from_dir_with_reference(dir, AllowedValues::default())
    }

    /// Discovers and loads every rule document in a directory.
    ///
    /// Directory problems (missing, empty) are fatal. Per-document parse
    /// failures are accumulated into the error log and the document is
    /// skipped.
    pub fn from_dir_with_reference(dir: &Path, reference: AllowedValues) -> Result<Self> {
        let files = list_rule_files(dir)?;
        let mut collection = Self::new(reference);
        collection.load_variable_rules(&files);
        Ok(collection)
    }

    /// Parses the given rule documents into per-variable containers,
    /// keyed by the document's file stem.
    ///
    /// A document that fails to parse is recorded in the error log and
    /// skipped; loading continues. When two documents share a stem the
    /// later one wins.
    pub fn load_variable_rules(&mut self, paths: &[PathBuf]) {
        for path in paths {
            let variable = variable_name(path);
            match Rules::from_path(path) {
                Ok(rules) => {
                    if self.variables_rules.insert(variable.clone(), rules).is_some() {
                        tracing::warn!(
                            variable = %variable,
                            path = %path.display(),
                            "Duplicate rule document stem; keeping the later one"
                        );
                    }
                }
                Err(err) => {
                    tracing::warn!(
                        variable = %variable,
                        path = %path.display(),
                        error = %err,
                        "Skipping unparseable rule document"
                    );
                    self.log.record_parse_failure(ParseFailure {
                        variable,
                        path: path.clone(),
                        message: err.to_string(),
                    });
                }
            }
        }
        tracing::info!(
            count = self.variables_rules.len(),
            "Loaded variable rule documents"
        );
    }

    /// Names of every variable that has a rule container.
    pub fn variable_names(&self) -> BTreeSet<String> {
        self.variables_rules.keys().cloned().collect()
    }

    /// One variable's container, if it exists.
    pub fn variable_rules(&self, variable: &str) -> Option<&Rules> {
        self.variables_rules.get(variable)
    }

    /// Everything the run found wrong so far.
    pub fn log(&self) -> &ErrorLog {
        &self.log
    }

    /// The reference sets this collection validates against.
    pub fn reference(&self) -> &AllowedValues {
        &self.reference
    }

    /// Variables present both in the dataset and in this collection; the
    /// scope of a validation run.
    pub fn focus<I, S>(&self, columns: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        compute_focus(&self.variable_names(), columns)
    }

    /// Checks one rule and stores its value on success.
    ///
    /// Fail-fast form of the dispatcher: the structured issue is returned
    /// to the caller instead of logged, so `?` propagates the first bad
    /// rule. A variable not seen before gets an empty container.
    pub fn check_rule(
        &mut self,
        variable: &str,
        rule_name: &str,
        value: &Value,
    ) -> std::result::Result<(), RuleIssue> {
        let var_rules = self
            .variables_rules
            .entry(variable.to_string())
            .or_insert_with(|| Rules::from_mapping(Mapping::new()));
        dispatch(&self.reference, variable, rule_name, value, &mut var_rules.rules)
    }

    /// Validates every rule of every focus variable, accumulating issues
    /// into the error log.
    ///
    /// Rules are dispatched in document order, variables in focus order.
    /// Variables already checked are skipped, so a second identical pass
    /// changes neither the validated structures nor the log.
    pub fn check_variables_rules(&mut self, focus: &BTreeSet<String>) {
        for variable in focus {
            let Some(var_rules) = self.variables_rules.get_mut(variable) else {
                continue;
            };
            if var_rules.checked {
                continue;
            }
            for (key, raw) in var_rules.parsed.iter() {
                let rule_name = rule_key_name(key);
                if let Err(issue) =
                    dispatch(&self.reference, variable, &rule_name, raw, &mut var_rules.rules)
                {
                    self.log.record(issue);
                }
            }
            var_rules.checked = true;
            tracing::debug!(variable = %variable, "Checked variable rules");
        }
    }
}

/// The intersection of the collection's variables and the dataset's
/// columns, as an ordered set.
pub fn compute_focus<I, S>(variables: &BTreeSet<String>, columns: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    columns
        .into_iter()
        .filter(|column| variables.contains(column.as_ref()))
        .map(|column| column.as_ref().to_string())
        .collect()
}

/// Looks up the rule kind and runs its checker; on success writes the
/// value into the matching bucket slot of `target`.
fn dispatch(
    reference: &AllowedValues,
    variable: &str,
    rule_name: &str,
    value: &Value,
    target: &mut VariableRules,
) -> std::result::Result<(), RuleIssue> {
    let Ok(kind) = rule_name.parse::<RuleKind>() else {
        return Err(RuleIssue {
            variable: variable.to_string(),
            rule: rule_name.to_string(),
            bucket: None,
            value: value.clone(),
            failure: CheckFailure::new(FailureCode::RuleNotRecognized),
        });
    };
    match checks::check(kind, value, reference) {
        Ok(checked) => {
            target.store(checked);
            Ok(())
        }
        Err(failure) => Err(RuleIssue {
            variable: variable.to_string(),
            rule: kind.as_str().to_string(),
            bucket: Some(kind.bucket()),
            value: value.clone(),
            failure,
        }),
    }
}

/// Document keys should be strings; anything else can only ever be an
/// unrecognized rule, reported under its rendered form.
fn rule_key_name(key: &Value) -> String {
    match key.as_str() {
        Some(name) => name.to_string(),
        None => display_value(key),
    }
}
