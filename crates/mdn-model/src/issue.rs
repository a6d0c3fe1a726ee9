//! Structured formatting diagnostics.
//!
//! Every schema-check failure becomes one [`RuleIssue`] carrying enough
//! context (variable, rule kind, offending value, sub-code) to locate the
//! problem without reading source. Issues are accumulated in an
//! [`ErrorLog`], never silently dropped.

use std::fmt;
use std::path::PathBuf;

use serde_yaml::Value;

use crate::kind::RuleBucket;

/// Sub-code naming which schema constraint a rule value violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCode {
    NotAList,
    NotAString,
    NotADictionary,
    NotANestedDictionary,
    NotAllowed,
    NotNumeric,
    /// A remap key or value that is not a string, integer or float.
    NotScalar,
    /// The rule kind name is not in the closed enumeration.
    RuleNotRecognized,
}

impl FailureCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureCode::NotAList => "not a list",
            FailureCode::NotAString => "not a string",
            FailureCode::NotADictionary => "not a dictionary",
            FailureCode::NotANestedDictionary => "not a nested dictionary",
            FailureCode::NotAllowed => "not allowed",
            FailureCode::NotNumeric => "not numeric",
            FailureCode::NotScalar => "not str, int or float",
            FailureCode::RuleNotRecognized => "rule not recognized",
        }
    }
}

impl fmt::Display for FailureCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A schema-check failure: sub-code plus the offending values, already
/// rendered for interpolation into the diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckFailure {
    pub code: FailureCode,
    pub offending: Vec<String>,
}

impl CheckFailure {
    pub fn new(code: FailureCode) -> Self {
        Self {
            code,
            offending: Vec::new(),
        }
    }

    pub fn with(code: FailureCode, offending: Vec<String>) -> Self {
        Self { code, offending }
    }
}

impl fmt::Display for CheckFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.offending.is_empty() {
            f.write_str(self.code.as_str())
        } else {
            write!(f, "{}: {}", self.code, self.offending.join(", "))
        }
    }
}

/// One rule that failed validation, with its full reporting context.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleIssue {
    /// Variable (dataset column) the rule document belongs to.
    pub variable: String,
    /// Rule kind name as written in the document; kept as a string so an
    /// unrecognized kind is still representable.
    pub rule: String,
    /// Destination bucket, or `None` when the kind itself is unrecognized.
    pub bucket: Option<RuleBucket>,
    /// Offending raw value, reproduced for inspection.
    pub value: Value,
    pub failure: CheckFailure,
}

impl RuleIssue {
    /// Renders the two-part diagnostic: generic preamble with the value
    /// re-serialized as a commented block, then the arrow-separated cause.
    pub fn message(&self) -> String {
        format!(
            "Wrong formatting for \"{}\" rule; variable {}:\n{}\n-> {}",
            self.rule,
            self.variable,
            yaml_comment_block(&self.value),
            self.failure
        )
    }
}

impl fmt::Display for RuleIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// A rule document that never reached the checker stage.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseFailure {
    /// Variable name derived from the document's file stem.
    pub variable: String,
    pub path: PathBuf,
    pub message: String,
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to parse rules for variable {} ({}): {}",
            self.variable,
            self.path.display(),
            self.message
        )
    }
}

/// Accumulator for everything a validation run found wrong.
///
/// Schema issues and document-parse failures are kept apart since a
/// malformed document never reaches the checker stage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorLog {
    pub issues: Vec<RuleIssue>,
    pub parse_failures: Vec<ParseFailure>,
}

impl ErrorLog {
    pub fn record(&mut self, issue: RuleIssue) {
        self.issues.push(issue);
    }

    pub fn record_parse_failure(&mut self, failure: ParseFailure) {
        self.parse_failures.push(failure);
    }

    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    pub fn parse_failure_count(&self) -> usize {
        self.parse_failures.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty() && self.parse_failures.is_empty()
    }
}

/// Re-serializes a rule value as a `\t# `-commented YAML block for the
/// diagnostic preamble.
pub fn yaml_comment_block(value: &Value) -> String {
    let dumped = match serde_yaml::to_string(value) {
        Ok(text) => text,
        Err(_) => display_value(value),
    };
    format!(
        "\t# {}",
        dumped.trim_end_matches('\n').replace('\n', "\n\t# ")
    )
}

/// Compact single-line rendering of a YAML value, used when interpolating
/// offending items into a cause clause.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(items) => {
            let inner: Vec<String> = items.iter().map(display_value).collect();
            format!("[{}]", inner.join(", "))
        }
        Value::Mapping(mapping) => {
            let inner: Vec<String> = mapping
                .iter()
                .map(|(key, value)| format!("{}: {}", display_value(key), display_value(value)))
                .collect();
            format!("{{{}}}", inner.join(", "))
        }
        Value::Tagged(tagged) => display_value(&tagged.value),
    }
}
