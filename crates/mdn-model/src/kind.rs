//! Type-safe enumerations for the rule vocabulary.
//!
//! Every rule document key must belong to the closed set of rule kinds
//! below; each kind routes its validated value to a fixed bucket of the
//! per-variable rule structure.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of rule kinds a variable's rule document may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// Controlled vocabulary of accepted values.
    /// Example: `expected: ["Yes", "No"]`
    Expected,

    /// Name of a third-party vocabulary to defer to.
    /// Example: `ontology: Gazetteer ontology`
    Ontology,

    /// Value replacements, raw value to substitute.
    /// Example: `remap: {US: USA}`
    Remap,

    /// Cross-column nulling condition.
    /// Example: `validation: {force_to_blank_if: {is null: [host_taxid]}}`
    Validation,

    /// Numeric range gating.
    /// Example: `normalization: {maximum: 120, minimum: 0}`
    Normalization,

    /// Sentinel token for intentionally blank entries.
    Blank,

    /// Sentinel token for intentionally missing entries.
    Missing,

    /// Expected scalar type tag (`bool`, `float`, `int` or `str`).
    Format,
}

/// Semantic group a validated rule is stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleBucket {
    /// Controlled-vocabulary constraints (`expected`, `ontology`).
    Lookups,
    /// Value-rewriting operations (`remap`, `validation`, `normalization`).
    Edits,
    /// Sentinel-value declarations (`blank`, `missing`, `format`).
    Allowed,
}

impl RuleKind {
    /// All rule kinds, in document-canonical order.
    pub const ALL: [RuleKind; 8] = [
        RuleKind::Expected,
        RuleKind::Ontology,
        RuleKind::Remap,
        RuleKind::Validation,
        RuleKind::Normalization,
        RuleKind::Blank,
        RuleKind::Missing,
        RuleKind::Format,
    ];

    /// Returns the kind name as it appears in rule documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Expected => "expected",
            RuleKind::Ontology => "ontology",
            RuleKind::Remap => "remap",
            RuleKind::Validation => "validation",
            RuleKind::Normalization => "normalization",
            RuleKind::Blank => "blank",
            RuleKind::Missing => "missing",
            RuleKind::Format => "format",
        }
    }

    /// Destination bucket for the validated value.
    pub fn bucket(&self) -> RuleBucket {
        match self {
            RuleKind::Expected | RuleKind::Ontology => RuleBucket::Lookups,
            RuleKind::Remap | RuleKind::Validation | RuleKind::Normalization => RuleBucket::Edits,
            RuleKind::Blank | RuleKind::Missing | RuleKind::Format => RuleBucket::Allowed,
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "expected" => Ok(RuleKind::Expected),
            "ontology" => Ok(RuleKind::Ontology),
            "remap" => Ok(RuleKind::Remap),
            "validation" => Ok(RuleKind::Validation),
            "normalization" => Ok(RuleKind::Normalization),
            "blank" => Ok(RuleKind::Blank),
            "missing" => Ok(RuleKind::Missing),
            "format" => Ok(RuleKind::Format),
            other => Err(format!("unknown rule kind: {other}")),
        }
    }
}

impl RuleBucket {
    /// Returns the bucket name as used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleBucket::Lookups => "lookups",
            RuleBucket::Edits => "edits",
            RuleBucket::Allowed => "allowed",
        }
    }
}

impl fmt::Display for RuleBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
