//! Validated per-variable rule structure.
//!
//! Every variable starts from the same default shape; slots are filled
//! in-place only for rule kinds that passed their schema check, so the
//! structure only ever reflects sound input.

use serde::Serialize;
use serde_yaml::Mapping;

use crate::kind::RuleKind;

/// Value-rewriting operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EditRules {
    /// Raw-value to replacement mapping, stored verbatim.
    pub remap: Mapping,
    /// Cross-column nulling condition, stored verbatim.
    pub validation: Mapping,
    /// Numeric clamping/gating spec, stored verbatim.
    pub normalization: Mapping,
}

/// Controlled-vocabulary constraints.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LookupRules {
    /// Ordered sequence of accepted values.
    pub expected: Vec<String>,
    /// Name of the external vocabulary to defer to.
    pub ontology: Option<String>,
}

/// Sentinel-value declarations.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AllowedRules {
    pub blank: Option<String>,
    pub missing: Option<String>,
    /// Scalar type tag, one of `bool`, `float`, `int`, `str`.
    pub format: Option<String>,
}

/// The validated rule structure for one variable.
///
/// Constructed fresh per variable, never shared between variables.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VariableRules {
    pub edits: EditRules,
    pub lookups: LookupRules,
    pub allowed: AllowedRules,
}

/// A rule value that passed its schema check, with the typed payload the
/// checker extracted. Storing one into [`VariableRules`] cannot fail.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckedRule {
    Expected(Vec<String>),
    Ontology(String),
    Remap(Mapping),
    Validation(Mapping),
    Normalization(Mapping),
    Blank(String),
    Missing(String),
    Format(String),
}

impl CheckedRule {
    /// The rule kind this payload belongs to.
    pub fn kind(&self) -> RuleKind {
        match self {
            CheckedRule::Expected(_) => RuleKind::Expected,
            CheckedRule::Ontology(_) => RuleKind::Ontology,
            CheckedRule::Remap(_) => RuleKind::Remap,
            CheckedRule::Validation(_) => RuleKind::Validation,
            CheckedRule::Normalization(_) => RuleKind::Normalization,
            CheckedRule::Blank(_) => RuleKind::Blank,
            CheckedRule::Missing(_) => RuleKind::Missing,
            CheckedRule::Format(_) => RuleKind::Format,
        }
    }
}

impl VariableRules {
    /// Writes a checked rule into its bucket slot.
    pub fn store(&mut self, rule: CheckedRule) {
        match rule {
            CheckedRule::Expected(values) => self.lookups.expected = values,
            CheckedRule::Ontology(name) => self.lookups.ontology = Some(name),
            CheckedRule::Remap(mapping) => self.edits.remap = mapping,
            CheckedRule::Validation(mapping) => self.edits.validation = mapping,
            CheckedRule::Normalization(mapping) => self.edits.normalization = mapping,
            CheckedRule::Blank(token) => self.allowed.blank = Some(token),
            CheckedRule::Missing(token) => self.allowed.missing = Some(token),
            CheckedRule::Format(tag) => self.allowed.format = Some(tag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;

    #[test]
    fn default_structure_is_empty() {
        let rules = VariableRules::default();
        assert!(rules.edits.remap.is_empty());
        assert!(rules.edits.validation.is_empty());
        assert!(rules.edits.normalization.is_empty());
        assert!(rules.lookups.expected.is_empty());
        assert_eq!(rules.lookups.ontology, None);
        assert_eq!(rules.allowed.blank, None);
        assert_eq!(rules.allowed.missing, None);
        assert_eq!(rules.allowed.format, None);
    }

    #[test]
    fn store_fills_the_matching_slot_only() {
        let mut rules = VariableRules::default();
        rules.store(CheckedRule::Expected(vec!["Yes".into(), "No".into()]));
        assert_eq!(rules.lookups.expected, vec!["Yes", "No"]);
        assert_eq!(rules.edits, EditRules::default());
        assert_eq!(rules.allowed, AllowedRules::default());

        let mut remap = Mapping::new();
        remap.insert(Value::from("US"), Value::from("USA"));
        rules.store(CheckedRule::Remap(remap.clone()));
        assert_eq!(rules.edits.remap, remap);
    }

    #[test]
    fn checked_rule_reports_its_kind() {
        assert_eq!(
            CheckedRule::Missing("not provided".into()).kind(),
            RuleKind::Missing
        );
        assert_eq!(
            CheckedRule::Normalization(Mapping::new()).kind(),
            RuleKind::Normalization
        );
    }
}
