//! Per-variable rule container.

use std::path::Path;

use serde_yaml::{Mapping, Value};

use mdn_model::VariableRules;

use crate::error::{Result, RulesError};

/// One variable's raw rule document plus the validated structure derived
/// from it.
///
/// The container does not validate itself; validation is driven by the
/// collection so reference data is loaded once and errors batch across
/// variables. The validated structure starts at the default empty shape
/// and is filled in-place only for rule kinds that pass their check.
#[derive(Debug, Clone, PartialEq)]
pub struct Rules {
    /// Raw parsed document, rule-kind name to untyped value, in document
    /// order.
    pub parsed: Mapping,
    /// Validated rules; reflects only sound input.
    pub rules: VariableRules,
    pub(crate) checked: bool,
}

impl Rules {
    /// Wraps an already-parsed document. The validated structure is built
    /// fresh here, never shared between variables.
    pub fn from_mapping(parsed: Mapping) -> Self {
        Self {
            parsed,
            rules: VariableRules::default(),
            checked: false,
        }
    }

    /// Reads and parses one rule document from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| RulesError::file_read(path, e))?;
        let value: Value = serde_yaml::from_str(&text).map_err(|e| RulesError::YamlParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        match value {
            Value::Mapping(parsed) => Ok(Self::from_mapping(parsed)),
            _ => Err(RulesError::NotAMapping {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Whether this variable already went through a validation pass.
    pub fn is_checked(&self) -> bool {
        self.checked
    }
}
