//! Shared allowed-values reference data.
//!
//! Checkers that constrain a rule value to a controlled set (ontology
//! names, blank/missing vocabulary, format tags, normalization keys, the
//! validation schema) read from one [`AllowedValues`] instance, loaded
//! once per collection. The asset path is explicit configuration; there is
//! no module-level state.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, RulesError};

/// Per-rule-kind allowed value sets, read-only after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllowedValues {
    /// External vocabularies the `ontology` rule may defer to.
    pub ontology: Vec<String>,
    /// Sentinel tokens accepted by the `blank` rule.
    pub blank: Vec<String>,
    /// Sentinel tokens accepted by the `missing` rule.
    pub missing: Vec<String>,
    /// Scalar type tags accepted by the `format` rule.
    pub format: Vec<String>,
    /// Keys accepted by the `normalization` rule.
    pub normalization: Vec<String>,
    /// Two-level schema for the `validation` rule: top-level key to the
    /// nested condition keys it accepts.
    pub validation: BTreeMap<String, Vec<String>>,
}

/// Asset mirror with every entry optional, so a missing rule entry can be
/// reported as such instead of as a parse error.
#[derive(Debug, Deserialize)]
struct RawAllowedValues {
    ontology: Option<Vec<String>>,
    blank: Option<Vec<String>>,
    missing: Option<Vec<String>>,
    format: Option<Vec<String>>,
    normalization: Option<Vec<String>>,
    validation: Option<BTreeMap<String, Vec<String>>>,
}

impl Default for AllowedValues {
    fn default() -> Self {
        let sentinels = vec![
            "not applicable".to_string(),
            "not collected".to_string(),
            "not provided".to_string(),
            "restricted access".to_string(),
        ];
        Self {
            ontology: vec!["Gazetteer ontology".to_string()],
            blank: sentinels.clone(),
            missing: sentinels,
            format: vec![
                "bool".to_string(),
                "float".to_string(),
                "int".to_string(),
                "str".to_string(),
            ],
            normalization: vec![
                "maximum".to_string(),
                "minimum".to_string(),
                "gated_value".to_string(),
            ],
            validation: BTreeMap::from([(
                "force_to_blank_if".to_string(),
                vec!["is null".to_string()],
            )]),
        }
    }
}

impl AllowedValues {
    /// Loads the reference sets from a YAML asset.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| RulesError::file_read(path, e))?;
        let raw: RawAllowedValues =
            serde_yaml::from_str(&text).map_err(|e| RulesError::YamlParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        fn require<T>(field: Option<T>, path: &Path, rule: &str) -> Result<T> {
            field.ok_or_else(|| RulesError::MissingReference {
                path: path.to_path_buf(),
                rule: rule.to_string(),
            })
        }

        Ok(Self {
            ontology: require(raw.ontology, path, "ontology")?,
            blank: require(raw.blank, path, "blank")?,
            missing: require(raw.missing, path, "missing")?,
            format: require(raw.format, path, "format")?,
            normalization: require(raw.normalization, path, "normalization")?,
            validation: require(raw.validation, path, "validation")?,
        })
    }

    /// Loads the asset shipped with this crate.
    pub fn bundled() -> Result<Self> {
        Self::from_path(&bundled_asset_path())
    }
}

/// Path of the allowed-values asset shipped with this crate.
pub fn bundled_asset_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("assets")
        .join("rules_allowed.yml")
}
