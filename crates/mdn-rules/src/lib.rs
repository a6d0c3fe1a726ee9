//! Rule document discovery, schema checking and collection management.
//!
//! A rule document is a small YAML mapping, one per dataset variable,
//! keyed by rule kind (`expected`, `ontology`, `remap`, `validation`,
//! `normalization`, `blank`, `missing`, `format`). This crate discovers
//! the documents, checks every rule value against its kind's schema, and
//! fills the typed per-variable structure for the sound ones while
//! accumulating structured diagnostics for the rest.

pub mod checks;
mod collection;
mod discovery;
mod error;
mod reference;
mod variable;

pub use collection::{RulesCollection, compute_focus};
pub use discovery::{list_rule_files, variable_name};
pub use error::{Result, RulesError};
pub use reference::{AllowedValues, bundled_asset_path};
pub use variable::Rules;
