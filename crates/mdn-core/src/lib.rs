//! Normalization entry point.
//!
//! Receives the dataset and a rules directory, computes the focus (the
//! variables present in both), and drives batch rule validation. Rule
//! application to column values is not implemented yet: the observable
//! contract is "validate all applicable rules and surface errors", and
//! the table passes through unchanged.

mod report;

pub use report::{
    FormatReportPayload, ParseFailureJson, RuleIssueJson, write_format_report_json,
};

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Result;
use polars::prelude::DataFrame;

use mdn_model::ErrorLog;
use mdn_rules::RulesCollection;

/// Outcome of a normalization run.
#[derive(Debug, Clone)]
pub struct Curated {
    /// The curated table; currently the input unchanged.
    pub table: DataFrame,
    /// Variables that were in scope for validation.
    pub focus: BTreeSet<String>,
    /// The validated rule collection, with its accumulated error log.
    pub collection: RulesCollection,
}

impl Curated {
    /// Everything the validation pass found wrong.
    pub fn log(&self) -> &ErrorLog {
        self.collection.log()
    }
}

/// Validates every applicable rule document against the dataset's columns.
///
/// Directory-level failures (missing or empty rules directory) abort the
/// run; everything else accumulates in the returned error log.
pub fn normalize(metadata: &DataFrame, rules_dir: &Path) -> Result<Curated> {
    let mut collection = RulesCollection::from_dir(rules_dir)?;

    let columns: Vec<String> = metadata
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let focus = collection.focus(&columns);

    tracing::info!(
        columns = columns.len(),
        focus = focus.len(),
        "Validating rules for dataset variables"
    );
    collection.check_variables_rules(&focus);

    Ok(Curated {
        table: metadata.clone(),
        focus,
        collection,
    })
}
