//! JSON format report.
//!
//! Serializes everything a validation run found wrong into a versioned
//! payload a caller can archive or render. Every issue names its variable
//! and rule kind and reproduces the offending raw value, so no source
//! inspection is needed to locate a problem.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use mdn_model::{ErrorLog, display_value};

#[derive(Debug, Serialize)]
pub struct FormatReportPayload {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub dataset: String,
    pub issue_count: usize,
    pub parse_failure_count: usize,
    pub issues: Vec<RuleIssueJson>,
    pub parse_failures: Vec<ParseFailureJson>,
}

#[derive(Debug, Serialize)]
pub struct RuleIssueJson {
    pub variable: String,
    pub rule: String,
    pub bucket: Option<String>,
    /// Offending raw value in compact YAML form.
    pub value: String,
    /// Sub-code naming the violated constraint.
    pub cause: String,
    pub offending: Vec<String>,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ParseFailureJson {
    pub variable: String,
    pub path: String,
    pub message: String,
}

const REPORT_SCHEMA: &str = "mdn.format-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

pub fn write_format_report_json(
    output_dir: &Path,
    dataset: &str,
    log: &ErrorLog,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join("format_report.json");
    let payload = FormatReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        dataset: dataset.to_string(),
        issue_count: log.issue_count(),
        parse_failure_count: log.parse_failure_count(),
        issues: log
            .issues
            .iter()
            .map(|issue| RuleIssueJson {
                variable: issue.variable.clone(),
                rule: issue.rule.clone(),
                bucket: issue.bucket.map(|bucket| bucket.as_str().to_string()),
                value: display_value(&issue.value),
                cause: issue.failure.code.as_str().to_string(),
                offending: issue.failure.offending.clone(),
                message: issue.message(),
            })
            .collect(),
        parse_failures: log
            .parse_failures
            .iter()
            .map(|failure| ParseFailureJson {
                variable: failure.variable.clone(),
                path: failure.path.display().to_string(),
                message: failure.message.clone(),
            })
            .collect(),
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(&output_path, format!("{json}\n"))?;
    Ok(output_path)
}
