//! Error types for rule discovery and loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while locating and loading rule documents.
///
/// Directory-level failures are fatal: no variable can be validated
/// without a usable rules directory. Per-document parse failures are not
/// represented here; they accumulate in the collection's error log.
#[derive(Debug, Error)]
pub enum RulesError {
    /// Rules directory not found or not a directory.
    #[error("rules directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Rules directory contains no rule documents.
    #[error("rules directory is empty: {path}")]
    DirectoryEmpty { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read rules directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read a file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a YAML document.
    #[error("failed to parse YAML {path}: {message}")]
    YamlParse { path: PathBuf, message: String },

    /// A document parsed, but its root is not a key-value mapping.
    #[error("rule document is not a mapping: {path}")]
    NotAMapping { path: PathBuf },

    /// The allowed-values asset lacks the entry for a rule kind.
    #[error("allowed-values asset {path} is missing the \"{rule}\" entry")]
    MissingReference { path: PathBuf, rule: String },
}

impl RulesError {
    pub(crate) fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, RulesError>;
