//! Rule document discovery.

use std::path::{Path, PathBuf};

use crate::error::{Result, RulesError};

/// Lists all rule documents (`.yml`/`.yaml`, case-insensitive) in a
/// directory.
///
/// Returns paths sorted by filename so validation order is deterministic.
/// There is no partial-success mode: a missing directory or a directory
/// without any rule document is a hard failure.
pub fn list_rule_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(RulesError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| RulesError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| RulesError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let is_rule_document = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("yml") || ext.eq_ignore_ascii_case("yaml"))
            .unwrap_or(false);

        if is_rule_document {
            files.push(path);
        }
    }

    if files.is_empty() {
        return Err(RulesError::DirectoryEmpty {
            path: dir.to_path_buf(),
        });
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    tracing::debug!(
        count = files.len(),
        dir = %dir.display(),
        "Discovered rule documents"
    );

    Ok(files)
}

/// Derives the variable name from a rule document path: the file name with
/// its extension stripped.
pub fn variable_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default()
        .to_string()
}
