// SPDX-License-Identifier: PMPL-1.0-or-later

//! Persistent storage for translation tables.
//!
//! Tables are flat `key: label` mappings in UTF-8 YAML (the native format) or
//! JSON. Keys are lowercased on load; labels are written back verbatim.

use crate::error::ItemNameError;
use crate::table::LabelMap;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Yaml,
    Json,
}

impl TableFormat {
    /// Format for `path`. Anything that is not `.json` is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => TableFormat::Json,
            _ => TableFormat::Yaml,
        }
    }

    pub fn parse(&self, path: &Path, content: &str) -> Result<LabelMap, ItemNameError> {
        if content.trim().is_empty() {
            return Ok(LabelMap::new());
        }
        let parsed: Option<LabelMap> = match self {
            TableFormat::Yaml => serde_yaml::from_str(content).map_err(|err| malformed(path, err))?,
            TableFormat::Json => serde_json::from_str(content).map_err(|err| malformed(path, err))?,
        };
        // `~` / `null` documents carry no labels.
        Ok(parsed.unwrap_or_default())
    }

    pub fn serialize(&self, table: &LabelMap) -> Result<String> {
        match self {
            TableFormat::Yaml => Ok(serde_yaml::to_string(table)?),
            TableFormat::Json => Ok(serde_json::to_string_pretty(table)?),
        }
    }
}

/// Load a table file with keys lowercased. A missing file is an empty table;
/// a file that exists but does not parse is an error.
pub fn load_table_file(path: &Path) -> Result<LabelMap> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no table file, starting empty");
        return Ok(LabelMap::new());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading translation table {}", path.display()))?;
    let table = TableFormat::from_path(path).parse(path, &content)?;
    tracing::debug!(path = %path.display(), labels = table.len(), "table file loaded");
    Ok(table
        .into_iter()
        .map(|(key, label)| (key.to_lowercase(), label))
        .collect())
}

/// Write `table` to `path`, creating parent directories.
pub fn persist_table(path: &Path, table: &LabelMap) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    let content = TableFormat::from_path(path).serialize(table)?;
    fs::write(path, content)
        .with_context(|| format!("writing translation table {}", path.display()))?;
    tracing::info!(path = %path.display(), labels = table.len(), "translation table saved");
    Ok(())
}

fn malformed(path: &Path, err: impl std::fmt::Display) -> ItemNameError {
    ItemNameError::MalformedTable {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}
