// SPDX-License-Identifier: PMPL-1.0-or-later

//! Protocol item-type dictionary.
//!
//! The host runtime owns the real dictionary; [`ItemTypeDictionary`] is the
//! seam the resolver consumes. [`StaticDictionary`] is an in-memory
//! implementation loadable from a JSON/YAML file, used by the CLI and tests.

use crate::error::{ItemNameError, Result};
use crate::types::{ItemDescriptor, NetworkId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

/// One `(numeric id, string id)` pair of the dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub numeric_id: NetworkId,
    pub string_id: String,
}

impl DictionaryEntry {
    pub fn new(numeric_id: NetworkId, string_id: impl Into<String>) -> Self {
        Self {
            numeric_id,
            string_id: string_id.into(),
        }
    }
}

pub trait ItemTypeDictionary: Send + Sync {
    /// Every entry, in dictionary order.
    fn entries(&self) -> Vec<DictionaryEntry>;

    /// Map a numeric id to its string id.
    fn string_id(&self, network_id: NetworkId) -> Result<String>;

    /// Network id of `item`. The null item is always 0.
    fn network_id(&self, item: &ItemDescriptor) -> NetworkId {
        if item.null {
            0
        } else {
            item.network_id
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StaticDictionary {
    entries: Vec<DictionaryEntry>,
    by_numeric: HashMap<NetworkId, String>,
}

impl StaticDictionary {
    pub fn new(entries: Vec<DictionaryEntry>) -> Self {
        let mut by_numeric = HashMap::with_capacity(entries.len());
        for entry in &entries {
            by_numeric
                .entry(entry.numeric_id)
                .or_insert_with(|| entry.string_id.clone());
        }
        Self {
            entries,
            by_numeric,
        }
    }

    pub fn from_pairs<S: Into<String>>(pairs: impl IntoIterator<Item = (NetworkId, S)>) -> Self {
        Self::new(
            pairs
                .into_iter()
                .map(|(id, string_id)| DictionaryEntry::new(id, string_id))
                .collect(),
        )
    }

    /// Load a dictionary file. Two layouts are accepted: a list of
    /// `{ numeric_id, string_id }` entries, or the runtime-id map layout
    /// `{ "<string id>": { runtime_id: n } }`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ItemNameError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: DictionaryFile = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content).map_err(|err| malformed(path, err))?,
            Some("yaml") | Some("yml") => {
                serde_yaml::from_str(&content).map_err(|err| malformed(path, err))?
            }
            _ => return Err(ItemNameError::UnsupportedFormat(path.to_path_buf())),
        };
        Ok(Self::new(file.into_entries()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ItemTypeDictionary for StaticDictionary {
    fn entries(&self) -> Vec<DictionaryEntry> {
        self.entries.clone()
    }

    fn string_id(&self, network_id: NetworkId) -> Result<String> {
        self.by_numeric
            .get(&network_id)
            .cloned()
            .ok_or(ItemNameError::UnknownNetworkId(network_id))
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DictionaryFile {
    Entries(Vec<DictionaryEntry>),
    RuntimeIds(BTreeMap<String, RuntimeIdEntry>),
}

#[derive(Debug, Deserialize)]
struct RuntimeIdEntry {
    runtime_id: NetworkId,
}

impl DictionaryFile {
    fn into_entries(self) -> Vec<DictionaryEntry> {
        match self {
            DictionaryFile::Entries(entries) => entries,
            DictionaryFile::RuntimeIds(map) => {
                let mut entries: Vec<DictionaryEntry> = map
                    .into_iter()
                    .map(|(string_id, entry)| DictionaryEntry::new(entry.runtime_id, string_id))
                    .collect();
                entries.sort_by_key(|entry| entry.numeric_id);
                entries
            }
        }
    }
}

fn malformed(path: &Path, err: impl std::fmt::Display) -> ItemNameError {
    ItemNameError::MalformedDictionary {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}
