// SPDX-License-Identifier: PMPL-1.0-or-later

//! Network-id index: numeric protocol id → canonical key.
//!
//! Derived from the dictionary and a snapshot of the translation table. Later
//! table changes do not reach the index until it is rebuilt or extended.

use crate::dictionary::DictionaryEntry;
use crate::normalize::normalize_string_id;
use crate::table::TranslationTable;
use crate::types::NetworkId;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetIdIndex {
    keys: BTreeMap<NetworkId, String>,
}

impl NetIdIndex {
    pub fn build(entries: &[DictionaryEntry], table: &TranslationTable) -> Self {
        let mut index = Self::default();
        index.extend(entries, table);
        index
    }

    /// Add entries for numeric ids not indexed yet. Existing ids keep their
    /// key, so the first entry for a duplicated numeric id wins. Returns the
    /// number of ids added.
    pub fn extend(&mut self, entries: &[DictionaryEntry], table: &TranslationTable) -> usize {
        let mut added = 0;
        for entry in entries {
            if self.keys.contains_key(&entry.numeric_id) {
                continue;
            }
            if let Some(key) = normalize_string_id(&entry.string_id, table) {
                self.keys.insert(entry.numeric_id, key);
                added += 1;
            }
        }
        added
    }

    pub fn get(&self, network_id: NetworkId) -> Option<&str> {
        self.keys.get(&network_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NetworkId, &str)> {
        self.keys.iter().map(|(id, key)| (*id, key.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::LabelMap;

    fn table(keys: &[&str]) -> TranslationTable {
        let defaults: LabelMap = keys
            .iter()
            .map(|key| (key.to_string(), key.to_uppercase()))
            .collect();
        TranslationTable::new(defaults, LabelMap::new())
    }

    #[test]
    fn unmatched_entries_are_omitted() {
        let entries = vec![
            DictionaryEntry::new(1, "minecraft:stone"),
            DictionaryEntry::new(2, "minecraft:mystery"),
        ];
        let index = NetIdIndex::build(&entries, &table(&["stone"]));
        assert_eq!(index.len(), 1);
        assert_eq!(index.get(1), Some("stone"));
        assert_eq!(index.get(2), None);
    }

    #[test]
    fn first_writer_wins_for_duplicate_ids() {
        let entries = vec![
            DictionaryEntry::new(5, "minecraft:furnace"),
            DictionaryEntry::new(5, "minecraft:stone"),
        ];
        let index = NetIdIndex::build(&entries, &table(&["stone", "furnace"]));
        assert_eq!(index.get(5), Some("furnace"));
    }

    #[test]
    fn extend_only_fills_gaps() {
        let entries = vec![
            DictionaryEntry::new(1, "minecraft:stone"),
            DictionaryEntry::new(2, "minecraft:apple"),
        ];
        let mut index = NetIdIndex::build(&entries, &table(&["stone"]));
        assert_eq!(index.len(), 1);
        let added = index.extend(&entries, &table(&["stone", "apple"]));
        assert_eq!(added, 1);
        assert_eq!(index.get(2), Some("apple"));
    }
}
