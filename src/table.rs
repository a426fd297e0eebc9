// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation table: canonical key → localized label.
//!
//! The table is the single source of truth for resolution. It is built by
//! merging the default set with the operator's override set (override wins),
//! and remembers whether it changed since load so shutdown only rewrites the
//! override file when needed.

use crate::canonical::canonicalize;
use crate::error::{ItemNameError, Result};
use std::collections::BTreeMap;
use std::path::Path;

/// Default labels shipped with the crate.
pub const BUNDLED_DEFAULTS: &str = include_str!("../resources/translations.yml");

pub type LabelMap = BTreeMap<String, String>;

#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    defaults: LabelMap,
    entries: LabelMap,
    dirty: bool,
}

impl TranslationTable {
    /// Merge `defaults` with `overrides`. Keys from both sides are lowercased.
    pub fn new(defaults: LabelMap, overrides: LabelMap) -> Self {
        let defaults = lowercase_keys(defaults);
        let mut entries = defaults.clone();
        entries.extend(lowercase_keys(overrides));
        Self {
            defaults,
            entries,
            dirty: false,
        }
    }

    /// Table holding only the bundled defaults.
    pub fn bundled() -> Result<Self> {
        Ok(Self::new(parse_bundled()?, LabelMap::new()))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Insert or overwrite a label. Returns the canonical key it was stored
    /// under.
    pub fn register(&mut self, key: &str, label: impl Into<String>) -> String {
        let key = canonicalize(key);
        self.entries.insert(key.clone(), label.into());
        self.dirty = true;
        key
    }

    /// Reset the table to the default set, discarding every override and
    /// every runtime registration.
    pub fn restore_defaults(&mut self) {
        self.entries = self.defaults.clone();
        self.dirty = true;
    }

    /// Hand back the current table for persistence if it changed since load.
    pub fn into_dirty_entries(self) -> Option<LabelMap> {
        self.dirty.then_some(self.entries)
    }
}

fn lowercase_keys(map: LabelMap) -> LabelMap {
    map.into_iter()
        .map(|(key, label)| (key.to_lowercase(), label))
        .collect()
}

/// Parse the bundled default labels.
pub fn parse_bundled() -> Result<LabelMap> {
    serde_yaml::from_str(BUNDLED_DEFAULTS).map_err(|err| ItemNameError::MalformedTable {
        path: Path::new("resources/translations.yml").to_path_buf(),
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> LabelMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn override_wins_and_keys_are_lowercased() {
        let table = TranslationTable::new(
            map(&[("Stone", "돌"), ("dirt", "흙")]),
            map(&[("STONE", "바위")]),
        );
        assert_eq!(table.get("stone"), Some("바위"));
        assert_eq!(table.get("dirt"), Some("흙"));
        assert!(!table.contains("Stone"));
        assert!(!table.is_dirty());
    }

    #[test]
    fn register_canonicalizes_key() {
        let mut table = TranslationTable::default();
        let key = table.register("Example Item", "예시 아이템");
        assert_eq!(key, "example_item");
        assert_eq!(table.get("example_item"), Some("예시 아이템"));
        assert!(table.is_dirty());
    }

    #[test]
    fn restore_defaults_drops_overrides() {
        let mut table = TranslationTable::new(
            map(&[("stone", "돌")]),
            map(&[("stone", "바위"), ("custom_thing", "사용자")]),
        );
        table.restore_defaults();
        assert_eq!(table.get("stone"), Some("돌"));
        assert_eq!(table.get("custom_thing"), None);
        assert!(table.is_dirty());
    }

    #[test]
    fn clean_table_is_not_persisted() {
        let table = TranslationTable::new(map(&[("stone", "돌")]), LabelMap::new());
        assert!(table.into_dirty_entries().is_none());
    }

    #[test]
    fn bundled_defaults_parse_with_lowercase_keys() {
        let table = TranslationTable::bundled().expect("bundled table should parse");
        assert!(!table.is_empty());
        let raw = parse_bundled().expect("bundled table should parse");
        assert_eq!(raw.len(), table.len());
        assert!(raw.keys().all(|key| key == &key.to_lowercase()));
        assert!(table.contains("wooden_pickaxe"));
        assert!(table.contains("furnace"));
    }
}
