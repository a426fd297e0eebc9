// SPDX-License-Identifier: PMPL-1.0-or-later

//! The resolution service.
//!
//! `ItemNameService` owns the translation table, the network-id index, the
//! resolution cache and the failure log. Translation runs under a shared lock
//! on the table so lookups proceed in parallel; registration and restore take
//! the exclusive lock and clear the cache before releasing it, so a
//! translation can never store a label computed from a stale table.
//!
//! Lookup tiers, first success wins:
//!
//! 1. custom name (unless `must`), never cached
//! 2. resolution cache by state id
//! 3. derived key in the table
//! 4. network-id index
//! 5. dictionary string id run through the normalizer
//! 6. failure: record it and fall back to the item's default name

use crate::cache::ResolutionCache;
use crate::derive::KeyDeriver;
use crate::dictionary::ItemTypeDictionary;
use crate::failures::{FailureLog, FailureRecord};
use crate::index::NetIdIndex;
use crate::normalize::normalize_string_id;
use crate::table::{LabelMap, TranslationTable};
use crate::types::{ItemDescriptor, NetworkId, StateId};
use parking_lot::{Mutex, RwLock};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

struct Tables {
    table: TranslationTable,
    index: NetIdIndex,
    deriver: KeyDeriver,
}

/// Counters for each resolution outcome.
#[derive(Debug, Default)]
pub struct ResolverStats {
    translations: AtomicU64,
    custom_names: AtomicU64,
    cache_hits: AtomicU64,
    derivations: AtomicU64,
    table_hits: AtomicU64,
    index_hits: AtomicU64,
    string_id_hits: AtomicU64,
    failures: AtomicU64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    pub translations: u64,
    pub custom_names: u64,
    pub cache_hits: u64,
    pub derivations: u64,
    pub table_hits: u64,
    pub index_hits: u64,
    pub string_id_hits: u64,
    pub failures: u64,
}

impl ResolverStats {
    fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            translations: self.translations.load(Ordering::Relaxed),
            custom_names: self.custom_names.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            derivations: self.derivations.load(Ordering::Relaxed),
            table_hits: self.table_hits.load(Ordering::Relaxed),
            index_hits: self.index_hits.load(Ordering::Relaxed),
            string_id_hits: self.string_id_hits.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
        }
    }
}

pub struct ItemNameService {
    tables: RwLock<Tables>,
    cache: RwLock<ResolutionCache>,
    failures: Mutex<FailureLog>,
    dictionary: Arc<dyn ItemTypeDictionary>,
    stats: ResolverStats,
}

impl ItemNameService {
    /// Merge `defaults` with `overrides`, then build the network-id index
    /// from the dictionary against the merged table.
    pub fn initialize(
        defaults: LabelMap,
        overrides: LabelMap,
        dictionary: Arc<dyn ItemTypeDictionary>,
    ) -> Self {
        Self::with_deriver(
            TranslationTable::new(defaults, overrides),
            dictionary,
            KeyDeriver::new(),
        )
    }

    pub fn with_deriver(
        table: TranslationTable,
        dictionary: Arc<dyn ItemTypeDictionary>,
        deriver: KeyDeriver,
    ) -> Self {
        let index = NetIdIndex::build(&dictionary.entries(), &table);
        tracing::info!(
            labels = table.len(),
            indexed = index.len(),
            rules = ?deriver.rule_names(),
            "item name service initialized"
        );
        Self {
            tables: RwLock::new(Tables {
                table,
                index,
                deriver,
            }),
            cache: RwLock::new(ResolutionCache::default()),
            failures: Mutex::new(FailureLog::default()),
            dictionary,
            stats: ResolverStats::default(),
        }
    }

    /// Resolve the display label of `item`. Never fails: when every tier
    /// misses, the failure is recorded and the item's default name returned.
    ///
    /// With `must` set, a custom name does not short-circuit resolution. It is
    /// still returned as the fallback when every tier misses.
    pub fn translate(&self, item: &ItemDescriptor, must: bool) -> String {
        ResolverStats::bump(&self.stats.translations);
        if !must && item.has_custom_name() {
            ResolverStats::bump(&self.stats.custom_names);
            return item.custom_name.clone().unwrap_or_default();
        }

        let tables = self.tables.read();
        let state_id = item.state_id;

        let cached = self.cache.read().get(state_id).map(str::to_owned);
        if let Some(label) = cached {
            ResolverStats::bump(&self.stats.cache_hits);
            tracing::trace!(state_id, "cache hit");
            return label;
        }

        ResolverStats::bump(&self.stats.derivations);
        let key = tables.deriver.derive(item);
        if let Some(label) = tables.table.get(&key) {
            ResolverStats::bump(&self.stats.table_hits);
            return self.remember(state_id, label);
        }

        let net_id = self.dictionary.network_id(item);
        if let Some(indexed) = tables.index.get(net_id) {
            match tables.table.get(indexed) {
                Some(label) => {
                    ResolverStats::bump(&self.stats.index_hits);
                    return self.remember(state_id, label);
                }
                None => tracing::warn!(
                    net_id,
                    key = indexed,
                    "indexed key is no longer in the translation table"
                ),
            }
        }

        let string_id = match self.dictionary.string_id(net_id) {
            Ok(string_id) => {
                let label = normalize_string_id(&string_id, &tables.table)
                    .and_then(|normalized| tables.table.get(&normalized));
                if let Some(label) = label {
                    ResolverStats::bump(&self.stats.string_id_hits);
                    return self.remember(state_id, label);
                }
                string_id
            }
            Err(err) => {
                tracing::debug!(net_id, error = %err, "dictionary lookup failed");
                format!("unknown_{}", net_id)
            }
        };
        drop(tables);

        let record = FailureRecord {
            vanilla_name: item.vanilla_name.clone(),
            string_id,
            key,
        };
        tracing::error!(net_id, state_id, "failed to translate item : {}", record);
        self.failures.lock().record(net_id, record);
        ResolverStats::bump(&self.stats.failures);
        item.default_name().to_string()
    }

    fn remember(&self, state_id: StateId, label: &str) -> String {
        self.cache.write().insert(state_id, label);
        label.to_string()
    }

    /// Key the deriver produces for `item`, without resolving it.
    pub fn derive_key(&self, item: &ItemDescriptor) -> String {
        self.tables.read().deriver.derive(item)
    }

    /// Store `label` under the canonical form of `key`. Returns the key as
    /// stored.
    pub fn register(&self, key: &str, label: &str) -> String {
        let mut tables = self.tables.write();
        let key = tables.table.register(key, label);
        self.cache.write().clear();
        tracing::info!(key = %key, label, "translation registered");
        key
    }

    /// Discard every override and registration, returning to the defaults.
    pub fn restore_defaults(&self) {
        let mut tables = self.tables.write();
        tables.table.restore_defaults();
        self.cache.write().clear();
        tracing::info!(labels = tables.table.len(), "translations restored to defaults");
    }

    /// Rebuild the network-id index from scratch against the current table.
    pub fn rebuild_index(&self) -> usize {
        let mut tables = self.tables.write();
        tables.index = NetIdIndex::build(&self.dictionary.entries(), &tables.table);
        tracing::info!(indexed = tables.index.len(), "network id index rebuilt");
        tables.index.len()
    }

    /// Index dictionary entries that were not indexed yet, keeping existing
    /// entries. Returns how many were added.
    pub fn refresh_index(&self) -> usize {
        let mut tables = self.tables.write();
        let Tables { table, index, .. } = &mut *tables;
        let added = index.extend(&self.dictionary.entries(), table);
        tracing::info!(added, indexed = index.len(), "network id index refreshed");
        added
    }

    pub fn index_snapshot(&self) -> NetIdIndex {
        self.tables.read().index.clone()
    }

    pub fn label(&self, key: &str) -> Option<String> {
        self.tables.read().table.get(key).map(str::to_owned)
    }

    pub fn is_dirty(&self) -> bool {
        self.tables.read().table.is_dirty()
    }

    /// `(network id, diagnostic)` for every recorded failure, by network id.
    pub fn list_failures(&self) -> Vec<(NetworkId, String)> {
        self.failures.lock().list()
    }

    pub fn failure(&self, network_id: NetworkId) -> Option<FailureRecord> {
        self.failures.lock().get(network_id).cloned()
    }

    pub fn cached_label(&self, state_id: StateId) -> Option<String> {
        self.cache.read().get(state_id).map(str::to_owned)
    }

    pub fn cache_len(&self) -> usize {
        self.cache.read().len()
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Consume the service, returning the table for persistence only if it
    /// changed.
    pub fn shutdown(self) -> Option<LabelMap> {
        let entries = self.tables.into_inner().table.into_dirty_entries();
        match &entries {
            Some(entries) => tracing::info!(labels = entries.len(), "translation table changed"),
            None => tracing::debug!("translation table unchanged"),
        }
        entries
    }
}
