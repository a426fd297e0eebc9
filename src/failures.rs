// SPDX-License-Identifier: PMPL-1.0-or-later

//! Record of items no resolution tier could name.
//!
//! Kept for operator follow-up only; resolution never reads it.

use crate::types::NetworkId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureRecord {
    pub vanilla_name: String,
    /// Resolved string id, or the `unknown_<id>` placeholder.
    pub string_id: String,
    /// Key the deriver produced for the item.
    pub key: String,
}

impl fmt::Display for FailureRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {} ({})", self.vanilla_name, self.string_id, self.key)
    }
}

#[derive(Debug, Clone, Default)]
pub struct FailureLog {
    records: BTreeMap<NetworkId, FailureRecord>,
}

impl FailureLog {
    /// Record a failure, replacing any earlier one for the same id.
    pub fn record(&mut self, network_id: NetworkId, record: FailureRecord) {
        self.records.insert(network_id, record);
    }

    pub fn get(&self, network_id: NetworkId) -> Option<&FailureRecord> {
        self.records.get(&network_id)
    }

    /// `(network id, diagnostic)` pairs ordered by network id.
    pub fn list(&self) -> Vec<(NetworkId, String)> {
        self.records
            .iter()
            .map(|(id, record)| (*id, record.to_string()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
