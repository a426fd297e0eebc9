// SPDX-License-Identifier: PMPL-1.0-or-later

//! Per-state-id memo of resolved labels.

use crate::types::StateId;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct ResolutionCache {
    labels: HashMap<StateId, String>,
}

impl ResolutionCache {
    pub fn get(&self, state_id: StateId) -> Option<&str> {
        self.labels.get(&state_id).map(String::as_str)
    }

    pub fn insert(&mut self, state_id: StateId, label: impl Into<String>) {
        self.labels.insert(state_id, label.into());
    }

    pub fn clear(&mut self) {
        self.labels.clear();
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
