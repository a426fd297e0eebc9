// SPDX-License-Identifier: PMPL-1.0-or-later

//! Item key derivation.
//!
//! The deriver canonicalizes the item's vanilla name into a base key and then
//! runs an ordered rule list over it. The first rule that claims the item
//! decides the key; items no rule claims keep the base key.

mod rules;

pub use rules::{KeyRule, KeyRuleKind};

use crate::canonical::canonicalize;
use crate::types::ItemDescriptor;

pub struct KeyDeriver {
    rules: Vec<Box<dyn KeyRule>>,
}

impl KeyDeriver {
    /// Deriver with every built-in rule in default priority order.
    pub fn new() -> Self {
        Self::with_rules(KeyRuleKind::all())
    }

    /// Deriver with the given built-in rules, in the given order.
    pub fn with_rules(kinds: &[KeyRuleKind]) -> Self {
        Self {
            rules: kinds
                .iter()
                .map(|kind| Box::new(*kind) as Box<dyn KeyRule>)
                .collect(),
        }
    }

    /// Append a rule after the existing ones.
    pub fn push_rule(&mut self, rule: Box<dyn KeyRule>) {
        self.rules.push(rule);
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    pub fn derive(&self, item: &ItemDescriptor) -> String {
        let base = canonicalize(&item.vanilla_name);
        for rule in &self.rules {
            if let Some(key) = rule.apply(item, &base) {
                return key;
            }
        }
        base
    }
}

impl Default for KeyDeriver {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for KeyDeriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyDeriver")
            .field("rules", &self.rule_names())
            .finish()
    }
}
