// SPDX-License-Identifier: PMPL-1.0-or-later

//! Attribute rules that turn a base key into a kind-specific key.
//!
//! Each rule either claims the item (returns `Some(key)`) or passes. The
//! deriver stops at the first rule that claims, so the order of the rule
//! list is part of the behavior: coral is checked before color, copper
//! before color, and so on.

use crate::canonical::canonicalize;
use crate::types::{BlockKind, DirtType, FroglightType, ItemDescriptor, ItemKind};
use crate::types::{CopperBlock, CopperForm};
use serde::{Deserialize, Serialize};

/// A single key-derivation rule.
pub trait KeyRule: Send + Sync {
    /// Name used in logs and configuration.
    fn name(&self) -> &str;

    /// Derive a key for `item` from the canonical `base` key, or `None` when
    /// the rule does not apply to this item.
    fn apply(&self, item: &ItemDescriptor, base: &str) -> Option<String>;
}

/// Built-in rules, in their default priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyRuleKind {
    TieredTool,
    Medicine,
    Coral,
    Sponge,
    MobHead,
    Dirt,
    Froglight,
    Wood,
    Copper,
    Colored,
}

impl KeyRuleKind {
    pub fn all() -> &'static [KeyRuleKind] {
        &[
            KeyRuleKind::TieredTool,
            KeyRuleKind::Medicine,
            KeyRuleKind::Coral,
            KeyRuleKind::Sponge,
            KeyRuleKind::MobHead,
            KeyRuleKind::Dirt,
            KeyRuleKind::Froglight,
            KeyRuleKind::Wood,
            KeyRuleKind::Copper,
            KeyRuleKind::Colored,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KeyRuleKind::TieredTool => "tiered_tool",
            KeyRuleKind::Medicine => "medicine",
            KeyRuleKind::Coral => "coral",
            KeyRuleKind::Sponge => "sponge",
            KeyRuleKind::MobHead => "mob_head",
            KeyRuleKind::Dirt => "dirt",
            KeyRuleKind::Froglight => "froglight",
            KeyRuleKind::Wood => "wood",
            KeyRuleKind::Copper => "copper",
            KeyRuleKind::Colored => "colored",
        }
    }
}

impl KeyRule for KeyRuleKind {
    fn name(&self) -> &str {
        self.as_str()
    }

    fn apply(&self, item: &ItemDescriptor, base: &str) -> Option<String> {
        match self {
            KeyRuleKind::TieredTool => match item.kind {
                ItemKind::TieredTool { tier } => {
                    let join = if tier.takes_en_suffix() { "en_" } else { "_" };
                    Some(format!("{}{}{}", tier.name().to_lowercase(), join, base))
                }
                _ => None,
            },
            KeyRuleKind::Medicine => match item.kind {
                ItemKind::Medicine { medicine_type } => {
                    Some(format!("{}_{}", base, medicine_type.name().to_lowercase()))
                }
                _ => None,
            },
            KeyRuleKind::Coral => match item.kind.block()? {
                BlockKind::Coral { coral_type, dead } => Some(format!(
                    "{}{}_{}",
                    if *dead { "dead_" } else { "" },
                    coral_type.name().to_lowercase(),
                    base
                )),
                _ => None,
            },
            KeyRuleKind::Sponge => match item.kind.block()? {
                BlockKind::Sponge { wet } => {
                    Some(format!("{}{}", if *wet { "wet_" } else { "" }, base))
                }
                _ => None,
            },
            KeyRuleKind::MobHead => match item.kind.block()? {
                BlockKind::MobHead { head_type } => Some(canonicalize(head_type.display_name())),
                _ => None,
            },
            KeyRuleKind::Dirt => match item.kind.block()? {
                BlockKind::Dirt { dirt_type } => Some(
                    match dirt_type {
                        DirtType::Normal => "dirt",
                        DirtType::Coarse => "coarse_dirt",
                        DirtType::Rooted => "dirt_with_roots",
                    }
                    .to_string(),
                ),
                _ => None,
            },
            KeyRuleKind::Froglight => match item.kind.block()? {
                BlockKind::Froglight { froglight_type } => Some(
                    match froglight_type {
                        FroglightType::Ochre => "ochre_froglight",
                        FroglightType::Pearlescent => "pearlescent_froglight",
                        FroglightType::Verdant => "verdant_froglight",
                    }
                    .to_string(),
                ),
                _ => None,
            },
            KeyRuleKind::Wood => match item.kind.block()? {
                BlockKind::Wood { stripped } => {
                    Some(format!("{}{}", if *stripped { "stripped_" } else { "" }, base))
                }
                _ => None,
            },
            KeyRuleKind::Copper => match item.kind.block()? {
                BlockKind::Copper(copper) => Some(copper_key(copper, base)),
                _ => None,
            },
            KeyRuleKind::Colored => item
                .kind
                .block()?
                .as_colored()
                .map(|colored| format!("{}_{}", colored.color().name().to_lowercase(), base)),
        }
    }
}

// Prefixes compose as waxed_ + oxidation + key.
fn copper_key(copper: &CopperBlock, base: &str) -> String {
    let key = if copper.form == CopperForm::CutBlock {
        "cut_copper"
    } else {
        base
    };
    let waxed = if copper.waxed { "waxed_" } else { "" };
    format!("{}{}{}", waxed, copper.oxidation.prefix(), key)
}
