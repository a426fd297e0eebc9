// SPDX-License-Identifier: PMPL-1.0-or-later

//! Item descriptor model consumed by the resolver.
//!
//! The host runtime owns the real item/block object model; this module is the
//! minimal attribute view the key deriver needs. Every enum here is closed, so
//! the deriver matches them exhaustively and there is no "unknown variant"
//! runtime path.

use serde::{Deserialize, Serialize};

/// Dense identifier for one concrete (type + state) instantiation of an item.
pub type StateId = i32;

/// Protocol-level numeric identifier for an item type.
pub type NetworkId = i32;

/// Material tier of a tool-like item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolTier {
    Wood,
    Gold,
    Stone,
    Iron,
    Diamond,
    Netherite,
}

impl ToolTier {
    pub fn name(&self) -> &'static str {
        match self {
            ToolTier::Wood => "WOOD",
            ToolTier::Gold => "GOLD",
            ToolTier::Stone => "STONE",
            ToolTier::Iron => "IRON",
            ToolTier::Diamond => "DIAMOND",
            ToolTier::Netherite => "NETHERITE",
        }
    }

    /// Tiers whose adjective takes an "en" suffix (wood → wooden, gold → golden).
    pub fn takes_en_suffix(&self) -> bool {
        matches!(self, ToolTier::Wood | ToolTier::Gold)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedicineType {
    Antidote,
    Elixir,
    EyeDrops,
    Tonic,
}

impl MedicineType {
    pub fn name(&self) -> &'static str {
        match self {
            MedicineType::Antidote => "ANTIDOTE",
            MedicineType::Elixir => "ELIXIR",
            MedicineType::EyeDrops => "EYE_DROPS",
            MedicineType::Tonic => "TONIC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoralType {
    Tube,
    Brain,
    Bubble,
    Fire,
    Horn,
}

impl CoralType {
    pub fn name(&self) -> &'static str {
        match self {
            CoralType::Tube => "TUBE",
            CoralType::Brain => "BRAIN",
            CoralType::Bubble => "BUBBLE",
            CoralType::Fire => "FIRE",
            CoralType::Horn => "HORN",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MobHeadType {
    Skeleton,
    WitherSkeleton,
    Zombie,
    Player,
    Creeper,
    Dragon,
    Piglin,
}

impl MobHeadType {
    pub fn display_name(&self) -> &'static str {
        match self {
            MobHeadType::Skeleton => "Skeleton Skull",
            MobHeadType::WitherSkeleton => "Wither Skeleton Skull",
            MobHeadType::Zombie => "Zombie Head",
            MobHeadType::Player => "Player Head",
            MobHeadType::Creeper => "Creeper Head",
            MobHeadType::Dragon => "Dragon Head",
            MobHeadType::Piglin => "Piglin Head",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirtType {
    Normal,
    Coarse,
    Rooted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FroglightType {
    Ochre,
    Pearlescent,
    Verdant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopperOxidation {
    #[default]
    None,
    Exposed,
    Weathered,
    Oxidized,
}

impl CopperOxidation {
    pub fn prefix(&self) -> &'static str {
        match self {
            CopperOxidation::None => "",
            CopperOxidation::Exposed => "exposed_",
            CopperOxidation::Weathered => "weathered_",
            CopperOxidation::Oxidized => "oxidized_",
        }
    }
}

/// Concrete shape of a copper-family block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopperForm {
    #[default]
    Block,
    CutBlock,
    Slab,
    Stairs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DyeColor {
    White,
    Orange,
    Magenta,
    LightBlue,
    Yellow,
    Lime,
    Pink,
    Gray,
    LightGray,
    Cyan,
    Purple,
    Blue,
    Brown,
    Green,
    Red,
    Black,
}

impl DyeColor {
    pub fn name(&self) -> &'static str {
        match self {
            DyeColor::White => "WHITE",
            DyeColor::Orange => "ORANGE",
            DyeColor::Magenta => "MAGENTA",
            DyeColor::LightBlue => "LIGHT_BLUE",
            DyeColor::Yellow => "YELLOW",
            DyeColor::Lime => "LIME",
            DyeColor::Pink => "PINK",
            DyeColor::Gray => "GRAY",
            DyeColor::LightGray => "LIGHT_GRAY",
            DyeColor::Cyan => "CYAN",
            DyeColor::Purple => "PURPLE",
            DyeColor::Blue => "BLUE",
            DyeColor::Brown => "BROWN",
            DyeColor::Green => "GREEN",
            DyeColor::Red => "RED",
            DyeColor::Black => "BLACK",
        }
    }
}

/// Capability of blocks that carry a dye color.
pub trait ColoredEntity {
    fn color(&self) -> DyeColor;
}

/// A dyed block (wool, concrete, terracotta, carpet, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColoredBlock {
    pub color: DyeColor,
}

impl ColoredEntity for ColoredBlock {
    fn color(&self) -> DyeColor {
        self.color
    }
}

/// Copper, copper slab or copper stairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopperBlock {
    #[serde(default)]
    pub form: CopperForm,
    #[serde(default)]
    pub waxed: bool,
    #[serde(default)]
    pub oxidation: CopperOxidation,
}

/// Block-level classification of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "block", rename_all = "snake_case")]
pub enum BlockKind {
    Coral {
        coral_type: CoralType,
        #[serde(default)]
        dead: bool,
    },
    Sponge {
        #[serde(default)]
        wet: bool,
    },
    MobHead {
        head_type: MobHeadType,
    },
    Dirt {
        dirt_type: DirtType,
    },
    Froglight {
        froglight_type: FroglightType,
    },
    Wood {
        #[serde(default)]
        stripped: bool,
    },
    Copper(CopperBlock),
    Colored(ColoredBlock),
    Plain,
}

impl BlockKind {
    /// Capability query for the color rule.
    pub fn as_colored(&self) -> Option<&dyn ColoredEntity> {
        match self {
            BlockKind::Colored(block) => Some(block),
            _ => None,
        }
    }
}

/// Item-level classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemKind {
    TieredTool {
        tier: ToolTier,
    },
    Medicine {
        medicine_type: MedicineType,
    },
    Block(BlockKind),
    #[default]
    Plain,
}

impl ItemKind {
    pub fn block(&self) -> Option<&BlockKind> {
        match self {
            ItemKind::Block(block) => Some(block),
            _ => None,
        }
    }
}

/// The attribute view of one item instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDescriptor {
    /// Untranslated vanilla display name ("Pickaxe", "Wool").
    pub vanilla_name: String,
    /// Name returned when every resolution tier fails. Defaults to the
    /// vanilla name.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub custom_name: Option<String>,
    pub state_id: StateId,
    #[serde(default)]
    pub network_id: NetworkId,
    /// The "air"/no-item sentinel.
    #[serde(default)]
    pub null: bool,
    #[serde(default)]
    pub kind: ItemKind,
}

impl ItemDescriptor {
    pub fn new(vanilla_name: impl Into<String>, state_id: StateId) -> Self {
        Self {
            vanilla_name: vanilla_name.into(),
            name: None,
            custom_name: None,
            state_id,
            network_id: 0,
            null: false,
            kind: ItemKind::Plain,
        }
    }

    pub fn with_kind(mut self, kind: ItemKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_block(self, block: BlockKind) -> Self {
        self.with_kind(ItemKind::Block(block))
    }

    pub fn with_network_id(mut self, network_id: NetworkId) -> Self {
        self.network_id = network_id;
        self
    }

    pub fn with_custom_name(mut self, custom_name: impl Into<String>) -> Self {
        self.custom_name = Some(custom_name.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn null_item(state_id: StateId) -> Self {
        Self {
            null: true,
            ..Self::new("Air", state_id)
        }
    }

    pub fn has_custom_name(&self) -> bool {
        self.custom_name.as_deref().is_some_and(|name| !name.is_empty())
    }

    /// The display name used when translation fails: the custom name if
    /// one is set, then `name`, then the vanilla name.
    pub fn default_name(&self) -> &str {
        match &self.custom_name {
            Some(custom) if !custom.is_empty() => custom,
            _ => self.name.as_deref().unwrap_or(&self.vanilla_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_colored_blocks_expose_color() {
        let wool = BlockKind::Colored(ColoredBlock {
            color: DyeColor::LightBlue,
        });
        assert_eq!(
            wool.as_colored().map(|c| c.color()),
            Some(DyeColor::LightBlue)
        );
        let coral = BlockKind::Coral {
            coral_type: CoralType::Fire,
            dead: false,
        };
        assert!(coral.as_colored().is_none());
    }

    #[test]
    fn descriptor_parses_from_yaml() {
        let yaml = r#"
vanilla_name: Coral
state_id: 42
network_id: 7
kind:
  kind: block
  block: coral
  coral_type: brain
  dead: true
"#;
        let item: ItemDescriptor = serde_yaml::from_str(yaml).expect("descriptor should parse");
        assert_eq!(item.state_id, 42);
        assert_eq!(
            item.kind.block(),
            Some(&BlockKind::Coral {
                coral_type: CoralType::Brain,
                dead: true
            })
        );
        assert_eq!(item.default_name(), "Coral");
    }

    #[test]
    fn empty_custom_name_is_not_custom() {
        let item = ItemDescriptor::new("Stick", 1).with_custom_name("");
        assert!(!item.has_custom_name());
        assert_eq!(item.default_name(), "Stick");
    }

    #[test]
    fn default_name_prefers_custom_then_name() {
        let item = ItemDescriptor::new("Stick", 1).with_name("Long Stick");
        assert_eq!(item.default_name(), "Long Stick");
        let item = item.with_custom_name("Wand");
        assert_eq!(item.default_name(), "Wand");
    }
}
