// SPDX-License-Identifier: PMPL-1.0-or-later

//! String-id normalization.
//!
//! Protocol string ids ("minecraft:lit_furnace") rarely match table keys
//! directly. The normalizer tries a fixed chain of candidates and returns the
//! first one present in the table:
//!
//! 1. the full string id
//! 2. the id with its namespace removed
//! 3. the id with noise tokens replaced
//! 4. the replaced id with `_block` appended
//! 5. that candidate with its last 7 characters trimmed

use crate::table::TranslationTable;

/// Literal replacements for candidate 3, applied in one left-to-right pass.
/// At each position the longest matching token wins and replaced text is not
/// rescanned.
pub const STRING_ID_REPLACEMENTS: &[(&str, &str)] = &[
    ("item.", ""),
    ("lit_", ""),
    ("unpowered_", ""),
    ("powered_", ""),
    ("wall_", ""),
    ("standing_", ""),
    ("glazed_", ""),
    ("normal_", ""),
    ("_inverted", ""),
    ("double_slab", "slab"),
    ("double_stone_slab", "stone_slab"),
];

const BLOCK_SUFFIX: &str = "_block";

/// Characters cut from the suffixed candidate: the suffix plus one more.
const TRIM_LEN: usize = 7;

/// The five lookup candidates for `string_id`, in the order they are tried.
pub fn candidates(string_id: &str) -> Vec<String> {
    let full = string_id.to_string();
    let unnamespaced = strip_namespace(&full).to_string();
    let replaced = replace_noise(&unnamespaced);
    let suffixed = format!("{}{}", replaced, BLOCK_SUFFIX);
    let trimmed = trim_chars(&suffixed, TRIM_LEN);
    vec![full, unnamespaced, replaced, suffixed, trimmed]
}

/// Find the first candidate of `string_id` present in `table`.
pub fn normalize_string_id(string_id: &str, table: &TranslationTable) -> Option<String> {
    candidates(string_id)
        .into_iter()
        .find(|candidate| table.contains(candidate))
}

/// Drop everything up to and including the first `:`. Ids without a
/// namespace are returned unchanged.
pub fn strip_namespace(id: &str) -> &str {
    match id.find(':') {
        Some(idx) => &id[idx + 1..],
        None => id,
    }
}

pub fn replace_noise(id: &str) -> String {
    let mut out = String::with_capacity(id.len());
    let mut rest = id;
    while let Some(ch) = rest.chars().next() {
        let hit = STRING_ID_REPLACEMENTS
            .iter()
            .filter(|(from, _)| rest.starts_with(from))
            .max_by_key(|(from, _)| from.len());
        match hit {
            Some((from, to)) => {
                out.push_str(to);
                rest = &rest[from.len()..];
            }
            None => {
                out.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }
    out
}

// Remove the last `count` characters. Strings no longer than that become
// empty.
fn trim_chars(value: &str, count: usize) -> String {
    let len = value.chars().count();
    value.chars().take(len.saturating_sub(count)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::LabelMap;

    fn table(keys: &[&str]) -> TranslationTable {
        let defaults: LabelMap = keys
            .iter()
            .map(|key| (key.to_string(), format!("label:{}", key)))
            .collect();
        TranslationTable::new(defaults, LabelMap::new())
    }

    #[test]
    fn exact_match_wins_first() {
        let table = table(&["minecraft:stone", "stone"]);
        assert_eq!(
            normalize_string_id("minecraft:stone", &table).as_deref(),
            Some("minecraft:stone")
        );
    }

    #[test]
    fn namespace_is_stripped() {
        let table = table(&["stone"]);
        assert_eq!(normalize_string_id("minecraft:stone", &table).as_deref(), Some("stone"));
    }

    #[test]
    fn lit_furnace_resolves_to_furnace() {
        let table = table(&["furnace"]);
        assert_eq!(
            normalize_string_id("minecraft:lit_furnace", &table).as_deref(),
            Some("furnace")
        );
    }

    #[test]
    fn block_suffix_is_tried() {
        let table = table(&["honeycomb_block"]);
        assert_eq!(
            normalize_string_id("minecraft:honeycomb", &table).as_deref(),
            Some("honeycomb_block")
        );
    }

    #[test]
    fn miss_returns_none() {
        let table = table(&["stone"]);
        assert_eq!(normalize_string_id("minecraft:unobtainium", &table), None);
    }

    #[test]
    fn replacements_prefer_longest_token() {
        assert_eq!(replace_noise("double_stone_slab"), "stone_slab");
        assert_eq!(replace_noise("double_slab"), "slab");
        assert_eq!(replace_noise("unpowered_repeater"), "repeater");
        assert_eq!(replace_noise("powered_comparator"), "comparator");
        assert_eq!(replace_noise("daylight_detector_inverted"), "daylight_detector");
        assert_eq!(replace_noise("item.wooden_door"), "wooden_door");
    }

    #[test]
    fn replacement_is_single_pass() {
        // "lit_" is removed once; the text it exposes is not rescanned.
        assert_eq!(replace_noise("lilit_t_x"), "lit_x");
    }

    #[test]
    fn namespace_free_ids_are_untouched() {
        assert_eq!(strip_namespace("stone"), "stone");
        assert_eq!(strip_namespace("a:b:c"), "b:c");
    }

    #[test]
    fn candidate_chain_shape() {
        assert_eq!(
            candidates("minecraft:lit_furnace"),
            vec![
                "minecraft:lit_furnace",
                "lit_furnace",
                "furnace",
                "furnace_block",
                "furnac",
            ]
        );
    }

    #[test]
    fn trimmed_candidate_drops_one_character() {
        let table = table(&["plank"]);
        assert_eq!(
            normalize_string_id("minecraft:planks", &table).as_deref(),
            Some("plank")
        );
    }

    #[test]
    fn empty_replaced_id_trims_to_empty() {
        let ids = candidates("minecraft:lit_");
        assert_eq!(ids[2], "");
        assert_eq!(ids[3], "_block");
        assert_eq!(ids[4], "");
    }

    #[test]
    fn trim_saturates_on_short_values() {
        assert_eq!(trim_chars("abc", 7), "");
        assert_eq!(trim_chars("abcdefgh", 7), "a");
    }
}
