// SPDX-License-Identifier: PMPL-1.0-or-later

//! Lookup-key canonicalization shared by derivation and registration.

/// Lowercase `text` and replace every space with an underscore.
///
/// ```
/// use item_names::canonical::canonicalize;
/// assert_eq!(canonicalize("Example Item"), "example_item");
/// ```
pub fn canonicalize(text: &str) -> String {
    text.replace(' ', "_").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_joins_words() {
        assert_eq!(canonicalize("Wither Skeleton Skull"), "wither_skeleton_skull");
    }

    #[test]
    fn keeps_existing_underscores() {
        assert_eq!(canonicalize("Cut_Copper Slab"), "cut_copper_slab");
    }

    #[test]
    fn empty_input_is_empty_key() {
        assert_eq!(canonicalize(""), "");
    }

    #[test]
    fn is_idempotent() {
        let once = canonicalize("Light Blue Wool");
        assert_eq!(canonicalize(&once), once);
    }
}
