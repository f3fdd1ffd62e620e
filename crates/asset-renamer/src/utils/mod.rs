pub mod config;

use asset_names::AssetKind;
use convert_case::{Case, Casing};
use fancy_regex::Regex;

/// Creates a filter pattern from an optional regex string.
/// Defaults to case-insensitive matching unless the user explicitly sets (?i) or (?-i).
pub fn create_filter_pattern(pattern: Option<String>) -> eyre::Result<Option<Regex>> {
    match pattern {
        Some(mut p) => {
            // Default to case-insensitive unless the user explicitly sets (?i) or (?-i)
            let has_inline_flag = p.contains("(?i)") || p.contains("(?-i)");
            if !has_inline_flag {
                p = format!("(?i){p}");
            }
            Ok(Some(Regex::new(&p)?))
        }
        None => Ok(None),
    }
}

/// Maps loosely written asset types (`skeletal_mesh`, `texture2d`) onto the
/// editor's class names. Unknown types are passed through untouched and end
/// up with the default formatting.
pub fn normalize_asset_type(asset_type: &str) -> String {
    if AssetKind::from_tag(asset_type) != AssetKind::Other {
        return asset_type.to_string();
    }

    let pascal = asset_type.to_case(Case::Pascal);
    AssetKind::KNOWN
        .iter()
        .filter_map(|kind| kind.tag())
        .find(|tag| tag.eq_ignore_ascii_case(&pascal))
        .map(str::to_string)
        .unwrap_or_else(|| asset_type.to_string())
}

/// Truncates a string in the middle
pub fn truncate_middle(input: &str, max_len: usize) -> String {
    if input.chars().count() <= max_len {
        return input.to_string();
    }
    if max_len <= 3 {
        return "...".to_string();
    }
    let keep = max_len - 3;
    let left = keep / 2;
    let right = keep - left;
    let left_str: String = input.chars().take(left).collect();
    let mut right_str: String = input.chars().rev().take(right).collect();
    right_str = right_str.chars().rev().collect();
    format!("{}...{}", left_str, right_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_pattern_defaults_to_case_insensitive() {
        let regex = create_filter_pattern(Some("zombie".to_string()))
            .unwrap()
            .unwrap();
        assert!(regex.is_match("Anim_ZombieAttack").unwrap());

        let regex = create_filter_pattern(Some("(?-i)zombie".to_string()))
            .unwrap()
            .unwrap();
        assert!(!regex.is_match("Anim_ZombieAttack").unwrap());

        assert!(create_filter_pattern(None).unwrap().is_none());
        assert!(create_filter_pattern(Some("(".to_string())).is_err());
    }

    #[test]
    fn test_normalize_asset_type() {
        let cases = [
            ("Animation", "Animation"),
            ("skeletal_mesh", "SkeletalMesh"),
            ("physics-asset", "PhysicsAsset"),
            ("texture2d", "Texture2D"),
            ("MATERIAL", "Material"),
            ("SoundWave", "SoundWave"),
            ("", ""),
        ];
        for (input, expected) in cases {
            assert_eq!(normalize_asset_type(input), expected, "input: {input}");
        }
    }

    #[test]
    fn test_truncate_middle() {
        assert_eq!(truncate_middle("short", 10), "short");
        assert_eq!(truncate_middle("T_Zombie_mremireh_body_Diffuse", 11), "T_Zo...fuse");
        assert_eq!(truncate_middle("anything", 2), "...");
    }
}
