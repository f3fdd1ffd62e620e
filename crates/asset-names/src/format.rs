//! Formatters composing the rewriters into full asset names.

use crate::affix::{collapse_underscores, remove_file_ext, trim_separators};
use crate::pattern::AffixPattern;
use crate::rules::{ChannelRule, TEXTURE_PREFIX};

/// Folds `basename` into `name`, giving `{basename}_{rest}`.
///
/// The file extension is dropped and an existing basename prefix, in any
/// casing, is replaced rather than repeated. Used as is for asset types
/// without a rule of their own.
pub fn format_default_asset(basename: &str, name: &str) -> String {
    let basename_pattern = AffixPattern::new(basename);

    let name = remove_file_ext(name);
    let name = basename_pattern.remove_prefix(name);
    let name = collapse_underscores(&name);
    let name = basename_pattern.format_prefix(&name, &format!("{basename}_"));
    trim_separators(&name).to_string()
}

/// Formats a name under a type prefix rule, e.g. `A_{basename}_{rest}`.
///
/// Type tags already present at either end of `name` are stripped first so
/// that `Anim_ZombieAttack` or `ZombieAttack_Anim` do not keep a stray tag.
pub fn format_typed_asset(
    basename: &str,
    name: &str,
    target_prefix: &str,
    capture: &AffixPattern,
) -> String {
    let name = capture.remove_suffix(&capture.remove_prefix(name));
    let name = format_default_asset(basename, &name);
    capture.format_prefix(&name, target_prefix).replace(' ', "_")
}

/// Formats a texture name as `T_{basename}_{subject}_{Channel}`.
///
/// `channel` is the rule picked from the original name; without one no
/// channel suffix is imposed.
pub fn format_texture(
    basename: &str,
    name: &str,
    texture: &AffixPattern,
    channel: Option<(&ChannelRule, &AffixPattern)>,
) -> String {
    let name = texture.remove_prefix(name);
    let name = format_default_asset(basename, &name);
    let name = texture.format_prefix(&name, TEXTURE_PREFIX);
    let name = match channel {
        Some((rule, pattern)) => pattern.format_suffix(&name, rule.target_suffix),
        None => name,
    };
    name.replace(' ', "_")
}
