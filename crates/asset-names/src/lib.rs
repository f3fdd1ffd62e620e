//! Normalizes imported asset names into the studio naming conventions.
//!
//! Animation marketplaces and DCC exports produce names such as
//! `Anim_ZombieAttack02_final` or `mremireh_body__diffuse`; the formatters here
//! turn them into `A_Zombie_Attack02_final` and
//! `T_Zombie_mremireh_body_Diffuse`. Every function is total: whatever the
//! input, some name comes back.

pub mod affix;
mod error;
pub mod format;
pub mod pattern;
pub mod plan;
pub mod rules;

use lazy_static::lazy_static;

pub use affix::{
    collapse_underscores, format_prefix, format_suffix, remove_file_ext, remove_prefix,
    remove_suffix,
};
pub use error::PatternError;
pub use format::format_default_asset;
pub use pattern::{has_prefix, has_suffix, AffixPattern};
pub use plan::{basename_from_skeleton, name_from_file, AssetRecord, RenameEntry};
pub use rules::{AssetKind, ChannelRule, RenameRule, TextureChannel};

use rules::{RENAME_RULES, TEXTURE_CAPTURE, TEXTURE_CHANNELS};

lazy_static! {
    static ref SHARED: NameNormalizer = NameNormalizer::new();
}

/// Dispatches asset names to their formatter, with the patterns of every
/// fixed rule compiled once.
#[derive(Debug, Clone)]
pub struct NameNormalizer {
    typed: Vec<(RenameRule, AffixPattern)>,
    texture: AffixPattern,
    channels: Vec<(ChannelRule, AffixPattern)>,
}

impl NameNormalizer {
    pub fn new() -> Self {
        Self {
            typed: RENAME_RULES
                .iter()
                .map(|rule| (*rule, AffixPattern::new(rule.capture)))
                .collect(),
            texture: AffixPattern::new(TEXTURE_CAPTURE),
            channels: TEXTURE_CHANNELS
                .iter()
                .map(|rule| (*rule, AffixPattern::new(rule.capture)))
                .collect(),
        }
    }

    /// Returns the canonical name for an asset of type `asset_type`.
    ///
    /// # Arguments
    /// * `name` - The current asset name (e.g., "Anim_ZombieAttack02_final")
    /// * `asset_type` - The editor class name (e.g., "Animation", "Texture2D")
    /// * `basename` - The owning rig or character (e.g., "Zombie")
    pub fn format_asset_name(&self, name: &str, asset_type: &str, basename: &str) -> String {
        match AssetKind::from_tag(asset_type) {
            AssetKind::Texture2D => self.format_texture_name(basename, name),
            kind @ (AssetKind::Material
            | AssetKind::Skeleton
            | AssetKind::SkeletalMesh
            | AssetKind::PhysicsAsset
            | AssetKind::Animation) => self.format_typed(kind, basename, name),
            AssetKind::Other => format_default_asset(basename, name),
        }
    }

    fn format_typed(&self, kind: AssetKind, basename: &str, name: &str) -> String {
        match self.typed.iter().find(|(rule, _)| rule.kind == kind) {
            Some((rule, capture)) => {
                format::format_typed_asset(basename, name, rule.target_prefix, capture)
            }
            None => format_default_asset(basename, name),
        }
    }

    /// The first channel rule, in priority order, whose word ends `name`.
    pub fn classify_texture(&self, name: &str) -> Option<&ChannelRule> {
        self.find_channel(name).map(|(rule, _)| rule)
    }

    fn find_channel(&self, name: &str) -> Option<(&ChannelRule, &AffixPattern)> {
        self.channels
            .iter()
            .find(|(_, pattern)| pattern.has_suffix(name))
            .map(|(rule, pattern)| (rule, pattern))
    }

    pub fn format_texture_name(&self, basename: &str, name: &str) -> String {
        let channel = self.find_channel(name);
        if channel.is_none() {
            tracing::trace!("no texture channel found (name: {})", name);
        }
        format::format_texture(basename, name, &self.texture, channel)
    }
}

impl Default for NameNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper function to format a name without building a [`NameNormalizer`].
pub fn format_asset_name(name: &str, asset_type: &str, basename: &str) -> String {
    SHARED.format_asset_name(name, asset_type, basename)
}

/// Helper function to format a texture name without building a [`NameNormalizer`].
pub fn format_texture_name(basename: &str, name: &str) -> String {
    SHARED.format_texture_name(basename, name)
}
