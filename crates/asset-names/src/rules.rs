use std::fmt;

use serde::{Deserialize, Serialize};

/// Asset classes the naming conventions know about.
///
/// Tags are the editor's class names and are matched exactly; anything else
/// is [`AssetKind::Other`] and gets the generic basename formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    Material,
    Skeleton,
    SkeletalMesh,
    PhysicsAsset,
    Animation,
    Texture2D,
    Other,
}

impl AssetKind {
    pub const KNOWN: [AssetKind; 6] = [
        AssetKind::Material,
        AssetKind::Skeleton,
        AssetKind::SkeletalMesh,
        AssetKind::PhysicsAsset,
        AssetKind::Animation,
        AssetKind::Texture2D,
    ];

    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Material" => AssetKind::Material,
            "Skeleton" => AssetKind::Skeleton,
            "SkeletalMesh" => AssetKind::SkeletalMesh,
            "PhysicsAsset" => AssetKind::PhysicsAsset,
            "Animation" => AssetKind::Animation,
            "Texture2D" => AssetKind::Texture2D,
            _ => AssetKind::Other,
        }
    }

    pub fn tag(&self) -> Option<&'static str> {
        match self {
            AssetKind::Material => Some("Material"),
            AssetKind::Skeleton => Some("Skeleton"),
            AssetKind::SkeletalMesh => Some("SkeletalMesh"),
            AssetKind::PhysicsAsset => Some("PhysicsAsset"),
            AssetKind::Animation => Some("Animation"),
            AssetKind::Texture2D => Some("Texture2D"),
            AssetKind::Other => None,
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag().unwrap_or("Other"))
    }
}

/// Canonical type prefix and the capture token recognizing existing variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenameRule {
    pub kind: AssetKind,
    pub target_prefix: &'static str,
    pub capture: &'static str,
}

pub const RENAME_RULES: [RenameRule; 5] = [
    RenameRule {
        kind: AssetKind::Material,
        target_prefix: "M_",
        capture: "material",
    },
    RenameRule {
        kind: AssetKind::Skeleton,
        target_prefix: "Sk_",
        capture: "skeleton",
    },
    RenameRule {
        kind: AssetKind::SkeletalMesh,
        target_prefix: "SkMsh_",
        capture: "mesh",
    },
    RenameRule {
        kind: AssetKind::PhysicsAsset,
        target_prefix: "Phys_",
        capture: "physicsasset",
    },
    RenameRule {
        kind: AssetKind::Animation,
        target_prefix: "A_",
        capture: "animation",
    },
];

pub const TEXTURE_PREFIX: &str = "T_";
pub const TEXTURE_CAPTURE: &str = "TEXTUREtexture";

/// Rendering channel a texture is classified into by its name's suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextureChannel {
    Normal,
    Albedo,
    Diffuse,
    Mask,
    Specular,
    Color,
    Opacity,
}

impl fmt::Display for TextureChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelRule {
    pub channel: TextureChannel,
    pub target_suffix: &'static str,
    pub capture: &'static str,
}

/// Checked in order, first match wins.
pub const TEXTURE_CHANNELS: [ChannelRule; 7] = [
    ChannelRule {
        channel: TextureChannel::Normal,
        target_suffix: "_Normal",
        capture: "normal",
    },
    ChannelRule {
        channel: TextureChannel::Albedo,
        target_suffix: "_Albedo",
        capture: "albedo",
    },
    ChannelRule {
        channel: TextureChannel::Diffuse,
        target_suffix: "_Diffuse",
        capture: "diffuse",
    },
    ChannelRule {
        channel: TextureChannel::Mask,
        target_suffix: "_Mask",
        capture: "mask",
    },
    ChannelRule {
        channel: TextureChannel::Specular,
        target_suffix: "_Specular",
        capture: "specular",
    },
    ChannelRule {
        channel: TextureChannel::Color,
        target_suffix: "_Color",
        capture: "color",
    },
    ChannelRule {
        channel: TextureChannel::Opacity,
        target_suffix: "_Opacity",
        capture: "opacity",
    },
];
