//! Batch rename planning and the basename helpers used by the import steps.

use serde::{Deserialize, Serialize};

use crate::affix::{remove_file_ext, remove_prefix};
use crate::NameNormalizer;

/// An asset as listed by the editor after an import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub asset_type: String,
    pub name: String,
}

impl AssetRecord {
    pub fn new(asset_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            asset_type: asset_type.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameEntry {
    pub asset_type: String,
    pub from: String,
    pub to: String,
}

impl RenameEntry {
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

impl NameNormalizer {
    /// Computes the canonical name of every record.
    ///
    /// Extensions are dropped before dispatch so that `Shoe_normal.png` is
    /// classified by its channel word, as `Shoe_normal` would be.
    pub fn plan<'a>(
        &self,
        basename: &str,
        records: impl IntoIterator<Item = &'a AssetRecord>,
    ) -> Vec<RenameEntry> {
        let span = tracing::debug_span!("plan", basename = basename);
        let _entered = span.enter();

        records
            .into_iter()
            .map(|record| {
                let name = remove_file_ext(&record.name);
                let to = self.format_asset_name(name, &record.asset_type, basename);
                tracing::debug!("renaming {} -> {} ({})", record.name, to, record.asset_type);
                RenameEntry {
                    asset_type: record.asset_type.clone(),
                    from: record.name.clone(),
                    to,
                }
            })
            .collect()
    }
}

/// Derives the basename from a skeleton's object path.
///
/// `/Game/Characters/Zombie/Sk_Zombie` gives `Zombie`.
pub fn basename_from_skeleton(object_path: &str) -> String {
    let asset_name = object_path.rsplit('/').next().unwrap_or(object_path);
    remove_prefix(asset_name, "Sk_")
}

/// File name of `path` without directories or extension.
pub fn name_from_file(path: &str) -> &str {
    let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    remove_file_ext(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_formats_every_record() {
        let normalizer = NameNormalizer::new();
        let records = vec![
            AssetRecord::new("Animation", "Anim_ZombieAttack02_final"),
            AssetRecord::new("Texture2D", "mremireh_body__diffuse"),
            AssetRecord::new("Skeleton", "Sk_Zombie"),
            AssetRecord::new("SoundWave", "groan.wav"),
        ];

        let plan = normalizer.plan("Zombie", &records);

        let renamed: Vec<_> = plan.iter().map(|entry| entry.to.as_str()).collect();
        assert_eq!(
            renamed,
            vec![
                "A_Zombie_Attack02_final",
                "T_Zombie_mremireh_body_Diffuse",
                "Sk_Zombie",
                "Zombie_groan",
            ]
        );
        assert!(plan[0].changed());
        assert!(!plan[2].changed());
        assert_eq!(plan[3].asset_type, "SoundWave");
    }

    #[test]
    fn test_plan_ignores_file_extensions() {
        let normalizer = NameNormalizer::new();
        let records = vec![
            AssetRecord::new("Texture2D", "Shoe_normal.png"),
            AssetRecord::new("Texture2D", "Shoe_normal"),
            AssetRecord::new("Animation", "Anim_ZombieWalk.fbx"),
        ];

        let plan = normalizer.plan("Zombie", &records);

        assert_eq!(plan[0].to, "T_Zombie_Shoe_Normal");
        assert_eq!(plan[0].from, "Shoe_normal.png");
        assert_eq!(plan[1].to, "T_Zombie_Shoe_Normal");
        assert_eq!(plan[2].to, "A_Zombie_Walk");

        // running the plan again over its own output changes nothing
        let replanned: Vec<_> = plan
            .iter()
            .map(|entry| AssetRecord::new(entry.asset_type.clone(), entry.to.clone()))
            .collect();
        for entry in normalizer.plan("Zombie", &replanned) {
            assert!(!entry.changed(), "{} -> {}", entry.from, entry.to);
        }
    }

    #[test]
    fn test_plan_empty() {
        let normalizer = NameNormalizer::new();
        assert!(normalizer.plan("Zombie", &[]).is_empty());
    }

    #[test]
    fn test_basename_from_skeleton() {
        assert_eq!(basename_from_skeleton("/Game/Characters/Zombie/Sk_Zombie"), "Zombie");
        assert_eq!(basename_from_skeleton("Sk_Zombie"), "Zombie");
        assert_eq!(basename_from_skeleton("/Game/Mutant"), "Mutant");
    }

    #[test]
    fn test_name_from_file() {
        assert_eq!(name_from_file("C:\\mocap\\Zombie.fbx"), "Zombie");
        assert_eq!(name_from_file("/mnt/mocap/Zombie Walk.fbx"), "Zombie Walk");
        assert_eq!(name_from_file("Zombie"), "Zombie");
    }
}
