use asset_names::{remove_file_ext, NameNormalizer};

use crate::utils::normalize_asset_type;

pub struct FormatArgs {
    pub names: Vec<String>,
    pub asset_type: Option<String>,
    pub basename: String,
}

pub fn format(args: FormatArgs) -> eyre::Result<()> {
    let asset_type = args
        .asset_type
        .as_deref()
        .map(normalize_asset_type)
        .unwrap_or_default();

    let normalizer = NameNormalizer::new();
    for name in &args.names {
        let canonical =
            normalizer.format_asset_name(remove_file_ext(name), &asset_type, &args.basename);
        tracing::debug!("{} -> {} ({})", name, canonical, asset_type);
        println!("{}", canonical);
    }

    Ok(())
}
