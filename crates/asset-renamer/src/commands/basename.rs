use asset_names::{basename_from_skeleton, name_from_file};

pub enum BasenameSource {
    /// Editor object path of the skeleton the assets are bound to
    Skeleton(String),
    /// Source file of a mesh import
    File(String),
}

pub fn basename(source: BasenameSource) -> eyre::Result<()> {
    let basename = match &source {
        BasenameSource::Skeleton(path) => basename_from_skeleton(path),
        BasenameSource::File(path) => name_from_file(path).to_string(),
    };

    if basename.is_empty() {
        tracing::warn!("derived an empty basename");
    }
    println!("{}", basename);
    Ok(())
}
