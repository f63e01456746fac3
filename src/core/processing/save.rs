use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::io::writers::jpeg::write_rgb_jpeg;
use crate::types::NamedImage;

/// File name for an exported result: source stem plus `_<suffix>.jpg`.
pub fn export_file_name(source_name: &str, suffix: &str) -> String {
    let stem = Path::new(source_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| source_name.to_string());
    format!("{}_{}.jpg", stem, suffix)
}

/// Write every result image as a JPEG into `dir`.
pub fn save_result_images(items: &[NamedImage], dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let mut written = Vec::with_capacity(items.len());
    for item in items {
        let path = dir.join(export_file_name(&item.name, suffix));
        write_rgb_jpeg(&path, &item.image)?;
        info!("Saved {} -> {:?}", item.name, path);
        written.push(path);
    }
    Ok(written)
}
