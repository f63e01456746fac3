//! Upload source: turns raw bytes or image files into `NamedImage`s.
//!
//! Any raster format the `image` crate was built with can be decoded; the
//! result is always converted to 8-bit RGB.
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::NamedImage;

/// File extensions picked up when scanning a directory (case-insensitive).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Decode an uploaded image.
pub fn decode_image(name: impl Into<String>, bytes: &[u8]) -> Result<NamedImage> {
    let name = name.into();
    let decoded = image::load_from_memory(bytes).map_err(|e| Error::decode(name.clone(), e))?;
    debug!(
        "Decoded '{}' ({}x{}, {:?})",
        name,
        decoded.width(),
        decoded.height(),
        decoded.color()
    );
    Ok(NamedImage::new(name, decoded.to_rgb8()))
}

/// Read and decode a single file; the image is named after its file name.
pub fn load_image_file(path: &Path) -> Result<NamedImage> {
    let bytes = fs::read(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    decode_image(name, &bytes)
}

pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|s| s.eq_ignore_ascii_case(e))
        })
        .unwrap_or(false)
}

/// Image files directly under `input_dir`, sorted by file name.
pub fn collect_image_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(input_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && has_supported_extension(&path) {
            files.push(path);
        } else {
            debug!("Skipping non-image entry: {:?}", path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    info!("Found {} image file(s) in {:?}", files.len(), input_dir);
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    fn png_bytes(img: &RgbImage) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn decodes_png_bytes() {
        let img = RgbImage::from_pixel(5, 4, Rgb([1, 2, 3]));
        let named = decode_image("meter.png", &png_bytes(&img)).unwrap();
        assert_eq!(named.name, "meter.png");
        assert_eq!(named.image, img);
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let err = decode_image("broken.jpg", b"not an image").unwrap_err();
        match err {
            Error::Decode { name, .. } => assert_eq!(name, "broken.jpg"),
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn extension_filter_is_case_insensitive() {
        assert!(has_supported_extension(Path::new("a/B.JPG")));
        assert!(has_supported_extension(Path::new("c.jpeg")));
        assert!(has_supported_extension(Path::new("d.Png")));
        assert!(!has_supported_extension(Path::new("e.gif")));
        assert!(!has_supported_extension(Path::new("noext")));
    }

    #[test]
    fn directory_scan_is_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        let img = RgbImage::from_pixel(3, 3, Rgb([9, 9, 9]));
        for name in ["b.png", "a.png", "c.PNG"] {
            std::fs::write(dir.path().join(name), png_bytes(&img)).unwrap();
        }
        std::fs::write(dir.path().join("notes.txt"), b"hello").unwrap();
        std::fs::create_dir(dir.path().join("sub.png")).unwrap();

        let files = collect_image_files(dir.path()).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.png", "b.png", "c.PNG"]);
    }
}
