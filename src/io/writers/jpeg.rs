use image::RgbImage;
use jpeg_encoder::{ColorType, Encoder};
use std::path::Path;

use crate::error::{Error, Result};

pub const JPEG_QUALITY: u8 = 95;

fn jpeg_dimensions(image: &RgbImage) -> Result<(u16, u16)> {
    let (cols, rows) = image.dimensions();
    match (u16::try_from(cols), u16::try_from(rows)) {
        (Ok(c), Ok(r)) => Ok((c, r)),
        _ => Err(Error::Encode(format!(
            "{}x{} exceeds the JPEG dimension limit",
            cols, rows
        ))),
    }
}

pub fn encode_rgb_jpeg(image: &RgbImage) -> Result<Vec<u8>> {
    let (cols, rows) = jpeg_dimensions(image)?;
    let mut buf = Vec::new();
    let encoder = Encoder::new(&mut buf, JPEG_QUALITY);
    encoder
        .encode(image.as_raw(), cols, rows, ColorType::Rgb)
        .map_err(|e| Error::Encode(e.to_string()))?;
    Ok(buf)
}

pub fn write_rgb_jpeg(output: &Path, image: &RgbImage) -> Result<()> {
    let bytes = encode_rgb_jpeg(image)?;
    std::fs::write(output, bytes)?;
    Ok(())
}
