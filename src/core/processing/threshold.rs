use image::{GrayImage, Luma};
use imageproc::contrast::otsu_level;
use tracing::debug;

pub const FOREGROUND: u8 = 255;
pub const BACKGROUND: u8 = 0;

/// Pixels strictly above `level` become 255, the rest 0.
pub fn binarize(image: &GrayImage, level: u8) -> GrayImage {
    let (width, height) = image.dimensions();
    let mut out = GrayImage::new(width, height);
    for (src, dst) in image.pixels().zip(out.pixels_mut()) {
        *dst = Luma([if src.0[0] > level {
            FOREGROUND
        } else {
            BACKGROUND
        }]);
    }
    out
}

/// Otsu binarization. Returns the binary image and the selected level.
///
/// A uniform image has no between-class variance to maximize, so it yields
/// an all-background result rather than an image-sized foreground block.
pub fn otsu_binarize(image: &GrayImage) -> (GrayImage, u8) {
    let (width, height) = image.dimensions();
    let mut pixels = image.pixels().map(|p| p.0[0]);
    let uniform = match pixels.next() {
        Some(first) => pixels.all(|v| v == first),
        None => true,
    };
    if uniform {
        debug!("Otsu: uniform {}x{} image, no foreground", width, height);
        return (GrayImage::new(width, height), u8::MAX);
    }

    let level = otsu_level(image);
    debug!("Otsu level: {}", level);
    (binarize(image, level), level)
}
