use image::{GrayImage, Luma, Rgb, RgbImage};

// BT.601 luma weights in 14-bit fixed point.
const R_WEIGHT: u32 = 4899;
const G_WEIGHT: u32 = 9617;
const B_WEIGHT: u32 = 1868;
const SHIFT: u32 = 14;

#[inline]
pub fn luma_bt601(px: &Rgb<u8>) -> u8 {
    let [r, g, b] = px.0;
    let y = r as u32 * R_WEIGHT + g as u32 * G_WEIGHT + b as u32 * B_WEIGHT;
    ((y + (1 << (SHIFT - 1))) >> SHIFT) as u8
}

/// Reduce an RGB image to one luminance channel using BT.601 weights
/// (`0.299 R + 0.587 G + 0.114 B`, rounded).
pub fn rgb_to_gray(image: &RgbImage) -> GrayImage {
    let (width, height) = image.dimensions();
    let mut gray = GrayImage::new(width, height);
    for (src, dst) in image.pixels().zip(gray.pixels_mut()) {
        *dst = Luma([luma_bt601(src)]);
    }
    gray
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries_use_bt601_weights() {
        assert_eq!(luma_bt601(&Rgb([255, 0, 0])), 76);
        assert_eq!(luma_bt601(&Rgb([0, 255, 0])), 150);
        assert_eq!(luma_bt601(&Rgb([0, 0, 255])), 29);
        assert_eq!(luma_bt601(&Rgb([255, 255, 255])), 255);
        assert_eq!(luma_bt601(&Rgb([0, 0, 0])), 0);
    }

    #[test]
    fn neutral_pixels_keep_their_value() {
        let img = RgbImage::from_fn(4, 3, |x, y| {
            let v = (x * 40 + y * 10) as u8;
            Rgb([v, v, v])
        });
        let gray = rgb_to_gray(&img);
        assert_eq!(gray.dimensions(), (4, 3));
        for (g, c) in gray.pixels().zip(img.pixels()) {
            assert_eq!(g.0[0], c.0[0]);
        }
    }
}
