use crate::core::processing::padding::pad_to_canvas;
use crate::error::{Error, Result};
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbImage;
use tracing::{debug, info};

/// Largest size with the source aspect ratio that fits inside the target box.
pub fn calculate_fit_dimensions(
    original_width: u32,
    original_height: u32,
    target_width: u32,
    target_height: u32,
) -> (u32, u32) {
    let scale_x = target_width as f64 / original_width as f64;
    let scale_y = target_height as f64 / original_height as f64;
    let scale = scale_x.min(scale_y);

    let new_width = ((original_width as f64 * scale).round() as u32)
        .min(target_width)
        .max(1);
    let new_height = ((original_height as f64 * scale).round() as u32)
        .min(target_height)
        .max(1);
    (new_width, new_height)
}

/// Lanczos3 resample of an interleaved RGB buffer.
pub fn resize_rgb_image(image: &RgbImage, target_width: u32, target_height: u32) -> Result<RgbImage> {
    let (original_width, original_height) = image.dimensions();
    if (original_width, original_height) == (target_width, target_height) {
        return Ok(image.clone());
    }

    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        original_width,
        original_height,
        image.as_raw().clone(),
        PixelType::U8x3,
    )
    .map_err(Error::external)?;
    let mut dst_image = Image::new(target_width, target_height, PixelType::U8x3);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::external)?;

    RgbImage::from_raw(target_width, target_height, dst_image.into_vec())
        .ok_or_else(|| Error::Processing("resized buffer has unexpected length".to_string()))
}

/// Resize to exactly `width x height`. With `pad`, the aspect ratio is kept
/// and the scaled image is centered on a black canvas.
pub fn resize_to(image: &RgbImage, width: u32, height: u32, pad: bool) -> Result<RgbImage> {
    if width == 0 || height == 0 {
        return Err(Error::ZeroSize { width, height });
    }
    let (original_width, original_height) = image.dimensions();
    if original_width == 0 || original_height == 0 {
        return Err(Error::ZeroSize {
            width: original_width,
            height: original_height,
        });
    }

    if !pad {
        info!(
            "Resizing {}x{} -> {}x{}",
            original_width, original_height, width, height
        );
        return resize_rgb_image(image, width, height);
    }

    let (fit_width, fit_height) =
        calculate_fit_dimensions(original_width, original_height, width, height);
    debug!(
        "Letterbox: {}x{} fits as {}x{} inside {}x{}",
        original_width, original_height, fit_width, fit_height, width, height
    );
    let resized = resize_rgb_image(image, fit_width, fit_height)?;
    Ok(pad_to_canvas(&resized, width, height))
}
