use image::RgbImage;
use image::imageops;
use tracing::info;

use crate::error::{Error, Result};
use crate::types::Region;

/// Copy `region` out of `image`; the caller guarantees it fits.
pub(crate) fn crop_unchecked(image: &RgbImage, region: &Region) -> RgbImage {
    imageops::crop_imm(image, region.x, region.y, region.width, region.height).to_image()
}

/// Copy a fixed rectangle out of `image` into a new buffer.
pub fn crop_region(image: &RgbImage, region: &Region) -> Result<RgbImage> {
    let (image_width, image_height) = image.dimensions();
    if !region.fits_within(image_width, image_height) {
        return Err(Error::InvalidRegion {
            x: region.x,
            y: region.y,
            width: region.width,
            height: region.height,
            image_width,
            image_height,
        });
    }
    info!(
        "Cropping {} from {}x{} image",
        region, image_width, image_height
    );
    Ok(crop_unchecked(image, region))
}
