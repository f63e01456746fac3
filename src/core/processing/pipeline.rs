use image::RgbImage;
use serde::{Deserialize, Serialize};

use crate::core::processing::crop::crop_region;
use crate::core::processing::detect::detect_region;
use crate::core::processing::resize::resize_to;
use crate::error::Result;
use crate::types::{Operation, Region};

/// What one operation produced for one input image.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationOutput {
    /// Image to place in the document, with the source region it came from
    /// (`None` for resize, which keeps the whole frame).
    Image {
        image: RgbImage,
        region: Option<Region>,
        contour_area: Option<f64>,
    },
    /// Detection found no qualifying region. Not an error.
    NoDisplayFound,
}

/// Summary of an `OperationOutput` without the pixels, for reports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputStatus {
    Included,
    NoDisplayFound,
}

impl OperationOutput {
    pub fn status(&self) -> OutputStatus {
        match self {
            OperationOutput::Image { .. } => OutputStatus::Included,
            OperationOutput::NoDisplayFound => OutputStatus::NoDisplayFound,
        }
    }
}

/// Run `operation` on a single decoded image.
pub fn apply_operation(image: &RgbImage, operation: &Operation) -> Result<OperationOutput> {
    match *operation {
        Operation::Detect => Ok(match detect_region(image) {
            Some(detection) => OperationOutput::Image {
                image: detection.image,
                region: Some(detection.candidate.region),
                contour_area: Some(detection.candidate.contour_area),
            },
            None => OperationOutput::NoDisplayFound,
        }),
        Operation::Crop {
            x,
            y,
            width,
            height,
        } => {
            let region = Region::new(x, y, width, height);
            Ok(OperationOutput::Image {
                image: crop_region(image, &region)?,
                region: Some(region),
                contour_area: None,
            })
        }
        Operation::Resize { width, height, pad } => Ok(OperationOutput::Image {
            image: resize_to(image, width, height, pad)?,
            region: None,
            contour_area: None,
        }),
    }
}
