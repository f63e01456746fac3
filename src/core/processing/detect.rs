//! Display-region detector.
//!
//! Finds the rectangular readout of a meter (or any bright, wide panel) in a
//! photo: grayscale, 5x5 Gaussian blur, Otsu binarization, external contours,
//! then a size/shape filter and a largest-box pick. The result is a crop of
//! the original color image, or `None` when nothing qualifies.
//!
//! Two area metrics are in play and must stay distinct: candidates are
//! filtered on the area enclosed by the contour polygon, and ranked on the
//! area of their bounding box.
use image::RgbImage;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::processing::blur::gaussian_blur_5x5;
use crate::core::processing::color::rgb_to_gray;
use crate::core::processing::contours::external_contours;
use crate::core::processing::crop::crop_unchecked;
use crate::core::processing::threshold::otsu_binarize;
use crate::types::Region;

/// Contour area must be strictly greater than this.
pub const MIN_CONTOUR_AREA: f64 = 1000.0;
/// Contour area must be strictly less than this.
pub const MAX_CONTOUR_AREA: f64 = 50000.0;
/// Box `w / h` must be strictly greater than this.
pub const MIN_ASPECT_RATIO: f64 = 1.5;
/// Box `w / h` must be strictly less than this.
pub const MAX_ASPECT_RATIO: f64 = 6.0;

/// A bounding box that survived the filter, with the contour area it was judged on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub region: Region,
    pub contour_area: f64,
}

/// Winning candidate and the color crop taken from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub candidate: Candidate,
    pub image: RgbImage,
}

pub fn passes_filter(contour_area: f64, region: &Region) -> bool {
    if region.height == 0 {
        return false;
    }
    let ratio = region.aspect_ratio();
    contour_area > MIN_CONTOUR_AREA
        && contour_area < MAX_CONTOUR_AREA
        && ratio > MIN_ASPECT_RATIO
        && ratio < MAX_ASPECT_RATIO
}

/// Every candidate passing the filter, in contour order.
pub fn find_candidates(image: &RgbImage) -> Vec<Candidate> {
    let gray = rgb_to_gray(image);
    let blurred = gaussian_blur_5x5(&gray);
    let (binary, _level) = otsu_binarize(&blurred);

    let contours = external_contours(&binary);
    debug!("External contours: {}", contours.len());

    contours
        .iter()
        .filter_map(|contour| {
            let region = contour.bounding_box()?;
            let contour_area = contour.area();
            if passes_filter(contour_area, &region) {
                Some(Candidate {
                    region,
                    contour_area,
                })
            } else {
                None
            }
        })
        .collect()
}

/// Largest bounding-box area wins; among equal boxes the first in contour order.
pub fn select_best(candidates: &[Candidate]) -> Option<Candidate> {
    let mut ranked = candidates.to_vec();
    // stable: ties keep contour order
    ranked.sort_by(|a, b| b.region.area().cmp(&a.region.area()));
    ranked.into_iter().next()
}

/// Locate the display region and return it together with its crop.
pub fn detect_region(image: &RgbImage) -> Option<Detection> {
    let candidates = find_candidates(image);
    let best = select_best(&candidates)?;
    info!(
        "Display region {} selected from {} candidate(s)",
        best.region,
        candidates.len()
    );
    Some(Detection {
        candidate: best,
        image: crop_unchecked(image, &best.region),
    })
}

/// Crop of the detected display region, or `None` when no contour qualifies.
pub fn detect(image: &RgbImage) -> Option<RgbImage> {
    detect_region(image).map(|d| d.image)
}
