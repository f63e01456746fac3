//! Shared types used across meterdoc.
//! Includes the `Region` box produced by the detector, the `NamedImage`
//! unit passed between loader, processing and document assembly, and the
//! `Operation` / `OperationKind` enums selecting which utility runs.
use clap::ValueEnum;
use image::RgbImage;
use serde::{Deserialize, Serialize};

/// Axis-aligned box in pixel coordinates.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Box area `w * h`; this is the ranking metric, not the filter metric.
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// True when the region is non-empty and lies fully inside `width x height`.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.width > 0
            && self.height > 0
            && self.x as u64 + self.width as u64 <= width as u64
            && self.y as u64 + self.height as u64 <= height as u64
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

/// An image together with the name it was uploaded under.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedImage {
    pub name: String,
    pub image: RgbImage,
}

impl NamedImage {
    pub fn new(name: impl Into<String>, image: RgbImage) -> Self {
        Self {
            name: name.into(),
            image,
        }
    }
}

/// The image operation applied to every input of a batch.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Operation {
    /// Locate the display region and crop to it
    #[default]
    Detect,
    /// Crop a fixed rectangle
    Crop {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    /// Resize to a fixed size; `pad` letterboxes instead of stretching
    Resize { width: u32, height: u32, pad: bool },
}

impl Operation {
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::Detect => OperationKind::Detect,
            Operation::Crop { .. } => OperationKind::Crop,
            Operation::Resize { .. } => OperationKind::Resize,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Detect => write!(f, "Detect"),
            Operation::Crop {
                x,
                y,
                width,
                height,
            } => write!(f, "Crop({}x{}+{}+{})", width, height, x, y),
            Operation::Resize { width, height, pad } => {
                write!(f, "Resize({}x{}, pad={})", width, height, pad)
            }
        }
    }
}

/// Parameterless discriminant of `Operation`, used for naming outputs.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum OperationKind {
    Detect,
    Crop,
    Resize,
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OperationKind::Detect => "Detect",
            OperationKind::Crop => "Crop",
            OperationKind::Resize => "Resize",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_fits_within_bounds() {
        let r = Region::new(10, 10, 20, 5);
        assert!(r.fits_within(30, 15));
        assert!(!r.fits_within(29, 15));
        assert!(!r.fits_within(30, 14));
        assert!(!Region::new(0, 0, 0, 5).fits_within(10, 10));
    }

    #[test]
    fn operation_roundtrips_through_json() {
        let op = Operation::Resize {
            width: 640,
            height: 480,
            pad: true,
        };
        let json = serde_json::to_string(&op).unwrap();
        assert!(json.contains("\"kind\":\"resize\""));
        let back: Operation = serde_json::from_str(&json).unwrap();
        assert_eq!(op, back);
        assert_eq!(back.kind(), OperationKind::Resize);
    }
}
