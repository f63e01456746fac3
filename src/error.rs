//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, image codec and JSON errors, and provides semantic
//! variants for argument validation and document assembly failures.
//!
//! A detection miss is not an error: the detector signals it with `None`.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode image '{name}': {source}")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Encoding error: {0}")]
    Encode(String),

    #[error("Document error: {0}")]
    Document(String),

    #[error(
        "Region {width}x{height}+{x}+{y} does not fit inside {image_width}x{image_height} image"
    )]
    InvalidRegion {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        image_width: u32,
        image_height: u32,
    },

    #[error("Target size must be greater than 0, got: {width}x{height}")]
    ZeroSize { width: u32, height: u32 },

    #[error("No images to place in the document")]
    EmptyDocument,

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("External error: {0}")]
    External(String),
}

impl Error {
    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::External(e.to_string())
    }

    pub fn decode(name: impl Into<String>, source: image::ImageError) -> Self {
        Error::Decode {
            name: name.into(),
            source,
        }
    }
}
