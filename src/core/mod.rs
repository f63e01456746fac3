//! Core building blocks: the display-region detector and its preprocessing
//! primitives, crop/resize operations, and processing parameters. These are
//! internal primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
