//! Image operations: color conversion, blur, Otsu binarization, contour
//! extraction and the display-region detector, plus fixed-region crop and
//! fixed-size resize.
pub mod blur;
pub mod color;
pub mod contours;
pub mod crop;
pub mod detect;
pub mod padding;
pub mod pipeline;
pub mod resize;
pub mod save;
pub mod threshold;
