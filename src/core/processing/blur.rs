use image::GrayImage;
use imageproc::filter::separable_filter_equal;
use tracing::debug;

/// Kernel size used ahead of Otsu binarization.
pub const BLUR_KERNEL_SIZE: usize = 5;

/// Sigma derived from the kernel size when none is given:
/// `0.3 * ((ksize - 1) * 0.5 - 1) + 0.8`.
pub fn sigma_for_kernel(ksize: usize) -> f32 {
    0.3 * ((ksize as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Normalized 1-D Gaussian taps of odd length `ksize`.
pub fn gaussian_kernel(ksize: usize, sigma: f32) -> Vec<f32> {
    let half = (ksize / 2) as i32;
    let scale = -0.5 / (sigma * sigma);
    let mut taps: Vec<f32> = (-half..=half)
        .map(|i| ((i * i) as f32 * scale).exp())
        .collect();
    let sum: f32 = taps.iter().sum();
    for t in taps.iter_mut() {
        *t /= sum;
    }
    taps
}

/// 5x5 Gaussian blur with the sigma auto-selected from the kernel size.
/// Borders are clamped (edge pixels replicated), so values within 2 px of the
/// image edge can differ from a reflect-101 border.
pub fn gaussian_blur_5x5(image: &GrayImage) -> GrayImage {
    let sigma = sigma_for_kernel(BLUR_KERNEL_SIZE);
    let kernel = gaussian_kernel(BLUR_KERNEL_SIZE, sigma);
    debug!("Gaussian blur: ksize={}, sigma={:.3}", BLUR_KERNEL_SIZE, sigma);
    separable_filter_equal(image, kernel.as_slice())
}
