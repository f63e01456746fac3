use image::RgbImage;
use tracing::info;

/// Center `image` on a black `width x height` canvas. Anything larger than
/// the canvas is clipped symmetrically.
pub fn pad_to_canvas(image: &RgbImage, width: u32, height: u32) -> RgbImage {
    let (cols, rows) = image.dimensions();
    let copy_cols = cols.min(width);
    let copy_rows = rows.min(height);
    let pad_cols = (width - copy_cols) / 2;
    let pad_rows = (height - copy_rows) / 2;
    let skip_cols = (cols - copy_cols) / 2;
    let skip_rows = (rows - copy_rows) / 2;

    info!(
        "Adding padding: cols={}, rows={}, pad_cols={}, pad_rows={}",
        cols, rows, pad_cols, pad_rows
    );
    info!("Final dimensions: {}x{}", width, height);

    let mut padded = RgbImage::new(width, height);
    let src: &[u8] = image.as_raw();
    let dst: &mut [u8] = &mut padded;
    let row_bytes = copy_cols as usize * 3;
    // Copy per row using slice copies to minimize per-pixel indexing
    for row in 0..copy_rows as usize {
        let src_offset = ((row + skip_rows as usize) * cols as usize + skip_cols as usize) * 3;
        let dst_offset = ((row + pad_rows as usize) * width as usize + pad_cols as usize) * 3;
        dst[dst_offset..dst_offset + row_bytes]
            .copy_from_slice(&src[src_offset..src_offset + row_bytes]);
    }
    padded
}
