//! Canvas alignment for layer pairs of different sizes.

use crate::types::GrayRaster;

/// Paste a raster into a canvas at the given offset.
fn paste(canvas: &mut GrayRaster, src: &GrayRaster, ox: usize, oy: usize) {
    for (y, row) in src.rows().iter().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            canvas.put(ox + x, oy + y, v);
        }
    }
}

/// Place two layers onto a shared canvas sized to their maximum extent.
///
/// The canvas is `max(widths) x max(heights)`. Along any axis where a layer
/// is the smaller one it is centered with a `floor(diff / 2)` offset; along
/// an axis where it is the larger (or equal) one it sits at 0. The top
/// canvas pads with white (255), the bottom with black (0), so padding
/// disappears against the matching backdrop. No scaling, only translation.
pub fn resize_and_center(top: &GrayRaster, bottom: &GrayRaster) -> (GrayRaster, GrayRaster) {
    let (w_t, h_t) = top.size();
    let (w_b, h_b) = bottom.size();
    let w = w_t.max(w_b);
    let h = h_t.max(h_b);

    let mut top_aligned = GrayRaster::filled(w, h, 255);
    let mut bottom_aligned = GrayRaster::filled(w, h, 0);

    paste(&mut top_aligned, top, (w - w_t) / 2, (h - h_t) / 2);
    paste(&mut bottom_aligned, bottom, (w - w_b) / 2, (h - h_b) / 2);

    (top_aligned, bottom_aligned)
}
