//! Region-confined two-layer composition.

use crate::codec::merge;
use crate::error::{MirageError, Result};
use crate::geometry::rasterize_mask;
use crate::types::{GrayRaster, Mask, Polygon, RgbRaster, RgbaRaster};

/// Copy a grayscale raster with every masked pixel forced to white.
///
/// The whitened copy plays the top layer: inside the selection the "white
/// backdrop" view shows nothing, so the underlying picture only appears
/// against black.
pub fn whiten_masked(gray: &GrayRaster, mask: &Mask) -> GrayRaster {
    let pixels = gray
        .rows()
        .iter()
        .enumerate()
        .map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(|(x, &v)| if mask.contains(x, y) { 255 } else { v })
                .collect()
        })
        .collect();

    GrayRaster::new(pixels)
}

/// Apply the two-layer trick to a polygonal region of one image.
///
/// The polygon (already in image pixel coordinates) is rasterized to a
/// mask; the masked grayscale is whitened and merged against the original
/// grayscale. Outside the mask the output carries the source color fully
/// opaque and untouched; inside, the merged lightness fills all three
/// color channels and the merged alpha replaces opacity.
pub fn compose_partial(
    image_rgb: &RgbRaster,
    image_gray: &GrayRaster,
    polygon: &Polygon,
) -> Result<RgbaRaster> {
    if image_rgb.size() != image_gray.size() {
        return Err(MirageError::ShapeMismatch {
            expected: image_rgb.size(),
            found: image_gray.size(),
        });
    }

    let (width, height) = image_gray.size();
    let mask = rasterize_mask(width, height, polygon);
    let merged = merge(&whiten_masked(image_gray, &mask), image_gray)?;

    let pixels = image_rgb
        .rows()
        .iter()
        .enumerate()
        .map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(|(x, &[r, g, b])| {
                    if mask.contains(x, y) {
                        let (l, a) = merged.get(x, y).unwrap_or((0, 0));
                        [l, l, l, a]
                    } else {
                        [r, g, b, 255]
                    }
                })
                .collect()
        })
        .collect();

    Ok(RgbaRaster::new(pixels))
}
