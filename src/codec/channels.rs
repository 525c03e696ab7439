//! The lightness/alpha encoding at the heart of the two-layer trick.
//!
//! Compositing a pixel with lightness L and alpha a over a backdrop with
//! luminance K yields `L*a/255 + K*(255-a)/255`. Choosing
//! `a = 255 - (top - bottom)` and `L = bottom/a * 255` makes that expression
//! reproduce `top` when K is white (255) and `bottom` when K is black (0).
//! All arithmetic stays in the 8-bit wraparound domain the way the
//! compositing hardware sees it.

use crate::error::{MirageError, Result};
use crate::types::{DualRaster, GrayRaster};

fn ensure_same_size(a: &GrayRaster, b: &GrayRaster) -> Result<()> {
    if a.size() != b.size() {
        return Err(MirageError::ShapeMismatch {
            expected: a.size(),
            found: b.size(),
        });
    }
    Ok(())
}

/// Compute the alpha plane from the top and bottom layers.
///
/// Per pixel: `255 - (top - bottom)` under 8-bit wraparound. A result of
/// exactly 255 (the layers match) is remapped to 0, enforcing the
/// raster-wide "alpha never 255" invariant.
pub fn compute_alpha(top: &GrayRaster, bottom: &GrayRaster) -> Result<GrayRaster> {
    ensure_same_size(top, bottom)?;

    let pixels = top
        .rows()
        .iter()
        .zip(bottom.rows())
        .map(|(trow, brow)| {
            trow.iter()
                .zip(brow)
                .map(|(&t, &b)| {
                    let alpha = 255u8.wrapping_sub(t.wrapping_sub(b));
                    if alpha == 255 {
                        0
                    } else {
                        alpha
                    }
                })
                .collect()
        })
        .collect();

    Ok(GrayRaster::new(pixels))
}

/// Compute the lightness plane from an alpha plane and the bottom layer.
///
/// Per pixel where alpha is non-zero: `trunc(bottom / alpha * 255)`,
/// wrapped to 8 bits. The un-premultiply step: this is the constant
/// lightness which, pushed through the alpha over white and black
/// backdrops, lands on the two target values. Zero-alpha pixels get
/// lightness 0; they never show a color from this plane.
pub fn compute_lightness(alpha: &GrayRaster, bottom: &GrayRaster) -> Result<GrayRaster> {
    ensure_same_size(alpha, bottom)?;

    let pixels = alpha
        .rows()
        .iter()
        .zip(bottom.rows())
        .map(|(arow, brow)| {
            arow.iter()
                .zip(brow)
                .map(|(&a, &b)| {
                    if a == 0 {
                        0
                    } else {
                        (f64::from(b) / f64::from(a) * 255.0) as u32 as u8
                    }
                })
                .collect()
        })
        .collect();

    Ok(GrayRaster::new(pixels))
}

/// Merge a top and bottom layer into one lightness + alpha raster.
pub fn merge(top: &GrayRaster, bottom: &GrayRaster) -> Result<DualRaster> {
    let alpha = compute_alpha(top, bottom)?;
    let lightness = compute_lightness(&alpha, bottom)?;
    DualRaster::new(lightness, alpha)
}
