//! Whole-image two-layer composition.

use crate::align::resize_and_center;
use crate::codec::{dark, light, merge};
use crate::error::Result;
use crate::types::{DualRaster, GrayRaster};

/// Build a whole-image two-layer raster from a top and bottom source.
///
/// The top source is compressed into the upper half-range and the bottom
/// into the lower, the pair is aligned onto a shared canvas, and the result
/// is merged into lightness + alpha. Displayed over white the output reads
/// as `top`; over black, as `bottom`.
pub fn compose_classic(top: &GrayRaster, bottom: &GrayRaster) -> Result<DualRaster> {
    let (top_aligned, bottom_aligned) = resize_and_center(&light(top), &dark(bottom));
    merge(&top_aligned, &bottom_aligned)
}
