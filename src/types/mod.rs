//! Core data types shared across the pipeline.

mod mask;
mod point;
mod raster;

pub use mask::Mask;
pub use point::{CoordinateTransform, Point, Polygon};
pub use raster::{DualRaster, GrayRaster, RgbRaster, RgbaRaster};
