//! Selection geometry: hull cleanup of freehand traces and mask
//! rasterization.

mod hull;
mod rasterize;

pub use hull::convex_hull;
pub use rasterize::{point_in_polygon, rasterize_mask};
