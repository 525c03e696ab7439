//! mirage - two-layer image pipeline
//!
//! Builds single PNG rasters that show one picture against a white backdrop
//! and a different picture against a black backdrop, by choosing per-pixel
//! lightness/alpha pairs that interpolate between the two targets at the
//! backdrop extremes. Includes the inverse extractor and a variant confined
//! to a freehand-selected region of one image.

pub mod align;
pub mod batch;
pub mod cli;
pub mod codec;
pub mod compose;
pub mod error;
pub mod geometry;
pub mod images;
pub mod manifest;
pub mod output;
pub mod types;
pub mod watch;

pub use align::resize_and_center;
pub use codec::{compute_alpha, compute_lightness, dark, light, merge, undark, unlight};
pub use compose::{compose_classic, compose_partial, extract, whiten_masked};
pub use error::{MirageError, Result};
pub use geometry::{convex_hull, point_in_polygon, rasterize_mask};
pub use images::{load_dual, load_gray, load_layers, save_dual, save_gray, save_rgba};
pub use manifest::Manifest;
pub use types::{
    CoordinateTransform, DualRaster, GrayRaster, Mask, Point, Polygon, RgbRaster, RgbaRaster,
};
pub use watch::{ImageSet, LayerRole, SetChange, SetEvent};
