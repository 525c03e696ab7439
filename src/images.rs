//! File decode/encode boundary.
//!
//! Everything format-specific lives here: sources decode to raster grids,
//! composed results encode back out. Composed output must be PNG, since
//! the alpha plane is the payload and a format that drops or premultiplies
//! it destroys the trick.

use std::path::{Path, PathBuf};

use image::{DynamicImage, GrayAlphaImage, GrayImage, ImageBuffer, RgbaImage};

use crate::error::{MirageError, Result};
use crate::types::{DualRaster, GrayRaster, RgbRaster, RgbaRaster};

/// File extensions accepted as composition sources.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Check whether a path looks like a decodable source image.
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .is_some_and(|e| SUPPORTED_EXTENSIONS.contains(&e.as_str()))
}

/// Force a `.png` extension, appending rather than replacing dots in the
/// file stem.
pub fn ensure_png(path: &Path) -> PathBuf {
    if path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"))
    {
        path.to_path_buf()
    } else {
        let mut name = path.file_name().unwrap_or_default().to_os_string();
        name.push(".png");
        path.with_file_name(name)
    }
}

fn open(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| MirageError::Image {
        path: path.to_path_buf(),
        message: format!("Failed to decode: {}", e),
    })
}

fn save_error(path: &Path, e: image::ImageError) -> MirageError {
    MirageError::Image {
        path: path.to_path_buf(),
        message: format!("Failed to encode: {}", e),
    }
}

fn gray_from_image(img: &GrayImage) -> GrayRaster {
    let pixels = img
        .rows()
        .map(|row| row.map(|px| px.0[0]).collect())
        .collect();
    GrayRaster::new(pixels)
}

/// Decode an image file to a grayscale raster.
pub fn load_gray(path: &Path) -> Result<GrayRaster> {
    Ok(gray_from_image(&open(path)?.to_luma8()))
}

/// Decode an image file once, returning its color and grayscale views.
pub fn load_layers(path: &Path) -> Result<(RgbRaster, GrayRaster)> {
    let img = open(path)?;
    let rgb = img.to_rgb8();
    let pixels = rgb.rows().map(|row| row.map(|px| px.0).collect()).collect();
    Ok((RgbRaster::new(pixels), gray_from_image(&img.to_luma8())))
}

/// Decode a composed lightness + alpha PNG.
pub fn load_dual(path: &Path) -> Result<DualRaster> {
    let img = open(path)?.to_luma_alpha8();
    let (lightness, alpha): (Vec<Vec<u8>>, Vec<Vec<u8>>) = img
        .rows()
        .map(|row| row.map(|px| (px.0[0], px.0[1])).unzip())
        .unzip();
    DualRaster::new(GrayRaster::new(lightness), GrayRaster::new(alpha))
}

/// Encode a composed raster as a lightness + alpha PNG.
pub fn save_dual(dual: &DualRaster, path: &Path) -> Result<()> {
    let (w, h) = dual.size();
    let img: GrayAlphaImage = ImageBuffer::from_raw(w as u32, h as u32, dual.to_la_buffer())
        .ok_or_else(|| MirageError::Image {
            path: path.to_path_buf(),
            message: "Raster buffer does not match its dimensions".to_string(),
        })?;
    img.save(path).map_err(|e| save_error(path, e))
}

/// Encode a partial-composite raster as an RGBA PNG.
pub fn save_rgba(raster: &RgbaRaster, path: &Path) -> Result<()> {
    let (w, h) = raster.size();
    let img: RgbaImage = ImageBuffer::from_raw(w as u32, h as u32, raster.to_rgba_buffer())
        .ok_or_else(|| MirageError::Image {
            path: path.to_path_buf(),
            message: "Raster buffer does not match its dimensions".to_string(),
        })?;
    img.save(path).map_err(|e| save_error(path, e))
}

/// Encode a grayscale raster (an extracted layer) to a file.
pub fn save_gray(raster: &GrayRaster, path: &Path) -> Result<()> {
    let (w, h) = raster.size();
    let img: GrayImage = ImageBuffer::from_raw(w as u32, h as u32, raster.to_luma_buffer())
        .ok_or_else(|| MirageError::Image {
            path: path.to_path_buf(),
            message: "Raster buffer does not match its dimensions".to_string(),
        })?;
    img.save(path).map_err(|e| save_error(path, e))
}
