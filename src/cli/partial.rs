//! Partial command implementation.
//!
//! Confines the two-layer trick to a selected region of one image. The
//! selection arrives as a raw point trace (or a rectangle shorthand), is
//! mapped into image pixel space, cleaned up to its convex hull, and
//! rasterized to a mask.

use std::path::PathBuf;

use clap::Args;

use crate::compose::compose_partial;
use crate::error::{MirageError, Result};
use crate::geometry::convex_hull;
use crate::images::{ensure_png, load_layers, save_rgba};
use crate::output::{display_path, Printer};
use crate::types::{CoordinateTransform, Point};

/// An axis-aligned selection rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectSpec {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl RectSpec {
    /// Corner points, clockwise from the origin corner.
    pub fn corners(&self) -> Vec<Point> {
        vec![
            Point::new(self.x, self.y),
            Point::new(self.x + self.w, self.y),
            Point::new(self.x + self.w, self.y + self.h),
            Point::new(self.x, self.y + self.h),
        ]
    }
}

fn parse_f64(value: &str, input: &str) -> std::result::Result<f64, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("invalid number '{}' in '{}'", value.trim(), input))
}

fn parse_point(s: &str) -> std::result::Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{}'", s))?;
    Ok(Point::new(parse_f64(x, s)?, parse_f64(y, s)?))
}

fn parse_rect(s: &str) -> std::result::Result<RectSpec, String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 4 {
        return Err(format!("expected X,Y,W,H, got '{}'", s));
    }
    Ok(RectSpec {
        x: parse_f64(parts[0], s)?,
        y: parse_f64(parts[1], s)?,
        w: parse_f64(parts[2], s)?,
        h: parse_f64(parts[3], s)?,
    })
}

/// Apply the two-layer trick to a selected region of one image
#[derive(Args, Debug)]
pub struct PartialArgs {
    /// Source image
    pub image: PathBuf,

    /// Output path (always written as PNG)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Selection trace points in capture coordinates, at least 3
    #[arg(long, value_name = "X,Y", num_args = 1.., value_parser = parse_point,
          allow_hyphen_values = true)]
    pub region: Vec<Point>,

    /// Axis-aligned selection rectangle, as a shorthand for --region
    #[arg(long, value_name = "X,Y,W,H", value_parser = parse_rect,
          allow_hyphen_values = true, conflicts_with = "region")]
    pub rect: Option<RectSpec>,

    /// Scale from capture coordinates to image pixels
    #[arg(long, default_value_t = 1.0)]
    pub scale: f64,

    /// Offset added after scaling, in image pixels
    #[arg(long, value_name = "DX,DY", value_parser = parse_point,
          allow_hyphen_values = true)]
    pub offset: Option<Point>,
}

fn default_output(image: &std::path::Path) -> PathBuf {
    let stem = image
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("composed");
    image.with_file_name(format!("{}_output.png", stem))
}

pub fn run(args: PartialArgs, printer: &Printer) -> Result<()> {
    let raw = if !args.region.is_empty() {
        args.region.clone()
    } else if let Some(rect) = args.rect {
        rect.corners()
    } else {
        return Err(MirageError::Build {
            message: "No selection region given".to_string(),
            help: Some("Pass --region X,Y X,Y X,Y ... or --rect X,Y,W,H".to_string()),
        });
    };

    let offset = args.offset.unwrap_or_default();
    let transform = CoordinateTransform::scaled(args.scale).with_offset(offset.x, offset.y);
    let polygon = convex_hull(&transform.apply(&raw))?;

    let (rgb, gray) = load_layers(&args.image)?;
    let composed = compose_partial(&rgb, &gray, &polygon)?;

    let out = args
        .output
        .as_deref()
        .map(ensure_png)
        .unwrap_or_else(|| default_output(&args.image));
    save_rgba(&composed, &out)?;
    printer.status("Writing", &display_path(&out));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::save_gray;
    use crate::types::GrayRaster;
    use tempfile::tempdir;

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("3,4.5").unwrap(), Point::new(3.0, 4.5));
        assert_eq!(parse_point("-1, 2").unwrap(), Point::new(-1.0, 2.0));
        assert!(parse_point("3").is_err());
        assert!(parse_point("a,b").is_err());
    }

    #[test]
    fn test_parse_rect_and_corners() {
        let rect = parse_rect("-0.5,-0.5,5,10").unwrap();

        assert_eq!(
            rect.corners(),
            vec![
                Point::new(-0.5, -0.5),
                Point::new(4.5, -0.5),
                Point::new(4.5, 9.5),
                Point::new(-0.5, 9.5),
            ]
        );
        assert!(parse_rect("1,2,3").is_err());
    }

    #[test]
    fn test_partial_rect_selection() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src.png");
        save_gray(&GrayRaster::filled(10, 10, 128), &src).unwrap();

        let out = dir.path().join("partial.png");
        let args = PartialArgs {
            image: src,
            output: Some(out.clone()),
            region: vec![],
            rect: Some(parse_rect("-0.5,-0.5,5,10").unwrap()),
            scale: 1.0,
            offset: None,
        };

        run(args, &Printer::new()).unwrap();

        let img = image::open(&out).unwrap().to_rgba8();
        // selection: merged lightness/alpha; rest: opaque source
        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 128]);
        assert_eq!(img.get_pixel(9, 9).0, [128, 128, 128, 255]);
    }

    #[test]
    fn test_partial_region_scaled_from_capture_space() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src.png");
        save_gray(&GrayRaster::filled(10, 10, 128), &src).unwrap();

        // the same left-half selection traced on a half-resolution canvas
        let out = dir.path().join("scaled.png");
        let args = PartialArgs {
            image: src,
            output: Some(out.clone()),
            region: vec![
                Point::new(-0.25, -0.25),
                Point::new(2.25, -0.25),
                Point::new(2.25, 4.75),
                Point::new(-0.25, 4.75),
            ],
            rect: None,
            scale: 2.0,
            offset: None,
        };

        run(args, &Printer::new()).unwrap();

        let img = image::open(&out).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(4, 5).0, [255, 255, 255, 128]);
        assert_eq!(img.get_pixel(5, 5).0, [128, 128, 128, 255]);
    }

    #[test]
    fn test_partial_without_selection_fails() {
        let args = PartialArgs {
            image: PathBuf::from("whatever.png"),
            output: None,
            region: vec![],
            rect: None,
            scale: 1.0,
            offset: None,
        };

        assert!(matches!(
            run(args, &Printer::new()),
            Err(MirageError::Build { .. })
        ));
    }

    #[test]
    fn test_partial_degenerate_region_fails() {
        let args = PartialArgs {
            image: PathBuf::from("whatever.png"),
            output: None,
            region: vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 2.0)],
            rect: None,
            scale: 1.0,
            offset: None,
        };

        assert!(matches!(
            run(args, &Printer::new()),
            Err(MirageError::InsufficientPoints { .. })
        ));
    }
}
