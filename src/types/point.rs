//! Points, polygons, and the capture-space coordinate transform.

use crate::error::{MirageError, Result};

/// A 2-D point with sub-pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An ordered, implicitly closed sequence of at least 3 vertices.
///
/// The closing edge from the last vertex back to the first is implied;
/// construction rejects anything shorter than a triangle, so downstream
/// mask rasterization never sees a degenerate boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Create a polygon from a vertex list.
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(MirageError::InsufficientPoints {
                found: vertices.len(),
            });
        }
        Ok(Self { vertices })
    }

    /// Get the vertex list, in order.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Get the number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false: construction requires at least 3 vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Maps raw capture coordinates into image pixel space.
///
/// Interactive capture happens on a canvas that may be scaled down from the
/// full image and panned; the transform carries that relationship explicitly
/// so the geometry kernel itself stays scale-agnostic. Applied once to the
/// raw trace, before hull computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateTransform {
    /// Multiplier from capture units to image pixels.
    pub scale: f64,

    /// Translation applied after scaling, in image pixels.
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for CoordinateTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl CoordinateTransform {
    /// A transform that applies a scale and no offset.
    pub fn scaled(scale: f64) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }

    /// Add a translation to this transform.
    pub fn with_offset(mut self, dx: f64, dy: f64) -> Self {
        self.offset_x = dx;
        self.offset_y = dy;
        self
    }

    /// Map a single point into image pixel space.
    pub fn apply_point(&self, p: Point) -> Point {
        Point::new(p.x * self.scale + self.offset_x, p.y * self.scale + self.offset_y)
    }

    /// Map a point sequence into image pixel space.
    pub fn apply(&self, points: &[Point]) -> Vec<Point> {
        points.iter().map(|&p| self.apply_point(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_rejects_degenerate() {
        let result = Polygon::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);

        assert!(matches!(
            result,
            Err(MirageError::InsufficientPoints { found: 2 })
        ));
    }

    #[test]
    fn test_polygon_triangle() {
        let polygon = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        ])
        .unwrap();

        assert_eq!(polygon.len(), 3);
        assert!(!polygon.is_empty());
    }

    #[test]
    fn test_transform_identity() {
        let t = CoordinateTransform::default();
        let p = Point::new(3.5, -2.0);

        assert_eq!(t.apply_point(p), p);
    }

    #[test]
    fn test_transform_scale_then_offset() {
        let t = CoordinateTransform::scaled(2.0).with_offset(10.0, -1.0);

        assert_eq!(t.apply_point(Point::new(3.0, 4.0)), Point::new(16.0, 7.0));
    }

    #[test]
    fn test_transform_apply_sequence() {
        let t = CoordinateTransform::scaled(0.5);
        let mapped = t.apply(&[Point::new(2.0, 4.0), Point::new(6.0, 8.0)]);

        assert_eq!(mapped, vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
    }
}
