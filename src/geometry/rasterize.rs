//! Polygon membership and mask rasterization.

use crate::types::{Mask, Point, Polygon};

/// Even-odd polygon membership via a rightward ray cast.
///
/// Walks every edge, including the implied closing edge. An edge counts as
/// a crossing when it straddles the ray height half-open
/// (`p1.y < y <= p2.y` or the mirror), the point is not right of the edge's
/// larger x, and either the edge is vertical or its x-intersection at the
/// ray height lies at or right of the point. Horizontal edges never
/// straddle, so they never count. Points exactly on a non-horizontal edge
/// fall wherever the arithmetic puts them; only the interior and the
/// horizontal-edge exclusion are contractual.
pub fn point_in_polygon(point: Point, polygon: &Polygon) -> bool {
    let verts = polygon.vertices();
    let n = verts.len();
    let mut inside = false;

    let mut p1 = verts[0];
    for i in 1..=n {
        let p2 = verts[i % n];
        let straddles =
            (p1.y < point.y && point.y <= p2.y) || (p2.y < point.y && point.y <= p1.y);
        if straddles && point.x <= p1.x.max(p2.x) {
            if p1.x == p2.x {
                inside = !inside;
            } else {
                let x_int = (point.y - p1.y) * (p2.x - p1.x) / (p2.y - p1.y) + p1.x;
                if point.x <= x_int {
                    inside = !inside;
                }
            }
        }
        p1 = p2;
    }

    inside
}

/// Rasterize a polygon into a boolean mask over a pixel grid.
///
/// Evaluates membership at every integer coordinate of the
/// `width x height` grid. A straight full-grid sweep, O(w * h * edges);
/// selection regions are small enough that a scanline fill has never been
/// worth its bookkeeping.
pub fn rasterize_mask(width: usize, height: usize, polygon: &Polygon) -> Mask {
    let cells = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| point_in_polygon(Point::new(x as f64, y as f64), polygon))
                .collect()
        })
        .collect();

    Mask::new(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Polygon {
        Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
        ])
        .unwrap()
    }

    fn ascii(mask: &Mask) -> String {
        mask.rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&c| if c { '#' } else { '.' })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_interior_point_is_inside() {
        assert!(point_in_polygon(Point::new(0.5, 0.5), &unit_square()));
    }

    #[test]
    fn test_point_on_horizontal_edge_is_outside() {
        assert!(!point_in_polygon(Point::new(0.5, 0.0), &unit_square()));
    }

    #[test]
    fn test_points_beyond_the_boundary_are_outside() {
        let square = unit_square();

        assert!(!point_in_polygon(Point::new(2.0, 0.5), &square));
        assert!(!point_in_polygon(Point::new(-0.5, 0.5), &square));
        assert!(!point_in_polygon(Point::new(0.5, 1.5), &square));
        assert!(!point_in_polygon(Point::new(0.5, -0.5), &square));
    }

    #[test]
    fn test_triangle_membership() {
        let triangle = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(2.0, 4.0),
        ])
        .unwrap();

        assert!(point_in_polygon(Point::new(2.0, 1.0), &triangle));
        assert!(!point_in_polygon(Point::new(0.5, 3.0), &triangle));
        assert!(!point_in_polygon(Point::new(3.5, 3.0), &triangle));
    }

    #[test]
    fn test_mask_covers_left_half() {
        let polygon = Polygon::new(vec![
            Point::new(-0.5, -0.5),
            Point::new(4.5, -0.5),
            Point::new(4.5, 9.5),
            Point::new(-0.5, 9.5),
        ])
        .unwrap();

        let mask = rasterize_mask(10, 10, &polygon);

        assert_eq!(mask.count(), 50);
        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(mask.contains(x, y), x <= 4, "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_mask_diamond_snapshot() {
        let polygon = Polygon::new(vec![
            Point::new(5.0, 0.5),
            Point::new(9.5, 5.0),
            Point::new(5.0, 9.5),
            Point::new(0.5, 5.0),
        ])
        .unwrap();

        let mask = rasterize_mask(11, 11, &polygon);

        insta::assert_snapshot!(ascii(&mask), @r"
        ...........
        .....#.....
        ....###....
        ...#####...
        ..#######..
        .#########.
        ..#######..
        ...#####...
        ....###....
        .....#.....
        ...........
        ");
    }

    #[test]
    fn test_mask_outside_grid_polygon_is_empty() {
        let polygon = Polygon::new(vec![
            Point::new(20.0, 20.0),
            Point::new(30.0, 20.0),
            Point::new(25.0, 30.0),
        ])
        .unwrap();

        let mask = rasterize_mask(10, 10, &polygon);

        assert_eq!(mask.count(), 0);
    }
}
