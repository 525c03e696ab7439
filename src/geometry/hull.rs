//! Convex hull of a freehand point trace.
//!
//! Monotone chain: sort by (x, y), build the lower and upper chains with a
//! strict turn test, concatenate. Freehand traces arrive with duplicated
//! samples, dense collinear runs, and self-intersections; all of that
//! collapses to the clean outer boundary.

use crate::error::{MirageError, Result};
use crate::types::{Point, Polygon};

/// Cross product of OA x OB; positive when the turn O->A->B is
/// counter-clockwise.
fn cross(o: Point, a: Point, b: Point) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

fn half_hull<'a>(points: impl Iterator<Item = &'a Point>) -> Vec<Point> {
    let mut chain: Vec<Point> = Vec::new();
    for &p in points {
        while chain.len() >= 2
            && cross(chain[chain.len() - 2], chain[chain.len() - 1], p) <= 0.0
        {
            chain.pop();
        }
        chain.push(p);
    }
    chain
}

/// Compute the convex hull of an arbitrary point sequence.
///
/// Returns the hull vertices in counter-clockwise order starting from the
/// lowest-leftmost point, with interior, collinear-redundant, and duplicate
/// points removed. Inputs that collapse to fewer than 3 hull vertices
/// (empty traces, single clicks, straight-line swipes) are rejected with
/// [`MirageError::InsufficientPoints`].
pub fn convex_hull(points: &[Point]) -> Result<Polygon> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    sorted.dedup_by(|a, b| a.x == b.x && a.y == b.y);

    if sorted.len() < 3 {
        return Err(MirageError::InsufficientPoints {
            found: sorted.len(),
        });
    }

    let mut lower = half_hull(sorted.iter());
    let mut upper = half_hull(sorted.iter().rev());

    // each chain ends where the other begins
    lower.pop();
    upper.pop();
    lower.extend(upper);

    if lower.len() < 3 {
        return Err(MirageError::InsufficientPoints {
            found: lower.len(),
        });
    }

    Polygon::new(lower)
}
