//! Convex hull by Graham scan around the bottom-most point.
//!
//! Points are ordered by polar angle around the pivot, then by distance. The
//! angle comparison is the exact orientation predicate, not `atan2`, so the
//! sort and the turn tests agree on nearly collinear points.
//!
//! Output conventions
//! - Counterclockwise order, starting at the pivot (minimum y, ties by minimum x).
//! - Strictly convex: collinear runs keep only their farthest point.
//! - Inputs with at most 3 points are returned unchanged (no dedup, no reorder).
//!   Larger degenerate inputs (all identical or all collinear) collapse to a
//!   1–2 point "hull"; the rectangle solver accepts both cases.

use std::cmp::Ordering;

use crate::geom::{orientation, Orientation, Point, PointExt};

/// Convex hull of `points`, counterclockwise from the bottom-most point.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    if points.len() <= 3 {
        return points.to_vec();
    }
    let start = pivot(points);
    let mut sorted: Vec<(f64, Point)> = points
        .iter()
        .map(|p| (start.squared_distance_to(p), *p))
        .collect();
    // Every point lies in the half-open upper half-plane around `start`, so
    // the turn direction is a total order on polar angles. Copies of `start`
    // are collinear with everything and sort first by distance.
    sorted.sort_by(|(da, a), (db, b)| match orientation(start, *a, *b) {
        Orientation::CounterClockwise => Ordering::Less,
        Orientation::Clockwise => Ordering::Greater,
        Orientation::Collinear => da.partial_cmp(db).unwrap_or(Ordering::Equal),
    });

    let mut hull: Vec<Point> = Vec::with_capacity(points.len());
    hull.push(start);
    hull.push(sorted[1].1);
    for &(_, p) in &sorted[2..] {
        while hull.len() > 1
            && orientation(hull[hull.len() - 2], hull[hull.len() - 1], p)
                != Orientation::CounterClockwise
        {
            hull.pop();
        }
        hull.push(p);
    }
    hull
}

/// Minimum y, ties broken by minimum x. Requires a non-empty slice.
fn pivot(points: &[Point]) -> Point {
    let mut best = points[0];
    for p in &points[1..] {
        if p.y < best.y || (p.y == best.y && p.x < best.x) {
            best = *p;
        }
    }
    best
}
