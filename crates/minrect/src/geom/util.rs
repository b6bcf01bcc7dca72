use nalgebra::Vector2;

use super::types::{cross, orientation, Point};

/// Shoelace area; positive for counterclockwise vertex order.
pub fn signed_area(poly: &[Point]) -> f64 {
    let n = poly.len();
    if n < 3 {
        return 0.0;
    }
    let mut acc = 0.0;
    for k in 0..n {
        let p = poly[k];
        let q = poly[(k + 1) % n];
        acc += p.perp(&q);
    }
    0.5 * acc
}

/// True if every cyclic consecutive triple is a strict left turn.
pub fn is_strictly_convex(poly: &[Point]) -> bool {
    let n = poly.len();
    if n < 3 {
        return false;
    }
    (0..n).all(|k| orientation(poly[k], poly[(k + 1) % n], poly[(k + 2) % n]).is_left_turn())
}

/// Membership in a counterclockwise convex polygon with slack `eps`.
///
/// `eps` is an absolute bound on the cross product `(q - p) × (x - p)` per edge,
/// so it scales with edge length. Degenerate polygons (fewer than 3 vertices)
/// only contain points within `eps` of one of their vertices.
pub fn contains_eps(poly: &[Point], x: Point, eps: f64) -> bool {
    let n = poly.len();
    if n < 3 {
        return poly.iter().any(|p| (p - x).norm() <= eps);
    }
    (0..n).all(|k| cross(poly[k], poly[(k + 1) % n], x) >= -eps)
}

/// Axis-aligned bounding box as `(min, max)` corners.
pub fn aabb(points: &[Point]) -> Option<(Point, Point)> {
    let first = *points.first()?;
    Some(points.iter().fold((first, first), |(lo, hi), p| {
        (
            Vector2::new(lo.x.min(p.x), lo.y.min(p.y)),
            Vector2::new(hi.x.max(p.x), hi.y.max(p.y)),
        )
    }))
}

/// Drop vertices equal to their cyclic predecessor (exact comparison).
///
/// A polygon of identical points collapses to a single vertex.
pub fn dedup_cyclic(poly: &[Point]) -> Vec<Point> {
    let mut out: Vec<Point> = Vec::with_capacity(poly.len());
    for &p in poly {
        if out.last() != Some(&p) {
            out.push(p);
        }
    }
    while out.len() > 1 && out.first() == out.last() {
        out.pop();
    }
    out
}
