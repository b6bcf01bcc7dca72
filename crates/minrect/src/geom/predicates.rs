//! Orientation predicate for `f64` points with an exact sign.
//!
//! Wraps `robust::orient2d` (Shewchuk's adaptive predicate, the one behind
//! `geo`'s `RobustKernel`): the plain cross product when it clears the
//! forward error bound, exact expansion arithmetic otherwise.

use robust::Coord;

use super::types::Point;

#[inline]
fn coord(p: Point) -> Coord<f64> {
    Coord { x: p.x, y: p.y }
}

/// Approximation of `(b - a) × (c - a)` whose sign is exact.
pub(crate) fn orient2d(a: Point, b: Point, c: Point) -> f64 {
    robust::orient2d(coord(a), coord(b), coord(c))
}
