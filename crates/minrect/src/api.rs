//! Entry points for callers (display front-ends, batch drivers).
//!
//! Each call recomputes from the given points; nothing is cached between calls.
//! `None` from the rectangle functions means "nothing to draw" (fewer than
//! three hull vertices).

pub use crate::geom::Point;
pub use crate::rect::{EnclosingRectangle, RectangleStrategy};

use crate::hull::convex_hull;
use crate::rect::min_area_rect;

/// Convex hull, counterclockwise from the bottom-most point.
pub fn compute_convex_hull(points: &[Point]) -> Vec<Point> {
    convex_hull(points)
}

/// Hull, then minimum-area rectangle with the default strategy.
pub fn compute_minimum_enclosing_rectangle(points: &[Point]) -> Option<EnclosingRectangle> {
    compute_minimum_enclosing_rectangle_with(points, RectangleStrategy::default())
}

/// Hull, then minimum-area rectangle with an explicit strategy.
pub fn compute_minimum_enclosing_rectangle_with(
    points: &[Point],
    strategy: RectangleStrategy,
) -> Option<EnclosingRectangle> {
    let hull = convex_hull(points);
    minimum_enclosing_rectangle_of_hull(&hull, strategy)
}

/// Minimum-area rectangle of an already computed hull (skips the hull step).
pub fn minimum_enclosing_rectangle_of_hull(
    hull: &[Point],
    strategy: RectangleStrategy,
) -> Option<EnclosingRectangle> {
    min_area_rect(hull, strategy)
}
