//! Convex hulls and minimum-area enclosing rectangles of planar point sets.
//!
//! Pipeline: points → `hull::convex_hull` (Graham scan, counterclockwise,
//! strictly convex) → `rect::min_area_rect` (rotating calipers or angle
//! enumeration) → `EnclosingRectangle` (center, unit axes, half-extents).
//!
//! All computations are pure functions of their input; working state is local
//! to each call, so independent inputs can be processed in parallel freely.

pub mod api;
mod cfg;
pub mod geom;
pub mod hull;
pub mod rect;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{Orientation, Point, PointExt};
pub use nalgebra::Vector2 as Vec2;
pub use rect::{CrossCheck, EnclosingRectangle, RectangleStrategy, SupportBox};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::api::{
        compute_convex_hull, compute_minimum_enclosing_rectangle,
        compute_minimum_enclosing_rectangle_with, minimum_enclosing_rectangle_of_hull,
    };
    pub use crate::geom::{orientation, Orientation, Point, PointExt};
    pub use crate::hull::convex_hull;
    pub use crate::rect::{cross_check, min_area_rect, EnclosingRectangle, RectangleStrategy};
    pub use crate::sample::{draw_points, CloudCfg, PointCount, ReplayToken};
    pub use nalgebra::Vector2 as Vec2;
}

#[cfg(test)]
mod tests_props;
