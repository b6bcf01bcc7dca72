//! Planar point primitives.
//!
//! Purpose
//! - One point/vector type (`Point = Vector2<f64>`) with the few named
//!   operations the hull builder and the rectangle solver rely on.
//! - Exact orientation predicate (sign of the cross product computed without
//!   rounding error, no epsilon). The hull builder's angular sort and its
//!   turn tests both go through it.
//! - Small polygon helpers used by callers and tests (area, convexity,
//!   containment, bounding box, duplicate removal).
//!
//! Code cross-refs: `hull::convex_hull`, `rect::min_area_rect`

mod predicates;
mod types;
mod util;

pub use types::{cross, orientation, Orientation, Point, PointExt};
pub use util::{aabb, contains_eps, dedup_cyclic, is_strictly_convex, signed_area};
