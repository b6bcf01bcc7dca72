//! Point type and the vector operations the hull and solver need.
//!
//! - `Point`: a plain `nalgebra::Vector2<f64>`, used both as a coordinate and
//!   as a free vector (difference of two points).
//! - `PointExt`: the operations nalgebra does not already name.
//! - `Orientation`: exact turn direction of three points.
//!
//! nalgebra already covers `+`, `-`, scalar `*`, `component_mul`, `dot`, unary
//! `-`, and the 2D cross product `a.perp(&b) = a.x * b.y - a.y * b.x`.

use nalgebra::Vector2;

use super::predicates::orient2d;

/// 2D point or free vector.
pub type Point = Vector2<f64>;

/// Vector helpers on top of nalgebra.
pub trait PointExt {
    /// Rotate by -90°: `(x, y) ↦ (y, -x)`.
    fn perp_cw(&self) -> Self;
    /// Polar angle of `other` seen from `self`: `atan2(other.y - y, other.x - x)`.
    ///
    /// The angle of a point relative to itself is `atan2(0, 0) = 0`.
    fn polar_angle_to(&self, other: &Self) -> f64;
    fn squared_distance_to(&self, other: &Self) -> f64;
}

impl PointExt for Vector2<f64> {
    #[inline]
    fn perp_cw(&self) -> Self {
        Vector2::new(self.y, -self.x)
    }

    #[inline]
    fn polar_angle_to(&self, other: &Self) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    #[inline]
    fn squared_distance_to(&self, other: &Self) -> f64 {
        (other - self).norm_squared()
    }
}

/// Turn direction of the path `a → b → c`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    Collinear,
    CounterClockwise,
}

impl Orientation {
    /// Classify a cross product by its exact sign (no tolerance).
    #[inline]
    pub fn from_cross(val: f64) -> Self {
        if val > 0.0 {
            Orientation::CounterClockwise
        } else if val < 0.0 {
            Orientation::Clockwise
        } else {
            Orientation::Collinear
        }
    }

    #[inline]
    pub fn is_left_turn(self) -> bool {
        matches!(self, Orientation::CounterClockwise)
    }
}

/// Signed area of the parallelogram spanned by `b - a` and `c - a`.
#[inline]
pub fn cross(a: Point, b: Point, c: Point) -> f64 {
    (b - a).perp(&(c - a))
}

/// Orientation of the turn `a → b → c`, exact for any finite inputs.
///
/// Same as `Orientation::from_cross(cross(a, b, c))` whenever the rounded
/// cross product is far enough from zero; near-collinear triples are decided
/// in exact arithmetic.
#[inline]
pub fn orientation(a: Point, b: Point, c: Point) -> Orientation {
    Orientation::from_cross(orient2d(a, b, c))
}
