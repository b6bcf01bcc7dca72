//! Value types of the rectangle solver.
//!
//! - `SupportBox`: rotating-calipers working state (frame, contact vertices, area).
//! - `EnclosingRectangle`: the oriented result (center, unit axes, half-extents).
//! - `RectangleStrategy`: which sweep produces the result.

use std::fmt;
use std::str::FromStr;

use nalgebra::Vector2;

use crate::geom::{Point, PointExt};

/// Calliper frame flush with one hull edge.
///
/// Invariants:
/// - `axes[0]` is (near-)unit along the current edge; `axes[1] = -perp_cw(axes[0])`,
///   i.e. `axes[0]` rotated by +90°.
/// - `scale = axes[0]·axes[0]` as recorded right after normalization; every
///   extent/area computation divides by it instead of assuming exactly 1.
/// - `support` are hull indices in the order (edge start, rightmost, topmost,
///   leftmost) relative to the frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SupportBox {
    pub axes: [Point; 2],
    pub scale: f64,
    pub support: [usize; 4],
    pub area: f64,
}

impl SupportBox {
    /// Frame along the edge `p0 → p1`. Support indices and area are left to the caller.
    pub(crate) fn along_edge(p0: Point, p1: Point) -> Self {
        let mut bx = Self {
            axes: [Vector2::zeros(); 2],
            scale: 0.0,
            support: [0; 4],
            area: 0.0,
        };
        bx.realign(p0, p1);
        bx
    }

    /// Recompute `axes` and `scale` for the edge `p0 → p1`.
    pub(crate) fn realign(&mut self, p0: Point, p1: Point) {
        // Rescale by the largest component before normalizing.
        let d = p1 - p0;
        let d = d / d.x.abs().max(d.y.abs());
        let u0 = d / d.dot(&d).sqrt();
        self.axes = [u0, -u0.perp_cw()];
        self.scale = u0.dot(&u0);
    }

    /// Area from the hull vertices at the current supports.
    pub(crate) fn area_from_supports(&self, vertices: &[Point]) -> f64 {
        let [s0, s1, s2, s3] = self.support;
        let d1 = vertices[s1] - vertices[s3];
        let d2 = vertices[s2] - vertices[s0];
        self.axes[0].dot(&d1) * self.axes[1].dot(&d2) / self.scale
    }
}

/// Oriented rectangle: `center + s·extents[0]·axes[0] + t·extents[1]·axes[1]`, `s,t ∈ [-1,1]`.
///
/// `axes` are unit length and right-handed (`axes[1]` is `axes[0]` rotated by +90°).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnclosingRectangle {
    pub center: Point,
    pub axes: [Point; 2],
    pub extents: [f64; 2],
}

impl EnclosingRectangle {
    /// Zero-extent rectangle at a single point.
    pub fn collapsed(p: Point) -> Self {
        Self {
            center: p,
            axes: [Vector2::new(1.0, 0.0), Vector2::new(0.0, 1.0)],
            extents: [0.0, 0.0],
        }
    }

    /// Corners in counterclockwise order: `(−,−), (+,−), (+,+), (−,+)`.
    pub fn corners(&self) -> [Point; 4] {
        let a = self.axes[0] * self.extents[0];
        let b = self.axes[1] * self.extents[1];
        [
            self.center - a - b,
            self.center + a - b,
            self.center + a + b,
            self.center - a + b,
        ]
    }

    #[inline]
    pub fn area(&self) -> f64 {
        4.0 * self.extents[0] * self.extents[1]
    }

    /// Membership with slack `eps` along each axis.
    pub fn contains_eps(&self, p: Point, eps: f64) -> bool {
        let d = p - self.center;
        (0..2).all(|i| self.axes[i].dot(&d).abs() <= self.extents[i] + eps)
    }
}

/// Algorithm used to find the minimum-area rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RectangleStrategy {
    /// Rotating calipers advancing by the smallest rotation, O(n) steps.
    Incremental,
    /// One projection pass per hull edge, O(n²).
    #[default]
    BruteForce,
    /// Axis-aligned boxes in the frame of every distinct edge angle mod 90°.
    AngleEnumeration,
}

impl RectangleStrategy {
    pub const ALL: [RectangleStrategy; 3] = [
        RectangleStrategy::Incremental,
        RectangleStrategy::BruteForce,
        RectangleStrategy::AngleEnumeration,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RectangleStrategy::Incremental => "incremental",
            RectangleStrategy::BruteForce => "brute-force",
            RectangleStrategy::AngleEnumeration => "angle-enumeration",
        }
    }
}

impl fmt::Display for RectangleStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown strategy name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseStrategyError(pub String);

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown strategy '{}' (expected incremental, brute-force, angle-enumeration)",
            self.0
        )
    }
}

impl std::error::Error for ParseStrategyError {}

impl FromStr for RectangleStrategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RectangleStrategy::ALL
            .into_iter()
            .find(|st| st.name() == s)
            .ok_or_else(|| ParseStrategyError(s.to_string()))
    }
}
