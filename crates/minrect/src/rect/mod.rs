//! Minimum-area enclosing rectangle of a convex polygon.
//!
//! Purpose
//! - Turn a counterclockwise convex hull into the smallest oriented rectangle
//!   containing it, via one of three interchangeable strategies.
//! - Keep the strategies side by side: brute force and angle enumeration are
//!   the oracles for the incremental calipers sweep.
//!
//! Input handling
//! - Hulls with fewer than 3 vertices have no rectangle (`None`).
//! - Repeated consecutive vertices (possible in the ≤3-point hull passthrough)
//!   are removed first; a hull of one distinct point yields a collapsed,
//!   zero-area rectangle. Collinear hulls yield zero-area rectangles.
//! - Clockwise input (a 3-point hull passed through unchanged) is reversed.
//! - The hull is not re-validated for convexity.
//!
//! Code cross-refs: `hull::convex_hull`, `api::compute_minimum_enclosing_rectangle`

mod angles;
mod calipers;
mod types;

pub use angles::angle_enumeration_rect;
pub use calipers::{brute_force_box, incremental_box, rectangle_from_box, smallest_box};
pub use types::{EnclosingRectangle, ParseStrategyError, RectangleStrategy, SupportBox};

use crate::cfg::{areas_agree, areas_agree_within, ANGLE_ENUM_REL_TOL};
use crate::geom::{dedup_cyclic, signed_area, Point};

/// Minimum-area rectangle around a counterclockwise convex `hull`.
pub fn min_area_rect(hull: &[Point], strategy: RectangleStrategy) -> Option<EnclosingRectangle> {
    if hull.len() < 3 {
        return None;
    }
    let mut vertices = dedup_cyclic(hull);
    if vertices.len() == 1 {
        return Some(EnclosingRectangle::collapsed(vertices[0]));
    }
    // Only the ≤3-point passthrough can arrive clockwise.
    if signed_area(&vertices) < 0.0 {
        vertices.reverse();
    }
    let rect = match strategy {
        RectangleStrategy::Incremental => {
            rectangle_from_box(&vertices, &incremental_box(&vertices))
        }
        RectangleStrategy::BruteForce => {
            rectangle_from_box(&vertices, &brute_force_box(&vertices))
        }
        RectangleStrategy::AngleEnumeration => angle_enumeration_rect(&vertices),
    };
    tracing::debug!(
        vertices = vertices.len(),
        %strategy,
        area = rect.area(),
        "min_area_rect"
    );
    Some(rect)
}

/// Areas found by every strategy for the same hull.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CrossCheck {
    pub incremental: f64,
    pub brute_force: f64,
    pub angle_enumeration: f64,
    /// Incremental and brute force equal within `1e-9` relative, angle
    /// enumeration within the looser `1e-5`.
    pub agree: bool,
}

impl CrossCheck {
    pub fn area(&self, strategy: RectangleStrategy) -> f64 {
        match strategy {
            RectangleStrategy::Incremental => self.incremental,
            RectangleStrategy::BruteForce => self.brute_force,
            RectangleStrategy::AngleEnumeration => self.angle_enumeration,
        }
    }
}

/// Run all strategies on `hull` and compare their areas. `None` if `hull.len() < 3`.
pub fn cross_check(hull: &[Point]) -> Option<CrossCheck> {
    let incremental = min_area_rect(hull, RectangleStrategy::Incremental)?.area();
    let brute_force = min_area_rect(hull, RectangleStrategy::BruteForce)?.area();
    let angle_enumeration = min_area_rect(hull, RectangleStrategy::AngleEnumeration)?.area();
    let agree = areas_agree(incremental, brute_force)
        && areas_agree_within(brute_force, angle_enumeration, ANGLE_ENUM_REL_TOL)
        && areas_agree_within(incremental, angle_enumeration, ANGLE_ENUM_REL_TOL);
    if !agree {
        tracing::warn!(
            incremental,
            brute_force,
            angle_enumeration,
            "rectangle strategies disagree"
        );
    }
    Some(CrossCheck {
        incremental,
        brute_force,
        angle_enumeration,
        agree,
    })
}

#[cfg(test)]
mod tests;
