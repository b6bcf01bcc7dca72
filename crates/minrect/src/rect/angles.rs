//! Minimum-area rectangle by enumerating edge orientations.
//!
//! A rectangle flush with an edge is also flush with the perpendicular
//! direction, so candidate frames are the distinct edge angles modulo 90°.
//! Each candidate rotates all vertices into its frame and takes the
//! axis-aligned bounding box there; the smallest box is rotated back.

use std::f64::consts::FRAC_PI_2;

use nalgebra::{Rotation2, Vector2};

use super::types::EnclosingRectangle;
use crate::geom::{aabb, Point};

/// Distinct edge angles in `[0, π/2)`, ascending, over all `n` cyclic edges.
pub(crate) fn candidate_angles(vertices: &[Point]) -> Vec<f64> {
    let n = vertices.len();
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let e = vertices[(k + 1) % n] - vertices[k];
            e.y.atan2(e.x).rem_euclid(FRAC_PI_2)
        })
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    angles.dedup();
    angles
}

/// Smallest axis-aligned box over all candidate frames; first minimum wins.
///
/// Precondition: at least one vertex.
pub fn angle_enumeration_rect(vertices: &[Point]) -> EnclosingRectangle {
    let mut best: Option<(f64, f64, Point, Point)> = None;
    for theta in candidate_angles(vertices) {
        let to_frame = Rotation2::new(-theta);
        let rotated: Vec<Point> = vertices.iter().map(|&p| to_frame * p).collect();
        let Some((lo, hi)) = aabb(&rotated) else {
            continue;
        };
        let area = (hi.x - lo.x) * (hi.y - lo.y);
        if best.as_ref().is_none_or(|(a, ..)| area < *a) {
            best = Some((area, theta, lo, hi));
        }
    }
    match best {
        Some((_, theta, lo, hi)) => {
            let back = Rotation2::new(theta);
            EnclosingRectangle {
                center: back * ((lo + hi) * 0.5),
                axes: [back * Vector2::x(), back * Vector2::y()],
                extents: [0.5 * (hi.x - lo.x), 0.5 * (hi.y - lo.y)],
            }
        }
        None => EnclosingRectangle::collapsed(vertices[0]),
    }
}
