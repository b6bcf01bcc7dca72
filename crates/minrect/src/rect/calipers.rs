//! Rotating calipers over a counterclockwise convex polygon.
//!
//! The minimum-area enclosing rectangle of a convex polygon has a side
//! containing a polygon edge, so it suffices to look at one box per edge:
//! - `brute_force_box`: build every per-edge box from scratch (O(n²)).
//! - `incremental_box`: start from one edge and advance the calliper frame by
//!   the smallest rotation that makes it flush with the next edge, updating
//!   the four contact vertices in place (O(n) steps).
//!
//! Both return a `SupportBox`; `rectangle_from_box` turns it into corners.
//! Preconditions: at least 2 vertices, no zero-length edges (callers dedup).

use nalgebra::Vector2;

use super::types::{EnclosingRectangle, SupportBox};
use crate::geom::Point;

/// Smallest box with one side along the edge `i0 → i1`.
///
/// Vertices are projected into the edge frame with origin `vertices[i1]`.
/// Ties are resolved towards the later comparison:
/// - `support[1]`: max x, ties by max y;
/// - `support[2]`: max y, ties by min x;
/// - `support[3]`: min x, ties by min y;
/// - `support[0]` stays `i1` (the edge line is the bottom side).
pub fn smallest_box(vertices: &[Point], i0: usize, i1: usize) -> SupportBox {
    let mut bx = SupportBox::along_edge(vertices[i0], vertices[i1]);
    bx.support = [i1; 4];
    let origin = vertices[i1];
    let mut ext: [Point; 4] = [Vector2::zeros(); 4];
    for (i, vertex) in vertices.iter().enumerate() {
        let diff = vertex - origin;
        let v = Vector2::new(bx.axes[0].dot(&diff), bx.axes[1].dot(&diff));

        if v.x > ext[1].x || (v.x == ext[1].x && v.y > ext[1].y) {
            bx.support[1] = i;
            ext[1] = v;
        }
        if v.y > ext[2].y || (v.y == ext[2].y && v.x < ext[2].x) {
            bx.support[2] = i;
            ext[2] = v;
        }
        if v.x < ext[3].x || (v.x == ext[3].x && v.y < ext[3].y) {
            bx.support[3] = i;
            ext[3] = v;
        }
    }
    let width = ext[1].x - ext[3].x;
    let height = ext[2].y;
    bx.area = width * height / bx.scale;
    bx
}

/// Minimum over the per-edge boxes of every edge `(i-1, i)`; first minimum wins.
pub fn brute_force_box(vertices: &[Point]) -> SupportBox {
    let n = vertices.len();
    let mut best = smallest_box(vertices, n - 1, 0);
    for i in 1..n {
        let bx = smallest_box(vertices, i - 1, i);
        if bx.area < best.area {
            best = bx;
        }
    }
    best
}

/// Exact incremental sweep starting from the edge `(n-1, 0)`.
///
/// Stops once the calliper would re-center on an already visited bottom
/// vertex (full turn), when no support has a usable edge, or after `n` steps.
pub fn incremental_box(vertices: &[Point]) -> SupportBox {
    let n = vertices.len();
    let mut visited = vec![false; n];
    let mut best = smallest_box(vertices, n - 1, 0);
    visited[best.support[0]] = true;

    let mut bx = best;
    let mut steps = 0usize;
    for _ in 0..n {
        let mut angles = compute_angles(vertices, &bx);
        if angles.is_empty() {
            break;
        }
        angles.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        if !update_support(vertices, &angles, &mut bx, &mut visited) {
            break;
        }
        steps += 1;
        if bx.area < best.area {
            best = bx;
        }
    }
    tracing::trace!(vertices = n, steps, area = best.area, "calipers sweep finished");
    best
}

/// Counterclockwise rotation, in `[0, π]`, that turns each calliper side onto
/// the hull edge leaving its support.
///
/// Side `k` has direction `axes[0], axes[1], -axes[0], -axes[1]` for `k = 0..4`.
/// A support that coincides with the next one (a corner touching two sides)
/// is skipped; the following side accounts for that vertex.
fn compute_angles(vertices: &[Point], bx: &SupportBox) -> Vec<(f64, usize)> {
    let n = vertices.len();
    let mut out = Vec::with_capacity(4);
    let mut k0 = 3usize;
    for k1 in 0..4 {
        if bx.support[k0] != bx.support[k1] {
            let axis = bx.axes[k0 & 1];
            let d = if k0 & 2 != 0 { -axis } else { axis };
            let j0 = bx.support[k0];
            let j1 = (j0 + 1) % n;
            let e = vertices[j1] - vertices[j0];
            out.push((d.perp(&e).atan2(d.dot(&e)), k0));
        }
        k0 = k1;
    }
    out
}

/// Advance every support tied at the minimum angle, then re-center on the
/// support of the smallest angle. Returns false if that bottom vertex was
/// already visited.
fn update_support(
    vertices: &[Point],
    angles: &[(f64, usize)],
    bx: &mut SupportBox,
    visited: &mut [bool],
) -> bool {
    let n = vertices.len();
    let (min_angle, min_k) = angles[0];
    for &(angle, k) in angles {
        if angle == min_angle {
            bx.support[k] = (bx.support[k] + 1) % n;
        }
    }
    let bottom = bx.support[min_k];
    if visited[bottom] {
        return false;
    }
    visited[bottom] = true;

    let prev = bx.support;
    bx.support = std::array::from_fn(|k| prev[(min_k + k) % 4]);
    let j1 = bx.support[0];
    let j0 = (j1 + n - 1) % n;
    bx.realign(vertices[j0], vertices[j1]);
    bx.area = bx.area_from_supports(vertices);
    true
}

/// Center, unit axes and half-extents of the box, from the actual hull
/// vertices at its supports.
pub fn rectangle_from_box(vertices: &[Point], bx: &SupportBox) -> EnclosingRectangle {
    let [s0, s1, s2, s3] = bx.support.map(|i| vertices[i]);
    let sum = [s1 + s3, s2 + s0];
    let diff = [s1 - s3, s2 - s0];
    let u = bx.axes;
    let center = (u[0] * u[0].dot(&sum[0]) + u[1] * u[1].dot(&sum[1])) * 0.5 / bx.scale;

    let mut axes = [Vector2::zeros(); 2];
    let mut extents = [0.0; 2];
    for i in 0..2 {
        let half = 0.5 * u[i].dot(&diff[i]);
        extents[i] = half.abs() / bx.scale.sqrt();
        // Rescale by the largest component before normalizing.
        let inv_max = 1.0 / u[i].x.abs().max(u[i].y.abs());
        let a = u[i] * inv_max;
        axes[i] = a / a.dot(&a).sqrt();
    }
    EnclosingRectangle {
        center,
        axes,
        extents,
    }
}
