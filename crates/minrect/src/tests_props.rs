//! Property tests for the hull → rectangle pipeline.

use nalgebra::{vector, Rotation2};
use proptest::prelude::*;

use crate::geom::{aabb, contains_eps, is_strictly_convex, signed_area, Point};
use crate::hull::convex_hull;
use crate::rect::{brute_force_box, cross_check, incremental_box, min_area_rect};
use crate::RectangleStrategy;

fn lattice_points() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-50i32..=50, -50i32..=50), 4..40)
        .prop_map(|v| v.into_iter().map(|(x, y)| vector![x as f64, y as f64]).collect())
}

fn rel_close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * a.abs().max(b.abs()) + 1e-12
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn hull_is_strictly_convex_and_contains_input(pts in lattice_points()) {
        let hull = convex_hull(&pts);
        if hull.len() >= 3 {
            prop_assert!(is_strictly_convex(&hull));
            prop_assert!(signed_area(&hull) > 0.0);
        }
        for p in &pts {
            prop_assert!(contains_eps(&hull, *p, 0.0) || hull.len() < 3);
        }
    }

    #[test]
    fn hull_is_idempotent(pts in lattice_points()) {
        let hull = convex_hull(&pts);
        prop_assert_eq!(convex_hull(&hull), hull);
    }

    #[test]
    fn incremental_matches_brute_force(pts in lattice_points()) {
        let hull = convex_hull(&pts);
        prop_assume!(hull.len() >= 3);
        let inc = incremental_box(&hull).area;
        let bf = brute_force_box(&hull).area;
        prop_assert!(rel_close(inc, bf, 1e-9), "incremental {} vs brute force {}", inc, bf);
        let cc = cross_check(&hull).unwrap();
        prop_assert!(cc.agree, "{:?}", cc);
    }

    #[test]
    fn rectangle_area_is_bounded(pts in lattice_points()) {
        let hull = convex_hull(&pts);
        prop_assume!(hull.len() >= 3);
        let rect = min_area_rect(&hull, RectangleStrategy::default()).unwrap();
        let (lo, hi) = aabb(&pts).unwrap();
        let aabb_area = (hi.x - lo.x) * (hi.y - lo.y);
        let hull_area = signed_area(&hull);
        prop_assert!(rect.area() >= hull_area * (1.0 - 1e-9));
        prop_assert!(rect.area() <= aabb_area * (1.0 + 1e-9));
        for p in &pts {
            prop_assert!(rect.contains_eps(*p, 1e-9));
        }
    }

    #[test]
    fn rectangle_area_is_rotation_invariant(
        pts in lattice_points(),
        theta in 0.0..std::f64::consts::TAU,
    ) {
        let hull = convex_hull(&pts);
        prop_assume!(hull.len() >= 3);
        let rot = Rotation2::new(theta);
        let rotated: Vec<Point> = pts.iter().map(|&p| rot * p).collect();
        let rotated_hull = convex_hull(&rotated);
        for strategy in RectangleStrategy::ALL {
            let a = min_area_rect(&hull, strategy).unwrap().area();
            let b = min_area_rect(&rotated_hull, strategy).unwrap().area();
            prop_assert!(rel_close(a, b, 1e-9), "{}: {} vs {}", strategy, a, b);
        }
    }
}

#[test]
fn rotating_the_input_moves_the_rectangle_rigidly() {
    // Unique optimum, so the rectangle itself (not just its area) is determined.
    let hull = vec![
        vector![0.0, 0.0],
        vector![1.0, -0.2],
        vector![11.0, 1.8],
        vector![10.0, 2.1],
    ];
    let rot = Rotation2::new(0.7);
    let rotated: Vec<Point> = hull.iter().map(|&p| rot * p).collect();
    for strategy in RectangleStrategy::ALL {
        let r = min_area_rect(&convex_hull(&hull), strategy).unwrap();
        let s = min_area_rect(&convex_hull(&rotated), strategy).unwrap();
        let moved = r.corners().map(|p| rot * p);
        for p in &moved {
            assert!(
                s.corners().iter().any(|q| (p - q).norm() < 1e-6),
                "{strategy}: {p:?} not a corner of {s:?}"
            );
        }
    }
}
