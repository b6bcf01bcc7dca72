use super::*;
use crate::geom::{signed_area, PointExt};
use crate::hull::convex_hull;
use nalgebra::{vector, Rotation2, Vector2};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn square4() -> Vec<Point> {
    vec![
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![4.0, 4.0],
        vector![0.0, 4.0],
    ]
}

fn regular_polygon(n: usize, radius: f64, phase: f64) -> Vec<Point> {
    (0..n)
        .map(|k| {
            let th = phase + std::f64::consts::TAU * (k as f64) / (n as f64);
            vector![radius * th.cos(), radius * th.sin()]
        })
        .collect()
}

/// Every corner of `a` is within `tol` of some corner of `b`.
fn same_corner_set(a: &[Point; 4], b: &[Point; 4], tol: f64) -> bool {
    a.iter()
        .all(|p| b.iter().any(|q| (p - q).norm() <= tol))
}

#[test]
fn smallest_box_tie_breaks_on_square() {
    let v = square4();
    let bx = smallest_box(&v, 3, 0);
    assert_eq!(bx.support, [0, 1, 2, 3]);
    assert!((bx.area - 16.0).abs() < 1e-12);
    assert!((bx.scale - 1.0).abs() < 1e-15);
    // axes[1] is axes[0] rotated by +90°.
    assert!(bx.axes[0].perp(&bx.axes[1]) > 0.0);
    assert!(bx.axes[0].dot(&bx.axes[1]).abs() < 1e-15);
}

#[test]
fn smallest_box_triangle_supports() {
    // Right triangle with legs on the axes; box along the edge (0 -> 1).
    let v = vec![vector![0.0, 0.0], vector![3.0, 0.0], vector![0.0, 4.0]];
    let bx = smallest_box(&v, 0, 1);
    // Frame along +x with origin (3,0): projections (-3,0), (0,0), (-3,4).
    assert_eq!(bx.support[0], 1);
    assert_eq!(bx.support[1], 1);
    assert_eq!(bx.support[2], 2);
    // min x tie between (0,0) and (0,4): min y wins.
    assert_eq!(bx.support[3], 0);
    assert!((bx.area - 12.0).abs() < 1e-12);
}

#[test]
fn square_rectangle_matches_square() {
    let hull = convex_hull(&square4());
    for strategy in RectangleStrategy::ALL {
        let r = min_area_rect(&hull, strategy).unwrap();
        assert!((r.area() - 16.0).abs() < 1e-9, "{strategy}: {}", r.area());
        let expected = [
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![4.0, 4.0],
            vector![0.0, 4.0],
        ];
        assert!(same_corner_set(&r.corners(), &expected, 1e-9), "{strategy}");
    }
}

#[test]
fn corners_are_counterclockwise_and_enclose_hull() {
    let mut rng = StdRng::seed_from_u64(11);
    let pts: Vec<Point> = (0..40)
        .map(|_| vector![rng.gen_range(-5.0..5.0), rng.gen_range(-2.0..2.0)])
        .collect();
    let hull = convex_hull(&pts);
    for strategy in RectangleStrategy::ALL {
        let r = min_area_rect(&hull, strategy).unwrap();
        let corners = r.corners();
        let a = signed_area(&corners);
        assert!(a > 0.0);
        assert!((a - r.area()).abs() <= 1e-9 * r.area());
        for p in &pts {
            assert!(r.contains_eps(*p, 1e-9), "{strategy}: {p:?} outside");
        }
        assert!((r.axes[0].norm() - 1.0).abs() < 1e-12);
        assert!((r.axes[1].norm() - 1.0).abs() < 1e-12);
    }
}

#[test]
fn rotated_rectangle_with_center_is_recovered() {
    let rot = Rotation2::new(0.3);
    let base = [
        vector![-3.0, -1.0],
        vector![3.0, -1.0],
        vector![3.0, 1.0],
        vector![-3.0, 1.0],
    ];
    let offset = vector![10.0, -2.0];
    let mut pts: Vec<Point> = base.iter().map(|&p| rot * p + offset).collect();
    pts.push(offset);
    let hull = convex_hull(&pts);
    assert_eq!(hull.len(), 4);
    assert!(!hull.iter().any(|p| (p - offset).norm() < 1e-12));

    let edge_dir = rot * Vector2::x();
    for strategy in RectangleStrategy::ALL {
        let r = min_area_rect(&hull, strategy).unwrap();
        assert!((r.area() - 12.0).abs() < 1e-9, "{strategy}: {}", r.area());
        // Axis 0 is parallel or perpendicular to the original edges.
        let c = r.axes[0].perp(&edge_dir).abs();
        let d = r.axes[0].dot(&edge_dir).abs();
        assert!(c < 1e-9 || d < 1e-9, "{strategy}");
        assert!((r.center - offset).norm() < 1e-9);
    }
}

#[test]
fn degenerate_hulls() {
    // Fewer than 3 vertices: no rectangle.
    assert!(min_area_rect(&[], RectangleStrategy::default()).is_none());
    assert!(min_area_rect(&[vector![5.0, 5.0]], RectangleStrategy::default()).is_none());
    assert!(
        min_area_rect(&[vector![0.0, 0.0], vector![1.0, 0.0]], RectangleStrategy::default())
            .is_none()
    );

    // Collinear passthrough: zero-area rectangle spanning the segment.
    let collinear = vec![vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 2.0]];
    for strategy in RectangleStrategy::ALL {
        let r = min_area_rect(&collinear, strategy).unwrap();
        assert!(r.area().abs() < 1e-12, "{strategy}");
        assert!((r.center - vector![1.0, 1.0]).norm() < 1e-12, "{strategy}");
        let long = r.extents[0].max(r.extents[1]);
        assert!((long - 2.0_f64.sqrt()).abs() < 1e-12, "{strategy}");
    }

    // Repeated points: duplicates are dropped before solving.
    let p = vector![1.0, 1.0];
    for strategy in RectangleStrategy::ALL {
        let r = min_area_rect(&[p, p, p], strategy).unwrap();
        assert_eq!(r, EnclosingRectangle::collapsed(p));
        let r = min_area_rect(&[p, p, vector![3.0, 1.0]], strategy).unwrap();
        assert!(r.area().abs() < 1e-12);
        assert!((r.center - vector![2.0, 1.0]).norm() < 1e-12);
    }
}

#[test]
fn clockwise_triangle_is_reoriented() {
    let ccw = vec![vector![0.0, 0.0], vector![3.0, 0.0], vector![0.0, 4.0]];
    let cw: Vec<Point> = ccw.iter().rev().copied().collect();
    // Three points pass through the hull builder unchanged.
    assert_eq!(convex_hull(&cw), cw);
    for strategy in RectangleStrategy::ALL {
        let a = min_area_rect(&ccw, strategy).unwrap().area();
        let b = min_area_rect(&cw, strategy).unwrap().area();
        assert!((a - 12.0).abs() < 1e-9, "{strategy}: {a}");
        assert!((a - b).abs() < 1e-9, "{strategy}: {b}");
    }
}

#[test]
fn regular_polygons_agree_across_strategies() {
    for n in [3usize, 4, 5, 6, 8, 12] {
        let hull = convex_hull(&regular_polygon(n, 2.0, 0.1));
        let cc = cross_check(&hull).unwrap();
        assert!(cc.agree, "n={n}: {cc:?}");
    }
}

#[test]
fn random_hulls_incremental_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let n = rng.gen_range(3..80);
        let sx = rng.gen_range(0.1..10.0);
        let pts: Vec<Point> = (0..n)
            .map(|_| vector![sx * rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)])
            .collect();
        let hull = convex_hull(&pts);
        let Some(cc) = cross_check(&hull) else {
            continue;
        };
        assert!(cc.agree, "{cc:?}");
        assert!(cc.brute_force <= cc.area(RectangleStrategy::Incremental) * (1.0 + 1e-9));
    }
}

#[test]
fn incremental_box_visits_optimal_edge() {
    // Long, thin and tilted.
    let hull = vec![
        vector![0.0, 0.0],
        vector![1.0, -0.2],
        vector![11.0, 1.8],
        vector![10.0, 2.1],
    ];
    let inc = incremental_box(&hull);
    let bf = brute_force_box(&hull);
    assert!((inc.area - bf.area).abs() <= 1e-9 * bf.area);
    let r = rectangle_from_box(&hull, &inc);
    for p in &hull {
        assert!(r.contains_eps(*p, 1e-9));
    }
}

#[test]
fn needle_hull_incremental_matches_brute_force() {
    // Every calliper side meets a tip edge at almost a right angle.
    let hull = vec![
        vector![-538455869.9003032, -0.544335101671324],
        vector![776215660.0477552, -0.4954141705143531],
        vector![711810819.4112823, -0.0639851905038431],
        vector![521205040.74113894, 0.9142145049646633],
        vector![-443197357.07527256, 0.5011832243522347],
    ];
    let inc = min_area_rect(&hull, RectangleStrategy::Incremental).unwrap();
    let bf = min_area_rect(&hull, RectangleStrategy::BruteForce).unwrap();
    assert!(inc.area() > 0.0);
    assert!((inc.area() - bf.area()).abs() <= 1e-9 * bf.area(), "{} vs {}", inc.area(), bf.area());
    for p in &hull {
        assert!(inc.contains_eps(*p, 1e-6), "{p:?} outside {inc:?}");
    }
}

#[test]
fn high_aspect_hulls_agree_across_strategies() {
    let mut rng = StdRng::seed_from_u64(1_000_000_007);
    for _ in 0..500 {
        let n = rng.gen_range(4..16);
        let pts: Vec<Point> = (0..n)
            .map(|_| vector![rng.gen_range(-1e9..1e9), rng.gen_range(-1.0..1.0)])
            .collect();
        let hull = convex_hull(&pts);
        let Some(cc) = cross_check(&hull) else {
            continue;
        };
        assert!(cc.agree, "{cc:?}");
        let inc = min_area_rect(&hull, RectangleStrategy::Incremental).unwrap();
        for p in &hull {
            assert!(inc.contains_eps(*p, 1e-6), "{p:?} outside {inc:?}");
        }
    }
}

#[test]
fn extreme_edge_lengths_keep_areas_finite() {
    let tiny = vec![vector![0.0, 0.0], vector![1e-300, 0.0], vector![0.0, 1e-300]];
    // The hypotenuse's squared length overflows.
    let huge = vec![vector![0.0, 0.0], vector![1e155, 0.0], vector![0.0, 1e150]];
    for strategy in RectangleStrategy::ALL {
        let r = min_area_rect(&tiny, strategy).unwrap();
        assert!(r.area().is_finite() && r.area() >= 0.0, "{strategy}: {r:?}");
        assert!(r.axes.iter().all(|a| (a.norm() - 1.0).abs() < 1e-12), "{strategy}: {r:?}");
        assert!(r.corners().iter().all(|c| c.x.is_finite() && c.y.is_finite()));

        let r = min_area_rect(&huge, strategy).unwrap();
        assert!((r.area() - 1e305).abs() <= 1e-9 * 1e305, "{strategy}: {}", r.area());
        assert!(r.axes.iter().all(|a| (a.norm() - 1.0).abs() < 1e-12), "{strategy}: {r:?}");
    }
}

#[test]
fn candidate_angles_are_unique_mod_quarter_turn() {
    let angles = angles::candidate_angles(&square4());
    assert_eq!(angles, vec![0.0]);
    let hex = regular_polygon(6, 1.0, 0.0);
    let a = angles::candidate_angles(&hex);
    assert!(a.len() <= 6);
    assert!(a.iter().all(|t| (0.0..std::f64::consts::FRAC_PI_2 + 1e-12).contains(t)));
}

#[test]
fn strategy_names_round_trip() {
    for s in RectangleStrategy::ALL {
        assert_eq!(s.to_string().parse::<RectangleStrategy>(), Ok(s));
    }
    assert_eq!(RectangleStrategy::default(), RectangleStrategy::BruteForce);
    let err = "fastest".parse::<RectangleStrategy>().unwrap_err();
    assert!(err.to_string().contains("fastest"));
}

#[test]
fn support_box_is_a_plain_copy() {
    let v = square4();
    let a = smallest_box(&v, 0, 1);
    let mut b = a;
    b.area = -1.0;
    b.support[0] = 3;
    assert_eq!(a.support[0], 1);
    assert!(a.area > 0.0);
    assert!(a.axes[0].perp_cw().dot(&a.axes[0]).abs() < 1e-15);
}
