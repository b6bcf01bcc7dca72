//! Show minimum-area rectangles of random demo clouds for quick sanity checks.
//!
//! Usage:
//!   cargo run -p minrect --example random_rects -- lattice
//!   cargo run -p minrect --example random_rects -- uniform
//!
//! Prints a few samples with (points, hull vertices, area per strategy):
//! - lattice mode: integer points in the demo window [150,650)x[100,500)
//! - uniform mode: real points in the unit square

use minrect::prelude::*;
use minrect::rect::cross_check;

fn main() {
    let mode = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "lattice".to_string());
    let cfg = match mode.as_str() {
        "lattice" => CloudCfg::default(),
        "uniform" => CloudCfg {
            count: PointCount::Uniform { min: 10, max: 200 },
            x_range: (0.0, 1.0),
            y_range: (0.0, 1.0),
            lattice: false,
        },
        _ => {
            eprintln!("usage: random_rects [lattice|uniform]");
            return;
        }
    };
    for index in 0..5 {
        let pts = draw_points(cfg, ReplayToken { seed: 2025, index }).unwrap();
        let hull = convex_hull(&pts);
        match cross_check(&hull) {
            Some(cc) => println!(
                "{mode} sample {index}: N={}, H={}, incremental={:.3}, brute-force={:.3}, angle-enumeration={:.3}, agree={}",
                pts.len(),
                hull.len(),
                cc.incremental,
                cc.brute_force,
                cc.angle_enumeration,
                cc.agree
            ),
            None => println!("{mode} sample {index}: N={}, H={} (no rectangle)", pts.len(), hull.len()),
        }
    }
}
