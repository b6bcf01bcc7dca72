//! Random point clouds for demos, benches and tests.
//!
//! Model
//! - Draw a point count, then independent uniform coordinates in half-open
//!   ranges. With `lattice` set, coordinates are integers (as produced by an
//!   integer `randrange`), which keeps orientation tests exact.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so a cloud can be regenerated from its token alone.

use std::fmt;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::Point;

/// Error for invalid sampler parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleError {
    InvalidParams { reason: String },
}

impl SampleError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid sampler params: {reason}"),
        }
    }
}

impl std::error::Error for SampleError {}

/// Point count distribution (bounds inclusive).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl PointCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            PointCount::Fixed(n) => n,
            PointCount::Uniform { min, max } => rng.gen_range(min..=max),
        }
    }
}

/// Uniform point cloud configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CloudCfg {
    pub count: PointCount,
    /// Half-open `[lo, hi)` range for x.
    pub x_range: (f64, f64),
    /// Half-open `[lo, hi)` range for y.
    pub y_range: (f64, f64),
    /// Integer coordinates in `ceil(lo)..ceil(hi)`.
    pub lattice: bool,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: PointCount::Uniform { min: 10, max: 29 },
            x_range: (150.0, 650.0),
            y_range: (100.0, 500.0),
            lattice: true,
        }
    }
}

impl CloudCfg {
    fn validate(&self) -> Result<(), SampleError> {
        if let PointCount::Uniform { min, max } = self.count {
            if min > max {
                return Err(SampleError::invalid("count min <= max required"));
            }
        }
        for (name, (lo, hi)) in [("x_range", self.x_range), ("y_range", self.y_range)] {
            if !lo.is_finite() || !hi.is_finite() {
                return Err(SampleError::invalid(format!("{name} must be finite")));
            }
            let empty = if self.lattice {
                lo.ceil() >= hi.ceil()
            } else {
                lo >= hi
            };
            if empty {
                return Err(SampleError::invalid(format!("{name} is empty")));
            }
        }
        Ok(())
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a point cloud.
pub fn draw_points(cfg: CloudCfg, tok: ReplayToken) -> Result<Vec<Point>, SampleError> {
    cfg.validate()?;
    let mut rng = tok.to_std_rng();
    let n = cfg.count.sample(&mut rng);
    let pts = (0..n)
        .map(|_| {
            Vector2::new(
                coord(&mut rng, cfg.x_range, cfg.lattice),
                coord(&mut rng, cfg.y_range, cfg.lattice),
            )
        })
        .collect();
    Ok(pts)
}

fn coord<R: Rng>(rng: &mut R, (lo, hi): (f64, f64), lattice: bool) -> f64 {
    if lattice {
        rng.gen_range(lo.ceil() as i64..hi.ceil() as i64) as f64
    } else {
        rng.gen_range(lo..hi)
    }
}
