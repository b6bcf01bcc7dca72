//! Printable forms of hulls and rectangles, and the provenance sidecar
//! written next to every file the CLI produces.

use anyhow::{Context, Result};
use minrect::{EnclosingRectangle, Point, RectangleStrategy};
use serde::Serialize;
use serde_json::Value;
use std::fmt::Write as _;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// JSON document for one `rect` run.
#[derive(Debug, Serialize)]
pub struct RectReport {
    pub strategy: String,
    pub points: usize,
    pub hull: Vec<[f64; 2]>,
    /// `None` when the hull has fewer than 3 vertices.
    pub rectangle: Option<RectJson>,
}

#[derive(Debug, Serialize)]
pub struct RectJson {
    pub corners: [[f64; 2]; 4],
    pub area: f64,
    pub center: [f64; 2],
    pub axes: [[f64; 2]; 2],
    pub extents: [f64; 2],
}

fn xy(p: &Point) -> [f64; 2] {
    [p.x, p.y]
}

impl From<&EnclosingRectangle> for RectJson {
    fn from(r: &EnclosingRectangle) -> Self {
        Self {
            corners: r.corners().map(|c| xy(&c)),
            area: r.area(),
            center: xy(&r.center),
            axes: r.axes.map(|a| xy(&a)),
            extents: r.extents,
        }
    }
}

impl RectReport {
    pub fn new(
        strategy: RectangleStrategy,
        points: usize,
        hull: &[Point],
        rect: Option<&EnclosingRectangle>,
    ) -> Self {
        Self {
            strategy: strategy.to_string(),
            points,
            hull: hull.iter().map(xy).collect(),
            rectangle: rect.map(RectJson::from),
        }
    }
}

/// One `x y` line per point.
pub fn point_lines(points: &[Point]) -> String {
    let mut out = String::new();
    for p in points {
        let _ = writeln!(out, "{} {}", p.x, p.y);
    }
    out
}

/// Where and from what an artifact was produced.
#[derive(Debug, Serialize)]
pub struct Sidecar {
    pub code_rev: String,
    pub version: &'static str,
    pub callsite: Callsite,
    pub params: Value,
    /// `-` for stdin.
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct Callsite {
    pub file: &'static str,
    pub line: u32,
}

impl Sidecar {
    #[track_caller]
    pub fn new(params: Value) -> Self {
        let caller = Location::caller();
        Self {
            code_rev: code_rev(),
            version: minrect::VERSION,
            callsite: Callsite {
                file: caller.file(),
                line: caller.line(),
            },
            params,
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    pub fn input(mut self, label: impl Into<String>) -> Self {
        self.inputs.push(label.into());
        self
    }

    /// Record `artifact` as the output and write `<stem>.provenance.json` beside it.
    pub fn write_beside(mut self, artifact: &Path) -> Result<PathBuf> {
        let path = sidecar_path(artifact);
        self.outputs.push(artifact.display().to_string());
        std::fs::write(&path, serde_json::to_vec_pretty(&self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!(path = %path.display(), "sidecar");
        Ok(path)
    }
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// `GIT_COMMIT` (runtime, then build time), else `git rev-parse HEAD`, else `unknown`.
pub fn code_rev() -> String {
    std::env::var("GIT_COMMIT")
        .ok()
        .or_else(|| option_env!("GIT_COMMIT").map(str::to_owned))
        .filter(|rev| !rev.is_empty())
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_owned())
}

fn git_head() -> Option<String> {
    let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    out.status
        .success()
        .then(|| String::from_utf8_lossy(&out.stdout).trim().to_owned())
}
