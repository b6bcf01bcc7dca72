use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use minrect::prelude::*;
use minrect::rect::cross_check;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod output;

use output::{point_lines, RectReport, Sidecar};

#[derive(Parser)]
#[command(name = "minrect")]
#[command(about = "Convex hulls and minimum-area enclosing rectangles of planar point sets")]
struct Cmd {
    /// Log verbosity on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the convex hull, one `x y` line per vertex
    Hull {
        /// Points file (`.csv`/`.parquet` need x and y columns); stdin if absent or `-`
        #[arg(long, short)]
        input: Option<PathBuf>,
    },
    /// Print the four corners of the minimum-area enclosing rectangle
    Rect {
        #[arg(long, short)]
        input: Option<PathBuf>,
        /// incremental | brute-force | angle-enumeration
        #[arg(long, default_value_t = RectangleStrategy::default())]
        strategy: RectangleStrategy,
        /// Print a JSON document instead of corner lines
        #[arg(long)]
        json: bool,
        /// Also write the JSON document here, with a provenance sidecar
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Draw random lattice points in [-300, 300)², save them, print the rectangle
    Generate {
        #[arg(long, short = 'n')]
        count: usize,
        /// Defaults to the current unix time
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
    /// Compare all rectangle strategies; fails if their areas disagree
    Check {
        #[arg(long, short)]
        input: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Hull { input } => hull(input.as_deref()),
        Action::Rect {
            input,
            strategy,
            json,
            out,
        } => rect(input.as_deref(), strategy, json, out.as_deref()),
        Action::Generate { count, seed, dir } => generate(count, seed, &dir),
        Action::Check { input } => check(input.as_deref()),
        Action::Report => report(),
    }
}

fn input_label(input: Option<&Path>) -> String {
    input.map_or_else(|| "-".to_string(), |p| p.display().to_string())
}

fn hull(input: Option<&Path>) -> Result<()> {
    let pts = input::read_points(input)?;
    let hull = compute_convex_hull(&pts);
    tracing::info!(points = pts.len(), hull = hull.len(), "hull");
    print!("{}", point_lines(&hull));
    Ok(())
}

fn rect(
    input: Option<&Path>,
    strategy: RectangleStrategy,
    as_json: bool,
    out: Option<&Path>,
) -> Result<()> {
    let pts = input::read_points(input)?;
    let hull = compute_convex_hull(&pts);
    let rect = minimum_enclosing_rectangle_of_hull(&hull, strategy);
    match &rect {
        Some(r) => tracing::info!(points = pts.len(), hull = hull.len(), %strategy, area = r.area(), "rect"),
        None => tracing::warn!(points = pts.len(), hull = hull.len(), "fewer than 3 hull vertices; no rectangle"),
    }
    let report = RectReport::new(strategy, pts.len(), &hull, rect.as_ref());

    if let Some(out) = out {
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(out, serde_json::to_vec_pretty(&report)?)
            .with_context(|| format!("writing {}", out.display()))?;
        Sidecar::new(json!({ "strategy": strategy.name() }))
            .input(input_label(input))
            .write_beside(out)?;
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if let Some(r) = rect {
        print!("{}", point_lines(&r.corners()));
    }
    Ok(())
}

/// Write `generated_input_{count}_{unix_secs}.in` under `dir`; returns its path and points.
fn generate_input(count: usize, seed: Option<u64>, dir: &Path) -> Result<(PathBuf, Vec<Point>)> {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock before unix epoch")?
        .as_secs();
    let seed = seed.unwrap_or(secs);
    let cfg = CloudCfg {
        count: PointCount::Fixed(count),
        x_range: (-300.0, 300.0),
        y_range: (-300.0, 300.0),
        lattice: true,
    };
    let pts = draw_points(cfg, ReplayToken { seed, index: 0 })?;

    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let path = dir.join(format!("generated_input_{count}_{secs}.in"));
    std::fs::write(&path, point_lines(&pts))
        .with_context(|| format!("writing {}", path.display()))?;
    Sidecar::new(json!({
        "count": count,
        "seed": seed,
        "x_range": cfg.x_range,
        "y_range": cfg.y_range,
    }))
    .write_beside(&path)?;
    tracing::info!(path = %path.display(), count, seed, "generate");
    Ok((path, pts))
}

fn generate(count: usize, seed: Option<u64>, dir: &Path) -> Result<()> {
    let (_, pts) = generate_input(count, seed, dir)?;
    if let Some(r) = compute_minimum_enclosing_rectangle(&pts) {
        print!("{}", point_lines(&r.corners()));
    }
    Ok(())
}

fn check(input: Option<&Path>) -> Result<()> {
    let pts = input::read_points(input)?;
    let hull = compute_convex_hull(&pts);
    let Some(cc) = cross_check(&hull) else {
        println!("no rectangle: hull has {} vertices", hull.len());
        return Ok(());
    };
    for strategy in RectangleStrategy::ALL {
        println!("{:<18} {}", strategy.name(), cc.area(strategy));
    }
    if !cc.agree {
        bail!("rectangle strategies disagree: {cc:?}");
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": output::code_rev(),
        "version": minrect::VERSION,
        "strategies": RectangleStrategy::ALL.map(|s| s.name()),
        "default_strategy": RectangleStrategy::default().name(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
