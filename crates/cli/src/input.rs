//! Point readers: whitespace-separated numbers (file or stdin), CSV and parquet tables.

use anyhow::{bail, Context, Result};
use minrect::Point;
use polars::prelude::*;
use std::io::Read;
use std::path::Path;

/// Read points from `path`, or from stdin when `path` is `None` or `-`.
pub fn read_points(path: Option<&Path>) -> Result<Vec<Point>> {
    let Some(path) = path.filter(|p| p.as_os_str() != "-") else {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading points from stdin")?;
        return parse_points(&text);
    };
    let points = match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => {
            let lf = LazyCsvReader::new(path)
                .with_has_header(true)
                .with_infer_schema_length(Some(100))
                .finish()
                .with_context(|| format!("opening {}", path.display()))?;
            read_table(lf)?
        }
        Some("parquet") => {
            let lf = LazyFrame::scan_parquet(path, ScanArgsParquet::default())
                .with_context(|| format!("opening {}", path.display()))?;
            read_table(lf)?
        }
        _ => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            parse_points(&text)?
        }
    };
    tracing::debug!(path = %path.display(), points = points.len(), "read_points");
    Ok(points)
}

/// Pair consecutive numbers as `(x, y)`.
pub fn parse_points(text: &str) -> Result<Vec<Point>> {
    let numbers = text
        .split_whitespace()
        .map(|tok| {
            tok.parse::<f64>()
                .with_context(|| format!("not a number: {tok:?}"))
        })
        .collect::<Result<Vec<f64>>>()?;
    if numbers.len() % 2 != 0 {
        bail!(
            "there must be an even number of numbers (got {})",
            numbers.len()
        );
    }
    Ok(numbers
        .chunks_exact(2)
        .map(|xy| Point::new(xy[0], xy[1]))
        .collect())
}

/// `x` and `y` columns cast to `f64`; rows with a null in either are skipped.
fn read_table(lf: LazyFrame) -> Result<Vec<Point>> {
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .filter(col("x").is_not_null().and(col("y").is_not_null()))
        .collect()
        .context("reading x/y columns")?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    Ok(xs
        .into_iter()
        .zip(ys.into_iter())
        .filter_map(|(x, y)| Some(Point::new(x?, y?)))
        .collect())
}
