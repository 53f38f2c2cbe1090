//! Vector arguments and CSV tables of plot vectors.

use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use vecgeom::{Vec2, Vec3};
use polars::prelude::*;

/// Color used for CSV rows without a `color` value.
pub const DEFAULT_COLOR: &str = "k";

/// Raw components from a `1,2,3` style argument; dimension is checked per command.
#[derive(Clone, Debug, PartialEq)]
pub struct Components(pub Vec<f64>);

/// clap value parser for comma-separated components.
pub fn parse_components(s: &str) -> Result<Components, String> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|p| {
            p.trim()
                .parse::<f64>()
                .map_err(|e| format!("`{}`: {e}", p.trim()))
        })
        .collect::<Result<_, _>>()?;
    if parts.is_empty() {
        return Err("empty vector".into());
    }
    Ok(Components(parts))
}

/// A vector of supported length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnyVec {
    D2(Vec2<f64>),
    D3(Vec3<f64>),
}

/// Two vectors of the same supported length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnyPair {
    D2(Vec2<f64>, Vec2<f64>),
    D3(Vec3<f64>, Vec3<f64>),
}

impl Components {
    pub fn any(&self, name: &str) -> Result<AnyVec> {
        match self.0.as_slice() {
            &[x, y] => Ok(AnyVec::D2(Vec2::new(x, y))),
            &[x, y, z] => Ok(AnyVec::D3(Vec3::new(x, y, z))),
            other => bail!("`{name}` has {} components; expected 2 or 3", other.len()),
        }
    }

    pub fn planar(&self, name: &str) -> Result<Vec2<f64>> {
        match self.any(name)? {
            AnyVec::D2(v) => Ok(v),
            AnyVec::D3(_) => bail!("`{name}` must be 2D for this command"),
        }
    }
}

pub fn pair(a: &Components, b: &Components) -> Result<AnyPair> {
    match (a.any("a")?, b.any("b")?) {
        (AnyVec::D2(a), AnyVec::D2(b)) => Ok(AnyPair::D2(a, b)),
        (AnyVec::D3(a), AnyVec::D3(b)) => Ok(AnyPair::D3(a, b)),
        _ => bail!(
            "`a` and `b` differ in length ({} vs {})",
            a.0.len(),
            b.0.len()
        ),
    }
}

/// Vectors and colors read from a CSV table.
#[derive(Debug, Default, PartialEq)]
pub struct PlotRows {
    pub vectors: Vec<Vec2<f64>>,
    pub colors: Vec<String>,
}

/// Read columns `x`, `y` and optional `color` (missing or empty → `DEFAULT_COLOR`).
pub fn load_csv(path: &Path) -> Result<PlotRows> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .and_then(|lf| lf.collect())
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "vectors_csv_shape");

    let xs = column_f64(&df, "x")?;
    let ys = column_f64(&df, "y")?;
    let colors = match df.column("color") {
        Ok(col) => {
            let col = col.cast(&DataType::String)?;
            col.str()?
                .into_iter()
                .map(|c| {
                    c.map(str::trim)
                        .filter(|c| !c.is_empty())
                        .unwrap_or(DEFAULT_COLOR)
                        .to_string()
                })
                .collect()
        }
        Err(_) => vec![DEFAULT_COLOR.to_string(); df.height()],
    };
    let vectors = xs
        .into_iter()
        .zip(ys)
        .map(|(x, y)| Vec2::new(x, y))
        .collect();
    Ok(PlotRows { vectors, colors })
}

fn column_f64(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let col = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?
        .strict_cast(&DataType::Float64)
        .with_context(|| format!("column `{name}` holds a value that is not a number"))?;
    col.f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.ok_or_else(|| anyhow!("row {row}: empty `{name}`")))
        .collect()
}
