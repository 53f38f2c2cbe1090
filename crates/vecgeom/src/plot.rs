//! Arrow plots of 2D vectors (bitmap output).
//!
//! - `plot_vectors`: draw each vector as an arrow from the origin into a fixed
//!   viewport, write the image, return. No window, no blocking.
//! - `parse_color`: color identifiers as accepted by `plot_vectors`.
//!
//! Rendering draws no text, so no font backend is needed.

use std::path::Path;

use nalgebra::Vector2;
use plotters::prelude::*;

use crate::error::PlotError;
use crate::vec::{magnitude, unit_vector};

/// Viewport and image settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotCfg {
    /// x-axis bounds `(min, max)`.
    pub x_range: (f64, f64),
    /// y-axis bounds `(min, max)`.
    pub y_range: (f64, f64),
    /// Image size in pixels.
    pub width: u32,
    pub height: u32,
    /// Arrow line width in pixels.
    pub stroke_width: u32,
    /// Arrowhead wing length, in data units.
    pub head_len: f64,
    /// Draw faint x/y axes through the origin.
    pub axes: bool,
}

impl Default for PlotCfg {
    fn default() -> Self {
        Self {
            x_range: (-4.0, 4.0),
            y_range: (-4.0, 4.0),
            width: 640,
            height: 640,
            stroke_width: 2,
            head_len: 0.2,
            axes: true,
        }
    }
}

/// Largest accepted image side in pixels.
pub const MAX_IMAGE_SIDE: u32 = 16_384;
/// Largest accepted arrow line width in pixels.
pub const MAX_STROKE_WIDTH: u32 = 64;

impl PlotCfg {
    fn check(&self) -> Result<(), PlotError> {
        let ok = |(lo, hi): (f64, f64)| lo.is_finite() && hi.is_finite() && lo < hi;
        if !ok(self.x_range) || !ok(self.y_range) {
            return Err(PlotError::InvalidViewport {
                x: self.x_range,
                y: self.y_range,
            });
        }
        let invalid = |name: &'static str, value: f64| PlotError::InvalidSetting { name, value };
        for (name, side) in [("width", self.width), ("height", self.height)] {
            if side == 0 || side > MAX_IMAGE_SIDE {
                return Err(invalid(name, side.into()));
            }
        }
        if self.stroke_width == 0 || self.stroke_width > MAX_STROKE_WIDTH {
            return Err(invalid("stroke_width", self.stroke_width.into()));
        }
        if !self.head_len.is_finite() || self.head_len < 0.0 {
            return Err(invalid("head_len", self.head_len));
        }
        Ok(())
    }
}

/// Parse a color identifier.
///
/// Accepts single letters `b g r c m y k w`, a handful of names (`red`,
/// `orange`, `gray`, ...), and `#rrggbb` hex. Case-insensitive.
pub fn parse_color(id: &str) -> Option<RGBColor> {
    let id = id.trim().to_ascii_lowercase();
    if let Some(hex) = id.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        return Some(RGBColor(channel(0)?, channel(2)?, channel(4)?));
    }
    let rgb = match id.as_str() {
        "b" | "blue" => RGBColor(0, 0, 255),
        "g" | "green" => RGBColor(0, 128, 0),
        "r" | "red" => RGBColor(255, 0, 0),
        "c" | "cyan" => RGBColor(0, 191, 191),
        "m" | "magenta" => RGBColor(191, 0, 191),
        "y" | "yellow" => RGBColor(191, 191, 0),
        "k" | "black" => RGBColor(0, 0, 0),
        "w" | "white" => RGBColor(255, 255, 255),
        "orange" => RGBColor(255, 165, 0),
        "purple" => RGBColor(128, 0, 128),
        "gray" | "grey" => RGBColor(128, 128, 128),
        _ => return None,
    };
    Some(rgb)
}

/// Liang–Barsky clip of the segment `0 → tip` against the viewport box.
/// Returns the kept parameter interval `[t0, t1] ⊆ [0, 1]`, or `None` if the
/// segment misses the box.
fn clip_shaft(tip: Vector2<f64>, cfg: &PlotCfg) -> Option<(f64, f64)> {
    let (x0, x1) = cfg.x_range;
    let (y0, y1) = cfg.y_range;
    let (mut t0, mut t1) = (0.0f64, 1.0f64);
    for (p, q) in [(-tip.x, -x0), (tip.x, x1), (-tip.y, -y0), (tip.y, y1)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    Some((t0, t1))
}

/// Polyline for an arrow from the origin to `tip`, clipped to the viewport:
/// shaft, then both head wings when the tip itself is visible.
/// Empty for the zero vector, non-finite vectors, and arrows outside the box.
fn arrow_path(tip: Vector2<f64>, cfg: &PlotCfg) -> Vec<(f64, f64)> {
    if !(tip.x.is_finite() && tip.y.is_finite()) || magnitude(tip) == 0.0 {
        return Vec::new();
    }
    let Some((t0, t1)) = clip_shaft(tip, cfg) else {
        return Vec::new();
    };
    let start = tip * t0;
    if t1 < 1.0 {
        let end = tip * t1;
        return vec![(start.x, start.y), (end.x, end.y)];
    }
    let back = -unit_vector(tip) * cfg.head_len.min(magnitude(tip) * 0.5);
    // ±25° wings
    let (s, c) = 25f64.to_radians().sin_cos();
    let left = tip + Vector2::new(c * back.x - s * back.y, s * back.x + c * back.y);
    let right = tip + Vector2::new(c * back.x + s * back.y, -s * back.x + c * back.y);
    vec![
        (start.x, start.y),
        (tip.x, tip.y),
        (left.x, left.y),
        (tip.x, tip.y),
        (right.x, right.y),
    ]
}

/// Draw `vectors` as arrows from the origin, `colors[i]` for `vectors[i]`, and
/// write the image to `out` (format from the extension, e.g. `.png`).
///
/// The viewport is fixed by `cfg` (default `[-4, 4] × [-4, 4]`); arrows leaving
/// it are clipped in data space and lose their head. Non-finite vectors are
/// skipped. Parent directories of `out` are created as needed.
pub fn plot_vectors<S: AsRef<str>>(
    vectors: &[Vector2<f64>],
    colors: &[S],
    out: &Path,
    cfg: &PlotCfg,
) -> Result<(), PlotError> {
    if vectors.len() != colors.len() {
        return Err(PlotError::LengthMismatch {
            vectors: vectors.len(),
            colors: colors.len(),
        });
    }
    cfg.check()?;
    let palette = colors
        .iter()
        .map(|c| parse_color(c.as_ref()).ok_or_else(|| PlotError::UnknownColor(c.as_ref().into())))
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    tracing::debug!(
        n = vectors.len(),
        out = %out.display(),
        width = cfg.width,
        height = cfg.height,
        "plot_vectors"
    );

    let backend_err = |e: &dyn std::fmt::Display| PlotError::Backend(e.to_string());
    let root = BitMapBackend::new(out, (cfg.width, cfg.height)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| backend_err(&e))?;
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .build_cartesian_2d(cfg.x_range.0..cfg.x_range.1, cfg.y_range.0..cfg.y_range.1)
        .map_err(|e| backend_err(&e))?;

    if cfg.axes {
        let (x0, x1) = cfg.x_range;
        let (y0, y1) = cfg.y_range;
        let axis = BLACK.mix(0.3);
        chart
            .draw_series([
                PathElement::new(vec![(x0, 0.0), (x1, 0.0)], axis),
                PathElement::new(vec![(0.0, y0), (0.0, y1)], axis),
            ])
            .map_err(|e| backend_err(&e))?;
    }

    for (v, color) in vectors.iter().zip(&palette) {
        let path = arrow_path(*v, cfg);
        if path.is_empty() {
            continue;
        }
        chart
            .draw_series(std::iter::once(PathElement::new(
                path,
                color.stroke_width(cfg.stroke_width),
            )))
            .map_err(|e| backend_err(&e))?;
    }

    root.present().map_err(|e| backend_err(&e))?;
    Ok(())
}
