//! Optional TOML configuration for tolerances and plot settings.
//!
//! Every field has a default, so a file may set only what it changes:
//!
//! ```toml
//! [tolerances]
//! eps_norm = 1e-9
//!
//! [plot]
//! x_min = -10.0
//! x_max = 10.0
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use vecgeom::plot::PlotCfg;
use vecgeom::VecCfg;

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub tolerances: Tolerances,
    pub plot: PlotSettings,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Tolerances {
    pub eps_norm: f64,
    pub eps_slope: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        let cfg = VecCfg::default();
        Self {
            eps_norm: cfg.eps_norm,
            eps_slope: cfg.eps_slope,
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PlotSettings {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub width: u32,
    pub height: u32,
    pub stroke_width: u32,
    pub head_len: f64,
    pub axes: bool,
}

impl Default for PlotSettings {
    fn default() -> Self {
        let cfg = PlotCfg::default();
        Self {
            x_min: cfg.x_range.0,
            x_max: cfg.x_range.1,
            y_min: cfg.y_range.0,
            y_max: cfg.y_range.1,
            width: cfg.width,
            height: cfg.height,
            stroke_width: cfg.stroke_width,
            head_len: cfg.head_len,
            axes: cfg.axes,
        }
    }
}

impl CliConfig {
    /// Read `path` if given, otherwise all defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn vec_cfg(&self) -> VecCfg {
        VecCfg {
            eps_norm: self.tolerances.eps_norm,
            eps_slope: self.tolerances.eps_slope,
        }
    }

    pub fn plot_cfg(&self) -> PlotCfg {
        let p = &self.plot;
        PlotCfg {
            x_range: (p.x_min, p.x_max),
            y_range: (p.y_min, p.y_max),
            width: p.width,
            height: p.height,
            stroke_width: p.stroke_width,
            head_len: p.head_len,
            axes: p.axes,
        }
    }
}
