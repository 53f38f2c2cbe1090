//! Checked variants that reject degenerate inputs instead of returning
//! sentinel values or propagating NaN.
//!
//! On success each `try_*` returns exactly what its unchecked counterpart does.

use nalgebra::{SVector, Vector2};

use super::decompose::{decompose, get_parallel_component, get_perpendicular_component};
use super::halfplane::is_vector_endpoint_above_vector_slope;
use super::norm::{angle_between, magnitude, unit_vector};
use super::types::{Decomposition, VecCfg};
use crate::error::GeomError;

#[inline]
fn nonzero<const D: usize>(
    v: SVector<f64, D>,
    cfg: VecCfg,
    op: &'static str,
    arg: &'static str,
) -> Result<(), GeomError> {
    // NaN norms fail the comparison and are let through.
    if magnitude(v) <= cfg.eps_norm {
        return Err(GeomError::ZeroVector { op, arg });
    }
    Ok(())
}

pub fn try_unit_vector<const D: usize>(
    v: SVector<f64, D>,
    cfg: VecCfg,
) -> Result<SVector<f64, D>, GeomError> {
    nonzero(v, cfg, "try_unit_vector", "v")?;
    Ok(unit_vector(v))
}

/// Angle in `[0, π]`; fails instead of answering `π/2` for a zero operand.
pub fn try_angle_between<const D: usize>(
    v1: SVector<f64, D>,
    v2: SVector<f64, D>,
    cfg: VecCfg,
) -> Result<f64, GeomError> {
    nonzero(v1, cfg, "try_angle_between", "v1")?;
    nonzero(v2, cfg, "try_angle_between", "v2")?;
    Ok(angle_between(v1, v2))
}

pub fn try_parallel_component<const D: usize>(
    a: SVector<f64, D>,
    b: SVector<f64, D>,
    cfg: VecCfg,
) -> Result<SVector<f64, D>, GeomError> {
    nonzero(b, cfg, "try_parallel_component", "b")?;
    Ok(get_parallel_component(a, b))
}

pub fn try_perpendicular_component<const D: usize>(
    a: SVector<f64, D>,
    b: SVector<f64, D>,
    cfg: VecCfg,
) -> Result<SVector<f64, D>, GeomError> {
    nonzero(b, cfg, "try_perpendicular_component", "b")?;
    Ok(get_perpendicular_component(a, b))
}

pub fn try_decompose<const D: usize>(
    a: SVector<f64, D>,
    b: SVector<f64, D>,
    cfg: VecCfg,
) -> Result<Decomposition<D>, GeomError> {
    nonzero(b, cfg, "try_decompose", "b")?;
    Ok(decompose(a, b))
}

/// Fails with `VerticalSlope` when `|Bx| <= eps_slope`.
pub fn try_is_vector_endpoint_above_vector_slope(
    a: Vector2<f64>,
    b: Vector2<f64>,
    cfg: VecCfg,
) -> Result<bool, GeomError> {
    if b.x.abs() <= cfg.eps_slope {
        return Err(GeomError::VerticalSlope {
            op: "try_is_vector_endpoint_above_vector_slope",
        });
    }
    Ok(is_vector_endpoint_above_vector_slope(a, b))
}
