//! Value types and tolerances shared by the vector helpers.
//!
//! - `VecCfg`: thresholds under which the checked variants treat an input as degenerate.
//! - `Polar`: 2D point as (radius, angle).
//! - `Decomposition`: parallel/perpendicular split of a vector relative to another.

use nalgebra::{SVector, Vector2};

/// Tolerances for the checked (`try_*`) operations.
///
/// The unchecked operations ignore this entirely.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VecCfg {
    /// A vector with `|v| <= eps_norm` counts as the zero vector.
    pub eps_norm: f64,
    /// A reference vector with `|Bx| <= eps_slope` counts as vertical.
    pub eps_slope: f64,
}

impl Default for VecCfg {
    fn default() -> Self {
        Self {
            eps_norm: 1e-12,
            eps_slope: 1e-12,
        }
    }
}

/// Polar coordinates `(r, φ)` of a planar point.
///
/// Invariants (when produced by `cartesian_to_polar`):
/// - `r >= 0`
/// - `φ ∈ (−π, π]`; the origin maps to `φ = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Polar {
    pub r: f64,
    pub phi: f64,
}

impl Polar {
    #[inline]
    pub fn new(r: f64, phi: f64) -> Self {
        Self { r, phi }
    }

    /// Cartesian point `(r cos φ, r sin φ)`. A negative radius reflects through the origin.
    #[inline]
    pub fn to_cartesian(self) -> Vector2<f64> {
        Vector2::new(self.r * self.phi.cos(), self.r * self.phi.sin())
    }
}

impl From<Polar> for Vector2<f64> {
    #[inline]
    fn from(p: Polar) -> Self {
        p.to_cartesian()
    }
}

/// `A = parallel + perpendicular`, with `parallel ∥ B` and `perpendicular ⟂ B`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decomposition<const D: usize> {
    pub parallel: SVector<f64, D>,
    pub perpendicular: SVector<f64, D>,
}

impl<const D: usize> Decomposition<D> {
    /// Sum of both parts; reconstructs `A` up to rounding.
    #[inline]
    pub fn recompose(&self) -> SVector<f64, D> {
        self.parallel + self.perpendicular
    }
}
