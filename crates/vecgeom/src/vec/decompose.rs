//! Projection of one vector onto another, and angle bisectors.
//!
//! Pre (projection): `b != 0`. Not checked here; a zero `b` gives `0/0` and the
//! result is all-NaN. See `checked::try_parallel_component`.

use nalgebra::SVector;

use super::norm::magnitude;
use super::types::Decomposition;

/// Vector projection of `a` onto `b`: `(a·b / |b|²) b`.
#[inline]
pub fn get_parallel_component<const D: usize>(
    a: SVector<f64, D>,
    b: SVector<f64, D>,
) -> SVector<f64, D> {
    b * (a.dot(&b) / magnitude(b).powi(2))
}

/// `a − get_parallel_component(a, b)`; orthogonal to `b` up to rounding.
#[inline]
pub fn get_perpendicular_component<const D: usize>(
    a: SVector<f64, D>,
    b: SVector<f64, D>,
) -> SVector<f64, D> {
    a - get_parallel_component(a, b)
}

/// Both components from a single projection.
#[inline]
pub fn decompose<const D: usize>(a: SVector<f64, D>, b: SVector<f64, D>) -> Decomposition<D> {
    let parallel = get_parallel_component(a, b);
    Decomposition {
        parallel,
        perpendicular: a - parallel,
    }
}

/// Angle bisector direction `|a| b + |b| a` (not normalized).
///
/// Defined for all inputs: a zero operand leaves the other one scaled by 0, so
/// the result is the zero vector whenever either input is zero.
#[inline]
pub fn get_bisector<const D: usize>(a: SVector<f64, D>, b: SVector<f64, D>) -> SVector<f64, D> {
    b * magnitude(a) + a * magnitude(b)
}
