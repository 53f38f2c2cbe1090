//! Norms, unit vectors and angles.

use nalgebra::SVector;

/// Unit vector in the direction of `v`.
///
/// Zero-vector policy: if `|v| == 0` exactly, `v` is returned unchanged (norm 0).
/// Callers that need a failure instead use `checked::try_unit_vector`.
#[inline]
pub fn unit_vector<const D: usize>(v: SVector<f64, D>) -> SVector<f64, D> {
    let norm = v.norm();
    if norm == 0.0 {
        v
    } else {
        v / norm
    }
}

/// Angle between `v1` and `v2` in radians, always in `[0, π]`.
///
/// The cosine is clamped to `[-1, 1]` before `acos` to absorb rounding overshoot.
/// Pre: both non-zero. A zero operand normalizes to itself, the dot product is 0
/// and the result is `π/2`; no error is reported.
#[inline]
pub fn angle_between<const D: usize>(v1: SVector<f64, D>, v2: SVector<f64, D>) -> f64 {
    let u1 = unit_vector(v1);
    let u2 = unit_vector(v2);
    u1.dot(&u2).clamp(-1.0, 1.0).acos()
}

/// Euclidean norm of `v`.
///
/// `fast` selects `√(v·v)` instead of the general norm routine. Both paths agree
/// for finite inputs; the flag is only a performance hint.
#[inline]
pub fn get_magnitude<const D: usize>(v: SVector<f64, D>, fast: bool) -> f64 {
    if fast {
        v.dot(&v).sqrt()
    } else {
        v.norm()
    }
}

/// `get_magnitude(v, false)`.
#[inline]
pub fn magnitude<const D: usize>(v: SVector<f64, D>) -> f64 {
    get_magnitude(v, false)
}
