use std::f64::consts::PI;

use nalgebra::Vector2;

use super::types::Polar;

/// Polar coordinates of `(x, y)`: `r = √(x² + y²)`, `φ = atan2(y, x)`.
///
/// The origin yields `φ = 0`. `atan2` returns `−π` for a negative-zero `y`
/// on the negative x-axis; that is folded to `+π` so `φ ∈ (−π, π]`.
#[inline]
pub fn cartesian_to_polar(x: f64, y: f64) -> Polar {
    let r = x.hypot(y);
    let mut phi = y.atan2(x);
    if phi == -PI {
        phi = PI;
    }
    Polar { r, phi }
}

/// Cartesian point `(r cos φ, r sin φ)`; inverse of `cartesian_to_polar` for `r >= 0`.
#[inline]
pub fn polar_to_cartesian(r: f64, phi: f64) -> Vector2<f64> {
    Polar::new(r, phi).to_cartesian()
}
