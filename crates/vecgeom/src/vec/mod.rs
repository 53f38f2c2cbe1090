//! Vector helpers over fixed-length `f64` vectors (pure functions only).
//!
//! Purpose
//! - Polar/Cartesian conversion, unit vectors, angles, magnitudes, projection
//!   of one vector onto another, angle bisectors, and a half-plane test.
//! - Every function takes its inputs by value and returns a fresh value; there
//!   is no shared state, so all of them are safe to call from any thread.
//!
//! Degenerate inputs
//! - `unit_vector(0) == 0` and `angle_between` with a zero operand is `π/2`
//!   (the dot product of a zero unit vector is 0). Both are kept as-is.
//! - `get_parallel_component(_, 0)`, `get_perpendicular_component(_, 0)` and a
//!   vertical reference in `is_vector_endpoint_above_vector_slope` are
//!   unchecked: NaN/inf propagates to the caller.
//! - `checked::try_*` report the same conditions as `GeomError` under the
//!   tolerances in `VecCfg`.
//!
//! Code cross-refs: `crate::error::GeomError`, `crate::plot`.

pub mod checked;
mod decompose;
mod halfplane;
mod norm;
mod polar;
mod types;

pub use checked::{
    try_angle_between, try_decompose, try_is_vector_endpoint_above_vector_slope,
    try_parallel_component, try_perpendicular_component, try_unit_vector,
};
pub use decompose::{
    decompose, get_bisector, get_parallel_component, get_perpendicular_component,
};
pub use halfplane::is_vector_endpoint_above_vector_slope;
pub use norm::{angle_between, get_magnitude, magnitude, unit_vector};
pub use polar::{cartesian_to_polar, polar_to_cartesian};
pub use types::{Decomposition, Polar, VecCfg};

#[cfg(test)]
mod tests;
#[cfg(test)]
mod tests_props;
