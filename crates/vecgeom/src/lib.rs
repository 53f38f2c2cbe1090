//! Small 2D/3D vector-geometry toolkit.
//!
//! Stateless helpers over fixed-length `f64` vectors: polar conversion,
//! normalization, angles, projection onto a direction, angle bisectors and a
//! half-plane test, plus an arrow plot renderer for quick visual checks.
//!
//! Conventions
//! - Vectors are `nalgebra::SVector<f64, D>`; general operations are generic over
//!   `D`, planar ones take `Vector2<f64>`.
//! - Degenerate inputs follow a silent policy (zero vector in, zero vector out;
//!   division by a zero reference propagates NaN/inf). The `try_*` variants in
//!   [`vec`] report the same conditions as [`GeomError`] instead.

pub mod error;
pub mod plot;
pub mod vec;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{GeomError, PlotError};
pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};
pub use vec::{Polar, VecCfg};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{GeomError, PlotError};
    pub use crate::plot::{parse_color, plot_vectors, PlotCfg};
    pub use crate::vec::{
        angle_between, cartesian_to_polar, decompose, get_bisector, get_magnitude,
        get_parallel_component, get_perpendicular_component,
        is_vector_endpoint_above_vector_slope, magnitude, polar_to_cartesian, unit_vector,
        Decomposition, Polar, VecCfg,
    };
    pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};
}
