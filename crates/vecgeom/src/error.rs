//! Error types for the checked vector operations and the plot renderer.

use thiserror::Error;

/// Degenerate input rejected by a checked (`try_*`) operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeomError {
    /// An operand whose direction is required has (near) zero length.
    #[error("{op}: `{arg}` is the zero vector")]
    ZeroVector {
        op: &'static str,
        arg: &'static str,
    },
    /// The reference vector is vertical, so its slope `By/Bx` is undefined.
    #[error("{op}: reference vector has zero x-component (vertical slope)")]
    VerticalSlope { op: &'static str },
}

/// Failures while rendering vectors to an image.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("got {vectors} vectors but {colors} colors")]
    LengthMismatch { vectors: usize, colors: usize },
    #[error("unknown color `{0}`")]
    UnknownColor(String),
    #[error("invalid viewport: x {x:?}, y {y:?}")]
    InvalidViewport { x: (f64, f64), y: (f64, f64) },
    #[error("invalid plot setting `{name}` = {value}")]
    InvalidSetting { name: &'static str, value: f64 },
    #[error("creating output directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("drawing backend: {0}")]
    Backend(String),
}
