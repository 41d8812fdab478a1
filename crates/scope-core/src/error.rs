// File: crates/scope-core/src/error.rs
// Summary: Error type for geometry validation and trace selection.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScopeError {
    /// Major gridline spacing must be finite and strictly positive.
    #[error("major gridline spacing must be finite and > 0, got {0}")]
    InvalidSpacing(f64),
    #[error("drawable size must be finite and non-negative, got {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },
    /// Minor ticks are drawn shorter than the halfway tick.
    #[error("tick lengths must satisfy 0 <= minor < halfway, got halfway={halfway} minor={minor}")]
    InvalidTickLengths { halfway: f64, minor: f64 },
    /// Spacing too fine for the drawable: the graticule would not fit in memory.
    #[error("{per_axis} major gridlines per axis exceeds the limit of {limit}")]
    TooManyLines { per_axis: f64, limit: u32 },
    #[error("trace index {index} out of range for {len} traces")]
    TraceIndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, ScopeError>;
