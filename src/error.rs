//! Error types for the apex-quaternion library
//!
//! The arithmetic kernel itself never fails: preconditions such as normalizing a zero
//! quaternion follow IEEE floating-point semantics. These types are returned by the
//! checked `try_*` variants and by the propagation driver.

use thiserror::Error;

/// Main result type used throughout the apex-quaternion library
pub type QuatResult<T> = Result<T, QuatError>;

/// Main error type for the apex-quaternion library
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuatError {
    /// Normalizing or inverting a quaternion with zero norm
    #[error("Quaternion has zero norm")]
    ZeroNorm,

    /// Matrix container is not 3×3
    #[error("Invalid matrix shape: expected 3x3, got {rows}x{cols}")]
    InvalidMatrixShape { rows: usize, cols: usize },

    /// Matrix is not a proper rotation (orthonormal, determinant +1)
    #[error("Not a rotation matrix: {0}")]
    NotARotation(String),

    /// NaN or infinite input
    #[error("Non-finite value: {0}")]
    NonFinite(String),

    /// Invalid input parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
