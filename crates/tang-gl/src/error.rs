//! Error types for tang-gl.

use core::fmt;

/// Errors reported by matrix inversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// Mat3 determinant is exactly zero.
    ZeroDeterminant,
    /// Gauss-Jordan elimination picked a zero pivot.
    SingularPivot { step: usize, column: usize },
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDeterminant => write!(f, "matrix is singular: determinant is zero"),
            Self::SingularPivot { step, column } => {
                write!(f, "matrix is singular: zero pivot in column {column} at step {step}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MathError {}
