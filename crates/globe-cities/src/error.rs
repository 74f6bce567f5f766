//! Error types for sample selection.

use globe_decode::DecodeError;
use thiserror::Error;

/// Result alias for sample selection.
pub type SelectResult<T> = Result<T, SelectError>;

/// Errors returned by the sample selector.
///
/// Failures are all-or-nothing: no partial sample set is ever returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectError {
    /// The buffer has no vertices to sample from.
    #[error("vertex buffer is empty")]
    EmptyBuffer,
    /// The target count could not be reached within the rejection budget.
    #[error("placed {accepted} of {target} samples before giving up after {rejections} rejected draws")]
    InfeasibleSampling {
        accepted: usize,
        target: usize,
        rejections: usize,
    },
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
}

/// Why an argument was refused.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidArgument {
    #[error("target count must be positive")]
    ZeroTargetCount,
    #[error("minimum separation must be a non-negative number, got {0}")]
    Separation(f32),
    #[error("malformed vertex buffer: {0}")]
    Buffer(#[from] DecodeError),
}

impl From<DecodeError> for SelectError {
    fn from(err: DecodeError) -> Self {
        Self::InvalidArgument(InvalidArgument::Buffer(err))
    }
}
