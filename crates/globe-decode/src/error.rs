//! Decoding errors.

use thiserror::Error;

use crate::ComponentKind;

/// Result alias for vertex decoding.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors raised while validating or reading a vertex buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("invalid vertex layout: {0}")]
    InvalidLayout(&'static str),
    #[error("unsupported {kind} component of {bytes} bytes")]
    UnsupportedComponent { kind: ComponentKind, bytes: usize },
    #[error("vertex index {index} out of range for {count} vertices")]
    IndexOutOfRange { index: usize, count: usize },
    #[error("vertex bytes {start}..{end} exceed buffer length {len}")]
    OutOfBounds { start: usize, end: usize, len: usize },
    #[error("vertex byte offset overflows usize")]
    Overflow,
}
