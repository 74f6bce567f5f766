//! Decode vertex positions out of raw mesh vertex buffers.
//!
//! Mesh loaders hand out vertex data as a flat byte buffer plus a description
//! of where each record lives (stride, offset, count) and how its components
//! are encoded. This crate turns that description into positions without any
//! unchecked memory reinterpretation.
//!
//! # Design principles
//!
//! - **Synchronous**: No async, no threading primitives
//! - **Bounds-checked**: Layouts are validated up front and every read is
//!   checked against the buffer length
//! - **Borrowing**: [`VertexBuffer`] borrows the bytes; decoded points are
//!   plain values
//!
//! # Key items
//!
//! - [`VertexLayout`]: Stride, offset, count and component encoding
//! - [`VertexBuffer`]: A validated byte slice plus its layout
//! - [`VertexBuffer::decode_point`]: Decode one record to a [`Point3`]
//! - [`decode_points`]: Decode every record

mod error;

pub mod layout;
pub mod vertices;

pub use error::{DecodeError, DecodeResult};
pub use layout::{ComponentKind, VertexLayout};
pub use vertices::{VertexBuffer, decode_points};

/// A decoded vertex position.
pub type Point3 = glam::Vec3;
