//! Place spatially separated markers ("cities") on the vertices of a mesh.
//!
//! Given a [`VertexBuffer`] decoded by [`globe_decode`], the selector picks a
//! fixed number of vertex positions such that no two are closer than a
//! minimum separation. Rendering the markers is left to the caller.
//!
//! # Example
//!
//! ```
//! use globe_cities::{select_samples_with, VertexBuffer};
//! use rand::SeedableRng;
//!
//! let bytes: Vec<u8> = [[0.0_f32, 0.0, 0.0], [0.0, 0.0, 0.05], [10.0, 0.0, 0.0]]
//!     .iter()
//!     .flatten()
//!     .flat_map(|v| v.to_le_bytes())
//!     .collect();
//! let buffer = VertexBuffer::packed_f32(&bytes)?;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(0);
//! let cities = select_samples_with(&mut rng, &buffer, 2, 1.0)?;
//! assert_eq!(cities.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;

pub mod config;
pub mod samples;
pub mod selector;

pub use config::SelectorConfig;
pub use error::{InvalidArgument, SelectError, SelectResult};
pub use globe_decode::{ComponentKind, DecodeError, Point3, VertexBuffer, VertexLayout};
pub use samples::{Sample, SampleSet};
pub use selector::{Selector, select_samples, select_samples_with};
