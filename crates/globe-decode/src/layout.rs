//! Vertex record layout.

use std::fmt;

/// How each component of a vertex record is encoded.
///
/// Mesh geometry sources flag whether their components are floats; when they
/// are not, the components are signed integers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// IEEE 754 float, 4 or 8 bytes.
    #[default]
    Float,
    /// Two's complement signed integer, 1, 2 or 4 bytes.
    SignedInt,
}

impl ComponentKind {
    /// Whether a component of `bytes` bytes can be decoded as this kind.
    #[must_use]
    pub const fn supports(self, bytes: usize) -> bool {
        match self {
            Self::Float => matches!(bytes, 4 | 8),
            Self::SignedInt => matches!(bytes, 1 | 2 | 4),
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float => f.write_str("float"),
            Self::SignedInt => f.write_str("signed integer"),
        }
    }
}

/// Describes where vertex records live inside a byte buffer.
///
/// Record `i` starts at `offset + i * stride` and spans
/// `components_per_vector * bytes_per_component` bytes. Only the first three
/// components are read as x, y, z.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexLayout {
    /// Bytes between the starts of consecutive records.
    pub stride: usize,
    /// Byte offset of the first record.
    pub offset: usize,
    /// Number of records.
    pub vector_count: usize,
    /// Components per record (at least 3).
    pub components_per_vector: usize,
    /// Size of a single component in bytes.
    pub bytes_per_component: usize,
    pub component_kind: ComponentKind,
}

impl VertexLayout {
    /// Tightly packed `[x, y, z]` f32 records starting at byte 0.
    #[must_use]
    pub const fn packed_f32(vector_count: usize) -> Self {
        Self {
            stride: 12,
            offset: 0,
            vector_count,
            components_per_vector: 3,
            bytes_per_component: 4,
            component_kind: ComponentKind::Float,
        }
    }

    /// Size of one record in bytes, or `None` on overflow.
    #[must_use]
    pub const fn record_len(&self) -> Option<usize> {
        self.components_per_vector
            .checked_mul(self.bytes_per_component)
    }

    /// Number of bytes the buffer must hold for every record to be readable.
    ///
    /// Zero records need zero bytes. Returns `None` on overflow.
    #[must_use]
    pub fn required_len(&self) -> Option<usize> {
        if self.vector_count == 0 {
            return Some(0);
        }
        (self.vector_count - 1)
            .checked_mul(self.stride)?
            .checked_add(self.offset)?
            .checked_add(self.record_len()?)
    }

    /// Largest record count whose bytes fit in `len` bytes with this layout.
    ///
    /// Ignores the current `vector_count`. A stride of zero allows at most a
    /// single record since every extra record would alias the first.
    #[must_use]
    pub fn max_vectors_in(&self, len: usize) -> usize {
        let Some(record_len) = self.record_len() else {
            return 0;
        };
        let Some(first_end) = self.offset.checked_add(record_len) else {
            return 0;
        };
        if first_end > len {
            return 0;
        }
        if self.stride == 0 {
            return 1;
        }
        (len - first_end) / self.stride + 1
    }
}
