//! Vertex position decoding.

use std::ops::Range;

use crate::error::{DecodeError, DecodeResult};
use crate::{ComponentKind, Point3, VertexLayout};

/// A borrowed vertex buffer together with its record layout.
///
/// The layout is validated against the byte length on construction, and
/// every read is bounds-checked again before touching the bytes.
#[derive(Debug, Clone, Copy)]
pub struct VertexBuffer<'a> {
    data: &'a [u8],
    layout: VertexLayout,
}

impl<'a> VertexBuffer<'a> {
    /// Wrap `data` with `layout`.
    ///
    /// Fails if the layout has fewer than three components, uses an encoding
    /// that cannot be decoded, or addresses bytes past the end of `data`.
    pub fn new(data: &'a [u8], layout: VertexLayout) -> DecodeResult<Self> {
        if layout.components_per_vector < 3 {
            return Err(DecodeError::InvalidLayout(
                "at least 3 components per vector are required",
            ));
        }
        if !layout
            .component_kind
            .supports(layout.bytes_per_component)
        {
            return Err(DecodeError::UnsupportedComponent {
                kind: layout.component_kind,
                bytes: layout.bytes_per_component,
            });
        }

        let required = layout.required_len().ok_or(DecodeError::Overflow)?;
        if required > data.len() {
            return Err(DecodeError::OutOfBounds {
                start: layout.offset,
                end: required,
                len: data.len(),
            });
        }

        Ok(Self { data, layout })
    }

    /// Wrap tightly packed little-endian `[x, y, z]` f32 records.
    ///
    /// Trailing bytes that do not form a whole record are ignored.
    pub fn packed_f32(data: &'a [u8]) -> DecodeResult<Self> {
        Self::new(data, VertexLayout::packed_f32(data.len() / 12))
    }

    #[must_use]
    pub const fn layout(&self) -> &VertexLayout {
        &self.layout
    }

    #[must_use]
    pub const fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Number of records in the buffer.
    #[must_use]
    pub const fn vector_count(&self) -> usize {
        self.layout.vector_count
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.layout.vector_count == 0
    }

    /// Byte range of record `index`.
    pub fn record_range(&self, index: usize) -> DecodeResult<Range<usize>> {
        if index >= self.layout.vector_count {
            return Err(DecodeError::IndexOutOfRange {
                index,
                count: self.layout.vector_count,
            });
        }

        let start = index
            .checked_mul(self.layout.stride)
            .and_then(|rel| rel.checked_add(self.layout.offset))
            .ok_or(DecodeError::Overflow)?;
        let end = self
            .layout
            .record_len()
            .and_then(|len| start.checked_add(len))
            .ok_or(DecodeError::Overflow)?;

        if end > self.data.len() {
            return Err(DecodeError::OutOfBounds {
                start,
                end,
                len: self.data.len(),
            });
        }
        Ok(start..end)
    }

    /// Decode the position of record `index`.
    ///
    /// Components past the third are ignored.
    pub fn decode_point(&self, index: usize) -> DecodeResult<Point3> {
        let range = self.record_range(index)?;
        let record = self.data.get(range.clone()).ok_or(DecodeError::OutOfBounds {
            start: range.start,
            end: range.end,
            len: self.data.len(),
        })?;

        let mut xyz = [0.0_f32; 3];
        let components = record.chunks_exact(self.layout.bytes_per_component);
        for (slot, bytes) in xyz.iter_mut().zip(components) {
            *slot = read_component(self.layout.component_kind, bytes)?;
        }
        Ok(Point3::from_array(xyz))
    }

    /// Iterate over the decoded position of every record, in index order.
    pub fn points(&self) -> impl Iterator<Item = DecodeResult<Point3>> + '_ {
        (0..self.layout.vector_count).map(move |index| self.decode_point(index))
    }
}

/// Decode every vertex position in `buffer`.
pub fn decode_points(buffer: &VertexBuffer<'_>) -> DecodeResult<Vec<Point3>> {
    buffer.points().collect()
}

/// Read one little-endian component.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn read_component(kind: ComponentKind, bytes: &[u8]) -> DecodeResult<f32> {
    let value = match (kind, bytes) {
        (ComponentKind::Float, &[a, b, c, d]) => f32::from_le_bytes([a, b, c, d]),
        (ComponentKind::Float, &[a, b, c, d, e, f, g, h]) => {
            f64::from_le_bytes([a, b, c, d, e, f, g, h]) as f32
        }
        (ComponentKind::SignedInt, &[a]) => f32::from(i8::from_le_bytes([a])),
        (ComponentKind::SignedInt, &[a, b]) => f32::from(i16::from_le_bytes([a, b])),
        (ComponentKind::SignedInt, &[a, b, c, d]) => i32::from_le_bytes([a, b, c, d]) as f32,
        _ => {
            return Err(DecodeError::UnsupportedComponent {
                kind,
                bytes: bytes.len(),
            });
        }
    };
    Ok(value)
}
