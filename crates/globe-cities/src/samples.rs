//! Selected sample points.

use globe_decode::Point3;
use serde::Serialize;

/// One accepted sample: the record it came from and its decoded position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    /// Index of the vertex record the position was decoded from.
    pub index: usize,
    pub position: Point3,
}

/// The samples accepted by one selection, in acceptance order.
///
/// Positions are copied out of the vertex buffer, so the set does not borrow
/// it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SampleSet {
    samples: Vec<Sample>,
}

impl SampleSet {
    pub(crate) fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Positions in acceptance order.
    pub fn points(&self) -> impl Iterator<Item = Point3> + '_ {
        self.samples.iter().map(|sample| sample.position)
    }

    /// Source record indices in acceptance order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.samples.iter().map(|sample| sample.index)
    }

    /// Smallest distance between any two samples, or `None` for fewer than two.
    #[must_use]
    pub fn min_pairwise_distance(&self) -> Option<f32> {
        let mut min: Option<f32> = None;
        for (i, a) in self.samples.iter().enumerate() {
            for b in &self.samples[i + 1..] {
                let d = a.position.distance(b.position);
                min = Some(min.map_or(d, |m| m.min(d)));
            }
        }
        min
    }

    #[must_use]
    pub fn into_points(self) -> Vec<Point3> {
        self.samples.into_iter().map(|sample| sample.position).collect()
    }
}

impl IntoIterator for SampleSet {
    type Item = Sample;
    type IntoIter = std::vec::IntoIter<Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.into_iter()
    }
}

impl<'a> IntoIterator for &'a SampleSet {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
