//! Rejection sampling of separated vertex positions.
//!
//! Candidates are drawn uniformly from the buffer's records and accepted only
//! when they are at least the minimum separation away from every sample
//! accepted so far. Rejected records are not remembered and may be drawn
//! again.
//!
//! Some requests cannot be satisfied: two nearly coincident vertices can never
//! both be accepted, so asking for every vertex of such a buffer would spin
//! forever. Every selection therefore carries a rejection budget proportional
//! to the vertex count, and runs out with [`SelectError::InfeasibleSampling`].

use globe_decode::VertexBuffer;
use rand::Rng;

use crate::config::SelectorConfig;
use crate::error::{SelectError, SelectResult};
use crate::samples::{Sample, SampleSet};

/// Select `target_count` vertex positions at least `min_separation` apart,
/// using the thread-local random generator.
pub fn select_samples(
    buffer: &VertexBuffer<'_>,
    target_count: usize,
    min_separation: f32,
) -> SelectResult<SampleSet> {
    select_samples_with(
        &mut rand::thread_rng(),
        buffer,
        target_count,
        min_separation,
    )
}

/// Like [`select_samples`], drawing candidates from `rng`.
pub fn select_samples_with<R: Rng + ?Sized>(
    rng: &mut R,
    buffer: &VertexBuffer<'_>,
    target_count: usize,
    min_separation: f32,
) -> SelectResult<SampleSet> {
    Selector::new(SelectorConfig::new(target_count, min_separation)).select_with(rng, buffer)
}

/// Reusable sample selector.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Selector {
    config: SelectorConfig,
}

impl Selector {
    #[must_use]
    pub const fn new(config: SelectorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Select samples from `buffer` using the thread-local random generator.
    pub fn select(&self, buffer: &VertexBuffer<'_>) -> SelectResult<SampleSet> {
        self.select_with(&mut rand::thread_rng(), buffer)
    }

    /// Select samples from `buffer`, drawing candidate indices from `rng`.
    pub fn select_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        buffer: &VertexBuffer<'_>,
    ) -> SelectResult<SampleSet> {
        let vector_count = buffer.vector_count();
        if vector_count == 0 {
            return Err(SelectError::EmptyBuffer);
        }
        self.config.validate()?;

        let target = self.config.target_count;
        let min_separation = self.config.min_separation;

        // A record drawn twice sits at distance zero from itself, so with a
        // positive separation each record can be accepted at most once.
        if min_separation > 0.0 && target > vector_count {
            tracing::warn!(
                "Cannot place {} samples {} apart on {} vertices",
                target,
                min_separation,
                vector_count
            );
            return Err(SelectError::InfeasibleSampling {
                accepted: 0,
                target,
                rejections: 0,
            });
        }

        let budget = self.config.rejection_budget(vector_count);
        tracing::debug!(
            "Selecting {} samples {} apart from {} vertices (rejection budget {})",
            target,
            min_separation,
            vector_count,
            budget
        );

        let mut accepted: Vec<Sample> = Vec::with_capacity(target);
        let mut rejections = 0_usize;

        while accepted.len() < target {
            let index = rng.gen_range(0..vector_count);
            let position = buffer.decode_point(index)?;

            let separated = min_separation <= 0.0
                || accepted
                    .iter()
                    .all(|sample| sample.position.distance(position) >= min_separation);

            if separated {
                tracing::trace!("Accepted vertex {} at {:?}", index, position);
                accepted.push(Sample { index, position });
                continue;
            }

            rejections += 1;
            if rejections >= budget {
                tracing::warn!(
                    "Gave up after {} rejected draws with {} of {} samples placed",
                    rejections,
                    accepted.len(),
                    target
                );
                return Err(SelectError::InfeasibleSampling {
                    accepted: accepted.len(),
                    target,
                    rejections,
                });
            }
        }

        tracing::debug!(
            "Selected {} samples with {} rejected draws",
            accepted.len(),
            rejections
        );
        Ok(SampleSet::new(accepted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidArgument;
    use globe_decode::{Point3, VertexLayout};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn f32_bytes(points: &[[f32; 3]]) -> Vec<u8> {
        points
            .iter()
            .flatten()
            .flat_map(|v| v.to_le_bytes())
            .collect()
    }

    #[test]
    fn zero_target_is_invalid() {
        let data = f32_bytes(&[[0.0; 3]]);
        let buffer = VertexBuffer::packed_f32(&data).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            select_samples_with(&mut rng, &buffer, 0, 1.0),
            Err(SelectError::InvalidArgument(InvalidArgument::ZeroTargetCount))
        );
    }

    #[test]
    fn negative_separation_is_invalid() {
        let data = f32_bytes(&[[0.0; 3]]);
        let buffer = VertexBuffer::packed_f32(&data).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            select_samples_with(&mut rng, &buffer, 1, -1.0),
            Err(SelectError::InvalidArgument(InvalidArgument::Separation(-1.0)))
        );
    }

    #[test]
    fn empty_buffer_wins_over_bad_target() {
        let buffer = VertexBuffer::packed_f32(&[]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            select_samples_with(&mut rng, &buffer, 3, 0.0),
            Err(SelectError::EmptyBuffer)
        );
        assert_eq!(
            select_samples_with(&mut rng, &buffer, 0, 0.0),
            Err(SelectError::EmptyBuffer)
        );
    }

    #[test]
    fn more_targets_than_vertices_fails_without_drawing() {
        let data = f32_bytes(&[[0.0; 3], [5.0, 0.0, 0.0]]);
        let buffer = VertexBuffer::packed_f32(&data).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            select_samples_with(&mut rng, &buffer, 3, 0.5),
            Err(SelectError::InfeasibleSampling {
                accepted: 0,
                target: 3,
                rejections: 0
            })
        );
    }

    #[test]
    fn zero_separation_allows_duplicates() {
        let data = f32_bytes(&[[1.0, 1.0, 1.0]]);
        let buffer = VertexBuffer::packed_f32(&data).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let samples = select_samples_with(&mut rng, &buffer, 5, 0.0).unwrap();
        assert_eq!(samples.len(), 5);
        assert!(samples.points().all(|p| p == Point3::ONE));
        assert!(samples.indices().all(|i| i == 0));
    }

    #[test]
    fn budget_exhaustion_reports_progress() {
        // Every record aliases the same point, so only one can be placed.
        let data = f32_bytes(&[[2.0, 0.0, 0.0]]);
        let layout = VertexLayout {
            stride: 0,
            ..VertexLayout::packed_f32(4)
        };
        let buffer = VertexBuffer::new(&data, layout).unwrap();
        let selector = Selector::new(SelectorConfig {
            target_count: 2,
            min_separation: 0.1,
            rejection_factor: 3,
        });
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            selector.select_with(&mut rng, &buffer),
            Err(SelectError::InfeasibleSampling {
                accepted: 1,
                target: 2,
                rejections: 12
            })
        );
    }

    #[test]
    fn exact_separation_is_accepted() {
        let data = f32_bytes(&[[0.0; 3], [1.0, 0.0, 0.0]]);
        let buffer = VertexBuffer::packed_f32(&data).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let samples = select_samples_with(&mut rng, &buffer, 2, 1.0).unwrap();
        let mut indices: Vec<_> = samples.indices().collect();
        indices.sort_unstable();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn same_seed_same_samples() {
        let points: Vec<[f32; 3]> = (0..50_u8)
            .map(|i| [f32::from(i), f32::from(i % 7), 0.0])
            .collect();
        let data = f32_bytes(&points);
        let buffer = VertexBuffer::packed_f32(&data).unwrap();

        let a = select_samples_with(&mut StdRng::seed_from_u64(99), &buffer, 6, 2.0).unwrap();
        let b = select_samples_with(&mut StdRng::seed_from_u64(99), &buffer, 6, 2.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn thread_rng_entry_point() {
        let data = f32_bytes(&[[0.0; 3], [3.0, 0.0, 0.0], [0.0, 3.0, 0.0]]);
        let buffer = VertexBuffer::packed_f32(&data).unwrap();
        let samples = select_samples(&buffer, 2, 1.0).unwrap();
        assert_eq!(samples.len(), 2);
        assert!(samples.min_pairwise_distance().unwrap() >= 1.0);

        let selector = Selector::new(SelectorConfig::new(3, 1.0));
        assert_eq!(selector.select(&buffer).unwrap().len(), 3);
    }

    fn point_strategy() -> impl Strategy<Value = [f32; 3]> {
        [-10.0_f32..10.0, -10.0_f32..10.0, -10.0_f32..10.0]
    }

    proptest! {
        #[test]
        fn accepted_samples_are_separated_and_traceable(
            points in proptest::collection::vec(point_strategy(), 1..40),
            target in 1_usize..8,
            min_separation in 0.0_f32..4.0,
            seed in any::<u64>(),
        ) {
            let data = f32_bytes(&points);
            let buffer = VertexBuffer::packed_f32(&data).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);

            match select_samples_with(&mut rng, &buffer, target, min_separation) {
                Ok(samples) => {
                    prop_assert_eq!(samples.len(), target);
                    for sample in &samples {
                        prop_assert!(sample.index < points.len());
                        prop_assert_eq!(sample.position.to_array(), points[sample.index]);
                    }
                    if let Some(min) = samples.min_pairwise_distance() {
                        prop_assert!(min >= min_separation);
                    }
                }
                Err(SelectError::InfeasibleSampling { accepted, target: t, .. }) => {
                    prop_assert!(accepted < t);
                    prop_assert_eq!(t, target);
                }
                Err(other) => prop_assert!(false, "unexpected error {other}"),
            }
        }

        #[test]
        fn zero_separation_never_infeasible(
            points in proptest::collection::vec(point_strategy(), 1..10),
            target in 1_usize..30,
            seed in any::<u64>(),
        ) {
            let data = f32_bytes(&points);
            let buffer = VertexBuffer::packed_f32(&data).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            let samples = select_samples_with(&mut rng, &buffer, target, 0.0);
            prop_assert_eq!(samples.map(|s| s.len()), Ok(target));
        }

        #[test]
        fn empty_buffer_always_empty(target in 0_usize..100, min_separation in 0.0_f32..10.0) {
            let buffer = VertexBuffer::packed_f32(&[]).unwrap();
            let mut rng = StdRng::seed_from_u64(0);
            let result = select_samples_with(&mut rng, &buffer, target, min_separation);
            prop_assert_eq!(result, Err(SelectError::EmptyBuffer));
        }
    }
}
