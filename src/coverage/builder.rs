//! All-pairs coverage set construction.

use super::types::CoverageSet;
use crate::error::PlacementError;
use crate::geometry::Point;
use tracing::instrument;

/// Computes, for every candidate, the targets within a coverage radius.
///
/// Evaluation is all-pairs: `O(targets × candidates)` distance checks with
/// no spatial index. That is comfortable for grids of a few thousand
/// cells; far larger grids would need a spatial index to stay fast, with
/// the same inclusive-boundary semantics.
pub struct CoverageSetBuilder;

impl CoverageSetBuilder {
    /// Builds one [`CoverageSet`] per candidate position.
    ///
    /// Target `i` is covered by candidate `j` when
    /// `distance(targets[i], candidates[j]) <= radius` (inclusive). A
    /// radius of 0 therefore covers only coincident targets. Empty
    /// `targets` yields one empty set per candidate.
    ///
    /// # Errors
    ///
    /// [`PlacementError::InvalidRadius`] if `radius` is negative or not
    /// finite.
    #[instrument(level = "debug", skip_all, fields(targets = targets.len(), candidates = candidates.len(), radius = radius))]
    pub fn build(
        targets: &[Point],
        candidates: &[Point],
        radius: f64,
    ) -> Result<Vec<CoverageSet>, PlacementError> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(PlacementError::InvalidRadius(radius));
        }

        let sets = candidates
            .iter()
            .map(|candidate| {
                let covered = targets
                    .iter()
                    .enumerate()
                    .filter(|(_, target)| target.distance(candidate) <= radius)
                    .map(|(i, _)| i)
                    .collect();
                CoverageSet::from_sorted(covered)
            })
            .collect();

        Ok(sets)
    }

    /// Builds coverage sets for candidates given as indices into `targets`.
    ///
    /// Local index `j` of the result belongs to `candidate_indices[j]`.
    ///
    /// # Errors
    ///
    /// [`PlacementError::CandidateOutOfRange`] for an index outside
    /// `targets`, plus everything [`build`](Self::build) returns.
    pub fn build_for_indices(
        targets: &[Point],
        candidate_indices: &[usize],
        radius: f64,
    ) -> Result<Vec<CoverageSet>, PlacementError> {
        let candidates = resolve_candidates(targets, candidate_indices)?;
        Self::build(targets, &candidates, radius)
    }
}

/// Looks up the position of every candidate index.
pub(crate) fn resolve_candidates(
    targets: &[Point],
    candidate_indices: &[usize],
) -> Result<Vec<Point>, PlacementError> {
    candidate_indices
        .iter()
        .map(|&index| {
            targets
                .get(index)
                .copied()
                .ok_or(PlacementError::CandidateOutOfRange {
                    index,
                    targets: targets.len(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
            Point::new(10.0, 10.0),
        ]
    }

    #[test]
    fn test_square_all_within_radius() {
        let targets = square();
        let sets = CoverageSetBuilder::build_for_indices(&targets, &[0, 1, 2, 3], 15.0).unwrap();

        assert_eq!(sets.len(), 4);
        for set in &sets {
            assert_eq!(set.as_slice(), &[0, 1, 2, 3]);
        }
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let targets = square();
        let sets = CoverageSetBuilder::build(&targets, &[Point::new(0.0, 0.0)], 10.0).unwrap();
        // (10,10) is ~14.14 away and stays out
        assert_eq!(sets[0].as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn test_zero_radius_covers_coincident_only() {
        let targets = vec![
            Point::new(1.0, 1.0),
            Point::new(2.0, 1.0),
            Point::new(1.0, 1.0),
        ];
        let sets = CoverageSetBuilder::build_for_indices(&targets, &[0, 1], 0.0).unwrap();
        assert_eq!(sets[0].as_slice(), &[0, 2]);
        assert_eq!(sets[1].as_slice(), &[1]);
    }

    #[test]
    fn test_empty_targets_give_empty_sets() {
        let candidates = vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0)];
        let sets = CoverageSetBuilder::build(&[], &candidates, 3.0).unwrap();
        assert_eq!(sets.len(), 2);
        assert!(sets.iter().all(CoverageSet::is_empty));
    }

    #[test]
    fn test_empty_candidates() {
        let sets = CoverageSetBuilder::build(&square(), &[], 3.0).unwrap();
        assert!(sets.is_empty());
    }

    #[test]
    fn test_invalid_radius() {
        for radius in [-1.0, f64::NAN, f64::INFINITY] {
            let result = CoverageSetBuilder::build(&square(), &square(), radius);
            assert!(matches!(result, Err(PlacementError::InvalidRadius(_))));
        }
    }

    #[test]
    fn test_index_out_of_range() {
        let result = CoverageSetBuilder::build_for_indices(&square(), &[0, 4], 1.0);
        assert_eq!(
            result,
            Err(PlacementError::CandidateOutOfRange {
                index: 4,
                targets: 4
            })
        );
    }

    proptest! {
        #[test]
        fn prop_sets_match_brute_force(
            coords in proptest::collection::vec((0.0f64..100.0, 0.0f64..100.0), 1..40),
            radius in 0.0f64..60.0,
        ) {
            let targets: Vec<Point> = coords.into_iter().map(Point::from).collect();
            let indices: Vec<usize> = (0..targets.len()).step_by(2).collect();
            let sets = CoverageSetBuilder::build_for_indices(&targets, &indices, radius).unwrap();

            prop_assert_eq!(sets.len(), indices.len());
            for (set, &c) in sets.iter().zip(&indices) {
                // a candidate always covers its own cell
                prop_assert!(set.contains(c));
                for (i, t) in targets.iter().enumerate() {
                    prop_assert_eq!(set.contains(i), t.distance(&targets[c]) <= radius);
                }
            }
        }
    }
}
