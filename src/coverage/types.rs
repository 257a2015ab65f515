//! Coverage set representation.

/// Global target indices covered by one candidate.
///
/// Indices are sorted ascending and distinct.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverageSet {
    targets: Vec<usize>,
}

impl CoverageSet {
    /// Builds a set from arbitrary indices, sorting and deduplicating them.
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        let mut targets: Vec<usize> = indices.into_iter().collect();
        targets.sort_unstable();
        targets.dedup();
        Self { targets }
    }

    /// Wraps indices that are already sorted and distinct.
    pub(crate) fn from_sorted(targets: Vec<usize>) -> Self {
        debug_assert!(targets.windows(2).all(|w| w[0] < w[1]));
        Self { targets }
    }

    /// Number of covered targets.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Whether `target` is covered.
    pub fn contains(&self, target: usize) -> bool {
        self.targets.binary_search(&target).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.targets.iter().copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.targets
    }
}

impl FromIterator<usize> for CoverageSet {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        Self::from_indices(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_indices_sorts_and_dedups() {
        let set = CoverageSet::from_indices([5, 1, 3, 1, 5]);
        assert_eq!(set.as_slice(), &[1, 3, 5]);
        assert_eq!(set.len(), 3);
        assert!(set.contains(3));
        assert!(!set.contains(2));
    }

    #[test]
    fn test_empty() {
        let set = CoverageSet::default();
        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 0);
    }

    #[test]
    fn test_collect() {
        let set: CoverageSet = (0..4).rev().collect();
        assert_eq!(set.as_slice(), &[0, 1, 2, 3]);
    }
}
