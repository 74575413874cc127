//! Iterator recipes for wisp.
//!
//! Small, composable helpers over anything iterable: selection (`first`,
//! `tail`, `only_one`), uniqueness, deep flattening, run-length grouping,
//! reductions (monotonicity checks, arg-min/max, moving averages), and
//! structural rearrangement (windows, batches, splits, round-robin).
//!
//! Everything is exposed as free functions; the most common recipes are also
//! available on any iterator through the [`IterRecipes`] extension trait.

pub mod flatten;
pub mod group;
pub mod modify;
pub mod reductions;
pub mod select;
pub mod take;
pub mod unique;

pub use flatten::Nested;
pub use group::RunLength;
pub use modify::LengthMismatch;
pub use take::OnlyOneError;

/// Extension trait bringing the most common recipes onto any iterator.
///
/// ```
/// use wisp_iter::IterRecipes;
///
/// let item = [7].into_iter().only_one().unwrap();
/// assert_eq!(item, 7);
///
/// let runs = "aab".chars().run_lengths();
/// assert_eq!(runs.len(), 2);
/// ```
pub trait IterRecipes: Iterator + Sized {
    /// Count items by consuming the iterator.
    fn ilen(self) -> usize {
        reductions::ilen(self)
    }

    /// The single item of the iterator, or an error when empty or ambiguous.
    fn only_one(self) -> Result<Self::Item, OnlyOneError> {
        take::only_one(self)
    }

    /// The final `n` items, in order.
    fn tail_n(self, n: usize) -> Vec<Self::Item> {
        take::tail(self, n)
    }

    /// Drop duplicate items, keeping first occurrences in order.
    fn distinct(self) -> unique::UniqueIter<Self>
    where
        Self::Item: std::hash::Hash + Eq + Clone,
    {
        unique::unique(self)
    }

    /// Run-length encode consecutive equal items.
    fn run_lengths(self) -> Vec<RunLength<Self::Item>>
    where
        Self::Item: PartialEq,
    {
        group::run_lengths(self)
    }

    /// Materialized sliding windows of exactly `n` items.
    fn windows_of(self, n: usize) -> modify::Windows<Self>
    where
        Self::Item: Clone,
    {
        modify::windows(self, n)
    }

    /// Consecutive batches of at most `n` items.
    fn batches_of(self, n: usize) -> modify::Batches<Self> {
        modify::take_batches(self, n)
    }

    /// Split items into those satisfying the predicate and the rest.
    fn partition_by<P>(self, pred: P) -> (Vec<Self::Item>, Vec<Self::Item>)
    where
        P: FnMut(&Self::Item) -> bool,
    {
        modify::partition_by(self, pred)
    }
}

impl<I: Iterator> IterRecipes for I {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_trait_reaches_recipes() {
        assert_eq!((0..5).ilen(), 5);
        assert_eq!((0..5).tail_n(2), vec![3, 4]);
        assert_eq!([1, 1, 2].into_iter().distinct().collect::<Vec<_>>(), vec![1, 2]);

        let (even, odd) = (0..6).partition_by(|x| x % 2 == 0);
        assert_eq!(even, vec![0, 2, 4]);
        assert_eq!(odd, vec![1, 3, 5]);
    }

    #[test]
    fn extension_windows_and_batches() {
        let windows: Vec<_> = (1..=4).windows_of(2).collect();
        assert_eq!(windows, vec![vec![1, 2], vec![2, 3], vec![3, 4]]);

        let batches: Vec<_> = (1..=5).batches_of(2).collect();
        assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5]]);
    }
}
