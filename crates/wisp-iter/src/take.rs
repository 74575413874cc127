//! Selection recipes: heads, tails, and exactly-one extraction.

use std::collections::VecDeque;
use std::fmt;

/// Error from [`only_one`]: the iterator did not hold exactly one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnlyOneError {
    Empty,
    TooMany,
}

impl fmt::Display for OnlyOneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OnlyOneError::Empty => write!(f, "expected exactly one item, got none"),
            OnlyOneError::TooMany => write!(f, "expected exactly one item, got more"),
        }
    }
}

impl std::error::Error for OnlyOneError {}

/// The first item, if any.
pub fn first<I: IntoIterator>(iter: I) -> Option<I::Item> {
    iter.into_iter().next()
}

/// The last item, consuming the iterator.
pub fn last<I: IntoIterator>(iter: I) -> Option<I::Item> {
    iter.into_iter().last()
}

/// The item at index `n` (zero-based), if present.
pub fn nth<I: IntoIterator>(iter: I, n: usize) -> Option<I::Item> {
    iter.into_iter().nth(n)
}

/// The first `n` items, materialized.
pub fn take_n<I: IntoIterator>(iter: I, n: usize) -> Vec<I::Item> {
    iter.into_iter().take(n).collect()
}

/// Skip the first `n` items.
pub fn drop_n<I: IntoIterator>(iter: I, n: usize) -> impl Iterator<Item = I::Item> {
    iter.into_iter().skip(n)
}

/// The final `n` items, in order.
pub fn tail<I: IntoIterator>(iter: I, n: usize) -> Vec<I::Item> {
    if n == 0 {
        // Still consume, matching the drain-everything behavior of `last`.
        iter.into_iter().for_each(drop);
        return Vec::new();
    }
    let mut buffer = VecDeque::with_capacity(n);
    for item in iter {
        if buffer.len() == n {
            buffer.pop_front();
        }
        buffer.push_back(item);
    }
    buffer.into_iter().collect()
}

/// Every item except the last one.
pub fn except_last<I: IntoIterator>(iter: I) -> ExceptLast<I::IntoIter> {
    ExceptLast {
        iter: iter.into_iter().peekable(),
    }
}

/// Iterator adapter for [`except_last`].
pub struct ExceptLast<I: Iterator> {
    iter: std::iter::Peekable<I>,
}

impl<I: Iterator> Iterator for ExceptLast<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        // The final item is withheld.
        if self.iter.peek().is_some() {
            Some(item)
        } else {
            None
        }
    }
}

/// The single item of the iterator.
///
/// Distinguishes "no items" from "more than one item" so callers can report
/// the failure precisely.
pub fn only_one<I: IntoIterator>(iter: I) -> Result<I::Item, OnlyOneError> {
    let mut iter = iter.into_iter();
    let item = iter.next().ok_or(OnlyOneError::Empty)?;
    if iter.next().is_some() {
        return Err(OnlyOneError::TooMany);
    }
    Ok(item)
}

/// A clone of the first item plus an iterator equivalent to the original.
///
/// Lets callers inspect the head without losing it.
pub fn peek<I>(iter: I) -> (Option<I::Item>, impl Iterator<Item = I::Item>)
where
    I: IntoIterator,
    I::Item: Clone,
{
    let mut iter = iter.into_iter();
    let head = iter.next();
    (head.clone(), head.into_iter().chain(iter))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last() {
        assert_eq!(first(1..5), Some(1));
        assert_eq!(last(1..5), Some(4));
        assert_eq!(first(std::iter::empty::<i32>()), None);
        assert_eq!(last(std::iter::empty::<i32>()), None);
    }

    #[test]
    fn nth_indexing() {
        assert_eq!(nth(10..20, 0), Some(10));
        assert_eq!(nth(10..20, 9), Some(19));
        assert_eq!(nth(10..20, 10), None);
    }

    #[test]
    fn take_and_drop() {
        assert_eq!(take_n(0..10, 3), vec![0, 1, 2]);
        assert_eq!(take_n(0..2, 5), vec![0, 1]);
        assert_eq!(drop_n(0..5, 3).collect::<Vec<_>>(), vec![3, 4]);
    }

    #[test]
    fn tail_keeps_final_items() {
        assert_eq!(tail(0..10, 3), vec![7, 8, 9]);
        assert_eq!(tail(0..2, 5), vec![0, 1]);
        assert_eq!(tail(0..5, 0), Vec::<i32>::new());
    }

    #[test]
    fn except_last_withholds_final() {
        assert_eq!(except_last(1..=4).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(except_last(std::iter::once(9)).count(), 0);
        assert_eq!(except_last(std::iter::empty::<i32>()).count(), 0);
    }

    #[test]
    fn only_one_cases() {
        assert_eq!(only_one([42]), Ok(42));
        assert_eq!(only_one(Vec::<i32>::new()), Err(OnlyOneError::Empty));
        assert_eq!(only_one([1, 2]), Err(OnlyOneError::TooMany));
    }

    #[test]
    fn peek_does_not_lose_head() {
        let (head, rest) = peek(0..5);
        assert_eq!(head, Some(0));
        assert_eq!(rest.collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);

        let (head, rest) = peek(std::iter::empty::<i32>());
        assert_eq!(head, None);
        assert_eq!(rest.count(), 0);
    }
}
