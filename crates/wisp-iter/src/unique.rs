//! Uniqueness recipes: dropping duplicates and testing distinctness.

use std::collections::HashSet;
use std::hash::Hash;

use itertools::Itertools;

/// Iterator adapter keeping the first occurrence of each item, in order.
pub struct UniqueIter<I: Iterator> {
    iter: I,
    seen: HashSet<I::Item>,
}

impl<I> Iterator for UniqueIter<I>
where
    I: Iterator,
    I::Item: Hash + Eq + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        for item in self.iter.by_ref() {
            if self.seen.insert(item.clone()) {
                return Some(item);
            }
        }
        None
    }
}

/// Drop duplicate items, keeping first occurrences in order.
pub fn unique<I>(iter: I) -> UniqueIter<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Hash + Eq + Clone,
{
    UniqueIter {
        iter: iter.into_iter(),
        seen: HashSet::new(),
    }
}

/// Collapse runs of consecutive equal items to a single item.
pub fn unique_just_seen<I>(iter: I) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    iter.into_iter().dedup()
}

/// Whether no item occurs twice. Vacuously true for empty input.
pub fn all_distinct<I>(iter: I) -> bool
where
    I: IntoIterator,
    I::Item: Hash + Eq,
{
    let mut seen = HashSet::new();
    iter.into_iter().all(|item| seen.insert(item))
}

/// Whether every item equals the first. Vacuously true for empty input.
pub fn all_equal<I>(iter: I) -> bool
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    let mut iter = iter.into_iter();
    match iter.next() {
        Some(head) => iter.all(|item| item == head),
        None => true,
    }
}

/// Indices of the first occurrence of each distinct item.
pub fn argunique<I>(iter: I) -> Vec<usize>
where
    I: IntoIterator,
    I::Item: Hash + Eq,
{
    let mut seen = HashSet::new();
    iter.into_iter()
        .enumerate()
        .filter_map(|(i, item)| seen.insert(item).then_some(i))
        .collect()
}
