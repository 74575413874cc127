//! Grouping recipes: run-length encoding and keyed grouping.

use std::collections::HashMap;
use std::hash::Hash;

/// One run of consecutive equal items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunLength<T> {
    pub item: T,
    pub count: usize,
}

/// Run-length encode consecutive equal items.
pub fn run_lengths<I>(iter: I) -> Vec<RunLength<I::Item>>
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    let mut runs: Vec<RunLength<I::Item>> = Vec::new();
    for item in iter {
        match runs.last_mut() {
            Some(run) if run.item == item => run.count += 1,
            _ => runs.push(RunLength { item, count: 1 }),
        }
    }
    runs
}

/// Expand run-length encoded items back to the original sequence.
pub fn expand_run_lengths<T: Clone>(runs: impl IntoIterator<Item = RunLength<T>>) -> Vec<T> {
    runs.into_iter()
        .flat_map(|run| std::iter::repeat_n(run.item, run.count))
        .collect()
}

/// Group items by a key function, preserving encounter order within groups.
pub fn group_by_key<I, K, F>(iter: I, mut key_fn: F) -> HashMap<K, Vec<I::Item>>
where
    I: IntoIterator,
    K: Hash + Eq,
    F: FnMut(&I::Item) -> K,
{
    let mut groups: HashMap<K, Vec<I::Item>> = HashMap::new();
    for item in iter {
        groups.entry(key_fn(&item)).or_default().push(item);
    }
    groups
}
