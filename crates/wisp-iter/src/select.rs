//! Selection recipes over predicates: locating, flagging and prioritizing.

use std::collections::HashSet;
use std::hash::Hash;

/// Indices of every item satisfying the predicate.
pub fn findall<I, P>(iter: I, mut pred: P) -> Vec<usize>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    iter.into_iter()
        .enumerate()
        .filter_map(|(i, item)| pred(&item).then_some(i))
        .collect()
}

/// Pair every item with whether it satisfies the predicate.
pub fn flag_where<I, P>(iter: I, mut pred: P) -> Vec<(I::Item, bool)>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    iter.into_iter()
        .map(|item| {
            let flag = pred(&item);
            (item, flag)
        })
        .collect()
}

/// Stable rearrangement: items satisfying the predicate first, rest after.
///
/// Relative order within each part is preserved.
pub fn prioritize_where<I, P>(iter: I, mut pred: P) -> Vec<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    let mut front = Vec::new();
    let mut back = Vec::new();
    for item in iter {
        if pred(&item) {
            front.push(item);
        } else {
            back.push(item);
        }
    }
    front.extend(back);
    front
}

/// Stable rearrangement: items in `preferred` first, rest after.
pub fn prioritize_in<I>(iter: I, preferred: &HashSet<I::Item>) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Hash + Eq,
{
    prioritize_where(iter, |item| preferred.contains(item))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn findall_indices() {
        assert_eq!(findall(0..8, |x| x % 3 == 0), vec![0, 3, 6]);
        assert_eq!(findall(Vec::<i32>::new(), |_| true), Vec::<usize>::new());
    }

    #[test]
    fn flag_where_pairs() {
        let flagged = flag_where(vec!["", "x", ""], |s| s.is_empty());
        assert_eq!(flagged, vec![("", true), ("x", false), ("", true)]);
    }

    #[test]
    fn prioritize_where_is_stable() {
        let result = prioritize_where(vec![1, 2, 3, 4, 5], |&x| x % 2 == 0);
        assert_eq!(result, vec![2, 4, 1, 3, 5]);
    }

    #[test]
    fn prioritize_in_front_loads_members() {
        let preferred: HashSet<_> = [3, 5].into_iter().collect();
        let result = prioritize_in(vec![1, 3, 2, 5, 4], &preferred);
        assert_eq!(result, vec![3, 5, 1, 2, 4]);
    }
}
