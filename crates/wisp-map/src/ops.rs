//! Free functions over plain maps: inversion, filtering and joins.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Invert key/value pairs; the last pairing for a value wins.
pub fn invert<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> HashMap<V, K>
where
    V: Eq + Hash,
{
    pairs.into_iter().map(|(k, v)| (v, k)).collect()
}

/// Invert key/value pairs; the first pairing for a value wins.
pub fn invert_first_seen<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> HashMap<V, K>
where
    V: Eq + Hash,
{
    let mut out = HashMap::new();
    for (key, value) in pairs {
        out.entry(value).or_insert(key);
    }
    out
}

/// Invert key/value pairs, collecting every key mapped to each value.
pub fn invert_multi<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> HashMap<V, Vec<K>>
where
    V: Eq + Hash,
{
    let mut out: HashMap<V, Vec<K>> = HashMap::new();
    for (key, value) in pairs {
        out.entry(value).or_default().push(key);
    }
    out
}

/// Entries whose key satisfies the predicate.
pub fn filter_keys<K, V, P>(map: HashMap<K, V>, mut pred: P) -> HashMap<K, V>
where
    K: Eq + Hash,
    P: FnMut(&K) -> bool,
{
    map.into_iter().filter(|(k, _)| pred(k)).collect()
}

/// Entries whose value satisfies the predicate.
pub fn filter_values<K, V, P>(map: HashMap<K, V>, mut pred: P) -> HashMap<K, V>
where
    K: Eq + Hash,
    P: FnMut(&V) -> bool,
{
    map.into_iter().filter(|(_, v)| pred(v)).collect()
}

/// Entries whose key is in `keys`.
pub fn keep_keys<K, V>(map: HashMap<K, V>, keys: &HashSet<K>) -> HashMap<K, V>
where
    K: Eq + Hash,
{
    filter_keys(map, |k| keys.contains(k))
}

/// Entries whose key is not in `keys`.
pub fn drop_keys<K, V>(map: HashMap<K, V>, keys: &HashSet<K>) -> HashMap<K, V>
where
    K: Eq + Hash,
{
    filter_keys(map, |k| !keys.contains(k))
}

/// Keys present in both maps, paired with both values.
pub fn inner_join<K, A, B>(left: &HashMap<K, A>, right: &HashMap<K, B>) -> HashMap<K, (A, B)>
where
    K: Eq + Hash + Clone,
    A: Clone,
    B: Clone,
{
    left.iter()
        .filter_map(|(key, a)| {
            right
                .get(key)
                .map(|b| (key.clone(), (a.clone(), b.clone())))
        })
        .collect()
}

/// Every key of `left`, with the matching right value when present.
pub fn left_join<K, A, B>(left: &HashMap<K, A>, right: &HashMap<K, B>) -> HashMap<K, (A, Option<B>)>
where
    K: Eq + Hash + Clone,
    A: Clone,
    B: Clone,
{
    left.iter()
        .map(|(key, a)| (key.clone(), (a.clone(), right.get(key).cloned())))
        .collect()
}

/// Every key of either map, with whichever values are present.
pub fn outer_join<K, A, B>(
    left: &HashMap<K, A>,
    right: &HashMap<K, B>,
) -> HashMap<K, (Option<A>, Option<B>)>
where
    K: Eq + Hash + Clone,
    A: Clone,
    B: Clone,
{
    let mut out: HashMap<K, (Option<A>, Option<B>)> = HashMap::new();
    for (key, a) in left {
        out.insert(key.clone(), (Some(a.clone()), right.get(key).cloned()));
    }
    for (key, b) in right {
        out.entry(key.clone())
            .or_insert_with(|| (None, Some(b.clone())));
    }
    out
}
