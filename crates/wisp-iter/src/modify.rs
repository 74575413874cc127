//! Structural rearrangement recipes: padding, windows, batches, splits,
//! cycles and round-robin interleaving.

use std::fmt;

/// Error from [`zip_strict`]: the zipped sources differ in length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthMismatch;

impl fmt::Display for LengthMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "all zipped sources must have the same length")
    }
}

impl std::error::Error for LengthMismatch {}

/// Pad to at least `min_len` items with clones of `fill`.
pub fn pad<I>(iter: I, min_len: usize, fill: I::Item) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Clone,
{
    let mut out: Vec<I::Item> = iter.into_iter().collect();
    while out.len() < min_len {
        out.push(fill.clone());
    }
    out
}

/// Yield `item` first, then everything from `iter`.
pub fn prepend<I: IntoIterator>(item: I::Item, iter: I) -> impl Iterator<Item = I::Item> {
    std::iter::once(item).chain(iter)
}

/// Place a clone of `separator` between consecutive items.
pub fn intersperse<I>(iter: I, separator: I::Item) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    I::Item: Clone,
{
    // Fully qualified: std has an unstable method of the same name.
    itertools::Itertools::intersperse(iter.into_iter(), separator)
}

/// Alternate items from two sources, stopping when either runs out.
pub fn interleave_shortest<I, J>(left: I, right: J) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    J: IntoIterator<Item = I::Item>,
{
    itertools::Itertools::interleave_shortest(left.into_iter(), right.into_iter())
}

/// Replace every item satisfying the predicate with a clone of `replacement`.
pub fn replace_where<I, P>(iter: I, mut pred: P, replacement: I::Item) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    I::Item: Clone,
    P: FnMut(&I::Item) -> bool,
{
    iter.into_iter().map(move |item| {
        if pred(&item) {
            replacement.clone()
        } else {
            item
        }
    })
}

/// Materialized sliding windows of exactly `size` items.
///
/// Inputs shorter than the window produce no windows; a zero size is
/// treated as one.
pub struct Windows<I: Iterator> {
    iter: I,
    size: usize,
    buffer: Vec<I::Item>,
}

impl<I> Iterator for Windows<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.buffer.len() < self.size {
            while self.buffer.len() < self.size {
                self.buffer.push(self.iter.next()?);
            }
        } else {
            self.buffer.remove(0);
            self.buffer.push(self.iter.next()?);
        }
        Some(self.buffer.clone())
    }
}

/// Sliding windows over `iter`. See [`Windows`].
pub fn windows<I>(iter: I, size: usize) -> Windows<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    let size = size.max(1);
    Windows {
        iter: iter.into_iter(),
        size,
        buffer: Vec::with_capacity(size),
    }
}

/// Consecutive batches of at most `size` items; the final batch may be short.
pub struct Batches<I: Iterator> {
    iter: I,
    size: usize,
}

impl<I: Iterator> Iterator for Batches<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let batch: Vec<I::Item> = self.iter.by_ref().take(self.size).collect();
        if batch.is_empty() { None } else { Some(batch) }
    }
}

/// Batch `iter` into runs of at most `size` items. A zero size is treated
/// as one.
pub fn take_batches<I: IntoIterator>(iter: I, size: usize) -> Batches<I::IntoIter> {
    Batches {
        iter: iter.into_iter(),
        size: size.max(1),
    }
}

/// Split items into those satisfying the predicate and the rest.
pub fn partition_by<I, P>(iter: I, mut pred: P) -> (Vec<I::Item>, Vec<I::Item>)
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    let mut yes = Vec::new();
    let mut no = Vec::new();
    for item in iter {
        if pred(&item) {
            yes.push(item);
        } else {
            no.push(item);
        }
    }
    (yes, no)
}

/// Split into the first `index` items and the rest.
pub fn split_at_index<I: IntoIterator>(iter: I, index: usize) -> (Vec<I::Item>, Vec<I::Item>) {
    let mut head = Vec::new();
    let mut rest = Vec::new();
    for (i, item) in iter.into_iter().enumerate() {
        if i < index {
            head.push(item);
        } else {
            rest.push(item);
        }
    }
    (head, rest)
}

/// Start a new chunk before every item satisfying the predicate.
pub fn split_before<I, P>(iter: I, mut pred: P) -> Vec<Vec<I::Item>>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    let mut chunks: Vec<Vec<I::Item>> = Vec::new();
    for item in iter {
        if pred(&item) || chunks.is_empty() {
            chunks.push(Vec::new());
        }
        chunks.last_mut().expect("chunk pushed above").push(item);
    }
    chunks
}

/// End the current chunk after every item satisfying the predicate.
pub fn split_after<I, P>(iter: I, mut pred: P) -> Vec<Vec<I::Item>>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    let mut chunks: Vec<Vec<I::Item>> = Vec::new();
    let mut current: Vec<I::Item> = Vec::new();
    for item in iter {
        let boundary = pred(&item);
        current.push(item);
        if boundary {
            chunks.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Interleave sources one item at a time until all are exhausted.
///
/// Shorter sources drop out; the remainder continues round-robin.
pub fn round_robin<T>(sources: Vec<Vec<T>>) -> Vec<T> {
    let mut iters: Vec<std::vec::IntoIter<T>> =
        sources.into_iter().map(Vec::into_iter).collect();
    let mut out = Vec::new();
    while !iters.is_empty() {
        iters.retain_mut(|iter| match iter.next() {
            Some(item) => {
                out.push(item);
                true
            }
            None => false,
        });
    }
    out
}

/// Zip two sources, erroring when their lengths differ.
///
/// The built-in `zip` silently truncates to the shorter source; this
/// variant treats a length mismatch as a caller error.
pub fn zip_strict<I, J>(left: I, right: J) -> Result<Vec<(I::Item, J::Item)>, LengthMismatch>
where
    I: IntoIterator,
    J: IntoIterator,
{
    let mut left = left.into_iter();
    let mut right = right.into_iter();
    let mut out = Vec::new();
    loop {
        match (left.next(), right.next()) {
            (Some(a), Some(b)) => out.push((a, b)),
            (None, None) => return Ok(out),
            _ => return Err(LengthMismatch),
        }
    }
}

/// Split an iterator of pairs into two parallel vectors.
pub fn unzip_pairs<I, A, B>(iter: I) -> (Vec<A>, Vec<B>)
where
    I: IntoIterator<Item = (A, B)>,
{
    iter.into_iter().unzip()
}

/// Repeat the full sequence `laps` times.
pub fn finite_cycle<I>(iter: I, laps: usize) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Clone,
{
    let base: Vec<I::Item> = iter.into_iter().collect();
    let mut out = Vec::with_capacity(base.len() * laps);
    for _ in 0..laps {
        out.extend(base.iter().cloned());
    }
    out
}

/// Like [`finite_cycle`], but each item is tagged with its lap number.
pub fn enumerate_cycle<I>(iter: I, laps: usize) -> Vec<(usize, I::Item)>
where
    I: IntoIterator,
    I::Item: Clone,
{
    let base: Vec<I::Item> = iter.into_iter().collect();
    let mut out = Vec::with_capacity(base.len() * laps);
    for lap in 0..laps {
        out.extend(base.iter().cloned().map(|item| (lap, item)));
    }
    out
}

/// Every rotation of the input, starting with the unrotated sequence.
pub fn rotations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    (0..items.len())
        .map(|offset| {
            items[offset..]
                .iter()
                .chain(&items[..offset])
                .cloned()
                .collect()
        })
        .collect()
}

/// Infinite sequence `f(start), f(start + 1), ...`.
pub fn tabulate<T, F: FnMut(i64) -> T>(start: i64, mut f: F) -> impl Iterator<Item = T> {
    (start..).map(move |n| f(n))
}

/// Infinite sequence `seed, f(seed), f(f(seed)), ...`.
pub fn iterate<T: Clone, F: FnMut(&T) -> T + 'static>(
    seed: T,
    mut f: F,
) -> impl Iterator<Item = T> {
    std::iter::successors(Some(seed), move |prev| Some(f(prev)))
}

/// Call `f` exactly `n` times, collecting lazily.
pub fn repeat_with_n<T, F: FnMut() -> T>(f: F, n: usize) -> impl Iterator<Item = T> {
    std::iter::repeat_with(f).take(n)
}
