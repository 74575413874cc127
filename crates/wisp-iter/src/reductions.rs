//! Reduction recipes: counting, monotonicity, arg-min/max, running values.

use itertools::Itertools;

/// Count items by consuming the iterator.
pub fn ilen<I: IntoIterator>(iter: I) -> usize {
    iter.into_iter().count()
}

/// Count items satisfying the predicate.
pub fn count_true<I, P>(iter: I, pred: P) -> usize
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    let mut pred = pred;
    iter.into_iter().filter(|item| pred(item)).count()
}

fn pairwise_all<I, F>(iter: I, mut ok: F) -> bool
where
    I: IntoIterator,
    I::Item: Clone,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    // Vacuously true for fewer than two items.
    iter.into_iter()
        .tuple_windows::<(_, _)>()
        .all(|(a, b)| ok(&a, &b))
}

/// Strictly increasing. Vacuously true for fewer than two items.
pub fn increasing<I>(iter: I) -> bool
where
    I: IntoIterator,
    I::Item: PartialOrd + Clone,
{
    pairwise_all(iter, |a, b| a < b)
}

/// Strictly decreasing. Vacuously true for fewer than two items.
pub fn decreasing<I>(iter: I) -> bool
where
    I: IntoIterator,
    I::Item: PartialOrd + Clone,
{
    pairwise_all(iter, |a, b| a > b)
}

/// Never decreasing.
pub fn non_decreasing<I>(iter: I) -> bool
where
    I: IntoIterator,
    I::Item: PartialOrd + Clone,
{
    pairwise_all(iter, |a, b| a <= b)
}

/// Never increasing.
pub fn non_increasing<I>(iter: I) -> bool
where
    I: IntoIterator,
    I::Item: PartialOrd + Clone,
{
    pairwise_all(iter, |a, b| a >= b)
}

/// Index of the first minimal item.
pub fn argmin<I>(iter: I) -> Option<usize>
where
    I: IntoIterator,
    I::Item: PartialOrd,
{
    let mut best: Option<(usize, I::Item)> = None;
    for (i, item) in iter.into_iter().enumerate() {
        match &best {
            Some((_, current)) if !(item < *current) => {}
            _ => best = Some((i, item)),
        }
    }
    best.map(|(i, _)| i)
}

/// Index of the first maximal item.
pub fn argmax<I>(iter: I) -> Option<usize>
where
    I: IntoIterator,
    I::Item: PartialOrd,
{
    let mut best: Option<(usize, I::Item)> = None;
    for (i, item) in iter.into_iter().enumerate() {
        match &best {
            Some((_, current)) if !(item > *current) => {}
            _ => best = Some((i, item)),
        }
    }
    best.map(|(i, _)| i)
}

/// All minimal items, in encounter order.
pub fn allmin<I>(iter: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: PartialOrd + Clone,
{
    let mut result: Vec<I::Item> = Vec::new();
    for item in iter {
        match result.first() {
            None => result.push(item),
            Some(current) if item < *current => {
                result.clear();
                result.push(item);
            }
            Some(current) if item == *current => result.push(item),
            Some(_) => {}
        }
    }
    result
}

/// All maximal items, in encounter order.
pub fn allmax<I>(iter: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: PartialOrd + Clone,
{
    let mut result: Vec<I::Item> = Vec::new();
    for item in iter {
        match result.first() {
            None => result.push(item),
            Some(current) if item > *current => {
                result.clear();
                result.push(item);
            }
            Some(current) if item == *current => result.push(item),
            Some(_) => {}
        }
    }
    result
}

/// Indices of all minimal items.
pub fn argallmin<I>(iter: I) -> Vec<usize>
where
    I: IntoIterator,
    I::Item: PartialOrd,
{
    let mut indices: Vec<usize> = Vec::new();
    let mut current: Option<I::Item> = None;
    for (i, item) in iter.into_iter().enumerate() {
        match &current {
            None => {
                current = Some(item);
                indices.push(i);
            }
            Some(best) if item < *best => {
                current = Some(item);
                indices.clear();
                indices.push(i);
            }
            Some(best) if item == *best => indices.push(i),
            Some(_) => {}
        }
    }
    indices
}

/// Indices of all maximal items.
pub fn argallmax<I>(iter: I) -> Vec<usize>
where
    I: IntoIterator,
    I::Item: PartialOrd,
{
    let mut indices: Vec<usize> = Vec::new();
    let mut current: Option<I::Item> = None;
    for (i, item) in iter.into_iter().enumerate() {
        match &current {
            None => {
                current = Some(item);
                indices.push(i);
            }
            Some(best) if item > *best => {
                current = Some(item);
                indices.clear();
                indices.push(i);
            }
            Some(best) if item == *best => indices.push(i),
            Some(_) => {}
        }
    }
    indices
}

/// Sum of pairwise products; stops at the shorter slice.
pub fn inner_product<T>(a: &[T], b: &[T]) -> T
where
    T: Copy + std::ops::Mul<Output = T> + std::iter::Sum<T>,
{
    a.iter().zip(b).map(|(&x, &y)| x * y).sum()
}

/// First differences of consecutive items: `[x1 - x0, x2 - x1, ...]`.
///
/// One shorter than the input; empty for fewer than two items.
pub fn difference<I>(iter: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Clone + std::ops::Sub<Output = I::Item>,
{
    iter.into_iter()
        .tuple_windows::<(_, _)>()
        .map(|(a, b)| b - a)
        .collect()
}

/// Proportional change between consecutive values: `(next - prev) / prev`.
///
/// Multiply by 100 for percent changes. A zero base follows IEEE division
/// semantics, producing an infinite or NaN entry.
pub fn proportional_change(values: &[f64]) -> Vec<f64> {
    values
        .windows(2)
        .map(|pair| (pair[1] - pair[0]) / pair[0])
        .collect()
}

/// Running values of a reduction: `[x0, f(x0, x1), f(f(x0, x1), x2), ...]`.
pub fn running<I, F>(iter: I, mut f: F) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Clone,
    F: FnMut(&I::Item, &I::Item) -> I::Item,
{
    let mut out: Vec<I::Item> = Vec::new();
    for item in iter {
        let next = match out.last() {
            Some(acc) => f(acc, &item),
            None => item,
        };
        out.push(next);
    }
    out
}

/// Simple moving average over fixed-size windows.
///
/// Returns one average per full window; inputs shorter than `window`
/// produce an empty result. A zero window is treated as one.
pub fn simple_moving_average(values: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);
    if values.len() < window {
        return Vec::new();
    }
    let mut sum: f64 = values[..window].iter().sum();
    let mut out = vec![sum / window as f64];
    for i in window..values.len() {
        sum += values[i] - values[i - window];
        out.push(sum / window as f64);
    }
    out
}

/// Exponentially weighted moving average with smoothing factor `alpha`.
///
/// `alpha` is clamped to `[0, 1]`; 1 tracks the input exactly, 0 never moves
/// off the first value.
pub fn exponential_moving_average(values: &[f64], alpha: f64) -> Vec<f64> {
    let alpha = alpha.clamp(0.0, 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut previous: Option<f64> = None;
    for &value in values {
        let next = match previous {
            Some(prev) => alpha * value + (1.0 - alpha) * prev,
            None => value,
        };
        out.push(next);
        previous = Some(next);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ilen_and_count_true() {
        assert_eq!(ilen(0..7), 7);
        assert_eq!(count_true(0..10, |x| x % 3 == 0), 4);
        assert_eq!(ilen(Vec::<i32>::new()), 0);
    }

    #[test]
    fn monotonicity() {
        assert!(increasing(vec![1, 2, 3]));
        assert!(!increasing(vec![1, 1, 2]));
        assert!(non_decreasing(vec![1, 1, 2]));
        assert!(decreasing(vec![3, 2, 1]));
        assert!(non_increasing(vec![3, 3, 1]));

        // Vacuous truths.
        assert!(increasing(Vec::<i32>::new()));
        assert!(decreasing(vec![1]));
    }

    #[test]
    fn argmin_argmax_first_winner() {
        let items = vec![3, 1, 4, 1, 5];
        assert_eq!(argmin(items.clone()), Some(1));
        assert_eq!(argmax(items), Some(4));
        assert_eq!(argmin(Vec::<i32>::new()), None);
    }

    #[test]
    fn allmin_allmax() {
        let items = vec![2, 1, 3, 1, 3];
        assert_eq!(allmin(items.clone()), vec![1, 1]);
        assert_eq!(allmax(items.clone()), vec![3, 3]);
        assert_eq!(argallmin(items.clone()), vec![1, 3]);
        assert_eq!(argallmax(items), vec![2, 4]);
    }

    #[test]
    fn inner_product_stops_at_shorter() {
        assert_eq!(inner_product(&[1, 2, 3], &[4, 5, 6]), 32);
        assert_eq!(inner_product(&[1, 2, 3], &[10, 10]), 30);
        assert_eq!(inner_product::<i32>(&[], &[]), 0);
    }

    #[test]
    fn difference_takes_first_deltas() {
        assert_eq!(difference(0..10), vec![1; 9]);
        let squares: Vec<i32> = (0..10).map(|x| x * x).collect();
        assert_eq!(
            difference(squares.clone()),
            vec![1, 3, 5, 7, 9, 11, 13, 15, 17]
        );
        // Second differences of squares are constant.
        assert_eq!(difference(difference(squares)), vec![2; 8]);
        assert_eq!(difference(std::iter::once(5)), Vec::<i32>::new());
    }

    #[test]
    fn proportional_change_relative_deltas() {
        let changes = proportional_change(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(changes, vec![1.0, 0.5, 1.0 / 3.0]);
        assert!(proportional_change(&[5.0]).is_empty());
        // Zero base gives an infinite change rather than an error.
        assert_eq!(proportional_change(&[0.0, 2.0]), vec![f64::INFINITY]);
    }

    #[test]
    fn running_sum() {
        assert_eq!(running(vec![1, 2, 3, 4], |a, b| a + b), vec![1, 3, 6, 10]);
        assert_eq!(running(Vec::<i32>::new(), |a, b| a + b), Vec::<i32>::new());
    }

    #[test]
    fn sma_windows() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(simple_moving_average(&values, 2), vec![1.5, 2.5, 3.5]);
        assert!(simple_moving_average(&values[..1], 2).is_empty());
    }

    #[test]
    fn ema_tracks_input() {
        let values = [10.0, 20.0];
        let ema = exponential_moving_average(&values, 0.5);
        assert_eq!(ema, vec![10.0, 15.0]);
        // alpha = 1 follows the input exactly.
        assert_eq!(exponential_moving_average(&values, 1.0), values.to_vec());
    }
}
