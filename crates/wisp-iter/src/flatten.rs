//! Deep flattening of arbitrarily nested structures.

/// A value that is either a leaf or a branch of further nested values.
///
/// Rust iterators cannot express "iterable of iterables of unknown depth"
/// the way a dynamic language can, so nesting is made explicit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nested<T> {
    Leaf(T),
    Branch(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Build a branch from leaf values.
    pub fn leaves(items: impl IntoIterator<Item = T>) -> Self {
        Nested::Branch(items.into_iter().map(Nested::Leaf).collect())
    }

    /// Number of leaves at any depth.
    pub fn leaf_count(&self) -> usize {
        match self {
            Nested::Leaf(_) => 1,
            Nested::Branch(children) => children.iter().map(Nested::leaf_count).sum(),
        }
    }

    /// Nesting depth: 0 for a leaf, 1 + deepest child for a branch.
    pub fn depth(&self) -> usize {
        match self {
            Nested::Leaf(_) => 0,
            Nested::Branch(children) => {
                1 + children.iter().map(Nested::depth).max().unwrap_or(0)
            }
        }
    }
}

/// Flatten to leaves in left-to-right order, regardless of depth.
pub fn deep_flatten<T>(nested: Nested<T>) -> Vec<T> {
    let mut out = Vec::new();
    collect_leaves(nested, &mut out);
    out
}

fn collect_leaves<T>(nested: Nested<T>, out: &mut Vec<T>) {
    match nested {
        Nested::Leaf(value) => out.push(value),
        Nested::Branch(children) => {
            for child in children {
                collect_leaves(child, out);
            }
        }
    }
}

/// Flatten at most `depth` levels of branching.
///
/// `depth == 0` returns the input unchanged; leaves pass through at any
/// depth. Remaining structure below the cut-off is preserved.
pub fn flatten_depth<T>(nested: Nested<T>, depth: usize) -> Vec<Nested<T>> {
    match nested {
        Nested::Leaf(value) => vec![Nested::Leaf(value)],
        branch if depth == 0 => vec![branch],
        Nested::Branch(children) => children
            .into_iter()
            .flat_map(|child| flatten_depth(child, depth - 1))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Nested<i32> {
        // [1, [2, [3, 4]], 5]
        Nested::Branch(vec![
            Nested::Leaf(1),
            Nested::Branch(vec![
                Nested::Leaf(2),
                Nested::Branch(vec![Nested::Leaf(3), Nested::Leaf(4)]),
            ]),
            Nested::Leaf(5),
        ])
    }

    #[test]
    fn deep_flatten_preserves_order() {
        assert_eq!(deep_flatten(sample()), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn leaf_count_and_depth() {
        let nested = sample();
        assert_eq!(nested.leaf_count(), 5);
        assert_eq!(nested.depth(), 3);
        assert_eq!(Nested::Leaf(9).depth(), 0);
    }

    #[test]
    fn flatten_depth_zero_is_noop() {
        let nested = sample();
        assert_eq!(flatten_depth(nested.clone(), 0), vec![nested]);
    }

    #[test]
    fn flatten_depth_partial() {
        let once = flatten_depth(sample(), 1);
        assert_eq!(
            once,
            vec![
                Nested::Leaf(1),
                Nested::Branch(vec![
                    Nested::Leaf(2),
                    Nested::Branch(vec![Nested::Leaf(3), Nested::Leaf(4)]),
                ]),
                Nested::Leaf(5),
            ]
        );

        let twice = flatten_depth(sample(), 2);
        assert_eq!(
            twice,
            vec![
                Nested::Leaf(1),
                Nested::Leaf(2),
                Nested::Branch(vec![Nested::Leaf(3), Nested::Leaf(4)]),
                Nested::Leaf(5),
            ]
        );
    }

    #[test]
    fn flatten_depth_beyond_structure() {
        let flat: Vec<_> = flatten_depth(sample(), 10)
            .into_iter()
            .map(|n| match n {
                Nested::Leaf(v) => v,
                Nested::Branch(_) => unreachable!("fully flattened"),
            })
            .collect();
        assert_eq!(flat, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn leaves_builder() {
        assert_eq!(deep_flatten(Nested::leaves(1..=3)), vec![1, 2, 3]);
    }
}
