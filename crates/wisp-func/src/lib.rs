//! Functional composition helpers for wisp.
//!
//! Small combinators over closures: composition, pipelines, predicate
//! negation, constants, and a run-at-most-once thunk.

/// A boxed unary function, the currency of [`compose_all`] and [`pipe`].
pub type Unary<T> = Box<dyn Fn(T) -> T>;

/// The identity function.
pub fn identity<T>() -> impl Fn(T) -> T {
    |value| value
}

/// Right-to-left composition: `compose(f, g)(x)` is `f(g(x))`.
pub fn compose<A, B, C>(f: impl Fn(B) -> C, g: impl Fn(A) -> B) -> impl Fn(A) -> C {
    move |value| f(g(value))
}

/// Fold a sequence of unary functions into one, applied right-to-left.
///
/// An empty sequence yields the identity function.
pub fn compose_all<T: 'static>(funcs: Vec<Unary<T>>) -> Unary<T> {
    Box::new(move |value| funcs.iter().rev().fold(value, |acc, f| f(acc)))
}

/// Thread `value` through `funcs` left-to-right.
///
/// ```
/// use wisp_func::{pipe, Unary};
///
/// let steps: Vec<Unary<i64>> = vec![Box::new(|x| x + 1), Box::new(|x| x * 10)];
/// assert_eq!(pipe(4, &steps), 50);
/// ```
pub fn pipe<T>(value: T, funcs: &[Unary<T>]) -> T {
    funcs.iter().fold(value, |acc, f| f(acc))
}

/// Negate a predicate.
pub fn complement<T, P: Fn(&T) -> bool>(pred: P) -> impl Fn(&T) -> bool {
    move |value| !pred(value)
}

/// A function that ignores its argument and returns a clone of `value`.
pub fn constant<T: Clone, A>(value: T) -> impl Fn(A) -> T {
    move |_| value.clone()
}

/// A thunk that runs at most once, caching its result.
///
/// Subsequent calls to [`Once::get`] return the cached value without
/// re-running the closure.
pub struct Once<T, F = fn() -> T> {
    init: Option<F>,
    value: Option<T>,
}

impl<T, F: FnOnce() -> T> Once<T, F> {
    /// Wrap `init` so it runs at most once.
    pub fn new(init: F) -> Self {
        Self {
            init: Some(init),
            value: None,
        }
    }

    /// Run the thunk if it has not run yet and return the cached result.
    pub fn get(&mut self) -> &T {
        if self.value.is_none() {
            let init = self.init.take().expect("init closure present before first run");
            self.value = Some(init());
        }
        self.value.as_ref().expect("value cached after first run")
    }

    /// Whether the thunk has already run.
    pub fn is_evaluated(&self) -> bool {
        self.value.is_some()
    }

    /// Consume the wrapper, forcing evaluation if needed.
    pub fn into_inner(mut self) -> T {
        self.get();
        self.value.expect("value cached after forced run")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_returns_argument() {
        let id = identity::<i32>();
        assert_eq!(id(7), 7);
    }

    #[test]
    fn compose_applies_right_to_left() {
        let add_then_double = compose(|x: i32| x * 2, |x: i32| x + 1);
        assert_eq!(add_then_double(3), 8);
    }

    #[test]
    fn compose_all_empty_is_identity() {
        let f = compose_all::<i32>(vec![]);
        assert_eq!(f(42), 42);
    }

    #[test]
    fn compose_all_order() {
        // Right-to-left: +1 first, then *10.
        let f = compose_all::<i64>(vec![Box::new(|x| x * 10), Box::new(|x| x + 1)]);
        assert_eq!(f(4), 50);
    }

    #[test]
    fn pipe_applies_left_to_right() {
        let steps: Vec<Unary<String>> = vec![
            Box::new(|s: String| s.to_uppercase()),
            Box::new(|s: String| format!("[{s}]")),
        ];
        assert_eq!(pipe("ok".to_string(), &steps), "[OK]");
    }

    #[test]
    fn complement_negates() {
        let is_even = |x: &i32| x % 2 == 0;
        let is_odd = complement(is_even);
        assert!(is_odd(&3));
        assert!(!is_odd(&4));
    }

    #[test]
    fn constant_ignores_argument() {
        let always = constant::<_, i32>("fixed");
        assert_eq!(always(1), "fixed");
        assert_eq!(always(99), "fixed");
    }

    #[test]
    fn once_runs_exactly_once() {
        let mut calls = 0;
        let mut once = Once::new(|| {
            calls += 1;
            41 + 1
        });
        assert!(!once.is_evaluated());
        assert_eq!(*once.get(), 42);
        assert!(once.is_evaluated());
        assert_eq!(*once.get(), 42);
        drop(once);
        assert_eq!(calls, 1);
    }

    #[test]
    fn once_into_inner_forces() {
        let once = Once::new(|| "lazy".to_string());
        assert_eq!(once.into_inner(), "lazy");
    }
}
