//! Small checking predicates and numeric guards for wisp.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

/// Whether the slice is in non-decreasing order.
pub fn is_sorted<T: PartialOrd>(items: &[T]) -> bool {
    is_sorted_by(items, |a, b| a <= b)
}

/// Whether every adjacent pair satisfies `ok(left, right)`.
pub fn is_sorted_by<T>(items: &[T], mut ok: impl FnMut(&T, &T) -> bool) -> bool {
    items.windows(2).all(|pair| ok(&pair[0], &pair[1]))
}

/// Whether no item occurs twice.
pub fn all_unique<T: Eq + Hash>(items: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().all(|item| seen.insert(item))
}

/// Whether the string is empty or whitespace-only.
pub fn is_blank(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}

/// Guard helper: `Ok(())` when the condition holds, a message error otherwise.
pub fn ensure(condition: bool, message: impl fmt::Display) -> anyhow::Result<()> {
    if condition {
        Ok(())
    } else {
        Err(anyhow::anyhow!("{message}"))
    }
}

/// A real number could not be expressed as an integer ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatioError {
    /// NaN or infinite input.
    NotFinite,
    /// The numerator or denominator does not fit the result type.
    OutOfRange,
}

impl fmt::Display for RatioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatioError::NotFinite => write!(f, "value must be finite to form a ratio"),
            RatioError::OutOfRange => write!(f, "ratio components out of range"),
        }
    }
}

impl std::error::Error for RatioError {}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.max(1)
}

/// Numerator and denominator, in lowest terms, for a finite real.
///
/// Works from the shortest decimal rendering of the value, so the ratio
/// reflects the number as printed rather than its exact binary expansion:
///
/// ```
/// use wisp_check::as_ratio;
///
/// assert_eq!(as_ratio(0.25), Ok((1, 4)));
/// assert_eq!(as_ratio(-2.5), Ok((-5, 2)));
/// assert_eq!(as_ratio(3.0), Ok((3, 1)));
/// ```
pub fn as_ratio(value: f64) -> Result<(i64, u64), RatioError> {
    if !value.is_finite() {
        return Err(RatioError::NotFinite);
    }
    let rendered = format!("{value}");
    let (digits, fraction_len) = match rendered.split_once('.') {
        Some((whole, fraction)) => (format!("{whole}{fraction}"), fraction.len() as u32),
        None => (rendered, 0),
    };
    let numerator: i64 = digits.parse().map_err(|_| RatioError::OutOfRange)?;
    let denominator: u64 = 10u64
        .checked_pow(fraction_len)
        .ok_or(RatioError::OutOfRange)?;
    let divisor = gcd(numerator.unsigned_abs(), denominator);
    Ok((numerator / divisor as i64, denominator / divisor))
}
