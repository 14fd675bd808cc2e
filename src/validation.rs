//! Output verification.
//!
//! Checks that a handle list satisfies the normalized-output contract:
//! 1. Every interval is non-empty (`start < end`)
//! 2. Consecutive intervals do not overlap (`previous.end <= next.start`)
//!
//! Together these imply the list is sorted by start. Useful in tests and as
//! a debug assertion around code that edits normalized intervals.

use crate::config::ClampWindow;
use crate::error::{NormalizeError, Result};
use crate::interval::Endpoints;
use crate::order::EndpointOrder;

/// Verify that `intervals` is sorted, non-overlapping and non-degenerate.
///
/// Returns the first violation found.
///
/// # Example
///
/// ```
/// use range_normalizer::{normalize, verify_normalized, Interval, NormalizeOptions};
///
/// let mut input = vec![Interval::new(2, 6), Interval::new(0, 4)];
/// let options = NormalizeOptions::new();
/// let result = normalize(input.iter_mut(), &options);
///
/// verify_normalized(&result, &options.order).expect("normalized output");
/// ```
pub fn verify_normalized<R, O>(intervals: &[&mut R], order: &O) -> Result<()>
where
    R: Endpoints + ?Sized,
    O: EndpointOrder<R::Value> + ?Sized,
{
    for (index, interval) in intervals.iter().enumerate() {
        if order.compare(interval.start(), interval.end()).is_ge() {
            return Err(NormalizeError::Degenerate { index });
        }
        if index > 0 {
            let previous = &intervals[index - 1];
            if order.compare(previous.end(), interval.start()).is_gt() {
                return Err(NormalizeError::Overlap { index });
            }
        }
    }

    Ok(())
}

/// Verify that every interval lies inside `[window.min, window.max)`.
pub fn verify_within_window<R, O>(
    intervals: &[&mut R],
    window: &ClampWindow<R::Value>,
    order: &O,
) -> Result<()>
where
    R: Endpoints + ?Sized,
    O: EndpointOrder<R::Value> + ?Sized,
{
    for (index, interval) in intervals.iter().enumerate() {
        let before_min = order.compare(interval.start(), &window.min).is_lt();
        let after_max = order.compare(interval.end(), &window.max).is_gt();
        if before_min || after_max {
            return Err(NormalizeError::OutsideWindow { index });
        }
    }

    Ok(())
}
