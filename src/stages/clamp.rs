//! Trim the swept intervals to the clamp window.

use super::is_non_empty;
use crate::config::ClampWindow;
use crate::interval::Endpoints;
use crate::order::EndpointOrder;

/// Outcome counts of [`clamp_to_window`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClampCounts {
    /// Intervals with at least one endpoint moved to the window edge.
    pub trimmed: usize,
    /// Intervals empty or inverted after trimming, dropped.
    pub dropped: usize,
}

/// Trim every interval to `[min, max)` and drop the ones left empty.
///
/// Runs after the sweep, so overlap and gap resolution see the original
/// geometry. An interval that trims to nothing is dropped from the result,
/// but its endpoints have already been written.
pub fn clamp_to_window<'a, R, O>(
    intervals: Vec<&'a mut R>,
    window: &ClampWindow<R::Value>,
    order: &O,
    counts: &mut ClampCounts,
) -> Vec<&'a mut R>
where
    R: Endpoints + ?Sized,
    R::Value: Clone,
    O: EndpointOrder<R::Value> + ?Sized,
{
    let mut result = Vec::with_capacity(intervals.len());

    for interval in intervals {
        let mut trimmed = false;
        if order.compare(interval.start(), &window.min).is_lt() {
            interval.set_start(window.min.clone());
            trimmed = true;
        }
        if order.compare(interval.end(), &window.max).is_gt() {
            interval.set_end(window.max.clone());
            trimmed = true;
        }
        if trimmed {
            counts.trimmed += 1;
        }

        if is_non_empty(&*interval, order) {
            result.push(interval);
        } else {
            counts.dropped += 1;
        }
    }

    result
}
