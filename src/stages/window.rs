//! Early exit for intervals that cannot intersect the clamp window.

use crate::config::ClampWindow;
use crate::interval::Endpoints;
use crate::order::EndpointOrder;

/// Drop intervals lying entirely at or beyond either edge of `[min, max)`.
///
/// An interval is dropped when `start >= max` or `end <= min`. Such an
/// interval can only trim neighbours on the far side of the window edge, so
/// with [`GapPolicy::None`](crate::GapPolicy::None) dropping it early gives
/// the same result [`clamp_to_window`](super::clamp_to_window) would.
/// Gap expansion can reach across the edge, so callers must not run this
/// stage when a gap policy is active.
pub fn drop_outside_window<'a, R, O>(
    intervals: Vec<&'a mut R>,
    window: &ClampWindow<R::Value>,
    order: &O,
) -> Vec<&'a mut R>
where
    R: Endpoints + ?Sized,
    O: EndpointOrder<R::Value> + ?Sized,
{
    intervals
        .into_iter()
        .filter(|iv| !is_outside(&**iv, window, order))
        .collect()
}

#[inline]
fn is_outside<R, O>(interval: &R, window: &ClampWindow<R::Value>, order: &O) -> bool
where
    R: Endpoints + ?Sized,
    O: EndpointOrder<R::Value> + ?Sized,
{
    let right_of_window = order.compare(interval.start(), &window.max).is_ge();
    let left_of_window = order.compare(interval.end(), &window.min).is_le();
    right_of_window || left_of_window
}
