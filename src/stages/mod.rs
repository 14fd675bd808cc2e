//! Normalization pipeline stages.
//!
//! Each stage consumes the handles produced by the previous one and returns
//! the survivors. Stages never construct intervals; only [`sweep`] and
//! [`clamp`] write endpoints.
//!
//! Stage order:
//! 1. [`prefilter`]: drop empty and inverted intervals
//! 2. [`window`]: drop intervals that cannot intersect the clamp window
//! 3. [`sort`]: start ascending, end descending
//! 4. [`dedup`]: drop exact duplicates
//! 5. [`containment`]: drop intervals covered by an earlier one
//! 6. [`sweep`]: resolve partial overlaps and gaps
//! 7. [`clamp`]: trim to the clamp window

pub mod clamp;
pub mod containment;
pub mod dedup;
pub mod prefilter;
pub mod sort;
pub mod sweep;
pub mod window;

pub use clamp::{clamp_to_window, ClampCounts};
pub use containment::drop_contained;
pub use dedup::drop_duplicates;
pub use prefilter::drop_invalid;
pub use sort::sort_by_start_then_end_desc;
pub use sweep::{resolve_overlaps_and_gaps, SweepCounts};
pub use window::drop_outside_window;

use crate::interval::Endpoints;
use crate::order::EndpointOrder;

/// True if `start < end` under `order`.
#[inline]
pub(crate) fn is_non_empty<R, O>(interval: &R, order: &O) -> bool
where
    R: Endpoints + ?Sized,
    O: EndpointOrder<R::Value> + ?Sized,
{
    order.compare(interval.start(), interval.end()).is_lt()
}
