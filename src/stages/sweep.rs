//! Sweep-line resolution of partial overlaps and gaps.
//!
//! Uses a single left-to-right pass over sorted, duplicate-free,
//! containment-free intervals. Each step compares the next interval's start
//! against the current interval's end:
//!
//! - `next.start < current.end`: partial overlap, resolved by [`OverlapPolicy`]
//! - `next.start == current.end`: adjacency, never merged (half-open)
//! - `next.start > current.end`: gap, handled by [`GapPolicy`]
//!
//! Memory: O(1) beyond the output list.

use super::is_non_empty;
use crate::config::{GapPolicy, OverlapPolicy};
use crate::interval::Endpoints;
use crate::order::EndpointOrder;
use std::cmp::Ordering;

/// What the sweep did, for [`NormalizeStats`](crate::NormalizeStats).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepCounts {
    /// Partial overlaps trimmed.
    pub overlaps_resolved: usize,
    /// Gaps closed by expansion.
    pub gaps_closed: usize,
    /// Intervals trimmed to zero width and dropped.
    pub degenerate: usize,
}

/// Resolve overlaps and gaps between consecutive intervals, mutating
/// endpoints in place.
///
/// Requires the output of [`drop_contained`](super::drop_contained).
/// Intervals trimmed down to zero width are dropped.
pub fn resolve_overlaps_and_gaps<'a, R, O>(
    intervals: Vec<&'a mut R>,
    order: &O,
    gap_policy: GapPolicy,
    overlap_policy: OverlapPolicy,
    counts: &mut SweepCounts,
) -> Vec<&'a mut R>
where
    R: Endpoints + ?Sized,
    R::Value: Clone,
    O: EndpointOrder<R::Value> + ?Sized,
{
    let mut result = Vec::with_capacity(intervals.len());
    let mut iter = intervals.into_iter();

    let Some(mut current) = iter.next() else {
        return result;
    };

    for next in iter {
        match order.compare(next.start(), current.end()) {
            Ordering::Less => {
                match overlap_policy {
                    OverlapPolicy::KeepLeftChunk => next.set_start(current.end().clone()),
                    OverlapPolicy::KeepRightChunk => current.set_end(next.start().clone()),
                }
                counts.overlaps_resolved += 1;
            }
            // Touching is not overlapping
            Ordering::Equal => {}
            Ordering::Greater => match gap_policy {
                GapPolicy::None => {}
                GapPolicy::ExpandRight => {
                    current.set_end(next.start().clone());
                    counts.gaps_closed += 1;
                }
                GapPolicy::ExpandLeft => {
                    next.set_start(current.end().clone());
                    counts.gaps_closed += 1;
                }
            },
        }

        emit_if_non_empty(&mut result, current, order, counts);
        current = next;
    }

    emit_if_non_empty(&mut result, current, order, counts);
    result
}

#[inline]
fn emit_if_non_empty<'a, R, O>(
    result: &mut Vec<&'a mut R>,
    interval: &'a mut R,
    order: &O,
    counts: &mut SweepCounts,
) where
    R: Endpoints + ?Sized,
    O: EndpointOrder<R::Value> + ?Sized,
{
    if is_non_empty(interval, order) {
        result.push(interval);
    } else {
        counts.degenerate += 1;
    }
}
