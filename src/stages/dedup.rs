//! Drop exact duplicates from a sorted handle list.

use crate::interval::Endpoints;
use crate::order::EndpointOrder;

/// Drop every interval whose `(start, end)` equals the previous kept one.
///
/// Requires sorted input so that duplicates are contiguous. The first
/// handle of each run of duplicates survives.
pub fn drop_duplicates<'a, R, O>(mut sorted: Vec<&'a mut R>, order: &O) -> Vec<&'a mut R>
where
    R: Endpoints + ?Sized,
    O: EndpointOrder<R::Value> + ?Sized,
{
    sorted.dedup_by(|candidate, kept| {
        order.compare(candidate.start(), kept.start()).is_eq()
            && order.compare(candidate.end(), kept.end()).is_eq()
    });
    sorted
}
