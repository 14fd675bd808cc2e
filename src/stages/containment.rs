//! Single-pass removal of intervals covered by an earlier kept interval.

use crate::interval::Endpoints;
use crate::order::EndpointOrder;

/// Drop every interval fully contained in an earlier kept interval.
///
/// Requires input sorted by start ascending, end descending. Under that
/// order a candidate is contained in some kept interval exactly when its end
/// does not pass the largest kept end. Kept ends strictly increase, so the
/// last kept interval carries that maximum. The first interval is always
/// kept.
pub fn drop_contained<'a, R, O>(sorted: Vec<&'a mut R>, order: &O) -> Vec<&'a mut R>
where
    R: Endpoints + ?Sized,
    O: EndpointOrder<R::Value> + ?Sized,
{
    let mut kept: Vec<&'a mut R> = Vec::with_capacity(sorted.len());

    for candidate in sorted {
        if let Some(last) = kept.last() {
            if order.compare(candidate.end(), last.end()).is_le() {
                continue;
            }
        }
        kept.push(candidate);
    }

    kept
}
