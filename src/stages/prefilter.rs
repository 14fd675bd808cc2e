//! Structural validation: drop empty and inverted intervals.

use super::is_non_empty;
use crate::interval::Endpoints;
use crate::order::EndpointOrder;

/// Collect the intervals with `start < end`, silently dropping the rest.
///
/// Inverted (`start > end`) and empty (`start == end`) intervals are not
/// errors; they are simply excluded. Relative order is kept but carries no
/// meaning, the sorter runs later.
pub fn drop_invalid<'a, R, O, I>(intervals: I, order: &O) -> Vec<&'a mut R>
where
    I: IntoIterator<Item = &'a mut R>,
    R: Endpoints + ?Sized + 'a,
    O: EndpointOrder<R::Value> + ?Sized,
{
    intervals
        .into_iter()
        .filter(|iv| is_non_empty(&**iv, order))
        .collect()
}
