//! Sort by start ascending, then end descending.

use crate::interval::Endpoints;
use crate::order::EndpointOrder;
use std::cmp::Ordering;

/// Compare two intervals by start ascending, breaking ties by end
/// descending, so that at equal starts the longest interval comes first.
#[inline]
pub fn start_then_end_desc<R, O>(a: &R, b: &R, order: &O) -> Ordering
where
    R: Endpoints + ?Sized,
    O: EndpointOrder<R::Value> + ?Sized,
{
    order
        .compare(a.start(), b.start())
        .then_with(|| order.compare(b.end(), a.end()))
}

/// Sort handles with [`start_then_end_desc`].
///
/// The sort is stable: intervals with identical endpoints keep their input
/// order, which decides the duplicate survivor in [`drop_duplicates`].
/// The containment pass relies on the end-descending tie-break.
///
/// [`drop_duplicates`]: super::drop_duplicates
pub fn sort_by_start_then_end_desc<'a, R, O>(
    mut intervals: Vec<&'a mut R>,
    order: &O,
) -> Vec<&'a mut R>
where
    R: Endpoints + ?Sized,
    O: EndpointOrder<R::Value> + ?Sized,
{
    intervals.sort_by(|a, b| start_then_end_desc(&**a, &**b, order));
    intervals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{Natural, Reversed};
    use crate::stages::test_util::{intervals, pairs};

    #[test]
    fn test_sort_start_ascending() {
        let mut ivs = intervals(&[(10, 12), (-5, 0), (0, 1)]);
        let sorted = sort_by_start_then_end_desc(ivs.iter_mut().collect(), &Natural);
        assert_eq!(pairs(&sorted), vec![(-5, 0), (0, 1), (10, 12)]);
    }

    #[test]
    fn test_sort_longer_first_at_equal_start() {
        let mut ivs = intervals(&[(1, 2), (1, 5), (0, 3), (1, 3)]);
        let sorted = sort_by_start_then_end_desc(ivs.iter_mut().collect(), &Natural);
        assert_eq!(pairs(&sorted), vec![(0, 3), (1, 5), (1, 3), (1, 2)]);
    }

    #[test]
    fn test_sort_reversed_order() {
        let mut ivs = intervals(&[(0, -1), (2, 1), (1, 0), (2, -3)]);
        let sorted = sort_by_start_then_end_desc(ivs.iter_mut().collect(), &Reversed(Natural));
        // Under the reversed order "longer" means a smaller end
        assert_eq!(pairs(&sorted), vec![(2, -3), (2, 1), (1, 0), (0, -1)]);
    }
}
