//! Total orders over endpoint values.
//!
//! Every comparison the pipeline makes goes through an [`EndpointOrder`],
//! never through the value type's own `Ord`. This lets callers normalize
//! floats, run a descending timeline, or plug in a domain-specific order.

use std::cmp::Ordering;

/// A total order over endpoint values of type `T`.
///
/// Implementations must be a genuine total order (reflexive, antisymmetric,
/// transitive and total). Any `Fn(&T, &T) -> Ordering` closure is an
/// `EndpointOrder`.
pub trait EndpointOrder<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The value type's own `Ord`. This is the default order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord> EndpointOrder<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// IEEE 754 `totalOrder` for floating point endpoints.
///
/// `-0.0` sorts before `+0.0` and NaNs sort at the extremes, so the order
/// stays total even for inputs a `PartialOrd` comparison would reject.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TotalOrder;

impl EndpointOrder<f64> for TotalOrder {
    #[inline]
    fn compare(&self, a: &f64, b: &f64) -> Ordering {
        a.total_cmp(b)
    }
}

impl EndpointOrder<f32> for TotalOrder {
    #[inline]
    fn compare(&self, a: &f32, b: &f32) -> Ordering {
        a.total_cmp(b)
    }
}

/// Reverses another order.
///
/// Under `Reversed(Natural)` an interval runs from a larger start down to a
/// smaller end, e.g. `[5, 1)` is valid and `[1, 5)` is inverted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<O>(pub O);

impl<T, O: EndpointOrder<T>> EndpointOrder<T> for Reversed<O> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

impl<T, F> EndpointOrder<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
