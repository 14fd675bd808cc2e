//! Core interval types and the mutable-endpoint capability.
//!
//! All intervals are half-open: `[start, end)` includes `start` and
//! excludes `end`. The normalizer never constructs intervals; it works on
//! `&mut R` handles to caller-owned values implementing [`Endpoints`].

use std::fmt;
use std::ops::Range;

/// Read and write access to the two endpoints of a half-open interval.
///
/// This is the only thing the normalization pipeline knows about an
/// interval. Implement it for your own record type to normalize records in
/// place without copying them into a dedicated interval type.
///
/// # Example
///
/// ```
/// use range_normalizer::Endpoints;
///
/// struct Booking {
///     room: u32,
///     from: u64,
///     until: u64,
/// }
///
/// impl Endpoints for Booking {
///     type Value = u64;
///
///     fn start(&self) -> &u64 {
///         &self.from
///     }
///     fn end(&self) -> &u64 {
///         &self.until
///     }
///     fn set_start(&mut self, value: u64) {
///         self.from = value;
///     }
///     fn set_end(&mut self, value: u64) {
///         self.until = value;
///     }
/// }
/// ```
pub trait Endpoints {
    /// The endpoint type. Ordering is supplied separately, see
    /// [`EndpointOrder`](crate::order::EndpointOrder).
    type Value;

    /// Inclusive lower endpoint.
    fn start(&self) -> &Self::Value;

    /// Exclusive upper endpoint.
    fn end(&self) -> &Self::Value;

    fn set_start(&mut self, value: Self::Value);

    fn set_end(&mut self, value: Self::Value);
}

/// A plain half-open interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Interval<T> {
    pub start: T,
    pub end: T,
}

impl<T> Interval<T> {
    /// Create a new interval.
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        Self { start, end }
    }

    /// Returns the endpoints as a `(start, end)` pair.
    #[inline]
    pub fn into_pair(self) -> (T, T) {
        (self.start, self.end)
    }
}

impl<T: Clone> Interval<T> {
    /// Returns a copy of the endpoints as a `(start, end)` pair.
    #[inline]
    pub fn to_pair(&self) -> (T, T) {
        (self.start.clone(), self.end.clone())
    }
}

impl<T> From<Range<T>> for Interval<T> {
    fn from(range: Range<T>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl<T> From<(T, T)> for Interval<T> {
    fn from((start, end): (T, T)) -> Self {
        Self::new(start, end)
    }
}

impl<T> Endpoints for Interval<T> {
    type Value = T;

    #[inline]
    fn start(&self) -> &T {
        &self.start
    }

    #[inline]
    fn end(&self) -> &T {
        &self.end
    }

    #[inline]
    fn set_start(&mut self, value: T) {
        self.start = value;
    }

    #[inline]
    fn set_end(&mut self, value: T) {
        self.end = value;
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{})", self.start, self.end)
    }
}

impl<T> Endpoints for Range<T> {
    type Value = T;

    #[inline]
    fn start(&self) -> &T {
        &self.start
    }

    #[inline]
    fn end(&self) -> &T {
        &self.end
    }

    #[inline]
    fn set_start(&mut self, value: T) {
        self.start = value;
    }

    #[inline]
    fn set_end(&mut self, value: T) {
        self.end = value;
    }
}
