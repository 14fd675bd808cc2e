//! The normalization pipeline.
//!
//! Uses O(n log n) sort + O(n) single-pass sweep. Every stage works on
//! `&mut R` handles, so the result is a subset of the caller's own objects
//! with endpoints adjusted in place.

use crate::config::NormalizeOptions;
use crate::interval::Endpoints;
use crate::order::{EndpointOrder, Natural};
use crate::stages::{self, ClampCounts, SweepCounts};
use std::fmt;

/// Counts of what each pipeline stage kept, dropped or changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeStats {
    pub input: usize,
    /// Empty or inverted on input.
    pub invalid: usize,
    /// Dropped by the clamp window prefilter.
    pub outside_window: usize,
    pub duplicates: usize,
    pub contained: usize,
    pub overlaps_resolved: usize,
    pub gaps_closed: usize,
    /// Trimmed to zero width by the sweep.
    pub degenerate: usize,
    /// Trimmed to the clamp window.
    pub clamped: usize,
    /// Empty after clamping.
    pub clamped_away: usize,
    pub output: usize,
}

impl NormalizeStats {
    /// Total number of input intervals not in the output.
    pub fn dropped(&self) -> usize {
        self.input - self.output
    }
}

impl fmt::Display for NormalizeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in, {} out (invalid={}, outside_window={}, duplicates={}, contained={}, \
             overlaps_resolved={}, gaps_closed={}, degenerate={}, clamped={}, clamped_away={})",
            self.input,
            self.output,
            self.invalid,
            self.outside_window,
            self.duplicates,
            self.contained,
            self.overlaps_resolved,
            self.gaps_closed,
            self.degenerate,
            self.clamped,
            self.clamped_away,
        )
    }
}

/// Normalizes collections of half-open intervals with fixed options.
///
/// The result of [`normalize`](Self::normalize) is sorted by start,
/// pairwise non-overlapping, and free of empty intervals. Every returned
/// handle is one of the input handles; none are created.
///
/// Calls are independent. A call holds exclusive borrows of its intervals,
/// so the same objects cannot be normalized from two places at once.
///
/// # Example
///
/// ```
/// use range_normalizer::{Interval, Normalizer, NormalizeOptions, OverlapPolicy};
///
/// let mut intervals = vec![Interval::new(2, 5), Interval::new(0, 3), Interval::new(1, 2)];
///
/// let normalizer = Normalizer::new(
///     NormalizeOptions::new().with_overlap_policy(OverlapPolicy::KeepRightChunk),
/// );
/// let result = normalizer.normalize(intervals.iter_mut());
///
/// let pairs: Vec<_> = result.iter().map(|iv| (iv.start, iv.end)).collect();
/// assert_eq!(pairs, vec![(0, 2), (2, 5)]);
/// ```
#[derive(Debug, Clone)]
pub struct Normalizer<T, O = Natural> {
    options: NormalizeOptions<T, O>,
}

impl<T> Default for Normalizer<T, Natural> {
    fn default() -> Self {
        Self {
            options: NormalizeOptions::new(),
        }
    }
}

impl<T, O> Normalizer<T, O>
where
    T: Clone,
    O: EndpointOrder<T>,
{
    pub fn new(options: NormalizeOptions<T, O>) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &NormalizeOptions<T, O> {
        &self.options
    }

    /// Normalize the given intervals, mutating the survivors in place.
    ///
    /// Empty, inverted, duplicate and contained intervals are dropped
    /// silently. The returned handles are ordered by start.
    pub fn normalize<'a, R, I>(&self, intervals: I) -> Vec<&'a mut R>
    where
        I: IntoIterator<Item = &'a mut R>,
        R: Endpoints<Value = T> + ?Sized + 'a,
    {
        normalize(intervals, &self.options)
    }

    /// Like [`normalize`](Self::normalize), also returning per-stage counts.
    pub fn normalize_with_stats<'a, R, I>(&self, intervals: I) -> (Vec<&'a mut R>, NormalizeStats)
    where
        I: IntoIterator<Item = &'a mut R>,
        R: Endpoints<Value = T> + ?Sized + 'a,
    {
        normalize_with_stats(intervals, &self.options)
    }
}

/// Normalize `intervals` with `options`. See [`Normalizer::normalize`].
pub fn normalize<'a, R, T, O, I>(intervals: I, options: &NormalizeOptions<T, O>) -> Vec<&'a mut R>
where
    I: IntoIterator<Item = &'a mut R>,
    R: Endpoints<Value = T> + ?Sized + 'a,
    T: Clone,
    O: EndpointOrder<T>,
{
    let (result, stats) = normalize_with_stats(intervals, options);
    log::debug!("normalize: {}", stats);
    result
}

/// Normalize `intervals` with `options`, also returning per-stage counts.
pub fn normalize_with_stats<'a, R, T, O, I>(
    intervals: I,
    options: &NormalizeOptions<T, O>,
) -> (Vec<&'a mut R>, NormalizeStats)
where
    I: IntoIterator<Item = &'a mut R>,
    R: Endpoints<Value = T> + ?Sized + 'a,
    T: Clone,
    O: EndpointOrder<T>,
{
    let order = &options.order;
    let mut stats = NormalizeStats::default();

    let intervals: Vec<&'a mut R> = intervals.into_iter().collect();
    stats.input = intervals.len();

    let mut intervals = stages::drop_invalid(intervals, order);
    stats.invalid = stats.input - intervals.len();
    log::trace!("prefilter: {} valid", intervals.len());

    if let Some(window) = options.prefilter_window() {
        let before = intervals.len();
        intervals = stages::drop_outside_window(intervals, window, order);
        stats.outside_window = before - intervals.len();
        log::trace!("window prefilter: {} inside", intervals.len());
    }

    let intervals = stages::sort_by_start_then_end_desc(intervals, order);

    let before = intervals.len();
    let intervals = stages::drop_duplicates(intervals, order);
    stats.duplicates = before - intervals.len();

    let before = intervals.len();
    let intervals = stages::drop_contained(intervals, order);
    stats.contained = before - intervals.len();
    log::trace!(
        "dedup/containment: {} left ({} duplicates, {} contained)",
        intervals.len(),
        stats.duplicates,
        stats.contained
    );

    let mut sweep = SweepCounts::default();
    let mut intervals = stages::resolve_overlaps_and_gaps(
        intervals,
        order,
        options.gap_policy,
        options.overlap_policy,
        &mut sweep,
    );
    stats.overlaps_resolved = sweep.overlaps_resolved;
    stats.gaps_closed = sweep.gaps_closed;
    stats.degenerate = sweep.degenerate;
    log::trace!("sweep: {} left", intervals.len());

    if let Some(window) = options.clamp.as_ref() {
        let mut clamp = ClampCounts::default();
        intervals = stages::clamp_to_window(intervals, window, order, &mut clamp);
        stats.clamped = clamp.trimmed;
        stats.clamped_away = clamp.dropped;
        log::trace!("clamp: {} left", intervals.len());
    }

    stats.output = intervals.len();
    (intervals, stats)
}
