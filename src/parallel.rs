//! Parallel normalization of independent interval groups using Rayon.
//!
//! Intervals with different keys (a room, a track, a chromosome) never
//! interact, so each group is normalized on its own and groups can run on
//! separate threads. Results are identical to running them one by one.

use crate::config::NormalizeOptions;
use crate::interval::Endpoints;
use crate::normalizer::{normalize, Normalizer};
use crate::order::EndpointOrder;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Minimum number of intervals before enabling parallelization.
/// Below this threshold, sequential processing is faster due to
/// thread spawn overhead.
pub const PARALLEL_THRESHOLD: usize = 10_000;

/// An interval that belongs to a group identified by a key.
pub trait Keyed {
    type Key: Eq + Hash + Ord + Clone;

    fn key(&self) -> &Self::Key;
}

/// Group interval handles by key.
pub fn group_by_key<'a, R, I>(intervals: I) -> FxHashMap<R::Key, Vec<&'a mut R>>
where
    I: IntoIterator<Item = &'a mut R>,
    R: Keyed + ?Sized + 'a,
{
    let mut groups: FxHashMap<R::Key, Vec<&'a mut R>> = FxHashMap::default();

    for interval in intervals {
        groups
            .entry(interval.key().clone())
            .or_default()
            .push(interval);
    }

    groups
}

/// Normalize each partition independently, in parallel for large inputs.
///
/// Partitions must hold disjoint handles, which the borrow checker already
/// guarantees for `&mut` references. Output partition `i` is the result for
/// input partition `i`.
pub fn normalize_partitions<'a, R, T, O>(
    partitions: Vec<Vec<&'a mut R>>,
    options: &NormalizeOptions<T, O>,
) -> Vec<Vec<&'a mut R>>
where
    R: Endpoints<Value = T> + Send + ?Sized + 'a,
    T: Clone + Sync,
    O: EndpointOrder<T> + Sync,
{
    let total: usize = partitions.iter().map(Vec::len).sum();
    let parallel = total >= PARALLEL_THRESHOLD && partitions.len() > 1;
    log::debug!(
        "normalize_partitions: {} partitions, {} intervals, parallel={}",
        partitions.len(),
        total,
        parallel
    );

    if parallel {
        partitions
            .into_par_iter()
            .map(|partition| normalize(partition, options))
            .collect()
    } else {
        partitions
            .into_iter()
            .map(|partition| normalize(partition, options))
            .collect()
    }
}

/// Group intervals by key and normalize every group independently.
///
/// Returns `(key, normalized group)` pairs ordered by key. Groups that
/// normalize to nothing are kept with an empty list.
pub fn normalize_grouped<'a, R, T, O, I>(
    intervals: I,
    options: &NormalizeOptions<T, O>,
) -> Vec<(R::Key, Vec<&'a mut R>)>
where
    I: IntoIterator<Item = &'a mut R>,
    R: Keyed + Endpoints<Value = T> + Send + ?Sized + 'a,
    T: Clone + Sync,
    O: EndpointOrder<T> + Sync,
{
    let mut groups: Vec<(R::Key, Vec<&'a mut R>)> = group_by_key(intervals).into_iter().collect();
    groups.sort_unstable_by(|a, b| a.0.cmp(&b.0));

    let (keys, partitions): (Vec<R::Key>, Vec<Vec<&'a mut R>>) = groups.into_iter().unzip();
    let results = normalize_partitions(partitions, options);

    keys.into_iter().zip(results).collect()
}

impl<T, O> Normalizer<T, O>
where
    T: Clone + Sync,
    O: EndpointOrder<T> + Sync,
{
    /// Group by key and normalize each group. See [`normalize_grouped`].
    pub fn normalize_grouped<'a, R, I>(&self, intervals: I) -> Vec<(R::Key, Vec<&'a mut R>)>
    where
        I: IntoIterator<Item = &'a mut R>,
        R: Keyed + Endpoints<Value = T> + Send + ?Sized + 'a,
    {
        normalize_grouped(intervals, self.options())
    }

    /// Normalize caller-built partitions. See [`normalize_partitions`].
    pub fn normalize_partitions<'a, R>(&self, partitions: Vec<Vec<&'a mut R>>) -> Vec<Vec<&'a mut R>>
    where
        R: Endpoints<Value = T> + Send + ?Sized + 'a,
    {
        normalize_partitions(partitions, self.options())
    }
}
