// Clippy allows for the whole crate
#![allow(clippy::type_complexity)]

//! Range normalization for half-open intervals.
//!
//! This library turns an arbitrary collection of `[start, end)` intervals
//! into a sorted, non-overlapping, non-empty sequence. It works on the
//! caller's own objects: the result is a subset of the input handles, with
//! endpoints trimmed or expanded in place. No interval is ever constructed.
//!
//! # Pipeline
//!
//! 1. Drop empty and inverted intervals
//! 2. Drop intervals outside the clamp window (optional early exit)
//! 3. Sort by start ascending, end descending
//! 4. Drop exact duplicates
//! 5. Drop intervals contained in an earlier one
//! 6. Sweep: resolve partial overlaps ([`OverlapPolicy`]) and gaps ([`GapPolicy`])
//! 7. Clamp to the window and drop what becomes empty
//!
//! Touching intervals (`[1,3)` and `[3,5)`) are never merged.
//!
//! # Features
//!
//! - **Any endpoint type**: comparisons go through an injected
//!   [`EndpointOrder`], so floats, reversed timelines and custom orders work
//! - **Any interval type**: implement [`Endpoints`] for your own records
//! - **Parallel groups**: normalize keyed groups on Rayon's thread pool
//!
//! # Example
//!
//! ```rust
//! use range_normalizer::{GapPolicy, Interval, NormalizeOptions, Normalizer};
//!
//! let mut intervals = vec![
//!     Interval::new(5, 7),
//!     Interval::new(0, 2),
//!     Interval::new(1, 2), // contained in [0,2)
//! ];
//!
//! let normalizer = Normalizer::new(NormalizeOptions::new().with_gap_policy(GapPolicy::ExpandRight));
//! let result = normalizer.normalize(intervals.iter_mut());
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!((result[0].start, result[0].end), (0, 5));
//! assert_eq!((result[1].start, result[1].end), (5, 7));
//! ```

pub mod config;
pub mod error;
pub mod interval;
pub mod normalizer;
pub mod order;
pub mod parallel;
pub mod stages;
pub mod validation;

// Re-export commonly used types
pub use config::{ClampWindow, GapPolicy, NormalizeOptions, OverlapPolicy};
pub use error::NormalizeError;
pub use interval::{Endpoints, Interval};
pub use normalizer::{normalize, normalize_with_stats, NormalizeStats, Normalizer};
pub use order::{EndpointOrder, Natural, Reversed, TotalOrder};
pub use parallel::{group_by_key, normalize_grouped, normalize_partitions, Keyed};
pub use validation::{verify_normalized, verify_within_window};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::{ClampWindow, GapPolicy, NormalizeOptions, OverlapPolicy};
    pub use crate::interval::{Endpoints, Interval};
    pub use crate::normalizer::{normalize, NormalizeStats, Normalizer};
    pub use crate::order::{EndpointOrder, Natural, Reversed, TotalOrder};
    pub use crate::parallel::Keyed;
}
