//! Error types.
//!
//! Normalization itself never fails: malformed input intervals are filtered
//! out. Errors come from parsing policy names and from verifying output.

use thiserror::Error;

/// Errors reported by policy parsing and output verification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("Unknown gap policy: '{0}' (expected none, expand-right or expand-left)")]
    UnknownGapPolicy(String),

    #[error("Unknown overlap policy: '{0}' (expected keep-left-chunk or keep-right-chunk)")]
    UnknownOverlapPolicy(String),

    #[error("Interval {index} is empty or inverted")]
    Degenerate { index: usize },

    #[error("Interval {index} overlaps or precedes interval {}", .index - 1)]
    Overlap { index: usize },

    #[error("Interval {index} extends outside the clamp window")]
    OutsideWindow { index: usize },
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
