//! Normalization options.
//!
//! Options are plain values fixed per [`Normalizer`](crate::Normalizer)
//! instance. Policies are closed enums; the only way to get an invalid
//! policy is to parse an unknown name, which fails with a
//! [`NormalizeError`].

use crate::error::NormalizeError;
use crate::order::Natural;
use std::fmt;
use std::str::FromStr;

/// How a gap between two consecutive kept intervals is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GapPolicy {
    /// Leave the gap open.
    #[default]
    None,
    /// Grow the left interval's end up to the right interval's start.
    ExpandRight,
    /// Grow the right interval's start back to the left interval's end.
    ExpandLeft,
}

/// How a partial overlap between two consecutive kept intervals is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OverlapPolicy {
    /// Keep the left interval whole; the right one starts where it ends.
    #[default]
    KeepLeftChunk,
    /// Keep the right interval whole; the left one ends where it starts.
    KeepRightChunk,
}

/// Lowercase and drop separators so "Expand-Right", "expand_right" and
/// "expandright" all compare equal.
fn canonical_name(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for GapPolicy {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match canonical_name(s).as_str() {
            "none" => Ok(GapPolicy::None),
            "expandright" => Ok(GapPolicy::ExpandRight),
            "expandleft" => Ok(GapPolicy::ExpandLeft),
            _ => Err(NormalizeError::UnknownGapPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for GapPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GapPolicy::None => write!(f, "none"),
            GapPolicy::ExpandRight => write!(f, "expand-right"),
            GapPolicy::ExpandLeft => write!(f, "expand-left"),
        }
    }
}

impl FromStr for OverlapPolicy {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match canonical_name(s).as_str() {
            "keepleftchunk" | "keepleft" => Ok(OverlapPolicy::KeepLeftChunk),
            "keeprightchunk" | "keepright" => Ok(OverlapPolicy::KeepRightChunk),
            _ => Err(NormalizeError::UnknownOverlapPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for OverlapPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverlapPolicy::KeepLeftChunk => write!(f, "keep-left-chunk"),
            OverlapPolicy::KeepRightChunk => write!(f, "keep-right-chunk"),
        }
    }
}

/// A half-open window `[min, max)` that bounds the normalized output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClampWindow<T> {
    pub min: T,
    pub max: T,
    /// Drop intervals that cannot intersect the window before sorting.
    /// Only affects cost, never the result, and is ignored while a gap
    /// policy is active. Default: true.
    pub prefilter_outside_window: bool,
}

impl<T> ClampWindow<T> {
    /// Create a window with prefiltering enabled.
    pub fn new(min: T, max: T) -> Self {
        Self {
            min,
            max,
            prefilter_outside_window: true,
        }
    }

    /// Enable or disable the outside-window prefilter.
    pub fn with_prefilter(mut self, enabled: bool) -> Self {
        self.prefilter_outside_window = enabled;
        self
    }
}

/// Options for a normalization run.
///
/// `O` is the endpoint order; it defaults to the value type's own `Ord`.
#[derive(Debug, Clone)]
pub struct NormalizeOptions<T, O = Natural> {
    pub order: O,
    pub gap_policy: GapPolicy,
    pub overlap_policy: OverlapPolicy,
    pub clamp: Option<ClampWindow<T>>,
}

impl<T> Default for NormalizeOptions<T, Natural> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NormalizeOptions<T, Natural> {
    /// Natural order, no gap handling, keep-left-chunk, no clamp window.
    pub fn new() -> Self {
        Self {
            order: Natural,
            gap_policy: GapPolicy::None,
            overlap_policy: OverlapPolicy::KeepLeftChunk,
            clamp: None,
        }
    }
}

impl<T, O> NormalizeOptions<T, O> {
    /// Replace the endpoint order.
    pub fn with_order<O2>(self, order: O2) -> NormalizeOptions<T, O2> {
        NormalizeOptions {
            order,
            gap_policy: self.gap_policy,
            overlap_policy: self.overlap_policy,
            clamp: self.clamp,
        }
    }

    /// Set the gap policy.
    pub fn with_gap_policy(mut self, policy: GapPolicy) -> Self {
        self.gap_policy = policy;
        self
    }

    /// Set the overlap policy.
    pub fn with_overlap_policy(mut self, policy: OverlapPolicy) -> Self {
        self.overlap_policy = policy;
        self
    }

    /// Clamp results to `[min, max)` with prefiltering enabled.
    pub fn with_clamp(self, min: T, max: T) -> Self {
        self.with_clamp_window(ClampWindow::new(min, max))
    }

    pub fn with_clamp_window(mut self, window: ClampWindow<T>) -> Self {
        self.clamp = Some(window);
        self
    }

    /// The window the outside-window prefilter may run against.
    ///
    /// Gap expansion can pull an in-window interval toward an out-of-window
    /// neighbour, so the prefilter only runs under [`GapPolicy::None`].
    pub(crate) fn prefilter_window(&self) -> Option<&ClampWindow<T>> {
        self.clamp
            .as_ref()
            .filter(|window| window.prefilter_outside_window)
            .filter(|_| self.gap_policy == GapPolicy::None)
    }

    /// Keep the clamp window but skip the outside-window prefilter.
    /// No effect without a window.
    pub fn without_window_prefilter(mut self) -> Self {
        if let Some(window) = self.clamp.as_mut() {
            window.prefilter_outside_window = false;
        }
        self
    }
}
