//! Warm-up discard policy for repeated runs.
//!
//! Every run of a (workload, variant) pair is executed, but only the last
//! `keep` runs contribute samples. Earlier runs exist to warm up caches and
//! JIT tiers in the engine under test.

use std::ops::Range;

use crate::config::Workload;

/// Default number of trailing runs retained per (workload, variant) pair.
pub const DEFAULT_KEEP_RUNS: usize = 20;

/// Indices of the runs whose samples are retained.
///
/// The window is the suffix starting at `max(0, total_runs - keep)`. When
/// fewer runs than `keep` were made, every run is retained.
///
/// # Examples
///
/// ```
/// use jsbench_harness::stats::selection::retained_window;
///
/// assert_eq!(retained_window(25, 20), 5..25);
/// assert_eq!(retained_window(2, 20), 0..2);
/// assert!(retained_window(0, 20).is_empty());
/// ```
pub fn retained_window(total_runs: usize, keep: usize) -> Range<usize> {
    total_runs.saturating_sub(keep)..total_runs
}

/// Remove warm-up samples from the beginning, keeping the last `keep`.
///
/// Samples must be in run order. Sorting or shuffling them before calling
/// this changes which samples count as warm-up.
///
/// # Examples
///
/// ```
/// use jsbench_harness::stats::selection::select_retained;
///
/// let data = vec![100.0, 95.0, 10.0, 11.0, 10.5, 11.5]; // first 2 are warm-up
/// assert_eq!(select_retained(&data, 4), &[10.0, 11.0, 10.5, 11.5]);
/// assert_eq!(select_retained(&data, 10), data.as_slice());
/// ```
pub fn select_retained(samples: &[f64], keep: usize) -> &[f64] {
    &samples[retained_window(samples.len(), keep)]
}

/// Retained samples for one (workload, variant) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord {
    pub workload: Workload,
    pub variant: String,
    /// Number of runs executed, warm-up included
    pub total_runs: usize,
    /// Samples of the retained window, in run order
    pub samples: Vec<f64>,
}

impl RunRecord {
    /// Build a record from every run of a pair, dropping the warm-up prefix.
    pub fn from_runs(workload: Workload, variant: impl Into<String>, runs: &[f64], keep: usize) -> Self {
        Self {
            workload,
            variant: variant.into(),
            total_runs: runs.len(),
            samples: select_retained(runs, keep).to_vec(),
        }
    }

    /// Build a record from samples already restricted to the retained
    /// window of `total_runs` runs.
    pub fn from_retained(
        workload: Workload,
        variant: impl Into<String>,
        total_runs: usize,
        samples: Vec<f64>,
    ) -> Self {
        debug_assert!(samples.len() <= total_runs);
        Self {
            workload,
            variant: variant.into(),
            total_runs,
            samples,
        }
    }

    /// Number of warm-up runs whose samples were discarded.
    pub fn discarded(&self) -> usize {
        self.total_runs - self.samples.len()
    }
}
