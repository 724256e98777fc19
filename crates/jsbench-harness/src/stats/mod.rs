//! Statistical analysis of benchmark samples
//!
//! Samples flow through three stages, each producing a new immutable value:
//! warm-up discard ([`selection`]), per-group statistics ([`group`]) and
//! the suite-wide geometric aggregate ([`aggregate`]).
//!
//! # Examples
//!
//! ```
//! use jsbench_harness::stats::{select_retained, GroupStatistics, SuiteAggregate};
//!
//! // Five runs, the first two are warm-up
//! let runs = vec![90.0, 70.0, 40.0, 60.0, 50.0];
//! let retained = select_retained(&runs, 3);
//!
//! let stats = GroupStatistics::from_samples(retained).unwrap();
//! assert_eq!(stats.mean, 50.0);
//!
//! let suite = SuiteAggregate::combine([&stats]).unwrap();
//! assert_eq!(suite.mean, 50.0);
//! ```

pub mod aggregate;
pub mod group;
pub mod selection;
pub mod t_table;

// Re-export main types and functions
pub use aggregate::{geometric_mean, EmptySuite, SuiteAggregate};
pub use group::{GroupStatistics, InsufficientSamples, MIN_SAMPLES};
pub use selection::{retained_window, select_retained, RunRecord, DEFAULT_KEEP_RUNS};
pub use t_table::t_critical;

/// Spread statistics expressed relative to the mean.
pub trait Spread {
    /// Standard deviation as a fraction of the mean
    fn sm(&self) -> f64;

    /// Standard error as a fraction of the mean
    fn semm(&self) -> f64;

    /// Confidence interval as a fraction of the mean
    fn cim(&self) -> f64;

    fn stddev_percent(&self) -> f64 {
        self.sm() * 100.0
    }

    fn sem_percent(&self) -> f64 {
        self.semm() * 100.0
    }

    fn ci_percent(&self) -> f64 {
        self.cim() * 100.0
    }
}

/// `value / mean`, with a zero value mapping to zero even when the mean is
/// zero.
pub(crate) fn ratio(value: f64, mean: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value / mean
    }
}
