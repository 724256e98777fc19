//! Suite-wide aggregation of per-group statistics.
//!
//! Workload timings span orders of magnitude, so an arithmetic mean would
//! be dominated by the slowest workload. Each absolute statistic is instead
//! combined with a geometric mean across all groups. The ratios to the mean
//! are then derived once from the combined values; they are not themselves
//! combined from the per-group ratios.

use thiserror::Error;

use super::{ratio, GroupStatistics, Spread};

/// Returned when there are no groups to aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("suite produced no (workload, variant) groups to aggregate")]
pub struct EmptySuite;

/// Geometric mean of `values`, computed as the product of each value raised
/// to `1 / len`.
///
/// Returns `None` for an empty slice. Any zero value makes the result zero.
///
/// # Examples
///
/// ```
/// use jsbench_harness::stats::aggregate::geometric_mean;
///
/// let g = geometric_mean(&[10.0, 100.0, 1000.0]).unwrap();
/// assert!((g - 100.0).abs() < 1e-9);
/// ```
pub fn geometric_mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let power = 1.0 / values.len() as f64;
    Some(values.iter().fold(1.0, |acc, v| acc * v.powf(power)))
}

/// Geometric combination of every group in a suite run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuiteAggregate {
    /// Number of (workload, variant) groups combined
    pub groups: usize,
    pub mean: f64,
    pub stddev: f64,
    pub sem: f64,
    pub ci: f64,
    pub sm: f64,
    pub semm: f64,
    pub cim: f64,
}

impl SuiteAggregate {
    /// Combine group statistics.
    ///
    /// # Errors
    ///
    /// Returns [`EmptySuite`] when `groups` yields nothing.
    pub fn combine<'a, I>(groups: I) -> Result<Self, EmptySuite>
    where
        I: IntoIterator<Item = &'a GroupStatistics>,
    {
        let groups: Vec<&GroupStatistics> = groups.into_iter().collect();
        let combined = |field: fn(&GroupStatistics) -> f64| {
            let values: Vec<f64> = groups.iter().map(|&g| field(g)).collect();
            geometric_mean(&values).ok_or(EmptySuite)
        };

        let mean = combined(|g| g.mean)?;
        let stddev = combined(|g| g.stddev)?;
        let sem = combined(|g| g.sem)?;
        let ci = combined(|g| g.ci)?;

        Ok(Self {
            groups: groups.len(),
            mean,
            stddev,
            sem,
            ci,
            sm: ratio(stddev, mean),
            semm: ratio(sem, mean),
            cim: ratio(ci, mean),
        })
    }
}

impl Spread for SuiteAggregate {
    fn sm(&self) -> f64 {
        self.sm
    }

    fn semm(&self) -> f64 {
        self.semm
    }

    fn cim(&self) -> f64 {
        self.cim
    }
}
