//! Statistics for the retained samples of one (workload, variant) pair.

use thiserror::Error;

use super::t_table::t_critical;
use super::{ratio, Spread};

/// Smallest sample count with a defined sample standard deviation.
pub const MIN_SAMPLES: usize = 2;

/// Returned when a group has too few samples for statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("need at least {required} retained samples, found {found}")]
pub struct InsufficientSamples {
    pub required: usize,
    pub found: usize,
}

/// Mean, spread and 95% confidence interval of a sample set.
///
/// The `sm`, `semm` and `cim` fields are the stddev, standard error and
/// confidence interval expressed as fractions of the mean. They are what
/// makes workloads whose timings differ by orders of magnitude comparable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupStatistics {
    /// Number of samples the statistics were computed from
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1 divisor)
    pub stddev: f64,
    /// Standard error of the mean
    pub sem: f64,
    /// Half-width of the 95% confidence interval
    pub ci: f64,
    pub sm: f64,
    pub semm: f64,
    pub cim: f64,
    /// All samples were identical, so every spread statistic is zero
    pub degenerate: bool,
}

impl GroupStatistics {
    /// Compute statistics over samples in run order.
    ///
    /// # Errors
    ///
    /// Returns [`InsufficientSamples`] for fewer than [`MIN_SAMPLES`]
    /// samples.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsbench_harness::stats::GroupStatistics;
    ///
    /// let stats = GroupStatistics::from_samples(&[40.0, 60.0]).unwrap();
    /// assert_eq!(stats.mean, 50.0);
    /// assert!((stats.sem - 10.0).abs() < 1e-9);
    /// assert!((stats.ci - 127.1).abs() < 1e-9);
    /// ```
    pub fn from_samples(samples: &[f64]) -> Result<Self, InsufficientSamples> {
        let count = samples.len();
        if count < MIN_SAMPLES {
            return Err(InsufficientSamples {
                required: MIN_SAMPLES,
                found: count,
            });
        }

        let n = count as f64;
        let identical = samples
            .windows(2)
            .all(|pair| pair[0].to_bits() == pair[1].to_bits());

        let (mean, stddev) = if identical {
            (samples[0], 0.0)
        } else {
            let mean = samples.iter().sum::<f64>() / n;
            let squared_diffs: f64 = samples.iter().map(|&x| (x - mean).powi(2)).sum();
            (mean, (squared_diffs / (n - 1.0)).sqrt())
        };

        let sem = stddev / n.sqrt();
        let ci = t_critical(count) * sem;

        Ok(Self {
            count,
            mean,
            stddev,
            sem,
            ci,
            sm: ratio(stddev, mean),
            semm: ratio(sem, mean),
            cim: ratio(ci, mean),
            degenerate: stddev == 0.0,
        })
    }
}

impl Spread for GroupStatistics {
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

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_two_samples() {
        let stats = GroupStatistics::from_samples(&[40.0, 60.0]).unwrap();

        assert_eq!(stats.count, 2);
        assert_eq!(stats.mean, 50.0);
        assert!((stats.stddev - 200.0_f64.sqrt()).abs() < EPS);
        assert!((stats.sem - 10.0).abs() < EPS);
        assert!((stats.ci - 127.1).abs() < EPS);
        assert!(!stats.degenerate);
    }

    #[test]
    fn test_normalized_ratios() {
        let stats = GroupStatistics::from_samples(&[40.0, 60.0]).unwrap();

        assert!((stats.sm - stats.stddev / 50.0).abs() < EPS);
        assert!((stats.semm - 0.2).abs() < EPS);
        assert!((stats.cim - 2.542).abs() < EPS);
        assert!((stats.ci_percent() - 254.2).abs() < 1e-6);
    }

    #[test]
    fn test_known_sample_stddev() {
        // Sum of squared deviations is 32 over 7 degrees of freedom
        let samples = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let stats = GroupStatistics::from_samples(&samples).unwrap();

        assert_eq!(stats.mean, 5.0);
        assert!((stats.stddev - (32.0_f64 / 7.0).sqrt()).abs() < EPS);
        assert!((stats.ci - 2.36 * stats.sem).abs() < EPS);
    }

    #[test]
    fn test_identical_samples_are_degenerate() {
        let stats = GroupStatistics::from_samples(&[50.0; 20]).unwrap();

        assert!(stats.degenerate);
        assert_eq!(stats.mean, 50.0);
        assert_eq!(stats.stddev, 0.0);
        assert_eq!(stats.sem, 0.0);
        assert_eq!(stats.ci, 0.0);
        assert_eq!(stats.sm, 0.0);
        assert_eq!(stats.semm, 0.0);
        assert_eq!(stats.cim, 0.0);
    }

    #[test]
    fn test_identical_fractional_samples_keep_exact_mean() {
        let stats = GroupStatistics::from_samples(&[0.1, 0.1, 0.1]).unwrap();

        assert!(stats.degenerate);
        assert_eq!(stats.mean, 0.1);
    }

    #[test]
    fn test_all_zero_samples_have_no_nan() {
        let stats = GroupStatistics::from_samples(&[0.0, 0.0, 0.0]).unwrap();

        assert!(stats.degenerate);
        assert_eq!(stats.sm, 0.0);
        assert_eq!(stats.cim, 0.0);
    }

    #[test]
    fn test_empty_is_insufficient() {
        let err = GroupStatistics::from_samples(&[]).unwrap_err();
        assert_eq!(
            err,
            InsufficientSamples {
                required: 2,
                found: 0
            }
        );
    }

    #[test]
    fn test_single_sample_is_insufficient() {
        let err = GroupStatistics::from_samples(&[42.0]).unwrap_err();
        assert_eq!(err.found, 1);
        assert_eq!(err.to_string(), "need at least 2 retained samples, found 1");
    }

    #[test]
    fn test_large_sample_uses_asymptotic_t() {
        let samples: Vec<f64> = (0..1000).map(|i| 100.0 + (i % 7) as f64).collect();
        let stats = GroupStatistics::from_samples(&samples).unwrap();

        assert!((stats.ci - 1.96 * stats.sem).abs() < EPS);
    }
}
