//! Benchmark execution orchestration
//!
//! The runner walks the suite in a fixed order: workloads in list order,
//! each workload's variants in table order, runs in ascending index. Runs
//! execute one at a time. Every sample is collected before any statistics
//! are computed, and each stage hands the next an immutable value:
//!
//! ```text
//! Config ──collect──▶ Vec<RunRecord> ──analyze──▶ SuiteReport
//!                                                  ├─ GroupResult (RunRecord + GroupStatistics)
//!                                                  └─ SuiteAggregate
//! ```
//!
//! # Example
//!
//! ```no_run
//! use jsbench_harness::{CommandCollector, Config, SuiteRunner};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::builtin()?;
//! let collector = CommandCollector::from_suite("/usr/local/bin/d8", &config.suite);
//! let report = SuiteRunner::new(collector).run(&config).await?;
//!
//! println!("{:.1}ms over {} groups", report.aggregate.mean, report.aggregate.groups);
//! # Ok(())
//! # }
//! ```

use std::time::Instant;
use tracing::{info, instrument, warn};

use crate::collector::SampleCollector;
use crate::config::{Config, Workload};
use crate::error::{HarnessError, Result};
use crate::stats::{
    retained_window, GroupStatistics, InsufficientSamples, RunRecord, SuiteAggregate, MIN_SAMPLES,
};

/// Results from a complete suite run
#[derive(Debug, Clone)]
pub struct SuiteReport {
    /// Name of the benchmark suite
    pub suite_name: String,
    /// Timestamp when the run started
    pub started_at: String,
    /// Runs executed per group, warm-up included
    pub runs: usize,
    /// Trailing runs kept per group
    pub keep_runs: usize,
    /// Per-group results in evaluation order
    pub groups: Vec<GroupResult>,
    /// Geometric combination of every group
    pub aggregate: SuiteAggregate,
    /// Wall-clock duration of the run in milliseconds
    pub total_duration_ms: u64,
}

/// Retained samples and statistics of one (workload, variant) pair
#[derive(Debug, Clone)]
pub struct GroupResult {
    pub record: RunRecord,
    pub stats: GroupStatistics,
}

impl SuiteReport {
    /// Compute group statistics and the suite aggregate from collected
    /// records.
    ///
    /// # Errors
    ///
    /// Fails on the first record with too few samples, or when there are no
    /// records at all. No partial report is produced.
    pub fn analyze(
        suite_name: impl Into<String>,
        started_at: impl Into<String>,
        runs: usize,
        keep_runs: usize,
        records: Vec<RunRecord>,
    ) -> Result<Self> {
        let groups = records
            .into_iter()
            .map(|record| -> Result<GroupResult> {
                let stats = summarize(&record)?;
                Ok(GroupResult { record, stats })
            })
            .collect::<Result<Vec<_>>>()?;

        let aggregate = SuiteAggregate::combine(groups.iter().map(|g| &g.stats))?;

        let degenerate = groups.iter().filter(|g| g.stats.degenerate).count();
        if degenerate > 0 && aggregate.stddev == 0.0 {
            warn!(
                "aggregate stddev, stderr and ci are 0 because {} of {} groups have zero variance",
                degenerate,
                groups.len()
            );
        }

        Ok(Self {
            suite_name: suite_name.into(),
            started_at: started_at.into(),
            runs,
            keep_runs,
            groups,
            aggregate,
            total_duration_ms: 0,
        })
    }

    /// Groups whose samples were all identical.
    pub fn degenerate_groups(&self) -> impl Iterator<Item = &GroupResult> {
        self.groups.iter().filter(|g| g.stats.degenerate)
    }

    /// Number of degenerate groups when they have zeroed the aggregate
    /// spread, `None` when the aggregate spread is real.
    pub fn zeroed_spread(&self) -> Option<usize> {
        let degenerate = self.degenerate_groups().count();
        (degenerate > 0 && self.aggregate.stddev == 0.0).then_some(degenerate)
    }
}

/// Statistics for one record, with the workload and variant attached to
/// any error.
pub fn summarize(record: &RunRecord) -> Result<GroupStatistics> {
    let stats = GroupStatistics::from_samples(&record.samples).map_err(|source| {
        HarnessError::InsufficientSamples {
            workload: record.workload.to_string(),
            variant: record.variant.clone(),
            source,
        }
    })?;

    if stats.degenerate {
        warn!(
            "stddev is 0 for {} {}: all {} retained samples are identical",
            record.workload, record.variant, stats.count
        );
    }

    Ok(stats)
}

/// Drives a [`SampleCollector`] over every group of a suite.
pub struct SuiteRunner<C> {
    collector: C,
}

impl<C: SampleCollector + Send> SuiteRunner<C> {
    pub fn new(collector: C) -> Self {
        Self { collector }
    }

    /// Give the collector back, e.g. to inspect a scripted one in tests.
    pub fn into_collector(self) -> C {
        self.collector
    }

    /// Run the whole suite and compute its report.
    ///
    /// The first collection failure or group with too few samples aborts
    /// the run.
    #[instrument(skip(self, config), fields(suite = %config.suite.name))]
    pub async fn run(&mut self, config: &Config) -> Result<SuiteReport> {
        config.validate()?;

        let start_time = Instant::now();
        let started_at = chrono::Utc::now().to_rfc3339();
        let runs = config.suite.runs;
        let keep_runs = config.suite.keep_runs;
        let groups = config.groups()?;

        // Too few retained runs fails every group alike, so fail before
        // spawning anything
        let retained = retained_window(runs, keep_runs).len();
        if retained < MIN_SAMPLES {
            if let Some((workload, variant)) = groups.first() {
                return Err(HarnessError::InsufficientSamples {
                    workload: workload.to_string(),
                    variant: variant.to_string(),
                    source: InsufficientSamples {
                        required: MIN_SAMPLES,
                        found: retained,
                    },
                });
            }
        }

        info!(
            "Starting suite '{}': {} groups, {} runs each, keeping the last {}",
            config.suite.name,
            groups.len(),
            runs,
            keep_runs
        );

        let mut records = Vec::with_capacity(groups.len());
        for (workload, variant) in groups {
            records.push(self.collect_group(workload, variant, runs, keep_runs).await?);
        }

        let mut report = SuiteReport::analyze(
            config.suite.name.clone(),
            started_at,
            runs,
            keep_runs,
            records,
        )?;
        report.total_duration_ms = start_time.elapsed().as_millis() as u64;

        info!(
            "Suite '{}' completed in {}ms: {:.3}ms geometric mean",
            report.suite_name, report.total_duration_ms, report.aggregate.mean
        );

        Ok(report)
    }

    /// Execute every run of one group, in order, keeping only samples
    /// from the trailing window.
    async fn collect_group(
        &mut self,
        workload: &Workload,
        variant: &str,
        runs: usize,
        keep_runs: usize,
    ) -> Result<RunRecord> {
        let window = retained_window(runs, keep_runs);
        let mut samples = Vec::with_capacity(window.len());

        for run in 0..runs {
            info!("{} {} {}", workload, variant, run);
            let sample = self.collector.collect(workload, variant, run).await?;

            if !sample.is_finite() || sample < 0.0 {
                return Err(HarnessError::CollectionFailure {
                    workload: workload.to_string(),
                    variant: variant.to_string(),
                    run,
                    reason: format!("sample {} is not a non-negative duration", sample),
                });
            }
            if window.contains(&run) {
                samples.push(sample);
            }
        }

        Ok(RunRecord::from_retained(workload.clone(), variant, runs, samples))
    }
}
