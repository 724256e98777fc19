//! Benchmark harness for JavaScript engine workloads
//!
//! Runs an engine binary repeatedly over a corpus of recorded workloads,
//! reads the `Time: <n>ms` line each run prints, and summarizes the
//! timings with 95% confidence intervals.
//!
//! # Features
//!
//! - **Warm-up discard**: every run executes, only the trailing `keep_runs`
//!   samples of each (workload, variant) pair are kept
//! - **Per-group statistics**: mean, sample standard deviation, standard
//!   error and a t-distribution confidence interval
//! - **Suite aggregate**: geometric mean across groups, so workloads whose
//!   timings differ by orders of magnitude weigh equally
//! - **Variants**: per-workload execution modes with a wildcard default
//!
//! # Example
//!
//! ```no_run
//! use jsbench_harness::{CommandCollector, Config, Reporter, SuiteRunner};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::from_file("suites/jsbench-2013.1.toml")?;
//!
//! let collector = CommandCollector::from_suite("/usr/local/bin/d8", &config.suite);
//! let report = SuiteRunner::new(collector).run(&config).await?;
//!
//! Reporter::new().report(&report)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! workloads = ["amazon/chrome", "google/firefox"]
//!
//! [suite]
//! name = "Nightly"
//! runs = 25
//! keep_runs = 20
//! workload_root = "/srv/jsbench"
//!
//! [variants]
//! "*" = ["urem"]
//! "google/firefox" = ["uem"]
//! ```

pub mod collector;
pub mod config;
pub mod error;
pub mod reporter;
pub mod runner;
pub mod stats;

// Re-export main types for convenience
pub use collector::{CommandCollector, SampleCollector};
pub use config::{Config, Workload};
pub use error::HarnessError;
pub use reporter::Reporter;
pub use runner::{GroupResult, SuiteReport, SuiteRunner};
