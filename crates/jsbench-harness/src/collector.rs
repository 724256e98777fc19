//! Sample collection
//!
//! A collector produces one timing sample per run of a (workload, variant)
//! pair. [`CommandCollector`] runs an engine binary on the workload file and
//! reads the `Time: <n>ms` line it prints; tests substitute their own
//! [`SampleCollector`] to drive the runner without spawning processes.

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, instrument, warn};

use crate::config::{SuiteConfig, Workload};
use crate::error::{HarnessError, Result};

lazy_static! {
    /// Timing line printed by the workload scripts. The digits may be
    /// missing; an empty first match is an unparseable sample.
    static ref TIMING_PATTERN: Regex = Regex::new(r"Time: ([0-9]*)ms").unwrap();
}

/// Extract the sample from the first `Time: <n>ms` in `output`.
///
/// Only the first match counts: if it carries no digits the output is
/// unparseable, even when a later line is well formed.
///
/// # Examples
///
/// ```
/// use jsbench_harness::collector::parse_timing;
///
/// assert_eq!(parse_timing("warming up\nTime: 1234ms\n"), Some(1234.0));
/// assert_eq!(parse_timing("Time: ms"), None);
/// ```
pub fn parse_timing(output: &str) -> Option<f64> {
    TIMING_PATTERN
        .captures(output)
        .and_then(|caps| caps[1].parse::<f64>().ok())
}

/// Source of timing samples.
#[async_trait]
pub trait SampleCollector {
    /// Execute run number `run` of `workload` under `variant` and return its
    /// duration in milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::CollectionFailure`] when no sample can be
    /// produced. The caller treats this as fatal.
    async fn collect(&mut self, workload: &Workload, variant: &str, run: usize) -> Result<f64>;
}

/// Runs `<engine> <root>/<corpus>/<case>/<variant>.<ext>` for every sample.
#[derive(Debug, Clone)]
pub struct CommandCollector {
    engine: PathBuf,
    workload_root: PathBuf,
    extension: String,
}

impl CommandCollector {
    pub fn new(
        engine: impl Into<PathBuf>,
        workload_root: impl Into<PathBuf>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            engine: engine.into(),
            workload_root: workload_root.into(),
            extension: extension.into(),
        }
    }

    /// Collector for `engine` using the suite's workload root and extension.
    pub fn from_suite(engine: impl Into<PathBuf>, suite: &SuiteConfig) -> Self {
        Self::new(engine, &suite.workload_root, &suite.extension)
    }

    pub fn engine(&self) -> &Path {
        &self.engine
    }
}

#[async_trait]
impl SampleCollector for CommandCollector {
    #[instrument(skip(self, workload), fields(workload = %workload))]
    async fn collect(&mut self, workload: &Workload, variant: &str, run: usize) -> Result<f64> {
        let failure = |reason: String| HarnessError::CollectionFailure {
            workload: workload.to_string(),
            variant: variant.to_string(),
            run,
            reason,
        };

        let script = workload.script_path(&self.workload_root, variant, &self.extension);
        let output = Command::new(&self.engine)
            .arg(&script)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .await
            .map_err(|e| failure(format!("failed to run {}: {}", self.engine.display(), e)))?;

        if !output.status.success() {
            warn!(
                "{} exited with {} on {}",
                self.engine.display(),
                output.status,
                script.display()
            );
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let sample = parse_timing(&stdout).ok_or_else(|| {
            failure(format!(
                "no parseable 'Time: <n>ms' line in {} bytes of output from {}",
                output.stdout.len(),
                script.display()
            ))
        })?;

        debug!(sample, "collected sample");
        Ok(sample)
    }
}
