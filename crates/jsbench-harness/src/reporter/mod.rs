//! Suite result reporting
//!
//! Reports are flat text in three sections: the suite aggregate, a
//! per-group breakdown, and the raw retained samples.
//!
//! # Example
//!
//! ```no_run
//! use jsbench_harness::reporter::Reporter;
//! use jsbench_harness::runner::SuiteReport;
//!
//! # fn example(report: SuiteReport) -> anyhow::Result<()> {
//! Reporter::new().report(&report)?;
//!
//! // Or write to a file, without the raw sample listing
//! Reporter::new()
//!     .with_raw_samples(false)
//!     .write_to_file(&report, "results.txt")?;
//! # Ok(())
//! # }
//! ```

mod console;

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::runner::SuiteReport;

pub use console::ConsoleReporter;

/// Reporter for suite results
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    raw_samples: bool,
}

impl Reporter {
    /// Create a reporter that includes the raw sample listing
    pub fn new() -> Self {
        Self { raw_samples: true }
    }

    /// Include or omit the raw retained samples
    pub fn with_raw_samples(mut self, raw_samples: bool) -> Self {
        self.raw_samples = raw_samples;
        self
    }

    /// Report results to stdout
    pub fn report(&self, report: &SuiteReport) -> Result<()> {
        let output = self.format_results(report)?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    /// Write results to a file
    pub fn write_to_file<P: AsRef<Path>>(&self, report: &SuiteReport, path: P) -> Result<()> {
        let path = path.as_ref();
        let output = self.format_results(report)?;
        fs::write(path, output)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Format results as a string
    pub fn format_results(&self, report: &SuiteReport) -> Result<String> {
        ConsoleReporter::format(report, self.raw_samples)
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}
