//! Console reporter for suite results
//!
//! Plain text, six decimal places, one block per section.

use anyhow::Result;
use std::fmt::Write;

use crate::config::Workload;
use crate::runner::{GroupResult, SuiteReport};
use crate::stats::Spread;

/// Console format reporter
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Format a suite report for console output
    pub fn format(report: &SuiteReport, raw_samples: bool) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "Suite:     {}", report.suite_name)?;
        writeln!(output, "Started:   {}", report.started_at)?;
        writeln!(output, "Duration:  {}ms", report.total_duration_ms)?;
        writeln!(
            output,
            "Runs:      {} per group, last {} kept",
            report.runs, report.keep_runs
        )?;
        writeln!(output)?;

        let aggregate = &report.aggregate;
        writeln!(output, "Final results:")?;
        writeln!(
            output,
            "  {:.6}ms +- {:.6}% (lower is better)",
            aggregate.mean,
            aggregate.ci_percent()
        )?;
        writeln!(output, "  Standard deviation = {:.6}% of mean", aggregate.stddev_percent())?;
        writeln!(output, "  Standard error = {:.6}% of mean", aggregate.sem_percent())?;
        writeln!(output, "  {} runs", report.runs)?;
        if let Some(degenerate) = report.zeroed_spread() {
            writeln!(
                output,
                "  Spread is 0 because {} of {} groups have zero variance",
                degenerate,
                report.groups.len()
            )?;
        }
        writeln!(output)?;

        writeln!(output, "Result breakdown:")?;
        Self::for_each_workload(&mut output, &report.groups, |output, group| {
            Self::format_group(output, group)
        })?;
        writeln!(output)?;

        if raw_samples {
            writeln!(output, "Raw results:")?;
            Self::for_each_workload(&mut output, &report.groups, |output, group| {
                writeln!(output, "    {}: {:?}", group.record.variant, group.record.samples)?;
                Ok(())
            })?;
        }

        Ok(output)
    }

    fn format_group(output: &mut String, group: &GroupResult) -> Result<()> {
        let stats = &group.stats;
        write!(
            output,
            "    {}: {:.6}ms +- {:.6}% (stddev={:.6}%, stderr={:.6}%)",
            group.record.variant,
            stats.mean,
            stats.ci_percent(),
            stats.stddev_percent(),
            stats.sem_percent()
        )?;
        if stats.degenerate {
            write!(output, " [zero variance]")?;
        }
        writeln!(output)?;
        Ok(())
    }

    /// Write a `<workload>:` header before each run of groups sharing a
    /// workload, then one line per group.
    fn for_each_workload<F>(output: &mut String, groups: &[GroupResult], mut line: F) -> Result<()>
    where
        F: FnMut(&mut String, &GroupResult) -> Result<()>,
    {
        let mut current: Option<&Workload> = None;
        for group in groups {
            if current != Some(&group.record.workload) {
                writeln!(output, "  {}:", group.record.workload)?;
                current = Some(&group.record.workload);
            }
            line(output, group)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::RunRecord;
    use pretty_assertions::assert_eq;

    fn create_test_report() -> SuiteReport {
        let records = vec![
            RunRecord::from_runs("amazon/chrome".parse().unwrap(), "urem", &[40.0, 60.0], 20),
            RunRecord::from_runs("amazon/chrome".parse().unwrap(), "uem", &[50.0, 50.0], 20),
            RunRecord::from_runs("google/firefox".parse().unwrap(), "uem", &[40.0, 60.0], 20),
        ];
        let mut report =
            SuiteReport::analyze("Test Suite", "2024-01-01T00:00:00Z", 2, 20, records).unwrap();
        report.total_duration_ms = 1500;
        report
    }

    #[test]
    fn test_console_format_layout() {
        let output = ConsoleReporter::format(&create_test_report(), true).unwrap();

        let expected = "\
Suite:     Test Suite
Started:   2024-01-01T00:00:00Z
Duration:  1500ms
Runs:      2 per group, last 20 kept

Final results:
  50.000000ms +- 0.000000% (lower is better)
  Standard deviation = 0.000000% of mean
  Standard error = 0.000000% of mean
  2 runs
  Spread is 0 because 1 of 3 groups have zero variance

Result breakdown:
  amazon/chrome:
    urem: 50.000000ms +- 254.200000% (stddev=28.284271%, stderr=20.000000%)
    uem: 50.000000ms +- 0.000000% (stddev=0.000000%, stderr=0.000000%) [zero variance]
  google/firefox:
    uem: 50.000000ms +- 254.200000% (stddev=28.284271%, stderr=20.000000%)

Raw results:
  amazon/chrome:
    urem: [40.0, 60.0]
    uem: [50.0, 50.0]
  google/firefox:
    uem: [40.0, 60.0]
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_console_format_without_raw() {
        let output = ConsoleReporter::format(&create_test_report(), false).unwrap();

        assert!(output.ends_with("[zero variance]\n  google/firefox:\n    uem: 50.000000ms +- 254.200000% (stddev=28.284271%, stderr=20.000000%)\n\n"));
        assert!(!output.contains("Raw results:"));
    }

    #[test]
    fn test_console_format_aggregate_spread() {
        let records = vec![
            RunRecord::from_runs("amazon/chrome".parse().unwrap(), "urem", &[40.0, 60.0], 20),
            RunRecord::from_runs("google/firefox".parse().unwrap(), "uem", &[400.0, 600.0], 20),
        ];
        let report = SuiteReport::analyze("Spread", "now", 2, 20, records).unwrap();
        let output = ConsoleReporter::format(&report, false).unwrap();

        assert!(output.contains("  158.113883ms +- 254.200000% (lower is better)\n"));
        assert!(output.contains("  Standard error = 20.000000% of mean\n"));
        assert!(!output.contains("Spread is 0"));
    }
}
