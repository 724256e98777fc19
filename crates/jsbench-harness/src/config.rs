//! Configuration parsing for benchmark suites
//!
//! A suite is an ordered list of workloads, a table mapping workloads to
//! the variants they run under, and run counts. Suites are described in
//! TOML; the JSBench 2013.1 suite ships with the crate and is available
//! through [`Config::builtin`].

use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::HarnessError;
use crate::stats::DEFAULT_KEEP_RUNS;

/// Key in the variant table that applies to every workload without an
/// override.
pub const WILDCARD: &str = "*";

const BUILTIN_SUITE: &str = include_str!("../suites/jsbench-2013.1.toml");

/// Main configuration structure loaded from TOML files
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Workloads to run, in order
    pub workloads: Vec<Workload>,
    /// Suite-level settings
    #[serde(default)]
    pub suite: SuiteConfig,
    /// Variants per workload
    pub variants: VariantTable,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML is malformed
    /// - Required fields are missing
    /// - The suite fails [`Config::validate`]
    ///
    /// # Example
    ///
    /// ```no_run
    /// use jsbench_harness::config::Config;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = Config::from_file("suites/jsbench-2013.1.toml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("Invalid suite definition in {}", path.display()))
    }

    /// Parse configuration from a TOML string
    ///
    /// # Example
    ///
    /// ```
    /// use jsbench_harness::config::Config;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let toml = r#"
    ///     workloads = ["amazon/chrome", "google/firefox"]
    ///
    ///     [variants]
    ///     "*" = ["urem"]
    ///     "google/firefox" = ["uem"]
    /// "#;
    /// let config = Config::from_str(toml)?;
    /// assert_eq!(config.variants_for(&config.workloads[1])?, ["uem"]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(s).context("Failed to parse TOML configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// The JSBench 2013.1 suite embedded in the crate.
    pub fn builtin() -> anyhow::Result<Self> {
        Self::from_str(BUILTIN_SUITE).context("Built-in suite definition is invalid")
    }

    /// Check the suite can run before any process is spawned.
    ///
    /// Every workload must resolve to a non-empty variant list, the
    /// workload list must not be empty, and at least one run must be kept.
    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.workloads.is_empty() {
            return Err(HarnessError::Config("suite lists no workloads".into()));
        }
        if self.suite.keep_runs == 0 {
            return Err(HarnessError::Config("keep_runs must be at least 1".into()));
        }
        for (key, variants) in self.variants.entries() {
            if variants.is_empty() {
                return Err(HarnessError::Config(format!(
                    "variant list for '{}' is empty",
                    key
                )));
            }
        }
        for workload in &self.workloads {
            self.variants_for(workload)?;
        }
        Ok(())
    }

    /// Variants to run for `workload`.
    pub fn variants_for(&self, workload: &Workload) -> Result<&[String], HarnessError> {
        self.variants
            .lookup(&workload.to_string())
            .ok_or_else(|| HarnessError::Config(format!("no variants configured for {}", workload)))
    }

    /// Every (workload, variant) pair in evaluation order.
    pub fn groups(&self) -> Result<Vec<(&Workload, &str)>, HarnessError> {
        let mut groups = Vec::new();
        for workload in &self.workloads {
            for variant in self.variants_for(workload)? {
                groups.push((workload, variant.as_str()));
            }
        }
        Ok(groups)
    }
}

/// Suite-level settings
#[derive(Debug, Clone, Deserialize)]
pub struct SuiteConfig {
    /// Name shown in the report header
    #[serde(default = "default_name")]
    pub name: String,
    /// Runs per (workload, variant) pair, warm-up included (default: 25)
    #[serde(default = "default_runs")]
    pub runs: usize,
    /// Trailing runs whose samples are kept (default: 20)
    #[serde(default = "default_keep_runs")]
    pub keep_runs: usize,
    /// Directory containing the `<corpus>/<case>/<variant>.<ext>` files
    #[serde(default = "default_workload_root")]
    pub workload_root: PathBuf,
    /// Extension of the workload files (default: "js")
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            runs: default_runs(),
            keep_runs: default_keep_runs(),
            workload_root: default_workload_root(),
            extension: default_extension(),
        }
    }
}

fn default_name() -> String {
    "benchmark suite".to_string()
}

fn default_runs() -> usize {
    25
}

fn default_keep_runs() -> usize {
    DEFAULT_KEEP_RUNS
}

fn default_workload_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_extension() -> String {
    "js".to_string()
}

/// A benchmark case: a corpus (site) and a sub-case (recorded browser).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub struct Workload {
    pub corpus: String,
    pub case: String,
}

impl Workload {
    /// Path of the file to run for `variant`, relative to `root`.
    pub fn script_path(&self, root: &Path, variant: &str, extension: &str) -> PathBuf {
        root.join(&self.corpus)
            .join(&self.case)
            .join(format!("{}.{}", variant, extension))
    }
}

impl fmt::Display for Workload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.corpus, self.case)
    }
}

impl FromStr for Workload {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((corpus, case)) if !corpus.is_empty() && !case.is_empty() && !case.contains('/') => {
                Ok(Self {
                    corpus: corpus.to_string(),
                    case: case.to_string(),
                })
            }
            _ => Err(HarnessError::Config(format!(
                "workload '{}' is not of the form <corpus>/<case>",
                s
            ))),
        }
    }
}

impl TryFrom<String> for Workload {
    type Error = HarnessError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Variant lists keyed by workload, with a [`WILDCARD`] default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct VariantTable(BTreeMap<String, Vec<String>>);

impl VariantTable {
    /// Table with only a wildcard entry.
    pub fn with_default<I, S>(variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::default();
        table.set(WILDCARD, variants);
        table
    }

    /// Insert or replace the variant list for `key`.
    pub fn set<I, S>(&mut self, key: impl Into<String>, variants: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0
            .insert(key.into(), variants.into_iter().map(Into::into).collect());
    }

    /// Two-tier lookup: the entry for `key` if present, else the wildcard.
    pub fn lookup(&self, key: &str) -> Option<&[String]> {
        self.0
            .get(key)
            .or_else(|| self.0.get(WILDCARD))
            .map(Vec::as_slice)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}
