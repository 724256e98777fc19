//! `jsbench` binary
//!
//! Runs a suite against one engine and prints the report to stdout. Logs
//! go to stderr; set `RUST_LOG` to change the level.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jsbench_harness::{CommandCollector, Config, Reporter, SuiteRunner};

#[derive(Parser, Debug)]
#[command(name = "jsbench")]
#[command(version, about = "Benchmark a JavaScript engine over a workload corpus")]
struct Args {
    /// Engine executable, invoked as `<ENGINE> <workload file>`
    engine: PathBuf,

    /// Runs per workload and variant, warm-up included [default: from suite]
    runs: Option<usize>,

    /// Suite definition (TOML); the built-in JSBench 2013.1 suite if omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Trailing runs kept for statistics [default: from suite]
    #[arg(short, long)]
    keep: Option<usize>,

    /// Directory holding the <corpus>/<case>/<variant>.js files
    #[arg(short = 'r', long)]
    workload_root: Option<PathBuf>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Omit the raw sample listing
    #[arg(long)]
    no_raw: bool,
}

impl Args {
    /// Load the suite and apply command-line overrides.
    fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::builtin()?,
        };

        if let Some(runs) = self.runs {
            config.suite.runs = runs;
        }
        if let Some(keep) = self.keep {
            config.suite.keep_runs = keep;
        }
        if let Some(root) = &self.workload_root {
            config.suite.workload_root = root.clone();
        }

        config.validate().context("Invalid command-line overrides")?;
        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(args).await {
        eprintln!("jsbench: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let config = args.load_config()?;
    let collector = CommandCollector::from_suite(&args.engine, &config.suite);

    let report = SuiteRunner::new(collector).run(&config).await?;

    let reporter = Reporter::new().with_raw_samples(!args.no_raw);
    match &args.output {
        Some(path) => reporter.write_to_file(&report, path)?,
        None => reporter.report(&report)?,
    }

    Ok(())
}
