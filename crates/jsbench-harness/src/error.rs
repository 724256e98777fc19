use thiserror::Error;

use crate::stats::{EmptySuite, InsufficientSamples};

/// Fatal conditions that abort a suite run.
#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("Collection failed for {workload} {variant} run {run}: {reason}")]
    CollectionFailure {
        workload: String,
        variant: String,
        run: usize,
        reason: String,
    },

    #[error("Insufficient samples for {workload} {variant}: {source}")]
    InsufficientSamples {
        workload: String,
        variant: String,
        #[source]
        source: InsufficientSamples,
    },

    #[error(transparent)]
    EmptySuite(#[from] EmptySuite),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, HarnessError>;
