//! In-memory collector that replays scripted samples

use async_trait::async_trait;
use jsbench_harness::error::Result;
use jsbench_harness::{HarnessError, SampleCollector, Workload};
use std::collections::HashMap;

/// Replays a fixed sample sequence per (workload, variant) and records
/// every call it receives.
#[derive(Debug, Default)]
pub struct ScriptedCollector {
    samples: HashMap<(String, String), Vec<f64>>,
    /// (workload, variant, run) in the order collect was called
    pub calls: Vec<(String, String, usize)>,
}

impl ScriptedCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the samples returned for runs 0, 1, 2, ... of a pair.
    pub fn with(mut self, workload: &str, variant: &str, samples: impl IntoIterator<Item = f64>) -> Self {
        self.samples.insert(
            (workload.to_string(), variant.to_string()),
            samples.into_iter().collect(),
        );
        self
    }
}

#[async_trait]
impl SampleCollector for ScriptedCollector {
    async fn collect(&mut self, workload: &Workload, variant: &str, run: usize) -> Result<f64> {
        let key = (workload.to_string(), variant.to_string());
        self.calls.push((key.0.clone(), key.1.clone(), run));

        self.samples
            .get(&key)
            .and_then(|samples| samples.get(run))
            .copied()
            .ok_or_else(|| HarnessError::CollectionFailure {
                workload: key.0,
                variant: key.1,
                run,
                reason: "no 'Time: <n>ms' line in output".to_string(),
            })
    }
}
