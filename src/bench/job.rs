use std::time::Duration;

use serde::Serialize;

use crate::World;

/// One simulation task: an initial world and the number of generations to run.
#[derive(Clone, Debug)]
pub struct Job {
    pub initial_state: World,
    pub iterations: usize,
    pub description: String,
}

impl Job {
    pub fn new(initial_state: World, iterations: usize, description: impl Into<String>) -> Self {
        Self {
            initial_state,
            iterations,
            description: description.into(),
        }
    }
}

/// Outcome of running one [`Job`] through one engine.
#[derive(Clone, Debug, Serialize)]
pub struct JobResult {
    #[serde(serialize_with = "crate::output::serialize_secs")]
    pub duration: Duration,
    pub memory_required: usize,
    #[serde(skip)]
    pub final_state: World,
}

impl JobResult {
    pub fn new(duration: Duration, memory_required: usize, final_state: World) -> Self {
        Self {
            duration,
            memory_required,
            final_state,
        }
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration.as_secs_f64()
    }
}

/// All job results of one engine, index-aligned with the job list.
#[derive(Clone, Debug, Serialize)]
pub struct BenchmarkResult {
    pub description: String,
    pub results: Vec<JobResult>,
}

impl BenchmarkResult {
    pub fn new(description: impl Into<String>, results: Vec<JobResult>) -> Self {
        Self {
            description: description.into(),
            results,
        }
    }

    /// Mean job duration in seconds, `0.0` without results.
    pub fn mean_duration(&self) -> f64 {
        if self.results.is_empty() {
            return 0.0;
        }
        let total: f64 = self.results.iter().map(JobResult::duration_secs).sum();
        total / self.results.len() as f64
    }

    /// Population standard deviation of the job durations in seconds.
    pub fn std_duration(&self) -> f64 {
        if self.results.is_empty() {
            return 0.0;
        }
        let mean = self.mean_duration();
        let var = self
            .results
            .iter()
            .map(|r| (r.duration_secs() - mean).powi(2))
            .sum::<f64>()
            / self.results.len() as f64;
        var.sqrt()
    }

    pub fn peak_memory(&self) -> usize {
        self.results
            .iter()
            .map(|r| r.memory_required)
            .max()
            .unwrap_or(0)
    }
}
