use tracing::{debug, info};

use crate::{BenchmarkResult, Engine, Job};

/// Runs every job through `engine`, in order.
pub fn run_engine(engine: &dyn Engine, jobs: &[Job]) -> BenchmarkResult {
    let results = jobs
        .iter()
        .enumerate()
        .map(|(i, job)| {
            debug!(
                engine = engine.describe(),
                job = i + 1,
                of = jobs.len(),
                "{}",
                job.description
            );
            let result = engine.execute(job);
            debug!(
                engine = engine.describe(),
                job = i + 1,
                duration_secs = result.duration_secs(),
                memory_required = result.memory_required,
                "job finished"
            );
            result
        })
        .collect();
    BenchmarkResult::new(engine.describe(), results)
}

/// Runs all jobs through each engine in turn.
///
/// Nothing runs concurrently at this level: engines run one after another and
/// each runs its jobs one at a time, so timings stay comparable. The result
/// at `[engine][job]` always refers to `jobs[job]`.
pub fn run_benchmarks(jobs: &[Job], engines: &[Box<dyn Engine>]) -> Vec<BenchmarkResult> {
    engines
        .iter()
        .enumerate()
        .map(|(i, engine)| {
            info!(
                engine = engine.describe(),
                index = i + 1,
                of = engines.len(),
                jobs = jobs.len(),
                "running engine"
            );
            let result = run_engine(engine.as_ref(), jobs);
            info!(
                engine = engine.describe(),
                mean_secs = result.mean_duration(),
                std_secs = result.std_duration(),
                peak_memory = result.peak_memory(),
                "engine finished"
            );
            result
        })
        .collect()
}
