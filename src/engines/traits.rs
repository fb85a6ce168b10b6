use crate::{BenchError, Job, JobResult};

use super::{ParallelEngine, SequentialEngine, ThreadedEngine};

/// Execution strategy for the Life update rule.
///
/// Every implementation must produce, for the same [`Job`], a final state
/// identical to every other implementation's.
pub trait Engine: Send + Sync {
    /// Runs `job.iterations` generations starting from `job.initial_state`.
    ///
    /// The job is left untouched; the returned [`JobResult`] owns its own
    /// snapshot of the final world. With zero iterations the final state equals
    /// the initial one.
    fn execute(&self, job: &Job) -> JobResult;

    /// Human-readable label reported alongside the results.
    fn describe(&self) -> &'static str;
}

/// Registered execution strategies, in registration order.
///
/// Adding a strategy means adding a variant here and a type implementing
/// [`Engine`]; existing engines are unaffected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum EngineKind {
    /// Single-threaded reference implementation.
    Sequential,
    /// Per-row tasks on a rayon thread pool.
    Parallel,
    /// Row bands on scoped OS threads.
    Threaded,
}

impl EngineKind {
    pub fn all() -> Vec<EngineKind> {
        vec![
            EngineKind::Sequential,
            EngineKind::Parallel,
            EngineKind::Threaded,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            EngineKind::Sequential => "sequential",
            EngineKind::Parallel => "parallel",
            EngineKind::Threaded => "threaded",
        }
    }

    /// Builds the engine. `threads == 0` lets the engine pick its own
    /// degree of parallelism; the sequential engine ignores it.
    pub fn build(self, threads: usize) -> Result<Box<dyn Engine>, BenchError> {
        let engine: Box<dyn Engine> = match self {
            EngineKind::Sequential => Box::new(SequentialEngine),
            EngineKind::Parallel if threads == 0 => Box::new(ParallelEngine::new()),
            EngineKind::Parallel => Box::new(ParallelEngine::with_threads(threads)?),
            EngineKind::Threaded if threads == 0 => Box::new(ThreadedEngine::new()),
            EngineKind::Threaded => Box::new(ThreadedEngine::with_bands(threads)),
        };
        Ok(engine)
    }
}

/// Builds one engine per kind, preserving the order of `kinds`.
pub fn registry(kinds: &[EngineKind], threads: usize) -> Result<Vec<Box<dyn Engine>>, BenchError> {
    kinds.iter().map(|kind| kind.build(threads)).collect()
}
