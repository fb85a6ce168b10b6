use rayon::prelude::*;

use crate::world::{cells_mut, update_rows};
use crate::{BenchError, Job, JobResult, World};

use super::{run_timed, Engine};

/// Data-parallel engine: each generation is a parallel-for over rows.
///
/// Rows are written to disjoint slices of the write buffer and read only from
/// the read buffer. `for_each` returns once every row is written, which is the
/// barrier between generations.
pub struct ParallelEngine {
    pool: Option<rayon::ThreadPool>,
}

impl Default for ParallelEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ParallelEngine {
    /// Uses rayon's global thread pool.
    pub fn new() -> Self {
        Self { pool: None }
    }

    /// Uses a dedicated pool of `threads` workers.
    pub fn with_threads(threads: usize) -> Result<Self, BenchError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("life-worker-{i}"))
            .build()
            .map_err(|e| BenchError::Config(format!("failed to build thread pool: {e}")))?;
        Ok(Self { pool: Some(pool) })
    }

    fn step(read: &World, write: &mut World) {
        let width = read.width();
        cells_mut(write)
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| update_rows(read, y, row));
    }
}

impl Engine for ParallelEngine {
    fn execute(&self, job: &Job) -> JobResult {
        match &self.pool {
            Some(pool) => pool.install(|| run_timed(job, Self::step)),
            None => run_timed(job, Self::step),
        }
    }

    fn describe(&self) -> &'static str {
        "CPU data-parallel (rayon, per row)"
    }
}
