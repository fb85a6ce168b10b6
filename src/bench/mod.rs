mod job;
mod runner;

pub use job::{BenchmarkResult, Job, JobResult};
pub use runner::{run_benchmarks, run_engine};
