#![warn(clippy::all, clippy::cargo)]

mod bench;
mod config;
mod engines;
mod error;
mod output;
mod sweep;
mod validate;
pub mod world;

pub use bench::{run_benchmarks, run_engine, BenchmarkResult, Job, JobResult};
pub use config::BenchConfig;
pub use engines::{
    registry, run_timed, DoubleBuffer, Engine, EngineKind, ParallelEngine, SequentialEngine,
    ThreadedEngine,
};
pub use error::BenchError;
pub use output::write_benchmark_json;
pub use sweep::{
    generate_jobs, BenchmarkParams, ParameterBenchmarkSet, ParameterSweep, SweepAxis,
    SweepOrchestrator,
};
pub use validate::{validate, Mismatch, ValidationReport};
pub use world::{update_state, Cell, World};
