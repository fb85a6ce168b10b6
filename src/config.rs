use std::path::PathBuf;

use crate::{BenchError, BenchmarkParams, EngineKind};

/// Settings of the benchmark driver.
///
/// Defaults are the associated constants below; `from_env` overrides the
/// output directory, the worker count and the seed.
#[derive(Clone, Debug)]
pub struct BenchConfig {
    pub output_dir: PathBuf,
    /// Worker threads for the parallel engines, `0` for their own default.
    pub threads: usize,
    pub seed: u64,
    pub engines: Vec<EngineKind>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            threads: 0,
            seed: Self::SEED,
            engines: EngineKind::all(),
        }
    }
}

impl BenchConfig {
    pub const WIDTH_HEIGHT: usize = 1 << 10;
    pub const NUM_JOBS: usize = 1 << 2;
    pub const ITERATIONS: usize = 1 << 9;
    pub const SEED: u64 = 0;

    /// Points in the world-size sweep, halving the side each time.
    pub const SIZE_SWEEP_POINTS: usize = 1 << 3;
    /// The world-size sweep runs `ITERATIONS >> 3` generations per job.
    pub const SIZE_SWEEP_ITERATIONS: usize = Self::ITERATIONS >> 3;
    /// The iteration sweep covers `1..=MAX_SWEEP_ITERATIONS`.
    pub const MAX_SWEEP_ITERATIONS: usize = 64;

    pub const SIZE_SWEEP_FILE: &'static str = "change_width_height.json";
    pub const ITERATIONS_SWEEP_FILE: &'static str = "change_iters.json";

    pub const ENV_OUTPUT_DIR: &'static str = "CONWAY_BENCH_OUTPUT_DIR";
    pub const ENV_THREADS: &'static str = "CONWAY_BENCH_THREADS";
    pub const ENV_SEED: &'static str = "CONWAY_BENCH_SEED";

    pub fn from_env() -> Result<Self, BenchError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BenchError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(dir) = lookup(Self::ENV_OUTPUT_DIR) {
            config.output_dir = PathBuf::from(dir);
        }
        if let Some(threads) = lookup(Self::ENV_THREADS) {
            config.threads = parse_var(Self::ENV_THREADS, &threads)?;
        }
        if let Some(seed) = lookup(Self::ENV_SEED) {
            config.seed = parse_var(Self::ENV_SEED, &seed)?;
        }
        Ok(config)
    }

    pub fn base_params(&self) -> BenchmarkParams {
        BenchmarkParams::new(Self::WIDTH_HEIGHT, Self::NUM_JOBS, Self::ITERATIONS, self.seed)
    }

    /// World sides `2 * WIDTH_HEIGHT >> i`, i.e. 2048 down to 16.
    pub fn size_sweep(&self) -> Vec<BenchmarkParams> {
        let base = self.base_params().with_iterations(Self::SIZE_SWEEP_ITERATIONS);
        (0..Self::SIZE_SWEEP_POINTS)
            .map(|i| base.with_width_height((Self::WIDTH_HEIGHT << 1) >> i))
            .collect()
    }

    /// Iteration counts `1..=MAX_SWEEP_ITERATIONS` at the default world size.
    pub fn iterations_sweep(&self) -> Vec<BenchmarkParams> {
        let base = self.base_params();
        (1..=Self::MAX_SWEEP_ITERATIONS)
            .map(|iterations| base.with_iterations(iterations))
            .collect()
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, BenchError> {
    value
        .trim()
        .parse()
        .map_err(|_| BenchError::Config(format!("{key}={value:?} is not a valid number")))
}
