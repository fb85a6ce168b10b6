#![warn(clippy::all)]

use anyhow::{bail, Context, Result};
use conway_bench::{BenchConfig, Engine, SweepAxis, SweepOrchestrator};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let config = BenchConfig::from_env()?;
    info!(
        output_dir = %config.output_dir.display(),
        threads = config.threads,
        seed = config.seed,
        "configuration loaded"
    );
    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("cannot create {}", config.output_dir.display()))?;

    let orchestrator = SweepOrchestrator::from_kinds(&config.engines, config.threads)?;
    for engine in orchestrator.engines() {
        info!(engine = engine.describe(), "registered engine");
    }

    let sweeps = [
        (
            SweepAxis::WidthHeight,
            config.size_sweep(),
            BenchConfig::SIZE_SWEEP_FILE,
        ),
        (
            SweepAxis::Iterations,
            config.iterations_sweep(),
            BenchConfig::ITERATIONS_SWEEP_FILE,
        ),
    ];

    let mut all_valid = true;
    for (axis, points, file) in sweeps {
        info!(axis = axis.as_str(), points = points.len(), "starting sweep");
        let sweep = orchestrator.run_sweep(axis, &points)?;
        all_valid &= sweep.all_valid();

        let path = config.output_dir.join(file);
        sweep.write_json(&path)?;
        info!(path = %path.display(), "sweep written");
    }

    if !all_valid {
        error!("engines disagreed on at least one final state");
        bail!("validation failed");
    }
    info!("all engines agree on every job");
    Ok(())
}
