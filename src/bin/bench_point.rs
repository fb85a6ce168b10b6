use conway_bench::{BenchConfig, SweepOrchestrator};
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    let config = BenchConfig::from_env()?;
    let params = config.base_params();
    let orchestrator = SweepOrchestrator::from_kinds(&config.engines, config.threads)?;

    let timer = Instant::now();
    let set = orchestrator.run_point(params)?;
    println!("Time on whole point: {:?}", timer.elapsed());
    println!("{:?}", params);

    for result in &set.benchmark_types {
        println!(
            "{:<40} mean {:>10.6}s  std {:>10.6}s  memory {} bytes",
            result.description,
            result.mean_duration(),
            result.std_duration(),
            result.peak_memory()
        );
    }
    for mismatch in &set.validation.mismatches {
        println!("MISMATCH {}", mismatch);
    }
    if set.validation.passed() {
        println!("All results match across engines");
    }
    Ok(())
}
