use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{info, warn};

use crate::{
    registry, run_benchmarks, validate, BenchError, BenchmarkResult, Engine, EngineKind, Job,
    ValidationReport, World,
};

/// Parameters of one benchmark point. The world is `width_height` cells square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BenchmarkParams {
    pub width_height: usize,
    pub num_jobs: usize,
    pub iterations: usize,
    pub seed: u64,
}

impl BenchmarkParams {
    pub fn new(width_height: usize, num_jobs: usize, iterations: usize, seed: u64) -> Self {
        Self {
            width_height,
            num_jobs,
            iterations,
            seed,
        }
    }

    pub fn with_width_height(self, width_height: usize) -> Self {
        Self {
            width_height,
            ..self
        }
    }

    pub fn with_num_jobs(self, num_jobs: usize) -> Self {
        Self { num_jobs, ..self }
    }

    pub fn with_iterations(self, iterations: usize) -> Self {
        Self { iterations, ..self }
    }

    pub fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }

    fn value(&self, axis: SweepAxis) -> u64 {
        match axis {
            SweepAxis::WidthHeight => self.width_height as u64,
            SweepAxis::NumJobs => self.num_jobs as u64,
            SweepAxis::Iterations => self.iterations as u64,
            SweepAxis::Seed => self.seed,
        }
    }
}

/// The parameter a sweep varies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SweepAxis {
    WidthHeight,
    NumJobs,
    Iterations,
    Seed,
}

impl SweepAxis {
    pub const ALL: [SweepAxis; 4] = [
        SweepAxis::WidthHeight,
        SweepAxis::NumJobs,
        SweepAxis::Iterations,
        SweepAxis::Seed,
    ];

    /// Name of the matching [`BenchmarkParams`] field.
    pub fn as_str(&self) -> &'static str {
        match self {
            SweepAxis::WidthHeight => "width_height",
            SweepAxis::NumJobs => "num_jobs",
            SweepAxis::Iterations => "iterations",
            SweepAxis::Seed => "seed",
        }
    }
}

/// Results of every engine for one parameter point.
#[derive(Clone, Debug, Serialize)]
pub struct ParameterBenchmarkSet {
    #[serde(rename = "parameters")]
    pub params: BenchmarkParams,
    pub benchmark_types: Vec<BenchmarkResult>,
    #[serde(skip)]
    pub validation: ValidationReport,
}

impl ParameterBenchmarkSet {
    /// Packages results, cross-checking them with [`validate`].
    pub fn new(params: BenchmarkParams, benchmark_types: Vec<BenchmarkResult>) -> Self {
        let validation = validate(&benchmark_types);
        Self {
            params,
            benchmark_types,
            validation,
        }
    }
}

/// An ordered series of parameter points varying one axis.
#[derive(Clone, Debug, Serialize)]
pub struct ParameterSweep {
    pub sweep_type: String,
    pub benchmark_sets: Vec<ParameterBenchmarkSet>,
}

impl ParameterSweep {
    /// Pairs up parameters with the per-engine results recorded for them.
    pub fn from_parts(
        sweep_type: impl Into<String>,
        params: Vec<BenchmarkParams>,
        results: Vec<Vec<BenchmarkResult>>,
    ) -> Result<Self, BenchError> {
        if params.len() != results.len() {
            return Err(BenchError::LengthMismatch {
                params: params.len(),
                results: results.len(),
            });
        }
        let benchmark_sets = params
            .into_iter()
            .zip(results)
            .map(|(p, r)| ParameterBenchmarkSet::new(p, r))
            .collect();
        Ok(Self {
            sweep_type: sweep_type.into(),
            benchmark_sets,
        })
    }

    /// `true` when every point passed validation.
    pub fn all_valid(&self) -> bool {
        self.benchmark_sets.iter().all(|set| set.validation.passed())
    }
}

/// Draws `params.num_jobs` random square worlds from `rng`, in job order.
///
/// The generator is never reseeded here, so the first `n` jobs are the same
/// for any `num_jobs >= n`.
pub fn generate_jobs<R: Rng + ?Sized>(params: &BenchmarkParams, rng: &mut R) -> Vec<Job> {
    let side = params.width_height;
    (0..params.num_jobs)
        .map(|_| {
            Job::new(
                World::random(side, side, &mut *rng),
                params.iterations,
                format!("random {side}x{side} world, {} iterations", params.iterations),
            )
        })
        .collect()
}

/// Drives benchmark points through a fixed list of engines.
pub struct SweepOrchestrator {
    engines: Vec<Box<dyn Engine>>,
}

impl SweepOrchestrator {
    pub fn new(engines: Vec<Box<dyn Engine>>) -> Self {
        Self { engines }
    }

    pub fn from_kinds(kinds: &[EngineKind], threads: usize) -> Result<Self, BenchError> {
        Ok(Self::new(registry(kinds, threads)?))
    }

    pub fn engines(&self) -> &[Box<dyn Engine>] {
        &self.engines
    }

    /// Generates the jobs for `params`, runs them on every engine and validates.
    pub fn run_point(&self, params: BenchmarkParams) -> Result<ParameterBenchmarkSet, BenchError> {
        if params.width_height == 0 {
            return Err(BenchError::Config("width_height must be positive".into()));
        }
        info!(
            width_height = params.width_height,
            num_jobs = params.num_jobs,
            iterations = params.iterations,
            seed = params.seed,
            "benchmark point"
        );
        let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
        let jobs = generate_jobs(&params, &mut rng);
        let results = run_benchmarks(&jobs, &self.engines);
        let set = ParameterBenchmarkSet::new(params, results);
        if set.validation.passed() {
            info!(
                comparisons = set.validation.comparisons,
                "all results match across engines"
            );
        } else {
            warn!(
                mismatches = set.validation.mismatches.len(),
                comparisons = set.validation.comparisons,
                "results differ across engines"
            );
        }
        Ok(set)
    }

    /// Runs every point in order. Only `axis` may differ between points.
    pub fn run_sweep(
        &self,
        axis: SweepAxis,
        points: &[BenchmarkParams],
    ) -> Result<ParameterSweep, BenchError> {
        check_single_axis(axis, points)?;
        let benchmark_sets = points
            .iter()
            .map(|&params| self.run_point(params))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ParameterSweep {
            sweep_type: axis.as_str().to_string(),
            benchmark_sets,
        })
    }
}

fn check_single_axis(axis: SweepAxis, points: &[BenchmarkParams]) -> Result<(), BenchError> {
    let Some(first) = points.first() else {
        return Ok(());
    };
    for (index, point) in points.iter().enumerate().skip(1) {
        for other in SweepAxis::ALL.into_iter().filter(|&a| a != axis) {
            if point.value(other) != first.value(other) {
                return Err(BenchError::InconsistentSweep {
                    axis: axis.as_str(),
                    field: other.as_str(),
                    index,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: BenchmarkParams = BenchmarkParams {
        width_height: 16,
        num_jobs: 3,
        iterations: 5,
        seed: 42,
    };

    #[test]
    fn test_job_prefix_is_stable() {
        let mut rng = ChaCha8Rng::seed_from_u64(BASE.seed);
        let short = generate_jobs(&BASE, &mut rng);
        let mut rng = ChaCha8Rng::seed_from_u64(BASE.seed);
        let long = generate_jobs(&BASE.with_num_jobs(7), &mut rng);

        assert_eq!(long.len(), 7);
        for (a, b) in short.iter().zip(&long) {
            assert_eq!(a.initial_state, b.initial_state);
        }
        assert_ne!(long[0].initial_state, long[1].initial_state);
    }

    #[test]
    fn test_jobs_follow_params() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        for job in generate_jobs(&BASE, &mut rng) {
            assert_eq!(job.initial_state.width(), 16);
            assert_eq!(job.initial_state.height(), 16);
            assert_eq!(job.iterations, 5);
            assert_eq!(job.description, "random 16x16 world, 5 iterations");
        }
    }

    #[test]
    fn test_inconsistent_sweep_is_rejected() {
        let points = [BASE, BASE.with_iterations(6).with_seed(1)];
        let err = check_single_axis(SweepAxis::Iterations, &points).unwrap_err();
        assert!(matches!(
            err,
            BenchError::InconsistentSweep {
                field: "seed",
                index: 1,
                ..
            }
        ));
        assert!(check_single_axis(SweepAxis::Iterations, &points[..1]).is_ok());
        assert!(check_single_axis(SweepAxis::Seed, &[]).is_ok());
    }

    #[test]
    fn test_from_parts_checks_lengths() {
        let err = ParameterSweep::from_parts("iterations", vec![BASE, BASE], vec![vec![]]).unwrap_err();
        assert!(matches!(
            err,
            BenchError::LengthMismatch {
                params: 2,
                results: 1
            }
        ));
    }

    #[test]
    fn test_run_point_validates() {
        let orchestrator = SweepOrchestrator::from_kinds(&EngineKind::all(), 2).unwrap();
        let set = orchestrator.run_point(BASE).unwrap();
        assert_eq!(set.params, BASE);
        assert_eq!(set.benchmark_types.len(), EngineKind::all().len());
        assert!(set.validation.passed());
        assert_eq!(set.validation.comparisons, 2 * BASE.num_jobs);
    }

    #[test]
    fn test_zero_sized_world_is_rejected() {
        let orchestrator = SweepOrchestrator::from_kinds(&[EngineKind::Sequential], 0).unwrap();
        assert!(orchestrator.run_point(BASE.with_width_height(0)).is_err());
    }
}
