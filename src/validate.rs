use std::fmt;

use tracing::warn;

use crate::BenchmarkResult;

/// Two adjacent engines disagreeing on the final state of one job.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mismatch {
    /// Registration index of the first engine of the pair.
    pub left: usize,
    /// Registration index of the second engine, always `left + 1`.
    pub right: usize,
    pub left_description: String,
    pub right_description: String,
    pub job_index: usize,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "job {}: '{}' (#{}) and '{}' (#{}) disagree",
            self.job_index, self.left_description, self.left, self.right_description, self.right
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Number of (engine pair, job) comparisons made.
    pub comparisons: usize,
    pub mismatches: Vec<Mismatch>,
}

impl ValidationReport {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Compares final states of every adjacent engine pair for every job.
///
/// All pairs and jobs are checked even after a mismatch. A job missing from
/// one side of a pair counts as a mismatch.
pub fn validate(results: &[BenchmarkResult]) -> ValidationReport {
    let mut report = ValidationReport::default();
    for (left, pair) in results.windows(2).enumerate() {
        let (a, b) = (&pair[0], &pair[1]);
        for job_index in 0..a.results.len().max(b.results.len()) {
            report.comparisons += 1;
            let same = match (a.results.get(job_index), b.results.get(job_index)) {
                (Some(x), Some(y)) => x.final_state == y.final_state,
                _ => false,
            };
            if !same {
                let mismatch = Mismatch {
                    left,
                    right: left + 1,
                    left_description: a.description.clone(),
                    right_description: b.description.clone(),
                    job_index,
                };
                warn!("results differ: {}", mismatch);
                report.mismatches.push(mismatch);
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{JobResult, World};

    fn result(description: &str, worlds: &[World]) -> BenchmarkResult {
        let results = worlds
            .iter()
            .map(|w| JobResult::new(Duration::ZERO, w.bytes(), w.clone()))
            .collect();
        BenchmarkResult::new(description, results)
    }

    #[test]
    fn test_identical_results_pass() {
        let worlds = [World::from_seed(8, 8, 1), World::from_seed(8, 8, 2)];
        let report = validate(&[result("a", &worlds), result("b", &worlds), result("c", &worlds)]);
        assert!(report.passed());
        assert_eq!(report.comparisons, 4);
    }

    #[test]
    fn test_every_mismatch_is_reported() {
        let good = [World::from_seed(8, 8, 1), World::from_seed(8, 8, 2), World::new(8, 8)];
        let bad = [World::new(8, 8), World::from_seed(8, 8, 2), World::new(4, 16)];
        let report = validate(&[result("ref", &good), result("bad", &bad), result("ref2", &good)]);

        let found: Vec<_> = report
            .mismatches
            .iter()
            .map(|m| (m.left, m.right, m.job_index))
            .collect();
        assert_eq!(found, vec![(0, 1, 0), (0, 1, 2), (1, 2, 0), (1, 2, 2)]);
        assert_eq!(report.mismatches[0].right_description, "bad");
        assert_eq!(report.comparisons, 6);
    }

    #[test]
    fn test_missing_job_is_a_mismatch() {
        let worlds = [World::new(3, 3), World::new(3, 3)];
        let report = validate(&[result("a", &worlds), result("b", &worlds[..1])]);
        assert_eq!(report.mismatches.len(), 1);
        assert_eq!(report.mismatches[0].job_index, 1);
    }

    #[test]
    fn test_single_engine_has_nothing_to_compare() {
        let report = validate(&[result("only", &[World::new(2, 2)])]);
        assert!(report.passed());
        assert_eq!(report.comparisons, 0);
    }
}
