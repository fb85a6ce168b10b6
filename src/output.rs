use std::path::Path;
use std::time::Duration;

use serde::Serializer;

use crate::{BenchError, BenchmarkParams, BenchmarkResult, ParameterSweep};

/// Serializes a duration as seconds rounded to 6 decimal places.
pub(crate) fn serialize_secs<S: Serializer>(duration: &Duration, s: S) -> Result<S::Ok, S::Error> {
    let micros = (duration.as_secs_f64() * 1e6).round();
    s.serialize_f64(micros / 1e6)
}

impl ParameterSweep {
    pub fn to_json(&self) -> Result<String, BenchError> {
        let mut text = serde_json::to_string_pretty(self)?;
        text.push('\n');
        Ok(text)
    }

    /// Writes the sweep as JSON to `path`, replacing any existing file.
    ///
    /// The document is rendered completely before the file is opened, so a
    /// serialization failure never leaves a partial file behind.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), BenchError> {
        let path = path.as_ref();
        let text = self.to_json()?;
        std::fs::write(path, text).map_err(|source| BenchError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Pairs each parameter set with its per-engine results and writes the sweep.
///
/// Fails with [`BenchError::LengthMismatch`] before creating the file if the
/// two collections differ in length.
pub fn write_benchmark_json(
    sweep_type: &str,
    params: Vec<BenchmarkParams>,
    results: Vec<Vec<BenchmarkResult>>,
    path: impl AsRef<Path>,
) -> Result<ParameterSweep, BenchError> {
    let sweep = ParameterSweep::from_parts(sweep_type, params, results)?;
    sweep.write_json(path)?;
    Ok(sweep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{JobResult, World};

    fn sweep() -> ParameterSweep {
        let results = vec![BenchmarkResult::new(
            "engine",
            vec![JobResult::new(
                Duration::from_nanos(1_234_567_891),
                32,
                World::new(4, 4),
            )],
        )];
        ParameterSweep::from_parts(
            "width_height",
            vec![BenchmarkParams::new(4, 1, 2, 9)],
            vec![results],
        )
        .unwrap()
    }

    #[test]
    fn test_json_shape() {
        let value: serde_json::Value = serde_json::from_str(&sweep().to_json().unwrap()).unwrap();
        let expected = serde_json::json!({
            "sweep_type": "width_height",
            "benchmark_sets": [{
                "parameters": {"width_height": 4, "num_jobs": 1, "iterations": 2, "seed": 9},
                "benchmark_types": [{
                    "description": "engine",
                    "results": [{"duration": 1.234568, "memory_required": 32}]
                }]
            }]
        });
        assert_eq!(value, expected);
    }

    #[test]
    fn test_labels_are_escaped() {
        let mut sweep = sweep();
        sweep.sweep_type = "a\"b\\c\nd\te\u{1}".to_string();
        let text = sweep.to_json().unwrap();
        assert!(text.contains(r#""a\"b\\c\nd\te\u0001""#));
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");
        let err = sweep().write_json(&path).unwrap_err();
        assert!(matches!(err, BenchError::Io { .. }));
        assert!(!path.exists());
    }
}
