use std::path::PathBuf;

/// Errors raised while configuring, running or recording benchmark sweeps.
///
/// Engines disagreeing on a final state is not an error: it is recorded in a
/// [`crate::ValidationReport`] and the sweep carries on.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// An invalid value in the configuration or in constructor arguments.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Parameter and result collections that should pair up have different lengths.
    #[error("got {params} parameter sets but {results} result sets")]
    LengthMismatch { params: usize, results: usize },

    /// A sweep point changes a parameter other than the swept axis.
    #[error("sweep over {axis} also varies {field} at point {index}")]
    InconsistentSweep {
        axis: &'static str,
        field: &'static str,
        index: usize,
    },

    /// The output file could not be created or written.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize sweep: {0}")]
    Json(#[from] serde_json::Error),
}
