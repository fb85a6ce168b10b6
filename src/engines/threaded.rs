use std::num::NonZeroUsize;

use crate::world::{cells_mut, update_rows};
use crate::{Job, JobResult, World};

use super::{run_timed, Engine};

/// Splits every generation into contiguous row bands, one scoped thread each.
///
/// The scope joins all band threads before the buffers flip.
#[derive(Clone, Copy, Debug)]
pub struct ThreadedEngine {
    bands: usize,
}

impl Default for ThreadedEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ThreadedEngine {
    /// One band per available core.
    pub fn new() -> Self {
        let bands = std::thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1);
        Self::with_bands(bands)
    }

    pub fn with_bands(bands: usize) -> Self {
        Self {
            bands: bands.max(1),
        }
    }

    pub fn bands(&self) -> usize {
        self.bands
    }

    fn step(&self, read: &World, write: &mut World) {
        let (width, height) = (read.width(), read.height());
        let rows_per_band = height.div_ceil(self.bands.min(height));
        let cells = cells_mut(write);
        std::thread::scope(|s| {
            let mut bands = cells.chunks_mut(rows_per_band * width).enumerate();
            // the calling thread takes the first band itself
            let first = bands.next();
            for (i, band) in bands {
                s.spawn(move || update_rows(read, i * rows_per_band, band));
            }
            if let Some((_, band)) = first {
                update_rows(read, 0, band);
            }
        });
    }
}

impl Engine for ThreadedEngine {
    fn execute(&self, job: &Job) -> JobResult {
        run_timed(job, |read, write| self.step(read, write))
    }

    fn describe(&self) -> &'static str {
        "CPU scoped threads (row bands)"
    }
}
