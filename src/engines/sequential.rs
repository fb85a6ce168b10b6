use crate::world::update_state;
use crate::{Job, JobResult};

use super::{run_timed, Engine};

/// Single-threaded reference engine with ping-pong double buffering.
#[derive(Clone, Copy, Debug, Default)]
pub struct SequentialEngine;

impl Engine for SequentialEngine {
    fn execute(&self, job: &Job) -> JobResult {
        run_timed(job, update_state)
    }

    fn describe(&self) -> &'static str {
        "CPU sequential (double buffered)"
    }
}
