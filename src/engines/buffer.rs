use std::time::Instant;

use crate::{Job, JobResult, World};

/// Two equally sized worlds with an explicit front (read) role.
///
/// [`DoubleBuffer::flip`] exchanges the read and write roles without moving
/// any cells, and [`DoubleBuffer::split`] never hands out the same world for
/// both roles.
pub struct DoubleBuffer {
    worlds: [World; 2],
    front: usize,
}

impl DoubleBuffer {
    /// Copies `initial` into the front buffer and allocates a blank back buffer.
    pub fn new(initial: &World) -> Self {
        let back = World::new(initial.width(), initial.height());
        Self {
            worlds: [initial.clone(), back],
            front: 0,
        }
    }

    /// The current generation.
    pub fn front(&self) -> &World {
        &self.worlds[self.front]
    }

    /// Returns `(read, write)` for computing the next generation.
    pub fn split(&mut self) -> (&World, &mut World) {
        let [first, second] = &mut self.worlds;
        if self.front == 0 {
            (&*first, second)
        } else {
            (&*second, first)
        }
    }

    /// Promotes the write buffer to the read role.
    pub fn flip(&mut self) {
        self.front ^= 1;
    }

    pub fn bytes(&self) -> usize {
        self.worlds.iter().map(World::bytes).sum()
    }

    pub fn into_front(self) -> World {
        let [first, second] = self.worlds;
        if self.front == 0 {
            first
        } else {
            second
        }
    }
}

/// Runs `job` with `step` computing one generation from read into write.
///
/// All engines share this timing convention: buffer allocation and the copy of
/// the initial state happen before the clock starts, the clock stops after the
/// last generation. `memory_required` counts both cell buffers.
pub fn run_timed<F>(job: &Job, mut step: F) -> JobResult
where
    F: FnMut(&World, &mut World),
{
    let mut buffers = DoubleBuffer::new(&job.initial_state);
    let memory_required = buffers.bytes();

    let timer = Instant::now();
    for _ in 0..job.iterations {
        let (read, write) = buffers.split();
        step(read, write);
        buffers.flip();
    }
    let duration = timer.elapsed();

    JobResult::new(duration, memory_required, buffers.into_front())
}
