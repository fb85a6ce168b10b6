use crate::BenchError;
use rand::Rng;

/// A single cell value: `0` is dead, `1` is alive.
pub type Cell = u8;

/// Fixed-size toroidal grid of cells stored row-major in one flat buffer.
///
/// Cell `(x, y)` lives at index `y * width + x`. The buffer length is
/// `width * height` for the whole lifetime of the world.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct World {
    width: usize,
    height: usize,
    state: Vec<Cell>,
}

impl World {
    /// Creates an all-dead world.
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width >= 1 && height >= 1);
        Self {
            width,
            height,
            state: vec![0; width * height],
        }
    }

    /// Creates a world from row-major cells. Any non-zero value is stored as `1`.
    pub fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self, BenchError> {
        if width == 0 || height == 0 {
            return Err(BenchError::Config(format!(
                "world dimensions must be positive, got {width}x{height}"
            )));
        }
        if cells.len() != width * height {
            return Err(BenchError::Config(format!(
                "{width}x{height} world needs {} cells, got {}",
                width * height,
                cells.len()
            )));
        }
        let state = cells.into_iter().map(|c| (c != 0) as Cell).collect();
        Ok(Self {
            width,
            height,
            state,
        })
    }

    /// Creates a world with one Bernoulli(0.5) draw per cell, in row-major order.
    ///
    /// The generator is advanced by exactly `width * height` draws, so worlds
    /// drawn one after another from the same generator are reproducible.
    pub fn random<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Self {
        let mut world = Self::new(width, height);
        for cell in world.state.iter_mut() {
            *cell = rng.gen_bool(0.5) as Cell;
        }
        world
    }

    /// Shortcut for [`World::random`] with a freshly seeded `ChaCha8Rng`.
    pub fn from_seed(width: usize, height: usize, seed: u64) -> Self {
        use rand::SeedableRng;
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
        Self::random(width, height, &mut rng)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major cell values.
    pub fn state(&self) -> &[Cell] {
        &self.state
    }

    pub fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.state[self.index(x, y)] != 0
    }

    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        let idx = self.index(x, y);
        self.state[idx] = alive as Cell;
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.state.iter().map(|&c| c as usize).sum()
    }

    /// Heap bytes held by the cell buffer.
    pub fn bytes(&self) -> usize {
        self.state.len() * std::mem::size_of::<Cell>()
    }

    /// Live cells among the 8 neighbours of `(x, y)`, wrapping at the edges.
    pub fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let (w, h) = (self.width, self.height);
        let x1 = if x == 0 { w - 1 } else { x - 1 };
        let x2 = if x == w - 1 { 0 } else { x + 1 };
        let row_prev = &self.state[(if y == 0 { h - 1 } else { y - 1 }) * w..][..w];
        let row_curr = &self.state[y * w..][..w];
        let row_next = &self.state[(if y == h - 1 { 0 } else { y + 1 }) * w..][..w];
        row_prev[x1]
            + row_prev[x]
            + row_prev[x2]
            + row_curr[x1]
            + row_curr[x2]
            + row_next[x1]
            + row_next[x]
            + row_next[x2]
    }
}

/// Classic Life transition for one cell.
#[inline]
pub fn next_cell(alive: bool, neighbors: u8) -> Cell {
    let next = if alive {
        neighbors == 2 || neighbors == 3
    } else {
        neighbors == 3
    };
    next as Cell
}

/// Computes one generation of `read` into `write`.
///
/// Every cell of `write` is derived from `read` alone, so the rows may be
/// computed in any order, or concurrently via [`update_rows`].
///
/// Panics if the two worlds differ in size.
pub fn update_state(read: &World, write: &mut World) {
    assert_eq!(
        (read.width, read.height),
        (write.width, write.height),
        "read and write buffers must have the same dimensions"
    );
    update_rows(read, 0, &mut write.state);
}

/// Computes the next generation for a contiguous band of rows.
///
/// `dst` holds whole rows of the destination buffer, starting at row
/// `first_row`; its length must be a multiple of the world width.
pub fn update_rows(read: &World, first_row: usize, dst: &mut [Cell]) {
    let w = read.width;
    debug_assert_eq!(dst.len() % w, 0);
    debug_assert!(first_row + dst.len() / w <= read.height);
    for (dy, row) in dst.chunks_exact_mut(w).enumerate() {
        let y = first_row + dy;
        for (x, cell) in row.iter_mut().enumerate() {
            let alive = read.state[y * w + x] != 0;
            *cell = next_cell(alive, read.live_neighbors(x, y));
        }
    }
}

/// Flat cell buffer of a world, split by engines into disjoint row bands.
pub(crate) fn cells_mut(world: &mut World) -> &mut [Cell] {
    &mut world.state
}
