use super::Cell;
use crate::error::{Error, Result};
use rand::Rng;
use tracing::{debug, trace};

/// Universe owns a square toroidal grid of cells along with the
/// generation counter and the number of live cells.
///
/// The live-cell count is maintained incrementally: every write that flips
/// a cell adjusts it at the moment of the flip, so it always matches a full
/// scan of the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Universe {
    size: usize,
    cells: Vec<Cell>,
    generation: u64,
    alive_count: usize,
}

impl Universe {
    /// Create a new universe with all cells dead.
    /// Fails with [`Error::InvalidSize`] for a zero size and with
    /// [`Error::SizeTooLarge`] when `size * size` cells cannot be addressed.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidSize(0));
        }
        let cell_count = size
            .checked_mul(size)
            .filter(|&count| count <= isize::MAX as usize)
            .ok_or(Error::SizeTooLarge(size))?;
        debug!(size, "creating universe");
        Ok(Self {
            size,
            cells: vec![Cell::Dead; cell_count],
            generation: 0,
            alive_count: 0,
        })
    }

    /// Create a universe from a size given as a signed integer,
    /// rejecting zero and negative values before any allocation.
    pub fn with_signed_size(size: i64) -> Result<Self> {
        match usize::try_from(size) {
            Ok(size) if size > 0 => Self::new(size),
            _ => Err(Error::InvalidSize(size)),
        }
    }

    /// Side length of the grid
    pub const fn size(&self) -> usize {
        self.size
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn alive_count(&self) -> usize {
        self.alive_count
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.size && col < self.size).then(|| self.cells[self.get_index(row, col)])
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Cell::is_alive)
    }

    /// Set cell at position, keeping the live count in step.
    /// Out-of-range positions are ignored.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row >= self.size || col >= self.size {
            return;
        }
        let idx = self.get_index(row, col);
        let delta = self.cells[idx].population_delta(cell);
        self.cells[idx] = cell;
        self.alive_count = self.alive_count.wrapping_add_signed(delta);
    }

    /// Kill every cell. The generation counter is left untouched.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
        self.alive_count = 0;
    }

    /// Seed every cell with a fair coin flip from the thread-local RNG.
    pub fn populate(&mut self) {
        self.populate_with(&mut rand::rng());
    }

    /// Seed every cell in row-major order with one fair coin flip each,
    /// drawn from `rng`.
    pub fn populate_with<R: Rng>(&mut self, rng: &mut R) {
        for idx in 0..self.cells.len() {
            let next = Cell::from_alive(rng.random_bool(0.5));
            let delta = self.cells[idx].population_delta(next);
            self.cells[idx] = next;
            self.alive_count = self.alive_count.wrapping_add_signed(delta);
        }
        debug!(size = self.size, alive = self.alive_count, "populated universe");
    }

    /// Count live neighbors using toroidal wrapping (grid wraps like a torus).
    /// Adding the size before the modulo keeps the dividend non-negative.
    pub fn count_alive_neighbors(&self, row: usize, col: usize) -> u8 {
        let size = self.size as isize;
        let (row, col) = (row as isize, col as isize);

        (-1..=1)
            .flat_map(|dr| (-1..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .map(|(dr, dc)| {
                let r = (row + dr + size) % size;
                let c = (col + dc + size) % size;
                self.cells[self.get_index(r as usize, c as usize)]
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Advance one generation.
    ///
    /// Every next state is computed from the current grid into a fresh one,
    /// which then replaces the current grid. The live count is adjusted per
    /// flip while the new grid is built and published together with it.
    pub fn advance(&mut self) {
        let mut alive = self.alive_count;
        let mut next = Vec::with_capacity(self.cells.len());

        for row in 0..self.size {
            for col in 0..self.size {
                let current = self.cells[self.get_index(row, col)];
                let evolved = current.evolve(self.count_alive_neighbors(row, col));
                alive = alive.wrapping_add_signed(current.population_delta(evolved));
                next.push(evolved);
            }
        }

        self.cells = next;
        self.alive_count = alive;
        self.generation += 1;
        trace!(generation = self.generation, alive, "advanced universe");
    }

    /// Iterate over grid rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.size)
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.rows()
            .enumerate()
            .flat_map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(move |(col, &cell)| (row, col, cell))
            })
    }
}
