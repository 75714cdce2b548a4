/// Cell is the state of a single grid position in the universe.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    pub const fn from_alive(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }

    /// Next state under B3/S23:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }

    /// Change to the live-cell count when moving from `self` to `next`.
    pub const fn population_delta(self, next: Cell) -> isize {
        match (self, next) {
            (Cell::Dead, Cell::Alive) => 1,
            (Cell::Alive, Cell::Dead) => -1,
            _ => 0,
        }
    }
}
