use super::{Cell, Universe};

/// Represents a pattern that can be placed on the universe
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>, // (row, col) offsets of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell offsets
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let height = cells.iter().map(|(row, _)| *row).max().unwrap_or(0) + 1;
        let width = cells.iter().map(|(_, col)| *col).max().unwrap_or(0) + 1;
        Self { name, description, width, height, cells }
    }

    /// Place pattern with its top-left corner at (row, col).
    /// Offsets wrap around the edges the same way neighbors do.
    pub fn place_on(&self, universe: &mut Universe, row: usize, col: usize) {
        let size = universe.size();
        for (dr, dc) in &self.cells {
            universe.set((row + dr) % size, (col + dc) % size, Cell::Alive);
        }
    }

    /// Place pattern so that its bounding box is centred on the universe.
    pub fn place_centered(&self, universe: &mut Universe) {
        let size = universe.size();
        let row = size.saturating_sub(self.height) / 2;
        let col = size.saturating_sub(self.width) / 2;
        self.place_on(universe, row, col);
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ]
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![(0, 0), (0, 1), (0, 2)]
        )
    }

    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ]
        )
    }

    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ]
        )
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ]
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            vec![
                (0, 1), (0, 4),
                (1, 0),
                (2, 0), (2, 4),
                (3, 0), (3, 1), (3, 2), (3, 3),
            ]
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (0, 1), (0, 2),
                (1, 0), (1, 1),
                (2, 1),
            ]
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            block(),
            blinker(),
            toad(),
            beacon(),
            glider(),
            lwss(),
            r_pentomino(),
        ]
    }

    /// Look up a preset by name, ignoring case
    pub fn by_name(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alive_cells(universe: &Universe) -> Vec<(usize, usize)> {
        universe
            .iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(row, col, _)| (row, col))
            .collect()
    }

    #[test]
    fn test_pattern_bounds() {
        let glider = presets::glider();
        assert_eq!((glider.width, glider.height), (3, 3));
        let lwss = presets::lwss();
        assert_eq!((lwss.width, lwss.height), (5, 4));
    }

    #[test]
    fn test_place_wraps_edges() {
        let mut universe = Universe::new(4).unwrap();
        presets::block().place_on(&mut universe, 3, 3);
        assert_eq!(alive_cells(&universe), vec![(0, 0), (0, 3), (3, 0), (3, 3)]);
        assert_eq!(universe.alive_count(), 4);
    }

    #[test]
    fn test_block_still_life_across_corner() {
        let mut universe = Universe::new(6).unwrap();
        presets::block().place_on(&mut universe, 5, 5);
        let before = alive_cells(&universe);
        universe.advance();
        assert_eq!(alive_cells(&universe), before);
    }

    #[test]
    fn test_oscillators_return_after_two_steps() {
        for pattern in [presets::blinker(), presets::toad(), presets::beacon()] {
            let mut universe = Universe::new(10).unwrap();
            pattern.place_centered(&mut universe);
            let start = alive_cells(&universe);
            universe.advance();
            assert_ne!(alive_cells(&universe), start, "{} did not change", pattern.name);
            universe.advance();
            assert_eq!(alive_cells(&universe), start, "{} did not return", pattern.name);
        }
    }

    #[test]
    fn test_glider_returns_to_start_on_torus() {
        // a glider moves one cell diagonally every 4 generations,
        // so it comes back after 4 * size steps
        let size = 8;
        let mut universe = Universe::new(size).unwrap();
        presets::glider().place_on(&mut universe, 0, 0);
        let start = alive_cells(&universe);
        for _ in 0..4 * size {
            universe.advance();
            assert_eq!(universe.alive_count(), 5);
        }
        assert_eq!(alive_cells(&universe), start);
    }

    #[test]
    fn test_by_name_is_case_insensitive() {
        assert_eq!(presets::by_name("glider").unwrap().name, "Glider");
        assert_eq!(presets::by_name("r-PENTOMINO").unwrap().name, "R-pentomino");
        assert!(presets::by_name("spaceship").is_none());
    }

    #[test]
    fn test_preset_names_are_unique() {
        let names: Vec<_> = presets::all_patterns().iter().map(|p| p.name).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }
}
