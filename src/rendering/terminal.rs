use std::fmt::Write as _;
use std::io::Write;

use super::Renderer;
use crate::domain::Universe;
use crate::error::Result;

pub const ALIVE_SYMBOL: char = 'O';
pub const DEAD_SYMBOL: char = ' ';
/// Cursor home followed by erase display
pub const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

/// Format one frame: the generation and alive headers followed by
/// one line per grid row.
pub fn format_frame(universe: &Universe, alive: char, dead: char) -> String {
    let size = universe.size();
    let mut frame = String::with_capacity(32 + size * (size + 1));
    // writing into a String cannot fail
    let _ = writeln!(frame, "Generation: #{}", universe.generation());
    let _ = writeln!(frame, "Alive: {}", universe.alive_count());
    for row in universe.rows() {
        frame.extend(row.iter().map(|cell| if cell.is_alive() { alive } else { dead }));
        frame.push('\n');
    }
    frame
}

/// Renders frames as text to any writer, typically stdout
pub struct TerminalRenderer<W: Write> {
    out: W,
    alive: char,
    dead: char,
    clear_screen: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            alive: ALIVE_SYMBOL,
            dead: DEAD_SYMBOL,
            clear_screen: true,
        }
    }

    /// Use different symbols for alive and dead cells (builder pattern)
    pub fn with_symbols(mut self, alive: char, dead: char) -> Self {
        self.alive = alive;
        self.dead = dead;
        self
    }

    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, universe: &Universe) -> Result<()> {
        if self.clear_screen {
            self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        self.out
            .write_all(format_frame(universe, self.alive, self.dead).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}
