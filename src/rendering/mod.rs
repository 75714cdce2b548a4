//! Renderers draw the universe after each generation.
//! The core never assumes an output medium; the driver hands every
//! published state to a [`Renderer`].

mod terminal;
#[cfg(feature = "window")]
pub mod window;

pub use terminal::{TerminalRenderer, format_frame, ALIVE_SYMBOL, DEAD_SYMBOL, CLEAR_SCREEN};

use crate::domain::Universe;
use crate::error::Result;

/// Trait for anything that can display a universe state
pub trait Renderer {
    /// Draw the current state of the universe
    fn render(&mut self, universe: &Universe) -> Result<()>;
}
