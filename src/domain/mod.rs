mod cell;
mod universe;
mod patterns;

pub use cell::Cell;
pub use universe::Universe;
pub use patterns::{Pattern, presets};
