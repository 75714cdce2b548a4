// Error types shared by every layer
pub mod error;

// Domain layer - the universe and its evolution
pub mod domain;

// Application layer - driver loop, configuration, viewer state
pub mod application;

// Infrastructure layer - rendering and input
pub mod rendering;
#[cfg(feature = "window")]
pub mod input;
pub mod telemetry;

// Re-exports for convenience
pub use domain::{Cell, Universe, Pattern, presets};
pub use application::{Simulation, SimulationConfig, GameState};
pub use rendering::{Renderer, TerminalRenderer};
pub use error::{Error, Result};
