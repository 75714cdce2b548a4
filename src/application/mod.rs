mod config;
mod game_state;
mod simulation;

pub use config::{SimulationConfig, parse_size, read_size, DEFAULT_DELAY, DEFAULT_GENERATIONS};
pub use game_state::GameState;
pub use simulation::{Simulation, seed_universe};
