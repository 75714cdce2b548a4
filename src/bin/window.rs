//! Interactive window viewer. The grid size is the first argument
//! (default 64); the other settings come from the usual `LIFE_*` variables.

use macroquad::prelude::*;
use torus_life::{
    GameState, SimulationConfig, Universe,
    application::{parse_size, seed_universe},
    input,
    rendering::window,
    telemetry,
};
use tracing::{error, info};

const DEFAULT_SIZE: i64 = 64;

fn window_conf() -> Conf {
    Conf {
        window_title: "Toroidal Game of Life".to_owned(),
        window_width: 900,
        window_height: 720,
        window_resizable: true,
        ..Default::default()
    }
}

fn load() -> torus_life::Result<GameState> {
    let config = SimulationConfig::from_env()?;
    let size = match std::env::args().nth(1) {
        Some(arg) => parse_size(&arg)?,
        None => DEFAULT_SIZE,
    };
    let mut universe = Universe::with_signed_size(size)?;
    seed_universe(&mut universe, &config)?;
    info!(size, "opening viewer");
    Ok(GameState::new(universe, config.delay))
}

#[macroquad::main(window_conf)]
async fn main() {
    telemetry::init_logging();

    let mut state = match load() {
        Ok(state) => state,
        Err(err) => {
            error!("{err}");
            return;
        }
    };

    loop {
        if input::quit_requested() {
            break;
        }
        state = input::process_keyboard_input(state);
        state = state.tick(get_frame_time());

        clear_background(BLACK);
        window::draw_universe(&state.universe);
        window::draw_status(&state);

        next_frame().await;
    }
}
