use macroquad::prelude::*;

use crate::application::GameState;

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 6] = [
        (KeyCode::Space, GameState::toggle_running),
        (KeyCode::N, GameState::step),
        (KeyCode::C, GameState::clear),
        (KeyCode::R, GameState::randomize),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

/// True when the viewer should close
pub fn quit_requested() -> bool {
    is_key_pressed(KeyCode::Escape)
}
