//! Window rendering with macroquad. The grid is scaled to fill the area
//! left of the status panel.

use macroquad::prelude::*;

use crate::application::GameState;
use crate::domain::Universe;

pub const PANEL_WIDTH: f32 = 180.0;

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Side length of one cell so the whole grid fits on screen
pub fn cell_size(universe: &Universe) -> f32 {
    let side = grid_area_width().min(screen_height());
    (side / universe.size() as f32).max(1.0)
}

/// Draw every alive cell, plus faint dead cells when cells are large
pub fn draw_universe(universe: &Universe) {
    let cell = cell_size(universe);
    let alive_color = Color::from_rgba(0, 255, 150, 255);
    let dead_cell_color = Color::from_rgba(15, 15, 15, 255);
    let draw_dead = cell >= 4.0;

    for (row, col, state) in universe.iter_cells() {
        let x = col as f32 * cell;
        let y = row as f32 * cell;
        if state.is_alive() {
            draw_rectangle(x, y, cell, cell, alive_color);
        } else if draw_dead {
            draw_rectangle(x + 0.5, y + 0.5, cell - 1.0, cell - 1.0, dead_cell_color);
        }
    }
}

/// Draw the status panel: generation, alive count, speed and controls
pub fn draw_status(state: &GameState) {
    let px = grid_area_width();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));

    let universe = &state.universe;
    let generation = format!("#{}", universe.generation());
    let alive = universe.alive_count().to_string();
    let grid = format!("Grid: {0}x{0}", universe.size());
    let speed = format!("{:.0} gen/s", state.updates_per_second);
    let evolve = format!("Evolve: {:.1}ms", state.last_evolution_time_ms);
    let labels: [(&str, f32, f32, Color); 14] = [
        ("Generation:", 30.0, 16.0, WHITE),
        (generation.as_str(), 52.0, 20.0, Color::from_rgba(0, 255, 150, 255)),
        ("Alive:", 85.0, 16.0, WHITE),
        (alive.as_str(), 105.0, 20.0, Color::from_rgba(0, 255, 150, 255)),
        (grid.as_str(), 140.0, 14.0, GRAY),
        (speed.as_str(), 160.0, 14.0, GRAY),
        (evolve.as_str(), 180.0, 14.0, GRAY),
        (
            if state.is_running { "Running" } else { "Paused" },
            210.0,
            16.0,
            if state.is_running {
                Color::from_rgba(0, 255, 0, 255)
            } else {
                Color::from_rgba(255, 165, 0, 255)
            },
        ),
        ("Controls:", 250.0, 14.0, WHITE),
        ("Space: Play/Pause", 265.0, 12.0, GRAY),
        ("N: Step", 278.0, 12.0, GRAY),
        ("R: Random  C: Clear", 291.0, 12.0, GRAY),
        ("Up/Down: Speed", 304.0, 12.0, GRAY),
        ("Esc: Quit", 317.0, 12.0, GRAY),
    ];

    labels.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px + 10.0, *y, *size, *color);
    });
}
