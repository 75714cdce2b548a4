use std::time::Duration;

use crate::domain::Universe;

/// GameState drives an interactive viewer.
/// The universe advances on a timer while running and can be paused,
/// stepped, cleared or reseeded between frames.
pub struct GameState {
    pub universe: Universe,
    pub is_running: bool,
    pub update_timer: f32,
    pub updates_per_second: f32,
    pub last_evolution_time_ms: f32,
}

impl GameState {
    /// Create a running viewer that advances once per `delay`
    pub fn new(universe: Universe, delay: Duration) -> Self {
        let updates_per_second = if delay.is_zero() {
            60.0
        } else {
            (1.0 / delay.as_secs_f32()).clamp(1.0, 60.0)
        };
        Self {
            universe,
            is_running: true,
            update_timer: 0.0,
            updates_per_second,
            last_evolution_time_ms: 0.0,
        }
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Advance exactly one generation, used while paused
    pub fn step(mut self) -> Self {
        let start = std::time::Instant::now();
        self.universe.advance();
        self.last_evolution_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self
    }

    /// Kill every cell and pause
    pub fn clear(mut self) -> Self {
        self.universe.clear();
        self.is_running = false;
        self
    }

    /// Reseed the grid with a random population
    pub fn randomize(mut self) -> Self {
        self.universe.populate();
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(1.0, 60.0);
        self
    }

    /// Update simulation by one frame
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self.update_timer = 0.0;
            return self.step();
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;

    fn blinker_state() -> GameState {
        let mut universe = Universe::new(6).unwrap();
        presets::blinker().place_centered(&mut universe);
        GameState::new(universe, Duration::from_millis(500))
    }

    #[test]
    fn test_speed_from_delay() {
        let state = blinker_state();
        assert_eq!(state.updates_per_second, 2.0);
        let fast = GameState::new(Universe::new(2).unwrap(), Duration::ZERO);
        assert_eq!(fast.updates_per_second, 60.0);
    }

    #[test]
    fn test_tick_waits_for_interval() {
        let state = blinker_state().tick(0.2);
        assert_eq!(state.universe.generation(), 0);
        let state = state.tick(0.31);
        assert_eq!(state.universe.generation(), 1);
        assert_eq!(state.update_timer, 0.0);
    }

    #[test]
    fn test_paused_tick_does_nothing() {
        let state = blinker_state().toggle_running().tick(10.0);
        assert!(!state.is_running);
        assert_eq!(state.universe.generation(), 0);
        let state = state.step();
        assert_eq!(state.universe.generation(), 1);
        assert_eq!(state.universe.alive_count(), 3);
    }

    #[test]
    fn test_clear_pauses() {
        let state = blinker_state().clear();
        assert!(!state.is_running);
        assert_eq!(state.universe.alive_count(), 0);
    }

    #[test]
    fn test_adjust_speed_is_clamped() {
        let state = blinker_state().adjust_speed(-10.0);
        assert_eq!(state.updates_per_second, 1.0);
        let state = state.adjust_speed(100.0);
        assert_eq!(state.updates_per_second, 60.0);
    }
}
