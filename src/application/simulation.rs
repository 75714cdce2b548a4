use std::thread;

use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use super::config::SimulationConfig;
use crate::domain::{Universe, presets};
use crate::error::{Error, Result};
use crate::rendering::Renderer;

/// Seed a fresh universe according to the configuration: a centred preset
/// when one is named, otherwise a random population (seeded if requested).
pub fn seed_universe(universe: &mut Universe, config: &SimulationConfig) -> Result<()> {
    match (&config.pattern, config.seed) {
        (Some(name), _) => {
            let pattern = presets::by_name(name).ok_or_else(|| Error::UnknownPattern(name.clone()))?;
            pattern.place_centered(universe);
            info!(pattern = pattern.name, alive = universe.alive_count(), "placed pattern");
        }
        (None, Some(seed)) => {
            universe.populate_with(&mut StdRng::seed_from_u64(seed));
            info!(seed, alive = universe.alive_count(), "populated universe from seed");
        }
        (None, None) => {
            universe.populate();
            info!(alive = universe.alive_count(), "populated universe");
        }
    }
    Ok(())
}

/// Simulation owns the universe and drives it through a fixed number of
/// generations, handing every new state to the renderer.
pub struct Simulation<R: Renderer> {
    universe: Universe,
    renderer: R,
    config: SimulationConfig,
}

impl<R: Renderer> Simulation<R> {
    pub fn new(universe: Universe, renderer: R, config: SimulationConfig) -> Self {
        Self { universe, renderer, config }
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Advance one generation and render the result
    pub fn step(&mut self) -> Result<()> {
        self.universe.advance();
        debug!(
            generation = self.universe.generation(),
            alive = self.universe.alive_count(),
            "generation computed"
        );
        self.renderer.render(&self.universe)
    }

    /// Run the configured number of generations, pausing between them.
    pub fn run(&mut self) -> Result<()> {
        info!(
            size = self.universe.size(),
            generations = self.config.generations,
            delay_ms = self.config.delay.as_millis() as u64,
            "starting simulation"
        );

        for i in 0..self.config.generations {
            if i > 0 && !self.config.delay.is_zero() {
                thread::sleep(self.config.delay);
            }
            self.step()?;
        }

        info!(
            generation = self.universe.generation(),
            alive = self.universe.alive_count(),
            "simulation finished"
        );
        Ok(())
    }

    /// Give back the universe and renderer
    pub fn into_parts(self) -> (Universe, R) {
        (self.universe, self.renderer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;
    use crate::rendering::TerminalRenderer;
    use std::time::Duration;

    /// Records (generation, alive) for every rendered frame
    #[derive(Default)]
    struct Recorder {
        frames: Vec<(u64, usize)>,
    }

    impl Renderer for Recorder {
        fn render(&mut self, universe: &Universe) -> Result<()> {
            self.frames.push((universe.generation(), universe.alive_count()));
            Ok(())
        }
    }

    struct Failing;

    impl Renderer for Failing {
        fn render(&mut self, _universe: &Universe) -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into())
        }
    }

    fn fast_config(generations: u32) -> SimulationConfig {
        SimulationConfig {
            generations,
            delay: Duration::ZERO,
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn test_run_renders_every_generation() {
        let mut universe = Universe::new(8).unwrap();
        universe.populate();
        let mut simulation = Simulation::new(universe, Recorder::default(), fast_config(10));
        simulation.run().unwrap();

        let (universe, recorder) = simulation.into_parts();
        assert_eq!(universe.generation(), 10);
        let generations: Vec<u64> = recorder.frames.iter().map(|(g, _)| *g).collect();
        assert_eq!(generations, (1..=10).collect::<Vec<_>>());
        assert_eq!(recorder.frames.last().unwrap().1, universe.alive_count());
    }

    #[test]
    fn test_zero_generations_renders_nothing() {
        let universe = Universe::new(4).unwrap();
        let mut simulation = Simulation::new(universe, Recorder::default(), fast_config(0));
        simulation.run().unwrap();
        let (universe, recorder) = simulation.into_parts();
        assert_eq!(universe.generation(), 0);
        assert!(recorder.frames.is_empty());
    }

    #[test]
    fn test_render_error_stops_run() {
        let universe = Universe::new(4).unwrap();
        let mut simulation = Simulation::new(universe, Failing, fast_config(5));
        assert!(matches!(simulation.run(), Err(Error::Io(_))));
        assert_eq!(simulation.universe().generation(), 1);
    }

    #[test]
    fn test_terminal_run_output() {
        let mut universe = Universe::new(3).unwrap();
        universe.set(1, 1, Cell::Alive);
        let renderer = TerminalRenderer::new(Vec::new()).with_clear_screen(false);
        let mut simulation = Simulation::new(universe, renderer, fast_config(2));
        simulation.run().unwrap();
        let (_, renderer) = simulation.into_parts();
        let output = String::from_utf8(renderer.into_inner()).unwrap();
        let expected = "Generation: #1\nAlive: 0\n   \n   \n   \n\
                        Generation: #2\nAlive: 0\n   \n   \n   \n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_seed_with_pattern() {
        let mut universe = Universe::new(10).unwrap();
        let config = SimulationConfig {
            pattern: Some("block".to_string()),
            ..SimulationConfig::default()
        };
        seed_universe(&mut universe, &config).unwrap();
        assert_eq!(universe.alive_count(), 4);
        assert!(universe.is_alive(4, 4) && universe.is_alive(5, 5));
    }

    #[test]
    fn test_seed_is_reproducible() {
        let config = SimulationConfig {
            seed: Some(99),
            ..SimulationConfig::default()
        };
        let mut a = Universe::new(12).unwrap();
        let mut b = Universe::new(12).unwrap();
        seed_universe(&mut a, &config).unwrap();
        seed_universe(&mut b, &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_seed_unknown_pattern() {
        let mut universe = Universe::new(5).unwrap();
        let config = SimulationConfig {
            pattern: Some("nope".to_string()),
            ..SimulationConfig::default()
        };
        assert!(matches!(seed_universe(&mut universe, &config), Err(Error::UnknownPattern(_))));
        assert_eq!(universe.alive_count(), 0);
    }
}
