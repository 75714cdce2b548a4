//! Driver configuration.
//!
//! Defaults reproduce the classic terminal run: ten generations with half a
//! second between them. Each field can be overridden through a `LIFE_*`
//! environment variable.

use std::io::BufRead;
use std::str::FromStr;
use std::time::Duration;

use crate::domain::presets;
use crate::error::{Error, Result};

pub const DEFAULT_GENERATIONS: u32 = 10;
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

pub const GENERATIONS_VAR: &str = "LIFE_GENERATIONS";
pub const DELAY_MS_VAR: &str = "LIFE_DELAY_MS";
pub const SEED_VAR: &str = "LIFE_SEED";
pub const PATTERN_VAR: &str = "LIFE_PATTERN";
pub const NO_CLEAR_VAR: &str = "LIFE_NO_CLEAR";

/// Simulation driver configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of generations to run
    pub generations: u32,
    /// Pause between rendered generations
    pub delay: Duration,
    /// Seed for reproducible population; thread-local entropy when unset
    pub seed: Option<u64>,
    /// Preset to place instead of a random population
    pub pattern: Option<String>,
    /// Clear the terminal before each frame
    pub clear_screen: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            generations: DEFAULT_GENERATIONS,
            delay: DEFAULT_DELAY,
            seed: None,
            pattern: None,
            clear_screen: true,
        }
    }
}

impl SimulationConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup, falling back to
    /// defaults for missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(GENERATIONS_VAR) {
            config.generations = parse_var(GENERATIONS_VAR, value)?;
        }
        if let Some(value) = lookup(DELAY_MS_VAR) {
            config.delay = Duration::from_millis(parse_var(DELAY_MS_VAR, value)?);
        }
        if let Some(value) = lookup(SEED_VAR) {
            config.seed = Some(parse_var(SEED_VAR, value)?);
        }
        if let Some(name) = lookup(PATTERN_VAR) {
            if presets::by_name(name.trim()).is_none() {
                return Err(Error::UnknownPattern(name));
            }
            config.pattern = Some(name.trim().to_string());
        }
        if let Some(value) = lookup(NO_CLEAR_VAR) {
            config.clear_screen = !parse_flag(NO_CLEAR_VAR, value)?;
        }

        Ok(config)
    }
}

fn parse_var<T: FromStr>(key: &'static str, value: String) -> Result<T> {
    value.trim().parse().map_err(|_| Error::Config { key, value })
}

fn parse_flag(key: &'static str, value: String) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(Error::Config { key, value }),
    }
}

/// Parse the grid size from driver input. Only the first
/// whitespace-separated token is read; zero and negative values are
/// rejected by [`crate::Universe::with_signed_size`].
pub fn parse_size(input: &str) -> Result<i64> {
    let token = input
        .split_whitespace()
        .next()
        .ok_or_else(|| Error::InvalidInput("no grid size given".to_string()))?;
    token
        .parse()
        .map_err(|_| Error::InvalidInput(format!("grid size {token:?} is not an integer")))
}

/// Read the grid size from the first non-blank line of `reader`,
/// skipping leading empty and whitespace-only lines.
pub fn read_size<R: BufRead>(reader: R) -> Result<i64> {
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            return parse_size(&line);
        }
    }
    Err(Error::InvalidInput("no grid size given".to_string()))
}
