//! Runtime configuration: defaults, then environment, then command line.
//!
//! Environment variables:
//!
//! - `MATCH3_WIDTH` / `MATCH3_HEIGHT`: board size (default 8x8)
//! - `MATCH3_SEED`: seed for the random piece source (default 1)
//! - `MATCH3_KINDS`: number of gem kinds, 2..=6 (default 6)
//!
//! Command line:
//!
//! ```text
//! match3 [play] [--width N] [--height N] [--seed N] [--kinds N]
//! match3 trace [--moves N] [--width N] [--height N] [--seed N] [--kinds N]
//! ```

use crate::core::{BoardError, Game, RandomSource};
use crate::types::{Gem, DEFAULT_HEIGHT, DEFAULT_KINDS, DEFAULT_WIDTH};

/// Moves played by `trace` when `--moves` is not given.
pub const DEFAULT_TRACE_MOVES: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name}: invalid value {value:?}")]
    InvalidValue { name: String, value: String },

    #[error("{name} must be in {min}..={max}, got {value}")]
    OutOfRange {
        name: String,
        value: usize,
        min: usize,
        max: usize,
    },

    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("unknown argument: {0}")]
    UnknownArgument(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub seed: u32,
    pub kinds: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: 1,
            kinds: DEFAULT_KINDS,
        }
    }
}

impl GameConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(v) = lookup("MATCH3_WIDTH") {
            config.width = parse_num("MATCH3_WIDTH", &v)?;
        }
        if let Some(v) = lookup("MATCH3_HEIGHT") {
            config.height = parse_num("MATCH3_HEIGHT", &v)?;
        }
        if let Some(v) = lookup("MATCH3_SEED") {
            config.seed = parse_num("MATCH3_SEED", &v)?;
        }
        if let Some(v) = lookup("MATCH3_KINDS") {
            config.kinds = parse_num("MATCH3_KINDS", &v)?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("width", self.width, 1, 64)?;
        check_range("height", self.height, 1, 64)?;
        check_range("kinds", self.kinds, 2, Gem::ALL.len())?;
        Ok(())
    }

    /// A settled board ready for play.
    pub fn new_game(&self) -> Result<Game<Gem, RandomSource<Gem>>, BoardError> {
        let source = RandomSource::gems(self.seed, self.kinds);
        let mut game = Game::new(source, self.width, self.height)?;
        game.settle()?;
        Ok(game)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Interactive terminal game
    Play,
    /// Headless autoplay printing the effect log as JSON lines
    Trace { moves: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cli {
    pub command: Command,
    pub config: GameConfig,
}

/// Parse arguments (without the program name) on top of `base`.
pub fn parse_args(args: &[String], base: GameConfig) -> Result<Cli, ConfigError> {
    let mut config = base;
    let mut rest = args;
    let mut trace = false;
    let mut moves = DEFAULT_TRACE_MOVES;

    match rest.first().map(String::as_str) {
        Some("play") => rest = &rest[1..],
        Some("trace") => {
            trace = true;
            rest = &rest[1..];
        }
        _ => {}
    }

    let mut i = 0usize;
    while i < rest.len() {
        let flag = rest[i].as_str();
        let value = || {
            rest.get(i + 1)
                .map(String::as_str)
                .ok_or_else(|| ConfigError::MissingValue(flag.to_string()))
        };
        match flag {
            "--width" => config.width = parse_num(flag, value()?)?,
            "--height" => config.height = parse_num(flag, value()?)?,
            "--seed" => config.seed = parse_num(flag, value()?)?,
            "--kinds" => config.kinds = parse_num(flag, value()?)?,
            "--moves" if trace => moves = parse_num(flag, value()?)?,
            other => return Err(ConfigError::UnknownArgument(other.to_string())),
        }
        i += 2;
    }

    config.validate()?;
    let command = if trace {
        Command::Trace { moves }
    } else {
        Command::Play
    };
    Ok(Cli { command, config })
}

fn parse_num<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name: name.to_string(),
        value: value.to_string(),
    })
}

fn check_range(name: &str, value: usize, min: usize, max: usize) -> Result<(), ConfigError> {
    if value < min || value > max {
        return Err(ConfigError::OutOfRange {
            name: name.to_string(),
            value,
            min,
            max,
        });
    }
    Ok(())
}
