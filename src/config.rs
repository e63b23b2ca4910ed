//! Runtime configuration and command-line parsing.

use clap::Parser;

use crate::constants::mechanics::MAX_AMBIENT_NPCS;
use crate::error::ConfigError;

/// Settings for a single `Game`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Seed for the session RNG. `None` seeds from the thread RNG.
    pub seed: Option<u64>,
    pub ambient_npcs: usize,
    pub muted: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            ambient_npcs: 3,
            muted: false,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ambient_npcs > MAX_AMBIENT_NPCS {
            return Err(ConfigError::TooManyAmbientNpcs {
                requested: self.ambient_npcs,
                max: MAX_AMBIENT_NPCS,
            });
        }
        Ok(())
    }
}

/// Settings for the headless runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppOptions {
    /// Stop after this many finished rounds. `None` runs until interrupted.
    pub rounds: Option<u32>,
}

/// Command-line flags for the headless runner.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "coco-park", version, about = "Hide-and-seek in the park, played by an autopilot")]
pub struct Cli {
    /// Seed for scenery, hiding spots, coins and wandering. Random when omitted.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Number of background NPCs wandering the park.
    #[arg(long, value_name = "COUNT", default_value_t = 3)]
    pub ambient: usize,

    /// Drop every audio cue.
    #[arg(long)]
    pub mute: bool,

    /// Exit after this many won or lost rounds.
    #[arg(long, value_name = "COUNT", value_parser = clap::value_parser!(u32).range(1..))]
    pub rounds: Option<u32>,
}

impl Cli {
    /// Splits the flags into game and runner settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::TooManyAmbientNpcs` if `--ambient` exceeds the limit.
    pub fn into_config(self) -> Result<(GameConfig, AppOptions), ConfigError> {
        let config = GameConfig {
            seed: self.seed,
            ambient_npcs: self.ambient,
            muted: self.mute,
        };
        config.validate()?;
        Ok((config, AppOptions { rounds: self.rounds }))
    }
}
