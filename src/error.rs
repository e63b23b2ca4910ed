//! Centralized error types for the game.
//!
//! The simulation itself never fails a tick; these errors cover configuration
//! problems and the degraded paths that systems report as events.

use bevy_ecs::event::Event;

/// Main error type for the game.
///
/// This is the primary error type that should be used in public APIs. Systems
/// also write it as an event when they fall back to a no-op.
#[derive(thiserror::Error, Debug, Event)]
pub enum GameError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Entity error: {0}")]
    Entity(#[from] EntityError),
}

/// Errors raised while validating a `GameConfig`. Malformed flags are rejected by `clap` before this.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Too many ambient NPCs: {requested} (at most {max})")]
    TooManyAmbientNpcs { requested: usize, max: usize },
}

/// Errors related to the actors in the world.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum EntityError {
    #[error("The sought NPC is missing from the world")]
    SoughtNpcMissing,
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
