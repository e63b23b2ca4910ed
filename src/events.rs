use bevy_ecs::prelude::*;
use glam::{Vec2, Vec3};

use crate::systems::{CollectibleId, GamePhase};

/// What a pointer or tap landed on, as resolved by the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PickTarget {
    /// A point on the ground plane.
    Ground(Vec3),
    /// An animate actor (the sought NPC or an ambient NPC).
    Entity(Entity),
    /// A bonus pickup.
    Collectible(CollectibleId),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameCommand {
    /// Begin a round from the idle screen.
    Start,
    RequestHint,
    /// Move on to the next level after a win.
    Advance,
    /// Start over at level 1 after a loss.
    Restart,
    /// Leave a finished round for the idle screen.
    ReturnToMenu,
    /// Abandon whatever is happening and go back to the idle screen.
    Reset,
    Pick(PickTarget),
    /// Normalized camera/avatar panning vector, passed through untouched.
    SetMovement(Vec2),
    TogglePause,
    MuteAudio,
    Exit,
}

#[derive(Event, Clone, Copy, Debug, PartialEq)]
pub enum GameEvent {
    Command(GameCommand),
}

impl From<GameCommand> for GameEvent {
    fn from(command: GameCommand) -> Self {
        GameEvent::Command(command)
    }
}

/// Emitted once for every phase transition, in order.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseChanged {
    pub from: GamePhase,
    pub to: GamePhase,
}
