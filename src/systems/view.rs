//! What the renderer, HUD and host get to see.

use bevy_ecs::{
    entity::Entity,
    event::EventReader,
    resource::Resource,
    system::ResMut,
};
use glam::Vec3;
use tracing::warn;

use crate::error::GameError;
use crate::events::PhaseChanged;
use crate::systems::{collectible::Collectible, components::Mood, components::MovementState, scenery::SceneryItem, state::GamePhase};

/// The HUD's view of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSession {
    pub phase: GamePhase,
    pub level: u32,
    pub score: u32,
    pub seconds_remaining: u32,
}

impl GameSession {
    pub fn hint_active(&self) -> bool {
        self.phase == GamePhase::Hint
    }

    /// The player is looking away while the NPC hides.
    pub fn blindfolded(&self) -> bool {
        self.phase == GamePhase::Hiding
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorRole {
    Sought,
    Ambient { palette: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorView {
    pub entity: Entity,
    pub role: ActorRole,
    pub position: Vec3,
    pub target: Vec3,
    pub heading: f32,
    pub movement: MovementState,
    /// Only the sought NPC has a mood.
    pub mood: Option<Mood>,
    /// Leg swing for the walk cycle, in radians.
    pub gait: f32,
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub session: GameSession,
    pub actors: Vec<ActorView>,
    pub scenery: Vec<SceneryItem>,
    pub collectibles: Vec<Collectible>,
}

impl GameSnapshot {
    pub fn sought(&self) -> Option<&ActorView> {
        self.actors.iter().find(|actor| actor.role == ActorRole::Sought)
    }
}

/// Phase changes since the host last looked.
#[derive(Resource, Debug, Default)]
pub struct PhaseLog(pub Vec<PhaseChanged>);

pub fn phase_log_system(mut events: EventReader<PhaseChanged>, mut log: ResMut<PhaseLog>) {
    log.0.extend(events.read().copied());
}

pub fn error_log_system(mut errors: EventReader<GameError>) {
    for error in errors.read() {
        warn!(%error, "Degraded frame");
    }
}
