use bevy_ecs::{bundle::Bundle, component::Component, resource::Resource};
use glam::Vec3;
use rand::{rngs::SmallRng, SeedableRng};

use crate::constants::mechanics::{
    AMBIENT_GAIT_AMPLITUDE, AMBIENT_GAIT_RATE, ARRIVAL_THRESHOLD, SOUGHT_GAIT_AMPLITUDE, SOUGHT_GAIT_RATE,
};
use crate::systems::state::GamePhase;

/// World-space position of an actor. The ground plane is `y = 0`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Position(pub Vec3);

/// Yaw in radians, measured from +Z towards +X.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Heading(pub f32);

/// Where an actor is headed and how fast it gets there.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Steering {
    pub target: Vec3,
    pub speed: f32,
}

/// A tag component for the NPC the player is looking for.
#[derive(Component, Debug, Default)]
pub struct SoughtNpc;

/// A background NPC that wanders around the park.
#[derive(Component, Debug, Clone, Copy)]
pub struct AmbientNpc {
    /// Index into the renderer's outfit palette.
    pub palette: u8,
}

#[derive(Bundle)]
pub struct SoughtNpcBundle {
    pub npc: SoughtNpc,
    pub position: Position,
    pub heading: Heading,
    pub steering: Steering,
}

#[derive(Bundle)]
pub struct AmbientNpcBundle {
    pub npc: AmbientNpc,
    pub position: Position,
    pub heading: Heading,
    pub steering: Steering,
}

/// Whether an actor is still on its way. Always derived from the distance to
/// the target, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementState {
    Idle,
    Moving,
}

impl MovementState {
    pub fn of(position: Vec3, target: Vec3) -> Self {
        if position.distance(target) > ARRIVAL_THRESHOLD {
            MovementState::Moving
        } else {
            MovementState::Idle
        }
    }

    pub fn is_moving(self) -> bool {
        self == MovementState::Moving
    }
}

/// The sought NPC's expression, which follows the game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Normal,
    /// Found: the NPC lost the round.
    Sad,
    /// Not found in time: the NPC won the round.
    Happy,
    /// Barking to give away its position.
    SeekingHint,
}

impl Mood {
    pub fn for_phase(phase: GamePhase) -> Self {
        match phase {
            GamePhase::Won => Mood::Sad,
            GamePhase::Lost => Mood::Happy,
            GamePhase::Hint => Mood::SeekingHint,
            GamePhase::Idle | GamePhase::Hiding | GamePhase::Seeking => Mood::Normal,
        }
    }
}

/// Leg swing for the walk cycle, in radians. Zero when standing still.
pub fn gait_swing(movement: MovementState, elapsed: f64, sought: bool) -> f32 {
    if !movement.is_moving() {
        return 0.0;
    }
    let (rate, amplitude) = if sought {
        (SOUGHT_GAIT_RATE, SOUGHT_GAIT_AMPLITUDE)
    } else {
        (AMBIENT_GAIT_RATE, AMBIENT_GAIT_AMPLITUDE)
    };
    (elapsed as f32 * rate).sin() * amplitude
}

#[derive(Resource, Debug)]
pub struct GlobalState {
    pub exit: bool,
}

/// Length of the current frame in seconds, already sanitized by `Game::tick`.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct DeltaTime {
    pub seconds: f32,
}

/// The one random source every system draws from.
#[derive(Resource, Debug)]
pub struct GameRng(pub SmallRng);

impl GameRng {
    /// Seeded generators replay the same session; unseeded ones draw from the thread RNG once.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => GameRng(SmallRng::seed_from_u64(seed)),
            None => GameRng(SmallRng::from_rng(&mut rand::rng())),
        }
    }
}
