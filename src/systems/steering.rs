//! Straight-line steering towards a target, shared by every animate actor.

use bevy_ecs::{
    event::EventWriter,
    query::{Has, With},
    system::{Query, Res, ResMut},
};
use glam::Vec3;
use rand::Rng;
use tracing::trace;

use crate::constants::mechanics::{AMBIENT_RETARGET_CHANCE, AMBIENT_WANDER_HALF_EXTENT, STEP_CADENCE};
use crate::systems::{
    audio::AudioEvent,
    clock::SimClock,
    components::{AmbientNpc, DeltaTime, GameRng, Heading, MovementState, Position, SoughtNpc, Steering},
};

/// Result of one steering step for a moving actor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteerStep {
    pub position: Vec3,
    pub heading: f32,
}

/// Moves `position` towards `target` at `speed` for `dt` seconds.
///
/// Returns `None` once the actor is within the arrival threshold. The step is not
/// clamped to the remaining distance, so a large `speed * dt` can overshoot.
pub fn steer(position: Vec3, target: Vec3, speed: f32, dt: f32) -> Option<SteerStep> {
    if !MovementState::of(position, target).is_moving() {
        return None;
    }

    let direction = (target - position).normalize_or_zero();
    Some(SteerStep {
        position: position + direction * speed * dt,
        heading: direction.x.atan2(direction.z),
    })
}

/// A random wander target inside the ambient square, on the ground.
pub fn random_wander_target(rng: &mut impl Rng) -> Vec3 {
    let half = AMBIENT_WANDER_HALF_EXTENT;
    Vec3::new(rng.random_range(-half..half), 0.0, rng.random_range(-half..half))
}

/// Advances every actor one frame towards its target.
pub fn steering_system(
    delta_time: Res<DeltaTime>,
    clock: Res<SimClock>,
    mut actors: Query<(&mut Position, &mut Heading, &Steering, Has<SoughtNpc>)>,
    mut audio_events: EventWriter<AudioEvent>,
) {
    let step_due = clock.crossed(STEP_CADENCE);

    for (mut position, mut heading, steering, sought) in actors.iter_mut() {
        let Some(step) = steer(position.0, steering.target, steering.speed, delta_time.seconds) else {
            continue;
        };
        position.0 = step.position;
        heading.0 = step.heading;

        if sought && step_due {
            audio_events.write(AudioEvent::Step);
        }
    }
}

/// Gives ambient NPCs standing at their target a small chance per frame to pick
/// a new one, so they idle for a while between walks.
pub fn ambient_wander_system(
    mut rng: ResMut<GameRng>,
    mut npcs: Query<(&Position, &mut Steering), With<AmbientNpc>>,
) {
    for (position, mut steering) in npcs.iter_mut() {
        if MovementState::of(position.0, steering.target).is_moving() {
            continue;
        }
        if rng.0.random_bool(AMBIENT_RETARGET_CHANCE) {
            steering.target = random_wander_target(&mut rng.0);
            trace!(target = ?steering.target, "Ambient NPC picked a new wander target");
        }
    }
}
