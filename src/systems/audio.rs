//! Audio boundary.
//!
//! The game only decides *which* cue plays and *when*; synthesis belongs to the
//! host. Cues collect in [`AudioQueue`] until the host drains them.

use bevy_ecs::{
    event::{Event, EventReader},
    resource::Resource,
    system::{Res, ResMut},
};
use strum_macros::{Display, EnumIter, IntoStaticStr};
use tracing::{debug, trace};

/// Resource for tracking audio state
#[derive(Resource, Debug, Clone, Default)]
pub struct AudioState {
    /// Whether audio is currently muted
    pub muted: bool,
}

/// Named sound cues.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum AudioEvent {
    /// Manual placement click, or poking the NPC when it isn't hiding.
    Pop,
    /// A round ended, either way.
    Win,
    /// A footstep while the sought NPC runs.
    Step,
    /// The hint.
    Bark,
    /// A collectible was picked up.
    Coin,
}

/// Cues waiting for the host, oldest first.
#[derive(Resource, Debug, Default)]
pub struct AudioQueue(pub Vec<AudioEvent>);

/// System that forwards audio cues to the host queue
pub fn audio_system(state: Res<AudioState>, mut queue: ResMut<AudioQueue>, mut events: EventReader<AudioEvent>) {
    for event in events.read() {
        if state.muted {
            debug!(cue = %event, "Skipping cue due to audio state");
            continue;
        }
        trace!(cue = %event, "Queueing audio cue");
        queue.0.push(*event);
    }
}
