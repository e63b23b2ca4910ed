//! Input boundary.
//!
//! Raw key and touch handling belongs to the host, which submits `GameCommand`s.
//! This module applies the commands that don't touch game flow.

use bevy_ecs::{
    event::EventReader,
    resource::Resource,
    system::ResMut,
};
use glam::Vec2;
use tracing::{debug, info};

use crate::{
    events::{GameCommand, GameEvent},
    systems::{audio::AudioState, components::GlobalState},
};

/// The host's normalized panning vector, `[-1, 1]` per axis. Stored as given;
/// nothing in the simulation reads it.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct MovementInput(pub Vec2);

pub fn input_system(
    mut events: EventReader<GameEvent>,
    mut movement: ResMut<MovementInput>,
    mut audio_state: ResMut<AudioState>,
    mut state: ResMut<GlobalState>,
) {
    for event in events.read() {
        match event {
            GameEvent::Command(GameCommand::SetMovement(vector)) => {
                movement.0 = *vector;
            }
            GameEvent::Command(GameCommand::MuteAudio) => {
                audio_state.muted = !audio_state.muted;
                info!(muted = audio_state.muted, "Audio mute toggled");
            }
            GameEvent::Command(GameCommand::Exit) => {
                debug!("Exit requested");
                state.exit = true;
            }
            _ => {}
        }
    }
}
