//! Bonus pickups that grant points and extra search time.

use bevy_ecs::{
    event::{EventReader, EventWriter},
    resource::Resource,
    system::{Res, ResMut},
};
use glam::Vec3;
use rand::Rng;
use tracing::{debug, trace};

use crate::constants::{
    collectibles::{BATCH_SIZE, PICKUP_TIME_BONUS},
    scenery::field_half_extent,
};
use crate::events::{GameCommand, GameEvent, PickTarget};
use crate::systems::{
    audio::AudioEvent,
    score::{ScoreReason, ScoreResource},
    state::{GamePhase, SessionState},
    timer::Countdown,
};

pub type CollectibleId = u32;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collectible {
    pub id: CollectibleId,
    pub position: Vec3,
    pub active: bool,
}

/// The current batch of collectibles.
///
/// Ids are never reused for the lifetime of the game. Collected items stay in the
/// batch, inactive, until the next batch replaces it.
#[derive(Resource, Debug, Default)]
pub struct CollectibleSet {
    items: Vec<Collectible>,
    next_id: CollectibleId,
}

impl CollectibleSet {
    /// Replaces the batch with a fresh one scattered over the level's scenery square.
    pub fn respawn(&mut self, level: u32, rng: &mut impl Rng) {
        let half = field_half_extent(level);
        self.items.clear();
        for _ in 0..BATCH_SIZE {
            let id = self.next_id;
            self.next_id += 1;
            self.items.push(Collectible {
                id,
                position: Vec3::new(rng.random_range(-half..half), 0.0, rng.random_range(-half..half)),
                active: true,
            });
        }
        debug!(level, first_id = self.items.first().map(|c| c.id), count = BATCH_SIZE, "Spawned collectibles");
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Deactivates `id`. Returns `false` if it was unknown or already collected.
    pub fn collect(&mut self, id: CollectibleId) -> bool {
        match self.items.iter_mut().find(|c| c.id == id) {
            Some(item) if item.active => {
                item.active = false;
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, id: CollectibleId) -> Option<&Collectible> {
        self.items.iter().find(|c| c.id == id)
    }

    pub fn items(&self) -> &[Collectible] {
        &self.items
    }

    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|c| c.active).count()
    }
}

/// Handles collectible picks. Pickups only count during the search itself.
pub fn collectible_system(
    mut events: EventReader<GameEvent>,
    session: Res<SessionState>,
    mut collectibles: ResMut<CollectibleSet>,
    mut score: ResMut<ScoreResource>,
    mut countdown: ResMut<Countdown>,
    mut audio_events: EventWriter<AudioEvent>,
) {
    for event in events.read() {
        let GameEvent::Command(GameCommand::Pick(PickTarget::Collectible(id))) = event else {
            continue;
        };

        if session.phase != GamePhase::Seeking {
            trace!(id, phase = ?session.phase, "Ignoring collectible pick outside the search");
            continue;
        }

        if !collectibles.collect(*id) {
            trace!(id, "Collectible already collected or unknown");
            continue;
        }

        score.award(ScoreReason::Pickup);
        countdown.extend(PICKUP_TIME_BONUS);
        audio_events.write(AudioEvent::Coin);
        debug!(
            id,
            remaining = countdown.remaining(),
            left = collectibles.active_count(),
            "Collectible picked up"
        );
    }
}
