use bevy_ecs::resource::Resource;
use tracing::debug;

use crate::constants::{collectibles::PICKUP_SCORE, scoring::LEVEL_COMPLETE_BONUS};

/// Why points were awarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreReason {
    Pickup,
    LevelComplete,
}

impl ScoreReason {
    pub fn points(self) -> u32 {
        match self {
            ScoreReason::Pickup => PICKUP_SCORE,
            ScoreReason::LevelComplete => LEVEL_COMPLETE_BONUS,
        }
    }
}

/// Session score. Only ever grows, except for a full restart.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResource(pub u32);

impl ScoreResource {
    pub fn award(&mut self, reason: ScoreReason) {
        self.0 = self.0.saturating_add(reason.points());
        debug!(?reason, points = reason.points(), total = self.0, "Score awarded");
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }
}
