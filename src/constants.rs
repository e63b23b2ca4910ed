//! This module contains all the constants used in the game.

use std::time::Duration;

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// Movement and actor tuning.
pub mod mechanics {
    use glam::Vec3;

    /// Distance below which an actor counts as having reached its target.
    ///
    /// Shared by the steering pass, the gait, ambient re-targeting and the renderer.
    pub const ARRIVAL_THRESHOLD: f32 = 0.5;

    /// Sought NPC running speed, in world units per second.
    pub const SOUGHT_NPC_SPEED: f32 = 7.0;
    /// Ambient NPC walking speed, in world units per second.
    pub const AMBIENT_NPC_SPEED: f32 = 1.5;

    /// Chance per frame that an ambient NPC standing at its target picks a new one.
    pub const AMBIENT_RETARGET_CHANCE: f64 = 0.005;
    /// Half-width of the square (centred on the origin) that ambient NPCs wander in.
    pub const AMBIENT_WANDER_HALF_EXTENT: f32 = 15.0;

    /// Where the sought NPC trots to when the park first loads.
    pub const SOUGHT_NPC_START_TARGET: Vec3 = Vec3::new(2.0, 0.0, 2.0);

    /// Fixed spawn points for the first ambient NPCs; any extra ones spawn randomly.
    pub const AMBIENT_NPC_SPAWNS: [Vec3; 3] = [
        Vec3::new(3.0, 0.0, 5.0),
        Vec3::new(-4.0, 0.0, -5.0),
        Vec3::new(8.0, 0.0, -2.0),
    ];

    /// Upper bound accepted for `GameConfig::ambient_npcs`.
    pub const MAX_AMBIENT_NPCS: usize = 16;

    /// Seconds between footstep cues while the sought NPC is running.
    pub const STEP_CADENCE: f64 = 0.5;

    /// Gait (leg swing) rate and amplitude for the sought NPC.
    pub const SOUGHT_GAIT_RATE: f32 = 25.0;
    pub const SOUGHT_GAIT_AMPLITUDE: f32 = 0.6;
    /// Gait (leg swing) rate and amplitude for ambient NPCs.
    pub const AMBIENT_GAIT_RATE: f32 = 10.0;
    pub const AMBIENT_GAIT_AMPLITUDE: f32 = 0.5;
}

/// Phase durations and the countdown formula.
pub mod timing {
    /// How long the sought NPC gets to hide, in simulated seconds.
    pub const HIDING_DURATION: f32 = 4.0;
    /// How long a hint lasts before the search resumes, in simulated seconds.
    pub const HINT_DURATION: f32 = 1.5;

    pub const COUNTDOWN_BASE: u32 = 45;
    pub const COUNTDOWN_PER_LEVEL: u32 = 2;
    pub const COUNTDOWN_MIN: u32 = 15;

    /// Length of the search countdown for a level: `max(15, 45 - 2 * level)`.
    pub const fn countdown_for_level(level: u32) -> u32 {
        let scaled = COUNTDOWN_BASE.saturating_sub(COUNTDOWN_PER_LEVEL.saturating_mul(level));
        if scaled > COUNTDOWN_MIN {
            scaled
        } else {
            COUNTDOWN_MIN
        }
    }
}

/// Procedural scenery.
pub mod scenery {
    use std::ops::Range;

    pub const TREES_BASE: usize = 25;
    pub const TREES_PER_LEVEL: usize = 5;
    /// Trees per rock.
    pub const TREES_PER_ROCK: f32 = 1.5;

    /// Side length of the scenery square at level 0; grows per level.
    pub const FIELD_BASE: f32 = 60.0;
    pub const FIELD_PER_LEVEL: f32 = 2.0;

    pub const TREE_SCALE: Range<f32> = 1.0..2.0;
    pub const ROCK_SCALE: Range<f32> = 0.8..1.8;

    /// Hiding offset from a landmark, as a multiple of its scale.
    pub const TREE_HIDING_RADIUS: f32 = 1.5;
    pub const ROCK_HIDING_RADIUS: f32 = 1.2;

    pub fn tree_count(level: u32) -> usize {
        TREES_BASE + TREES_PER_LEVEL * level as usize
    }

    pub fn rock_count(level: u32) -> usize {
        (tree_count(level) as f32 / TREES_PER_ROCK).round() as usize
    }

    /// Half the side length of the square the level's scenery is scattered over.
    pub fn field_half_extent(level: u32) -> f32 {
        (FIELD_BASE + FIELD_PER_LEVEL * level as f32) / 2.0
    }
}

/// Bonus pickups.
pub mod collectibles {
    pub const BATCH_SIZE: usize = 4;
    pub const PICKUP_SCORE: u32 = 50;
    /// Seconds added to the countdown per pickup.
    pub const PICKUP_TIME_BONUS: u32 = 5;
}

pub mod scoring {
    pub const LEVEL_COMPLETE_BONUS: u32 = 100;
}
