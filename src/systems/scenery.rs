//! Procedural park scenery: the trees and rocks the sought NPC hides behind.

use bevy_ecs::resource::Resource;
use glam::Vec2;
use rand::Rng;
use tracing::debug;

use crate::constants::scenery::{field_half_extent, rock_count, tree_count, ROCK_SCALE, TREE_SCALE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneryKind {
    Tree,
    Rock,
}

/// A decorative landmark. Landmarks are not colliders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneryItem {
    pub kind: SceneryKind,
    /// Ground coordinate, `x` and `z` in world space.
    pub position: Vec2,
    pub scale: f32,
}

/// Builds the landmark set for `level`: all trees first, then all rocks.
pub fn generate_scenery(level: u32, rng: &mut impl Rng) -> Vec<SceneryItem> {
    let half = field_half_extent(level);
    let trees = tree_count(level);
    let rocks = rock_count(level);

    let mut items = Vec::with_capacity(trees + rocks);
    for (kind, count) in [(SceneryKind::Tree, trees), (SceneryKind::Rock, rocks)] {
        let scale_range = match kind {
            SceneryKind::Tree => TREE_SCALE,
            SceneryKind::Rock => ROCK_SCALE,
        };
        for _ in 0..count {
            items.push(SceneryItem {
                kind,
                position: Vec2::new(rng.random_range(-half..half), rng.random_range(-half..half)),
                scale: rng.random_range(scale_range.clone()),
            });
        }
    }

    items
}

/// The current level's scenery, cached until the level changes.
#[derive(Resource, Debug, Default)]
pub struct Scenery {
    level: Option<u32>,
    items: Vec<SceneryItem>,
}

impl Scenery {
    /// Makes sure the cached set belongs to `level`, regenerating it wholesale if not.
    ///
    /// Returns `true` when a new set was generated.
    pub fn ensure(&mut self, level: u32, rng: &mut impl Rng) -> bool {
        if self.level == Some(level) {
            return false;
        }
        self.items = generate_scenery(level, rng);
        self.level = Some(level);
        debug!(level, items = self.items.len(), "Generated scenery");
        true
    }

    pub fn level(&self) -> Option<u32> {
        self.level
    }

    pub fn items(&self) -> &[SceneryItem] {
        &self.items
    }
}
