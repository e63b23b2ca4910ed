use std::f32::consts::TAU;

use glam::Vec3;
use rand::{seq::IndexedRandom, Rng};

use crate::constants::scenery::{ROCK_HIDING_RADIUS, TREE_HIDING_RADIUS};
use crate::systems::scenery::{SceneryItem, SceneryKind};

impl SceneryKind {
    /// How far behind a landmark of this kind the NPC hides, per unit of scale.
    pub fn hiding_radius(self) -> f32 {
        match self {
            SceneryKind::Tree => TREE_HIDING_RADIUS,
            SceneryKind::Rock => ROCK_HIDING_RADIUS,
        }
    }
}

/// Picks a landmark uniformly and returns a ground point just behind it.
///
/// Returns `None` for an empty set, in which case the caller keeps the current target.
pub fn select_hiding_spot(items: &[SceneryItem], rng: &mut impl Rng) -> Option<Vec3> {
    let item = items.choose(rng)?;
    let angle = rng.random_range(0.0..TAU);
    let radius = item.kind.hiding_radius() * item.scale;

    Some(Vec3::new(
        item.position.x + angle.cos() * radius,
        0.0,
        item.position.y + angle.sin() * radius,
    ))
}
