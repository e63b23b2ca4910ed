use coco_park::systems::{generate_scenery, select_hiding_spot, SceneryItem, SceneryKind};
use glam::{Vec2, Vec3};
use rand::{rngs::SmallRng, SeedableRng};
use speculoos::prelude::*;

fn ground_distance(spot: Vec3, item: &SceneryItem) -> f32 {
    Vec2::new(spot.x, spot.z).distance(item.position)
}

#[test]
fn test_empty_scenery_has_no_hiding_spot() {
    let mut rng = SmallRng::seed_from_u64(1);
    assert_that(&select_hiding_spot(&[], &mut rng)).is_none();
}

#[test]
fn test_hiding_spot_sits_behind_a_tree() {
    let mut rng = SmallRng::seed_from_u64(2);
    let tree = SceneryItem {
        kind: SceneryKind::Tree,
        position: Vec2::new(3.0, 4.0),
        scale: 2.0,
    };

    for _ in 0..50 {
        let spot = select_hiding_spot(&[tree], &mut rng).expect("one landmark is enough");
        assert_that(&spot.y).is_equal_to(0.0);
        assert_that(&ground_distance(spot, &tree)).is_close_to(3.0, 1e-4);
    }
}

#[test]
fn test_hiding_spot_sits_behind_a_rock() {
    let mut rng = SmallRng::seed_from_u64(3);
    let rock = SceneryItem {
        kind: SceneryKind::Rock,
        position: Vec2::new(-10.0, 2.0),
        scale: 1.5,
    };

    let spot = select_hiding_spot(&[rock], &mut rng).expect("one landmark is enough");
    assert_that(&ground_distance(spot, &rock)).is_close_to(1.8, 1e-4);
}

#[test]
fn test_hiding_spot_belongs_to_some_landmark() {
    let mut rng = SmallRng::seed_from_u64(4);
    let items = generate_scenery(3, &mut rng);

    for _ in 0..100 {
        let spot = select_hiding_spot(&items, &mut rng).expect("scenery is never empty");
        let matched = items.iter().any(|item| {
            (ground_distance(spot, item) - item.kind.hiding_radius() * item.scale).abs() < 1e-3
        });
        assert_that(&matched).is_true();
    }
}
