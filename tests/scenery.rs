use coco_park::systems::{generate_scenery, Scenery, SceneryKind};
use pretty_assertions::assert_eq;
use rand::{rngs::SmallRng, SeedableRng};
use speculoos::prelude::*;

#[test]
fn test_generate_scenery_counts_per_level() {
    let mut rng = SmallRng::seed_from_u64(1);
    for level in 1..=12u32 {
        let items = generate_scenery(level, &mut rng);
        let trees = items.iter().filter(|item| item.kind == SceneryKind::Tree).count();
        let rocks = items.iter().filter(|item| item.kind == SceneryKind::Rock).count();

        let expected_trees = 25 + 5 * level as usize;
        assert_eq!(trees, expected_trees, "tree count at level {level}");
        assert_eq!(rocks, (expected_trees as f32 / 1.5).round() as usize, "rock count at level {level}");
    }
}

#[test]
fn test_generate_scenery_stays_inside_level_square() {
    let mut rng = SmallRng::seed_from_u64(2);
    for level in [1u32, 5, 20] {
        let half = (60.0 + 2.0 * level as f32) / 2.0;
        for item in generate_scenery(level, &mut rng) {
            assert_that(&item.position.x.abs()).is_less_than_or_equal_to(half);
            assert_that(&item.position.y.abs()).is_less_than_or_equal_to(half);
        }
    }
}

#[test]
fn test_generate_scenery_scale_ranges() {
    let mut rng = SmallRng::seed_from_u64(3);
    for item in generate_scenery(4, &mut rng) {
        let (low, high) = match item.kind {
            SceneryKind::Tree => (1.0, 2.0),
            SceneryKind::Rock => (0.8, 1.8),
        };
        assert_that(&item.scale).is_greater_than_or_equal_to(low);
        assert_that(&item.scale).is_less_than(high);
    }
}

#[test]
fn test_scenery_is_cached_per_level() {
    let mut rng = SmallRng::seed_from_u64(4);
    let mut scenery = Scenery::default();

    assert_that(&scenery.items().is_empty()).is_true();
    assert_that(&scenery.ensure(1, &mut rng)).is_true();
    let first = scenery.items().to_vec();

    assert_that(&scenery.ensure(1, &mut rng)).is_false();
    assert_eq!(scenery.items(), first.as_slice());

    assert_that(&scenery.ensure(2, &mut rng)).is_true();
    assert_that(&scenery.level()).is_equal_to(Some(2));
    assert_that(&scenery.items().len()).is_equal_to(35 + 23);
}
