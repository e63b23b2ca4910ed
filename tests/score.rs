use coco_park::systems::{ScoreReason, ScoreResource};
use speculoos::prelude::*;

#[test]
fn test_score_reasons() {
    assert_that(&ScoreReason::Pickup.points()).is_equal_to(50);
    assert_that(&ScoreReason::LevelComplete.points()).is_equal_to(100);
}

#[test]
fn test_award_accumulates() {
    let mut score = ScoreResource::default();
    score.award(ScoreReason::Pickup);
    score.award(ScoreReason::Pickup);
    score.award(ScoreReason::LevelComplete);
    assert_that(&score.0).is_equal_to(200);

    score.reset();
    assert_that(&score.0).is_equal_to(0);
}

#[test]
fn test_award_saturates() {
    let mut score = ScoreResource(u32::MAX - 10);
    score.award(ScoreReason::LevelComplete);
    assert_that(&score.0).is_equal_to(u32::MAX);
}
