use bevy_ecs::system::RunSystemOnce;
use coco_park::{
    events::{GameCommand, GameEvent},
    systems::{audio_system, input_system, AudioEvent, AudioQueue, AudioState, GlobalState},
};
use bevy_ecs::event::Events;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;
use strum::IntoEnumIterator;

mod common;

#[test]
fn test_game_command_to_game_event_conversion() {
    let event: GameEvent = GameCommand::Start.into();
    assert_eq!(event, GameEvent::Command(GameCommand::Start));
}

#[test]
fn test_audio_cue_names() {
    let names: Vec<&'static str> = AudioEvent::iter().map(Into::into).collect();
    assert_eq!(names, vec!["pop", "win", "step", "bark", "coin"]);
    assert_that(&AudioEvent::Coin.to_string()).is_equal_to("coin".to_string());
}

#[test]
fn test_audio_system_queues_cues() {
    let mut world = common::create_test_world();
    {
        let mut events = world.resource_mut::<Events<AudioEvent>>();
        events.send(AudioEvent::Pop);
        events.send(AudioEvent::Coin);
    }

    world.run_system_once(audio_system).expect("System should run successfully");
    assert_that(&world.resource::<AudioQueue>().0).is_equal_to(vec![AudioEvent::Pop, AudioEvent::Coin]);
}

#[test]
fn test_audio_system_drops_cues_when_muted() {
    let mut world = common::create_test_world();
    world.insert_resource(AudioState { muted: true });
    world.resource_mut::<Events<AudioEvent>>().send(AudioEvent::Win);

    world.run_system_once(audio_system).expect("System should run successfully");
    assert_that(&world.resource::<AudioQueue>().0).is_empty();
}

#[test]
fn test_input_system_mute_and_exit() {
    let mut world = common::create_test_world();
    common::send_command(&mut world, GameCommand::MuteAudio);
    common::send_command(&mut world, GameCommand::Exit);

    world.run_system_once(input_system).expect("System should run successfully");

    assert_that(&world.resource::<AudioState>().muted).is_true();
    assert_that(&world.resource::<GlobalState>().exit).is_true();
}
