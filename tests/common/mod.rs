#![allow(dead_code)]

use bevy_ecs::{
    entity::Entity,
    event::Events,
    world::{Mut, World},
};
use glam::Vec3;
use coco_park::{
    config::GameConfig,
    error::GameError,
    events::{GameCommand, GameEvent, PhaseChanged},
    game::Game,
    systems::{
        AmbientNpc, AmbientNpcBundle, AudioEvent, AudioQueue, AudioState, CollectibleSet, Countdown, DeltaTime, GameRng,
        GlobalState, Heading, MovementInput, PauseState, PhaseLog, Position, Scenery, Scheduler, ScoreResource, SessionState,
        SimClock, SoughtNpc, SoughtNpcBundle, Steering,
    },
};

pub const SEED: u64 = 0xC0C0;

/// Frame length used by the scenario tests.
pub const FRAME: f32 = 0.5;

/// Creates a basic test world with required resources for ECS systems
pub fn create_test_world() -> World {
    let mut world = World::new();

    world.insert_resource(Events::<GameEvent>::default());
    world.insert_resource(Events::<AudioEvent>::default());
    world.insert_resource(Events::<PhaseChanged>::default());
    world.insert_resource(Events::<GameError>::default());

    world.insert_resource(GlobalState { exit: false });
    world.insert_resource(DeltaTime::default());
    world.insert_resource(SimClock::default());
    world.insert_resource(Scheduler::default());
    world.insert_resource(SessionState::default());
    world.insert_resource(PauseState::default());
    world.insert_resource(ScoreResource::default());
    world.insert_resource(Countdown::default());
    world.insert_resource(Scenery::default());
    world.insert_resource(CollectibleSet::default());
    world.insert_resource(GameRng::new(Some(SEED)));
    world.insert_resource(AudioState::default());
    world.insert_resource(AudioQueue::default());
    world.insert_resource(PhaseLog::default());
    world.insert_resource(MovementInput::default());

    world
}

pub fn spawn_sought_npc(world: &mut World, position: Vec3, target: Vec3) -> Entity {
    world
        .spawn(SoughtNpcBundle {
            npc: SoughtNpc,
            position: Position(position),
            heading: Heading::default(),
            steering: Steering { target, speed: 7.0 },
        })
        .id()
}

pub fn spawn_ambient_npc(world: &mut World, position: Vec3, target: Vec3) -> Entity {
    world
        .spawn(AmbientNpcBundle {
            npc: AmbientNpc { palette: 0 },
            position: Position(position),
            heading: Heading::default(),
            steering: Steering { target, speed: 1.5 },
        })
        .id()
}

pub fn send_command(world: &mut World, command: GameCommand) {
    world.resource_mut::<Events<GameEvent>>().send(command.into());
}

/// Audio events written since the events were last updated.
pub fn audio_events(world: &World) -> Vec<AudioEvent> {
    world
        .resource::<Events<AudioEvent>>()
        .iter_current_update_events()
        .copied()
        .collect()
}

pub fn phase_changes(world: &World) -> Vec<PhaseChanged> {
    world
        .resource::<Events<PhaseChanged>>()
        .iter_current_update_events()
        .copied()
        .collect()
}

pub fn set_clock(world: &mut World, elapsed: f64) {
    let mut clock = world.resource_mut::<SimClock>();
    clock.previous = clock.elapsed;
    clock.elapsed = elapsed;
}

pub fn seeded_game() -> Game {
    Game::new(GameConfig {
        seed: Some(SEED),
        ..GameConfig::default()
    })
    .expect("Game should build")
}

/// Ticks `game` in fixed frames until `seconds` of simulated time have passed.
pub fn advance(game: &mut Game, seconds: f32) {
    let frames = (seconds / FRAME).round() as u32;
    for _ in 0..frames {
        game.tick(FRAME);
    }
}

/// Starts a round and runs through the hiding phase. The game is seeking afterwards.
pub fn start_seeking(game: &mut Game) {
    game.submit(GameCommand::Start);
    game.tick(FRAME);
    advance(game, 4.0);
}

/// Lays out the scenery for `level` with the world's RNG.
pub fn ensure_scenery(world: &mut World, level: u32) {
    world.resource_scope(|world, mut rng: Mut<GameRng>| {
        world.resource_mut::<Scenery>().ensure(level, &mut rng.0);
    });
}

/// Drops queued commands so a fresh system run doesn't replay them.
pub fn clear_commands(world: &mut World) {
    world.resource_mut::<Events<GameEvent>>().clear();
}
