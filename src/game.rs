//! This module contains the main game logic and state.

use bevy_ecs::entity::Entity;
use bevy_ecs::event::{EventRegistry, Events};
use bevy_ecs::query::With;
use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs, Schedule, SystemSet};
use bevy_ecs::system::Res;
use bevy_ecs::world::{Mut, World};
use tracing::{debug, info, trace, warn};

use crate::config::GameConfig;
use crate::constants::mechanics::{AMBIENT_NPC_SPAWNS, AMBIENT_NPC_SPEED, SOUGHT_NPC_SPEED, SOUGHT_NPC_START_TARGET};
use crate::error::{EntityError, GameError, GameResult};
use crate::events::{GameCommand, GameEvent, PhaseChanged};
use crate::formatter;
use crate::systems::{
    ambient_wander_system, audio_system, clock_system, collectible_system, countdown_system, error_log_system,
    gait_swing, handle_pause_command, input_system, phase_log_system, random_wander_target, state_system, steering_system,
    ActorRole, ActorView, AmbientNpc, AmbientNpcBundle, AudioEvent, AudioQueue, AudioState, CollectibleSet, Countdown,
    DeltaTime, GameRng, GameSession, GameSnapshot, GlobalState, Heading, Mood, MovementInput, MovementState, PauseState,
    PhaseLog, Position, Scenery, Scheduler, ScoreResource, SessionState, SimClock, SoughtNpc, SoughtNpcBundle, Steering,
};

/// System set for all gameplay systems to ensure they run after input processing
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
enum GameplaySet {
    /// Host commands that work even while paused
    Input,
    /// Clock and countdown
    Time,
    /// Phase transitions, then the reactions to them
    Update,
    /// Movement
    Motion,
}

/// Systems that report to the host, paused or not
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
enum ReportSet {
    Forward,
}

/// Core game state manager built on the Bevy ECS architecture.
///
/// The `World` holds the actors, the session resources and the event queues; the
/// `Schedule` runs one simulation frame in a fixed order: host input, clock and
/// countdown, state machine, collectibles, steering, ambient wander, then the
/// report systems that hand cues and phase changes to the host.
pub struct Game {
    pub world: World,
    pub schedule: Schedule,
}

impl Game {
    /// Builds the world, spawns the sought NPC and the ambient NPCs, and configures
    /// the schedule. The game starts idle at level 1.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Config` if the configuration does not validate.
    pub fn new(config: GameConfig) -> GameResult<Game> {
        info!(seed = ?config.seed, ambient_npcs = config.ambient_npcs, muted = config.muted, "Starting game initialization");
        config.validate()?;

        let mut world = World::new();
        let mut schedule = Schedule::default();
        schedule.set_executor_kind(ExecutorKind::SingleThreaded);

        Self::setup_ecs(&mut world);
        Self::insert_resources(&mut world, &config);
        Self::build_scenery(&mut world);
        Self::configure_schedule(&mut schedule);
        Self::spawn_sought_npc(&mut world);
        Self::spawn_ambient_npcs(&mut world, config.ambient_npcs);

        info!("Game initialization completed");
        Ok(Game { world, schedule })
    }

    fn setup_ecs(world: &mut World) {
        EventRegistry::register_event::<GameError>(world);
        EventRegistry::register_event::<GameEvent>(world);
        EventRegistry::register_event::<AudioEvent>(world);
        EventRegistry::register_event::<PhaseChanged>(world);
    }

    fn insert_resources(world: &mut World, config: &GameConfig) {
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
        world.insert_resource(GameRng::new(config.seed));
        world.insert_resource(AudioState { muted: config.muted });
        world.insert_resource(AudioQueue::default());
        world.insert_resource(PhaseLog::default());
        world.insert_resource(MovementInput::default());
    }

    /// Lays out the park for the starting level so the idle screen has something to show.
    fn build_scenery(world: &mut World) {
        let level = world.resource::<SessionState>().level;
        world.resource_scope(|world, mut rng: Mut<GameRng>| {
            world.resource_mut::<Scenery>().ensure(level, &mut rng.0);
        });
    }

    fn configure_schedule(schedule: &mut Schedule) {
        schedule
            .add_systems((
                (input_system, handle_pause_command).chain().in_set(GameplaySet::Input),
                (clock_system, countdown_system).chain().in_set(GameplaySet::Time),
                (state_system, collectible_system).chain().in_set(GameplaySet::Update),
                (steering_system, ambient_wander_system).chain().in_set(GameplaySet::Motion),
                (audio_system, phase_log_system, error_log_system).chain().in_set(ReportSet::Forward),
            ))
            .configure_sets(
                (
                    GameplaySet::Input,
                    GameplaySet::Time.run_if(|paused: Res<PauseState>| !paused.active()),
                    GameplaySet::Update.run_if(|paused: Res<PauseState>| !paused.active()),
                    GameplaySet::Motion.run_if(|paused: Res<PauseState>| !paused.active()),
                    ReportSet::Forward,
                )
                    .chain(),
            );
    }

    fn spawn_sought_npc(world: &mut World) {
        let entity = world
            .spawn(SoughtNpcBundle {
                npc: SoughtNpc,
                position: Position::default(),
                heading: Heading::default(),
                steering: Steering {
                    target: SOUGHT_NPC_START_TARGET,
                    speed: SOUGHT_NPC_SPEED,
                },
            })
            .id();
        debug!(?entity, target = ?SOUGHT_NPC_START_TARGET, "Spawned sought NPC");
    }

    fn spawn_ambient_npcs(world: &mut World, count: usize) {
        for index in 0..count {
            let spawn = match AMBIENT_NPC_SPAWNS.get(index) {
                Some(spawn) => *spawn,
                None => random_wander_target(&mut world.resource_mut::<GameRng>().0),
            };

            let entity = world
                .spawn(AmbientNpcBundle {
                    npc: AmbientNpc { palette: index as u8 },
                    position: Position(spawn),
                    heading: Heading::default(),
                    steering: Steering {
                        target: spawn,
                        speed: AMBIENT_NPC_SPEED,
                    },
                })
                .id();
            trace!(?entity, ?spawn, palette = index, "Spawned ambient NPC");
        }
        debug!(count, "Ambient NPCs spawned");
    }

    /// Queues a command for the next frame.
    pub fn submit(&mut self, command: GameCommand) {
        trace!(?command, "Command submitted");
        self.world.resource_mut::<Events<GameEvent>>().send(command.into());
    }

    /// Runs one frame of `dt` simulated seconds.
    ///
    /// A negative or non-finite `dt` is treated as zero.
    ///
    /// # Returns
    ///
    /// `true` if the game should terminate (exit command received), `false` to continue
    pub fn tick(&mut self, dt: f32) -> bool {
        let seconds = if dt.is_finite() && dt >= 0.0 {
            dt
        } else {
            warn!(dt, "Invalid frame delta, treating as zero");
            0.0
        };
        self.world.insert_resource(DeltaTime { seconds });

        self.schedule.run(&mut self.world);
        self.update_events();

        let clock = *self.world.resource::<SimClock>();
        formatter::record_frame(clock.frame, clock.elapsed);

        self.world.resource::<GlobalState>().exit
    }

    /// Advances every event queue, dropping events every reader has had a frame to see.
    fn update_events(&mut self) {
        self.world.resource_mut::<Events<GameError>>().update();
        self.world.resource_mut::<Events<GameEvent>>().update();
        self.world.resource_mut::<Events<AudioEvent>>().update();
        self.world.resource_mut::<Events<PhaseChanged>>().update();
    }

    pub fn session(&self) -> GameSession {
        let state = self.world.resource::<SessionState>();
        let countdown = self.world.resource::<Countdown>();
        GameSession {
            phase: state.phase,
            level: state.level,
            score: self.world.resource::<ScoreResource>().0,
            seconds_remaining: countdown.remaining(),
        }
    }

    /// Everything a renderer needs for the current frame.
    pub fn snapshot(&mut self) -> GameSnapshot {
        let session = self.session();
        let mood = Mood::for_phase(session.phase);
        let elapsed = self.world.resource::<SimClock>().elapsed;

        let mut actors: Vec<ActorView> = self
            .world
            .query::<(Entity, &Position, &Heading, &Steering, Option<&AmbientNpc>)>()
            .iter(&self.world)
            .map(|(entity, position, heading, steering, ambient)| {
                let movement = MovementState::of(position.0, steering.target);
                let role = match ambient {
                    Some(npc) => ActorRole::Ambient { palette: npc.palette },
                    None => ActorRole::Sought,
                };
                ActorView {
                    entity,
                    role,
                    position: position.0,
                    target: steering.target,
                    heading: heading.0,
                    movement,
                    mood: (role == ActorRole::Sought).then_some(mood),
                    gait: gait_swing(movement, elapsed, role == ActorRole::Sought),
                }
            })
            .collect();
        actors.sort_by_key(|actor| actor.entity);

        GameSnapshot {
            session,
            actors,
            scenery: self.world.resource::<Scenery>().items().to_vec(),
            collectibles: self.world.resource::<CollectibleSet>().items().to_vec(),
        }
    }

    /// The sought NPC's entity, for building picks.
    ///
    /// # Errors
    ///
    /// Returns `EntityError::SoughtNpcMissing` if it was despawned.
    pub fn sought_npc(&mut self) -> GameResult<Entity> {
        let mut query = self.world.query_filtered::<Entity, With<SoughtNpc>>();
        query
            .single(&self.world)
            .map_err(|_| EntityError::SoughtNpcMissing.into())
    }

    /// Takes the audio cues queued since the last call.
    pub fn drain_audio_cues(&mut self) -> Vec<AudioEvent> {
        std::mem::take(&mut self.world.resource_mut::<AudioQueue>().0)
    }

    /// Takes the phase changes recorded since the last call.
    pub fn drain_phase_changes(&mut self) -> Vec<PhaseChanged> {
        std::mem::take(&mut self.world.resource_mut::<PhaseLog>().0)
    }

    pub fn is_paused(&self) -> bool {
        self.world.resource::<PauseState>().active()
    }
}
