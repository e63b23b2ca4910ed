//! Game flow.
//!
//! `GamePhase::on` is the whole transition table; everything not listed there is a
//! no-op. `state_system` feeds it triggers in a fixed order each frame (deferred
//! triggers, then countdown expiry, then player commands) and runs the entry
//! hooks for each transition it takes.

use bevy_ecs::{
    entity::Entity,
    event::{EventReader, EventWriter},
    query::With,
    resource::Resource,
    system::{Query, Res, ResMut, SystemParam},
};
use glam::Vec3;
use tracing::{debug, info, trace, warn};

use crate::constants::timing::{countdown_for_level, HIDING_DURATION, HINT_DURATION};
use crate::error::{EntityError, GameError};
use crate::events::{GameCommand, GameEvent, PhaseChanged, PickTarget};
use crate::systems::{
    audio::AudioEvent,
    clock::{Scheduler, SimClock},
    collectible::CollectibleSet,
    components::{GameRng, SoughtNpc, Steering},
    hiding::select_hiding_spot,
    scenery::Scenery,
    score::{ScoreReason, ScoreResource},
    timer::Countdown,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    /// Waiting for the player to start. Clicking the ground moves the NPC around.
    #[default]
    Idle,
    /// The NPC runs to its hiding spot while the player looks away.
    Hiding,
    /// The countdown runs and the player searches.
    Seeking,
    /// The NPC barks to give itself away. The countdown keeps running.
    Hint,
    /// The player found the NPC.
    Won,
    /// The countdown ran out.
    Lost,
}

impl GamePhase {
    /// The phase `trigger` leads to from `self`, if any.
    pub fn on(self, trigger: PhaseTrigger) -> Option<GamePhase> {
        use GamePhase::*;

        match (self, trigger) {
            (Idle, PhaseTrigger::Start) => Some(Hiding),
            (Hiding, PhaseTrigger::HidingElapsed) => Some(Seeking),
            (Seeking, PhaseTrigger::HintRequested) => Some(Hint),
            (Hint, PhaseTrigger::HintElapsed) => Some(Seeking),
            (Seeking | Hint, PhaseTrigger::NpcFound) => Some(Won),
            (Seeking, PhaseTrigger::TimerExpired) => Some(Lost),
            (Won, PhaseTrigger::Advance) => Some(Hiding),
            (Lost, PhaseTrigger::Restart) => Some(Hiding),
            (Won | Lost, PhaseTrigger::ReturnToMenu) => Some(Idle),
            (Hiding | Seeking | Hint | Won | Lost, PhaseTrigger::Reset) => Some(Idle),
            _ => None,
        }
    }

    /// Whether the player is currently searching (the countdown runs).
    pub fn is_searching(self) -> bool {
        matches!(self, GamePhase::Seeking | GamePhase::Hint)
    }
}

/// Everything that can move the game from one phase to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseTrigger {
    Start,
    HidingElapsed,
    HintRequested,
    HintElapsed,
    NpcFound,
    TimerExpired,
    Advance,
    Restart,
    ReturnToMenu,
    Reset,
}

/// Phase, level and session identity.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    pub phase: GamePhase,
    pub level: u32,
    /// Bumped on every full restart. Deferred triggers from older generations never fire.
    pub generation: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            phase: GamePhase::Idle,
            level: 1,
            generation: 0,
        }
    }
}

#[derive(Resource, Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum PauseState {
    #[default]
    Inactive,
    Active,
}

impl PauseState {
    pub fn active(&self) -> bool {
        matches!(self, PauseState::Active)
    }
}

pub fn handle_pause_command(mut events: EventReader<GameEvent>, mut pause_state: ResMut<PauseState>) {
    for event in events.read() {
        if let GameEvent::Command(GameCommand::TogglePause) = event {
            *pause_state = match *pause_state {
                PauseState::Active => {
                    info!("Game resumed");
                    PauseState::Inactive
                }
                PauseState::Inactive => {
                    info!("Game paused");
                    PauseState::Active
                }
            }
        }
    }
}

/// Everything the phase hooks touch.
#[derive(SystemParam)]
pub struct PhaseContext<'w, 's> {
    pub session: ResMut<'w, SessionState>,
    pub score: ResMut<'w, ScoreResource>,
    pub countdown: ResMut<'w, Countdown>,
    pub scheduler: ResMut<'w, Scheduler>,
    pub scenery: ResMut<'w, Scenery>,
    pub collectibles: ResMut<'w, CollectibleSet>,
    pub rng: ResMut<'w, GameRng>,
    pub clock: Res<'w, SimClock>,
    pub sought: Query<'w, 's, (Entity, &'static mut Steering), With<SoughtNpc>>,
    pub audio_events: EventWriter<'w, AudioEvent>,
    pub phase_changes: EventWriter<'w, PhaseChanged>,
    pub errors: EventWriter<'w, GameError>,
}

impl PhaseContext<'_, '_> {
    /// Applies `trigger` to the current phase. Returns whether a transition happened.
    pub fn fire(&mut self, trigger: PhaseTrigger) -> bool {
        let from = self.session.phase;
        let Some(to) = from.on(trigger) else {
            trace!(phase = ?from, ?trigger, "Trigger ignored");
            return false;
        };

        // Whatever was scheduled belonged to the phase we are leaving.
        self.scheduler.cancel_all();

        match trigger {
            PhaseTrigger::Advance => {
                self.score.award(ScoreReason::LevelComplete);
                self.session.level += 1;
                self.refresh_scenery();
            }
            PhaseTrigger::Restart => self.restart_session(),
            _ => {}
        }

        self.session.phase = to;
        info!(?from, ?to, ?trigger, level = self.session.level, score = self.score.0, "Phase transition");

        match (from, to) {
            (_, GamePhase::Hiding) => self.enter_hiding(),
            (GamePhase::Hiding, GamePhase::Seeking) => {
                let seconds = countdown_for_level(self.session.level);
                self.countdown.arm(seconds);
                debug!(seconds, "Countdown armed");
            }
            // The countdown kept running through the hint.
            (GamePhase::Hint, GamePhase::Seeking) => {}
            (_, GamePhase::Hint) => {
                self.audio_events.write(AudioEvent::Bark);
                let due = self.clock.elapsed + HINT_DURATION as f64;
                self.scheduler.schedule(due, self.session.generation, PhaseTrigger::HintElapsed);
            }
            (_, GamePhase::Won | GamePhase::Lost) => {
                self.audio_events.write(AudioEvent::Win);
            }
            (_, GamePhase::Idle) => {
                self.restart_session();
                self.collectibles.clear();
                self.countdown.disarm();
            }
            (from, to) => {
                warn!(?from, ?to, "Unhandled phase transition");
            }
        }

        self.phase_changes.write(PhaseChanged { from, to });
        true
    }

    fn restart_session(&mut self) {
        self.session.level = 1;
        self.session.generation += 1;
        self.score.reset();
        self.refresh_scenery();
        debug!(generation = self.session.generation, "Session restarted");
    }

    /// Brings the scenery in line with the session level. Called wherever the level changes.
    fn refresh_scenery(&mut self) {
        self.scenery.ensure(self.session.level, &mut self.rng.0);
    }

    fn enter_hiding(&mut self) {
        let level = self.session.level;
        self.refresh_scenery();

        match select_hiding_spot(self.scenery.items(), &mut self.rng.0) {
            Some(spot) => match self.sought.single_mut() {
                Ok((entity, mut steering)) => {
                    steering.target = spot;
                    debug!(?entity, ?spot, "Hiding spot selected");
                }
                Err(_) => {
                    self.errors.write(EntityError::SoughtNpcMissing.into());
                }
            },
            None => {
                warn!(level, "No scenery to hide behind; keeping the current target");
            }
        }

        self.collectibles.respawn(level, &mut self.rng.0);
        self.countdown.disarm();

        let due = self.clock.elapsed + HIDING_DURATION as f64;
        self.scheduler.schedule(due, self.session.generation, PhaseTrigger::HidingElapsed);
    }

    /// Points the sought NPC at a clicked ground point.
    fn place(&mut self, point: Vec3) {
        match self.sought.single_mut() {
            Ok((_, mut steering)) => {
                steering.target = Vec3::new(point.x, 0.0, point.z);
                self.audio_events.write(AudioEvent::Pop);
                debug!(target = ?steering.target, "Sought NPC placed");
            }
            Err(_) => {
                self.errors.write(EntityError::SoughtNpcMissing.into());
            }
        }
    }

    fn is_sought(&self, entity: Entity) -> bool {
        self.sought.get(entity).is_ok()
    }

    /// Resolves a pick into a trigger or a feedback cue.
    fn pick(&mut self, target: PickTarget) {
        let phase = self.session.phase;
        match target {
            PickTarget::Entity(entity) if self.is_sought(entity) => {
                if phase.is_searching() {
                    self.fire(PhaseTrigger::NpcFound);
                } else {
                    trace!(?phase, "Sought NPC poked outside the search");
                    self.audio_events.write(AudioEvent::Pop);
                }
            }
            PickTarget::Ground(point) if matches!(phase, GamePhase::Idle | GamePhase::Won | GamePhase::Lost) => {
                self.place(point);
            }
            // Collectibles are handled by the collectible system; anything else is scenery.
            _ => {}
        }
    }
}

fn command_trigger(command: GameCommand) -> Option<PhaseTrigger> {
    match command {
        GameCommand::Start => Some(PhaseTrigger::Start),
        GameCommand::RequestHint => Some(PhaseTrigger::HintRequested),
        GameCommand::Advance => Some(PhaseTrigger::Advance),
        GameCommand::Restart => Some(PhaseTrigger::Restart),
        GameCommand::ReturnToMenu => Some(PhaseTrigger::ReturnToMenu),
        GameCommand::Reset => Some(PhaseTrigger::Reset),
        _ => None,
    }
}

pub fn state_system(mut events: EventReader<GameEvent>, mut ctx: PhaseContext) {
    let now = ctx.clock.elapsed;
    let generation = ctx.session.generation;
    for trigger in ctx.scheduler.take_due(now, generation) {
        ctx.fire(trigger);
    }

    // Expiry is resolved before anything the player did this frame.
    if ctx.session.phase == GamePhase::Seeking && ctx.countdown.take_expiry() {
        ctx.fire(PhaseTrigger::TimerExpired);
    }

    for event in events.read() {
        let GameEvent::Command(command) = *event;
        if let GameCommand::Pick(target) = command {
            ctx.pick(target);
        } else if let Some(trigger) = command_trigger(command) {
            ctx.fire(trigger);
        }
    }
}
