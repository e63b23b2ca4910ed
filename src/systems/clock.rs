//! Simulated time.
//!
//! Every time-based behaviour in the game reads from one clock that only advances
//! with `Game::tick`. Continuous consumers (steering, gait) use the frame delta;
//! discrete consumers use an [`IntervalTimer`] or the [`Scheduler`].

use bevy_ecs::{
    resource::Resource,
    system::{Res, ResMut},
};
use tracing::trace;

use crate::systems::{components::DeltaTime, state::PhaseTrigger};

/// Seconds of simulated time since the game was created.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct SimClock {
    pub elapsed: f64,
    /// `elapsed` as of the previous frame.
    pub previous: f64,
    pub frame: u64,
}

impl SimClock {
    pub fn advance(&mut self, seconds: f64) {
        self.previous = self.elapsed;
        self.elapsed += seconds;
        self.frame += 1;
    }

    /// Whether this frame crossed a multiple of `period`.
    pub fn crossed(&self, period: f64) -> bool {
        (self.elapsed / period).floor() > (self.previous / period).floor()
    }
}

/// Counts whole periods out of a stream of frame deltas, carrying the remainder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalTimer {
    period: f64,
    carry: f64,
}

impl IntervalTimer {
    pub fn new(period: f64) -> Self {
        Self { period, carry: 0.0 }
    }

    pub fn reset(&mut self) {
        self.carry = 0.0;
    }

    /// Returns how many periods completed during `seconds`.
    pub fn tick(&mut self, seconds: f64) -> u32 {
        self.carry += seconds;
        let periods = (self.carry / self.period).floor();
        self.carry -= periods * self.period;
        periods as u32
    }
}

/// A one-shot trigger waiting for its due time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deferred {
    pub due: f64,
    /// Session generation the trigger was scheduled in.
    pub generation: u64,
    pub trigger: PhaseTrigger,
}

/// Pending delayed phase triggers.
///
/// Entries belong to the session generation that scheduled them; a restart bumps
/// the generation, so anything left over can never fire into the new session.
#[derive(Resource, Debug, Default)]
pub struct Scheduler {
    pending: Vec<Deferred>,
}

impl Scheduler {
    pub fn schedule(&mut self, due: f64, generation: u64, trigger: PhaseTrigger) {
        trace!(due, generation, ?trigger, "Scheduled deferred trigger");
        self.pending.push(Deferred { due, generation, trigger });
    }

    pub fn cancel_all(&mut self) {
        if !self.pending.is_empty() {
            trace!(count = self.pending.len(), "Cancelled deferred triggers");
        }
        self.pending.clear();
    }

    /// Removes and returns every trigger due by `now`, in due order. Triggers from
    /// other generations are dropped.
    pub fn take_due(&mut self, now: f64, generation: u64) -> Vec<PhaseTrigger> {
        self.pending.retain(|deferred| deferred.generation == generation);

        let mut due: Vec<Deferred> = Vec::new();
        self.pending.retain(|deferred| {
            if deferred.due <= now {
                due.push(*deferred);
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.due.total_cmp(&b.due));
        due.into_iter().map(|deferred| deferred.trigger).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

pub fn clock_system(delta_time: Res<DeltaTime>, mut clock: ResMut<SimClock>) {
    clock.advance(delta_time.seconds as f64);
}
