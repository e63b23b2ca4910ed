use bevy_ecs::{
    resource::Resource,
    system::{Res, ResMut},
};
use tracing::debug;

use crate::systems::{clock::IntervalTimer, components::DeltaTime, state::SessionState};

/// The search countdown, in whole seconds.
///
/// Armed when the search starts and ticked once per simulated second while the
/// player is searching. The step from 1 to 0 latches an expiry that the state
/// machine takes exactly once.
#[derive(Resource, Debug)]
pub struct Countdown {
    remaining: u32,
    interval: IntervalTimer,
    armed: bool,
    expired: bool,
}

impl Default for Countdown {
    fn default() -> Self {
        Self {
            remaining: 0,
            interval: IntervalTimer::new(1.0),
            armed: false,
            expired: false,
        }
    }
}

impl Countdown {
    pub fn arm(&mut self, seconds: u32) {
        self.remaining = seconds;
        self.interval.reset();
        self.armed = true;
        self.expired = false;
    }

    pub fn disarm(&mut self) {
        *self = Self::default();
    }

    pub fn extend(&mut self, seconds: u32) {
        self.remaining = self.remaining.saturating_add(seconds);
    }

    /// Feeds `seconds` of simulated time into the countdown.
    pub fn tick(&mut self, seconds: f64) {
        if !self.armed {
            return;
        }
        for _ in 0..self.interval.tick(seconds) {
            if self.remaining == 0 {
                break;
            }
            self.remaining -= 1;
            if self.remaining == 0 {
                self.expired = true;
                debug!("Countdown expired");
            }
        }
    }

    /// Consumes the expiry signal, if one is pending.
    pub fn take_expiry(&mut self) -> bool {
        std::mem::take(&mut self.expired)
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn expiry_pending(&self) -> bool {
        self.expired
    }
}

pub fn countdown_system(delta_time: Res<DeltaTime>, session: Res<SessionState>, mut countdown: ResMut<Countdown>) {
    if session.phase.is_searching() {
        countdown.tick(delta_time.seconds as f64);
    }
}
