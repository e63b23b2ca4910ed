use std::time::{Duration, Instant};

use rand::{rngs::SmallRng, Rng, SeedableRng};
use thousands::Separable;
use tracing::{debug, info, trace, warn};

use crate::config::{AppOptions, GameConfig};
use crate::constants::LOOP_TIME;
use crate::error::GameResult;
use crate::events::{GameCommand, PickTarget};
use crate::game::Game;
use crate::systems::GamePhase;

/// Plays the game through the public command API, the way a player clicking
/// around the park would.
///
/// It collects the bonuses one at a time, asks for a hint once per round, then
/// clicks the hidden NPC after a random search time that may run past the
/// countdown. Every action waits for a short random reaction delay.
pub struct Autopilot {
    rng: SmallRng,
    /// Seconds of game time seen so far.
    elapsed: f64,
    next_action_at: f64,
    /// When the NPC will be "found" this round.
    found_at: Option<f64>,
    hinted: bool,
}

impl Autopilot {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(0x5EEC)),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        Self {
            rng,
            elapsed: 0.0,
            next_action_at: 0.0,
            found_at: None,
            hinted: false,
        }
    }

    fn react(&mut self) {
        self.next_action_at = self.elapsed + self.rng.random_range(0.4..1.6);
    }

    /// Decides what to do before the next `dt`-second frame and submits it.
    pub fn drive(&mut self, game: &mut Game, dt: f32) {
        self.elapsed += dt as f64;
        if self.elapsed < self.next_action_at {
            return;
        }

        let session = game.session();
        match session.phase {
            GamePhase::Idle => {
                debug!("Autopilot starting a round");
                game.submit(GameCommand::Start);
            }
            GamePhase::Hiding => {
                self.found_at = None;
                self.hinted = false;
                return;
            }
            GamePhase::Seeking => {
                let found_at = *self.found_at.get_or_insert_with(|| {
                    let budget = session.seconds_remaining as f64 + 8.0;
                    self.elapsed + self.rng.random_range(3.0..budget)
                });

                let snapshot = game.snapshot();
                if let Some(bonus) = snapshot.collectibles.iter().find(|c| c.active) {
                    trace!(id = bonus.id, "Autopilot grabbing a bonus");
                    game.submit(GameCommand::Pick(PickTarget::Collectible(bonus.id)));
                } else if !self.hinted {
                    self.hinted = true;
                    game.submit(GameCommand::RequestHint);
                } else if self.elapsed >= found_at {
                    match game.sought_npc() {
                        Ok(entity) => game.submit(GameCommand::Pick(PickTarget::Entity(entity))),
                        Err(error) => warn!(%error, "Autopilot cannot find the NPC to click"),
                    }
                }
            }
            GamePhase::Hint => {}
            GamePhase::Won => game.submit(GameCommand::Advance),
            GamePhase::Lost => game.submit(GameCommand::Restart),
        }

        self.react();
    }
}

/// Headless application wrapper that drives the game loop at a fixed frame budget.
pub struct App {
    pub game: Game,
    autopilot: Autopilot,
    options: AppOptions,
    rounds_finished: u32,
    last_tick: Instant,
}

impl App {
    /// # Errors
    ///
    /// Propagates errors from `Game::new()`.
    pub fn new(config: GameConfig, options: AppOptions) -> GameResult<Self> {
        info!(rounds = ?options.rounds, "Initializing headless application");
        let game = Game::new(config)?;

        Ok(App {
            game,
            autopilot: Autopilot::new(config.seed),
            options,
            rounds_finished: 0,
            last_tick: Instant::now(),
        })
    }

    /// Executes a single frame of the game loop with consistent timing.
    ///
    /// # Returns
    ///
    /// `true` if the game should continue running, `false` if the game requested exit.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();

        let dt = self.last_tick.elapsed().as_secs_f32();
        self.last_tick = start;

        self.autopilot.drive(&mut self.game, dt);
        if self.game.tick(dt) {
            return false;
        }

        for change in self.game.drain_phase_changes() {
            let session = self.game.session();
            info!(
                phase = ?change.to,
                level = session.level,
                score = %session.score.separate_with_commas(),
                time = session.seconds_remaining,
                "HUD"
            );

            if matches!(change.to, GamePhase::Won | GamePhase::Lost) {
                self.rounds_finished += 1;
                if self.options.rounds.is_some_and(|rounds| self.rounds_finished >= rounds) {
                    info!(rounds = self.rounds_finished, "All rounds played");
                    self.game.submit(GameCommand::Exit);
                }
            }
        }

        for cue in self.game.drain_audio_cues() {
            trace!(%cue, "Audio cue");
        }

        // Sleep if we still have time left
        if start.elapsed() < LOOP_TIME {
            let time = LOOP_TIME.saturating_sub(start.elapsed());
            if time != Duration::ZERO {
                spin_sleep::sleep(time);
            }
        } else {
            warn!(elapsed = ?start.elapsed(), budget = ?LOOP_TIME, "Frame ran behind schedule");
        }

        true
    }

    pub fn rounds_finished(&self) -> u32 {
        self.rounds_finished
    }
}
