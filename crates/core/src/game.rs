//! Game module - the screen state machine around a session
//!
//! ```text
//! StartScreen --Start--> Playing --collision/Quit--> GameOver
//!      ^                                               |
//!      +------------------Restart----------------------+
//! ```
//!
//! `Quit` on the start or result screen asks the caller to exit. `Quit`
//! while playing ends the session and shows the result screen, exactly like
//! a collision. Restart resets the session value in place and returns to the
//! start screen; nothing is re-entered recursively.

use log::info;

use crate::rng::SimpleRng;
use crate::session::{GameSession, SessionStatus, TickReport};
use crate::types::{GameAction, GameConfig, Phase};

/// Whether the driver should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    phase: Phase,
    session: GameSession,
    rng: SimpleRng,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
}

impl Game {
    /// Create a game on the start screen with the given RNG seed.
    pub fn new(config: GameConfig, seed: u32) -> Self {
        Self {
            config,
            phase: Phase::StartScreen,
            session: GameSession::new(config),
            rng: SimpleRng::new(seed),
            episode_id: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Apply an input action for the current phase.
    ///
    /// Actions that mean nothing in the current phase are ignored.
    pub fn apply_action(&mut self, action: GameAction) -> Flow {
        match (self.phase, action) {
            (Phase::StartScreen, GameAction::Start) => {
                self.set_phase(Phase::Playing);
                info!("episode {} started", self.episode_id);
            }
            (Phase::StartScreen, GameAction::Quit) | (Phase::GameOver, GameAction::Quit) => {
                return Flow::Exit;
            }
            (Phase::Playing, GameAction::Jump) => self.session.jump(),
            (Phase::Playing, GameAction::Quit) => {
                self.session.force_quit();
                self.enter_game_over();
            }
            (Phase::GameOver, GameAction::Restart) => self.restart(),
            _ => {}
        }
        Flow::Continue
    }

    /// Advance one Playing tick. Returns `None` outside the Playing phase.
    ///
    /// An obstacle already overlapping the player when the tick begins ends
    /// the run before anything moves. A session that was stepped normally
    /// never starts a tick overlapped, so this only catches obstacles placed
    /// from outside.
    pub fn tick(&mut self) -> Option<TickReport> {
        if self.phase != Phase::Playing {
            return None;
        }
        if self.check_collision() {
            return Some(TickReport {
                collided: true,
                ..TickReport::default()
            });
        }
        let report = self.session.step(&mut self.rng);
        if self.session.is_over() {
            self.enter_game_over();
        }
        Some(report)
    }

    /// Collision pass without stepping. On a hit the game moves to the result screen.
    pub fn check_collision(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        let hit = self.session.check_collision();
        if hit {
            self.enter_game_over();
        }
        hit
    }

    /// Reset the session and go back to the start screen.
    pub fn restart(&mut self) {
        self.session.reset();
        self.episode_id = self.episode_id.wrapping_add(1);
        self.set_phase(Phase::StartScreen);
    }

    fn enter_game_over(&mut self) {
        let reason = match self.session.status() {
            SessionStatus::Over(reason) => Some(reason),
            SessionStatus::Running => None,
        };
        info!(
            "episode {} over: score={} reason={:?}",
            self.episode_id,
            self.session.score(),
            reason
        );
        self.set_phase(Phase::GameOver);
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            info!("phase {} -> {}", self.phase.as_str(), phase.as_str());
            self.phase = phase;
        }
    }
}
