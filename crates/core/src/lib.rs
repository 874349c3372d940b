//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the runner rules, state management, and simulation logic.
//! It has no dependencies on terminals, input devices, or timing, making it:
//!
//! - **Deterministic**: Same seed produces identical sessions
//! - **Testable**: Every rule can be driven tick by tick from a test
//! - **Portable**: Entities draw onto any [`Canvas`]
//!
//! # Module Structure
//!
//! - [`player`]: Fixed-column player with jump physics
//! - [`obstacle`]: Obstacles, the per-tick spawn roll, and off-screen pruning
//! - [`collision`]: Axis-aligned hitbox overlap
//! - [`rng`]: Seeded LCG for spawn timing and obstacle kinds
//! - [`session`]: One run: player, obstacles, score, frame counter
//! - [`game`]: Start / playing / game-over state machine
//! - [`canvas`]: Drawing seam implemented by the terminal screen
//!
//! # Example
//!
//! ```
//! use trex_run_core::{Flow, Game};
//! use trex_run_types::{GameAction, GameConfig, Phase};
//!
//! let mut game = Game::new(GameConfig::default(), 12345);
//! game.apply_action(GameAction::Start);
//! assert_eq!(game.phase(), Phase::Playing);
//!
//! game.apply_action(GameAction::Jump);
//! game.tick();
//! assert_eq!(game.session().score(), 1);
//!
//! // Quit while playing shows the result screen; quit there exits.
//! game.apply_action(GameAction::Quit);
//! assert_eq!(game.phase(), Phase::GameOver);
//! assert_eq!(game.apply_action(GameAction::Quit), Flow::Exit);
//! ```
//!
//! # Timing
//!
//! The simulation is tick-based; it never reads a clock. The driver calls
//! [`Game::tick`] once per Playing frame (30ms by default).

pub mod canvas;
pub mod collision;
pub mod game;
pub mod obstacle;
pub mod player;
pub mod rng;
pub mod session;

pub use trex_run_types as types;

// Re-export commonly used types for convenience
pub use canvas::Canvas;
pub use collision::{collides, first_collision, Rect};
pub use game::{Flow, Game};
pub use obstacle::{advance_obstacles, prune_offscreen, spawn_due, Obstacle};
pub use player::{Player, PLAYER_SPRITE};
pub use rng::SimpleRng;
pub use session::{EndReason, GameSession, SessionStatus, TickReport};
