//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! Each frame is composed into a plain character [`Screen`] and flushed to a
//! [`TerminalSurface`] as one full repaint.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep every terminal call behind one trait so the loop runs headless in tests
//! - Clip silently: nothing drawn off-grid is an error

pub mod game_view;
pub mod renderer;
pub mod screen;
pub mod surface;

pub use trex_run_core as core;
pub use trex_run_types as types;

pub use game_view::{GameView, GroundStyle, PLAYING_HINT};
pub use renderer::{encode_frame_into, frame_text};
pub use screen::Screen;
pub use surface::{CrosstermSurface, HeadlessSurface, TerminalSurface};
