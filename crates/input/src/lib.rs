//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any rendering. It maps
//! `crossterm` key events into [`crate::types::GameAction`]s for the current
//! [`crate::types::Phase`]. Polling the terminal is the surface's job.

pub mod map;

pub use trex_run_types as types;

pub use map::{map_key, should_quit};
