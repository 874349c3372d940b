//! T-rex runner (workspace facade crate).
//!
//! This package exposes `trex_run::{core,engine,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`, plus the binary's
//! launch options and logging setup.

pub mod launch;
pub mod logging;

pub use trex_run_core as core;
pub use trex_run_engine as engine;
pub use trex_run_input as input;
pub use trex_run_term as term;
pub use trex_run_types as types;

pub use launch::LaunchOptions;
