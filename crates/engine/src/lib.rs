//! Game loop driver.
//!
//! [`Runner`] owns a [`trex_run_core::Game`] and a terminal surface and runs
//! one iteration per call to [`Runner::step`]: render, poll one key, advance,
//! sleep. It is the only place that knows about pacing.

pub mod runner;

pub use trex_run_core as core;
pub use trex_run_input as input;
pub use trex_run_term as term;
pub use trex_run_types as types;

pub use runner::Runner;
