//! Terminal T-rex runner (default binary).
//!
//! Parses launch options, installs file logging when asked, then hands the
//! terminal to the engine's fixed-timestep loop.

use anyhow::Result;
use log::{info, warn};

use trex_run::core::Game;
use trex_run::engine::Runner;
use trex_run::term::CrosstermSurface;
use trex_run::{logging, LaunchOptions};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = LaunchOptions::from_env().parse_args(&args)?;
    logging::init(opts.log_path.as_deref())?;

    let seed = opts.resolve_seed();
    let config = opts.config;
    info!("launch {}x{} seed={}", config.width, config.height, seed);

    let mut surface = CrosstermSurface::new();
    if let Some((w, h)) = surface.size() {
        // One extra row for the control hint.
        let rows_needed = config.height.saturating_add(1);
        if w < config.width || h < rows_needed {
            warn!(
                "terminal {}x{} is smaller than the {}x{} field; output may wrap",
                w, h, config.width, rows_needed
            );
        }
    }
    surface.enter()?;

    let mut runner = Runner::new(surface, Game::new(config, seed));
    let result = runner.run();

    // Always try to restore terminal state.
    let _ = runner.surface_mut().exit();
    result
}
