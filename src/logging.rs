//! File-backed logging.
//!
//! The game owns the terminal, so log records never go to stderr. When no log
//! path is configured the logger stays uninstalled and `log` macros are no-ops.

use std::fs::OpenOptions;

use anyhow::{anyhow, Result};
use env_logger::{Builder, Env, Target};

/// Filter variable, same syntax as `RUST_LOG` (e.g. `TREX_LOG=debug`).
pub const LOG_FILTER_ENV: &str = "TREX_LOG";

/// Install the logger writing to `path`. Returns whether a logger was installed.
pub fn init(path: Option<&str>) -> Result<bool> {
    let Some(path) = path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| anyhow!("log: open {} failed: {}", path, e))?;

    Builder::from_env(Env::default().filter_or(LOG_FILTER_ENV, "info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| anyhow!("log: {}", e))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_installs_nothing() {
        assert!(!init(None).unwrap());
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let err = init(Some("/nonexistent-dir/trex.log")).unwrap_err();
        assert!(err.to_string().starts_with("log: open"));
    }
}
