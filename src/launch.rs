//! Launch options: screen geometry, seed and log destination.
//!
//! Environment variables set the defaults; command-line flags override them.
//!
//! | Variable | Flag | Default |
//! |----------|------|---------|
//! | `TREX_WIDTH` | `--width N` | 80 |
//! | `TREX_HEIGHT` | `--height N` | 20 |
//! | `TREX_SEED` | `--seed N` | wall clock |
//! | `TREX_LOG_PATH` | `--log PATH` | none (logging off) |
//!
//! Geometry must lie between 12x8 and 500x200.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, bail, Result};

use crate::types::{
    GameConfig, MAX_SCREEN_HEIGHT, MAX_SCREEN_WIDTH, MIN_SCREEN_HEIGHT, MIN_SCREEN_WIDTH,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    pub config: GameConfig,
    pub seed: Option<u32>,
    pub log_path: Option<String>,
}

impl LaunchOptions {
    /// Defaults from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults from an arbitrary variable lookup. Unparseable values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut opts = Self::default();

        if let Some(w) = lookup("TREX_WIDTH").and_then(|s| s.trim().parse().ok()) {
            opts.config.width = w;
        }
        if let Some(h) = lookup("TREX_HEIGHT").and_then(|s| s.trim().parse().ok()) {
            opts.config.height = h;
        }
        opts.seed = lookup("TREX_SEED").and_then(|s| s.trim().parse().ok());
        opts.log_path = lookup("TREX_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        opts
    }

    /// Apply command-line flags (program name already stripped) and validate.
    pub fn parse_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0usize;
        while i < args.len() {
            let flag = args[i].as_str();
            match flag {
                "--width" | "--height" | "--seed" | "--log" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("{}: missing value", flag))?;
                    match flag {
                        "--width" => self.config.width = parse_num(flag, v)?,
                        "--height" => self.config.height = parse_num(flag, v)?,
                        "--seed" => self.seed = Some(parse_num(flag, v)?),
                        _ => self.log_path = Some(v.clone()),
                    }
                }
                other => bail!("unknown argument: {}", other),
            }
            i += 1;
        }

        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.config.width < MIN_SCREEN_WIDTH || self.config.height < MIN_SCREEN_HEIGHT {
            bail!(
                "screen {}x{} is too small (minimum {}x{})",
                self.config.width,
                self.config.height,
                MIN_SCREEN_WIDTH,
                MIN_SCREEN_HEIGHT
            );
        }
        if self.config.width > MAX_SCREEN_WIDTH || self.config.height > MAX_SCREEN_HEIGHT {
            bail!(
                "screen {}x{} is too large (maximum {}x{})",
                self.config.width,
                self.config.height,
                MAX_SCREEN_WIDTH,
                MAX_SCREEN_HEIGHT
            );
        }
        Ok(())
    }

    /// Configured seed, or one derived from the wall clock.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}

fn parse_num<T: std::str::FromStr>(flag: &str, v: &str) -> Result<T> {
    v.parse::<T>()
        .map_err(|_| anyhow!("{}: invalid value: {}", flag, v))
}
