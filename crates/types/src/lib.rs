//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Screen Geometry
//!
//! Geometry is carried by [`GameConfig`] rather than globals. The defaults
//! reproduce the classic 80x20 field:
//!
//! - **Ground line**: row `height - 2`
//! - **Player rest row**: `height - 4` (the 3-row sprite sits on the ground line)
//! - **Obstacle row**: `height - 3`
//! - **Spawn column**: `width - 2`
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PLAYING_TICK_MS` | 30 | Fixed timestep while playing (~33 FPS) |
//! | `MENU_TICK_MS` | 100 | Poll interval on start and result screens |
//!
//! # Physics Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `JUMP_IMPULSE` | 2.0 | Initial upward speed, rows per tick |
//! | `GRAVITY` | 0.40 | Added to the vertical speed every tick |
//! | `SPAWN_GAP_MIN` | 40 | Smallest spawn divisor, ticks |
//! | `SPAWN_GAP_JITTER` | 40 | Random extent added to the divisor |
//!
//! # Examples
//!
//! ```
//! use trex_run_types::{GameConfig, ObstacleKind};
//!
//! let config = GameConfig::default();
//! assert_eq!(config.ground_y(), 18);
//! assert_eq!(config.player_ground_y(), 16);
//! assert_eq!(config.obstacle_y(), 17);
//! assert_eq!(config.spawn_x(), 78);
//!
//! assert_eq!(ObstacleKind::Cactus.glyph(), 'T');
//! ```

/// Default screen width in columns
pub const SCREEN_WIDTH: u16 = 80;

/// Default screen height in rows
pub const SCREEN_HEIGHT: u16 = 20;

/// Smallest accepted screen width
pub const MIN_SCREEN_WIDTH: u16 = 12;

/// Smallest accepted screen height
pub const MIN_SCREEN_HEIGHT: u16 = 8;

/// Largest accepted screen width
pub const MAX_SCREEN_WIDTH: u16 = 500;

/// Largest accepted screen height
pub const MAX_SCREEN_HEIGHT: u16 = 200;

/// Fixed timestep while playing (30ms ≈ 33 FPS)
pub const PLAYING_TICK_MS: u64 = 30;

/// Poll interval on the start and game-over screens (100ms)
pub const MENU_TICK_MS: u64 = 100;

/// Fixed player column
pub const PLAYER_X: i32 = 5;

/// Upward speed assigned by a jump (applied as a negative dy)
pub const JUMP_IMPULSE: f32 = 2.0;

/// Downward acceleration per tick
pub const GRAVITY: f32 = 0.40;

/// Lower bound of the per-tick spawn divisor
pub const SPAWN_GAP_MIN: u32 = 40;

/// Random extent of the per-tick spawn divisor (divisor is in `[MIN, MIN + JITTER)`)
pub const SPAWN_GAP_JITTER: u32 = 40;

/// Player hitbox width (the sprite is wider; the hitbox is forgiving)
pub const PLAYER_HITBOX_W: i32 = 3;

/// Player hitbox height (the sprite has 3 rows; only the top 2 collide)
pub const PLAYER_HITBOX_H: i32 = 2;

/// Obstacle hitbox width
pub const OBSTACLE_HITBOX_W: i32 = 1;

/// Obstacle hitbox height
pub const OBSTACLE_HITBOX_H: i32 = 1;

/// Immutable screen geometry and pacing, threaded through construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub playing_tick_ms: u64,
    pub menu_tick_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            playing_tick_ms: PLAYING_TICK_MS,
            menu_tick_ms: MENU_TICK_MS,
        }
    }
}

impl GameConfig {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Row of the drawn ground line.
    pub fn ground_y(&self) -> i32 {
        self.height as i32 - 2
    }

    /// Resting y of the player sprite's top row.
    pub fn player_ground_y(&self) -> i32 {
        self.ground_y() - 2
    }

    /// Row obstacles run along.
    pub fn obstacle_y(&self) -> i32 {
        self.ground_y() - 1
    }

    /// Column new obstacles appear at.
    pub fn spawn_x(&self) -> i32 {
        self.width as i32 - 2
    }
}

/// Top-level screen the game is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    StartScreen,
    Playing,
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::StartScreen => "start",
            Phase::Playing => "playing",
            Phase::GameOver => "gameOver",
        }
    }
}

/// Actions produced by input mapping.
///
/// Which keys produce which action depends on the current [`Phase`]; see
/// `trex_run_input::map_key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Leave the start screen.
    Start,
    Jump,
    /// Exit from a menu, or force the result screen while playing.
    Quit,
    /// Reset the session from the result screen.
    Restart,
}

/// Obstacle variants. Both occupy a single cell; only the glyph differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    Cactus,
    Saguaro,
}

impl ObstacleKind {
    /// Map a uniform draw in `[0, 2)` to a kind.
    pub fn from_index(i: u32) -> Self {
        if i % 2 == 0 {
            ObstacleKind::Cactus
        } else {
            ObstacleKind::Saguaro
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            ObstacleKind::Cactus => 'T',
            ObstacleKind::Saguaro => 'Y',
        }
    }
}
