//! Player entity - fixed column, vertical jump physics.
//!
//! Motion is plain Euler integration at the fixed timestep: position first,
//! then gravity into the velocity. Position stays integral; each step
//! truncates `y + dy` toward zero, which gives the arc its fast rise and
//! short hang at the apex.

use crate::canvas::Canvas;
use crate::types::{GameConfig, GRAVITY, JUMP_IMPULSE, PLAYER_X};

/// Player sprite, top row first.
pub const PLAYER_SPRITE: [&str; 3] = ["  O", " /\\/", " L L"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub dy: f32,
    pub is_jumping: bool,
}

impl Player {
    /// Create a grounded player for the given geometry.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: PLAYER_X,
            y: config.player_ground_y(),
            dy: 0.0,
            is_jumping: false,
        }
    }

    /// Start a jump. Ignored while airborne.
    pub fn jump(&mut self) {
        if !self.is_jumping {
            self.is_jumping = true;
            self.dy = -JUMP_IMPULSE;
        }
    }

    /// Advance one tick. Returns `true` on the tick the player lands.
    pub fn update(&mut self, config: &GameConfig) -> bool {
        if !self.is_jumping {
            return false;
        }

        self.y = (self.y as f32 + self.dy) as i32;
        self.dy += GRAVITY;

        let ground = config.player_ground_y();
        if self.y >= ground {
            self.y = ground;
            self.dy = 0.0;
            self.is_jumping = false;
            return true;
        }
        false
    }

    pub fn is_grounded(&self, config: &GameConfig) -> bool {
        !self.is_jumping && self.y == config.player_ground_y()
    }

    /// Stamp the sprite at (x, y). Cells off the canvas are clipped.
    pub fn draw(&self, canvas: &mut impl Canvas) {
        for (dy, line) in PLAYER_SPRITE.iter().enumerate() {
            canvas.put_str(self.x, self.y + dy as i32, line);
        }
    }
}
