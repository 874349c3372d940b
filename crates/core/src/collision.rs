//! Axis-aligned box overlap between the player and obstacles.
//!
//! The player box is 3x2 from the sprite origin, one row shorter than the
//! drawn sprite, so the feet row never collides.

use crate::obstacle::Obstacle;
use crate::player::Player;
use crate::types::{OBSTACLE_HITBOX_H, OBSTACLE_HITBOX_W, PLAYER_HITBOX_H, PLAYER_HITBOX_W};

/// Integer rectangle, origin at the top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Strict overlap; rectangles sharing only an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x + self.w > other.x
            && self.x < other.x + other.w
            && self.y + self.h > other.y
            && self.y < other.y + other.h
    }
}

pub fn player_hitbox(player: &Player) -> Rect {
    Rect::new(player.x, player.y, PLAYER_HITBOX_W, PLAYER_HITBOX_H)
}

pub fn obstacle_hitbox(obstacle: &Obstacle) -> Rect {
    Rect::new(obstacle.x, obstacle.y, OBSTACLE_HITBOX_W, OBSTACLE_HITBOX_H)
}

pub fn collides(player: &Player, obstacle: &Obstacle) -> bool {
    player_hitbox(player).intersects(&obstacle_hitbox(obstacle))
}

/// Index of the first obstacle overlapping the player, if any.
pub fn first_collision(player: &Player, obstacles: &[Obstacle]) -> Option<usize> {
    let p = player_hitbox(player);
    obstacles
        .iter()
        .position(|o| p.intersects(&obstacle_hitbox(o)))
}
