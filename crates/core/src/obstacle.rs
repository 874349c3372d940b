//! Obstacle entity and its spawn timer.

use crate::canvas::Canvas;
use crate::rng::SimpleRng;
use crate::types::{GameConfig, ObstacleKind, SPAWN_GAP_JITTER, SPAWN_GAP_MIN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Obstacle {
    pub x: i32,
    pub y: i32,
    pub kind: ObstacleKind,
}

impl Obstacle {
    /// Place an obstacle of `kind` at column `x` on the obstacle row.
    pub fn new(x: i32, kind: ObstacleKind, config: &GameConfig) -> Self {
        Self {
            x,
            y: config.obstacle_y(),
            kind,
        }
    }

    /// New obstacle at the right edge with a randomly chosen kind.
    pub fn spawn(config: &GameConfig, rng: &mut SimpleRng) -> Self {
        Self::new(config.spawn_x(), rng.next_obstacle_kind(), config)
    }

    pub fn update(&mut self) {
        self.x -= 1;
    }

    /// Has moved past the left edge.
    pub fn is_offscreen(&self) -> bool {
        self.x < 0
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        canvas.put_char(self.x, self.y, self.kind.glyph());
    }
}

/// Spawn test for one tick.
///
/// The divisor is re-rolled on every call, so the gap between spawns is not
/// a fixed period: a tick spawns when its frame count happens to be a
/// multiple of that tick's fresh roll in `[SPAWN_GAP_MIN, SPAWN_GAP_MIN + SPAWN_GAP_JITTER)`.
/// Frame 0 always spawns.
pub fn spawn_due(frame_count: u32, rng: &mut SimpleRng) -> bool {
    let divisor = SPAWN_GAP_MIN + rng.next_range(SPAWN_GAP_JITTER);
    frame_count % divisor == 0
}

/// Move every obstacle one column left, then drop the ones that left the screen.
///
/// Returns how many were removed.
pub fn advance_obstacles(obstacles: &mut Vec<Obstacle>) -> usize {
    for o in obstacles.iter_mut() {
        o.update();
    }
    prune_offscreen(obstacles)
}

/// Remove obstacles with `x < 0`, keeping the survivors in spawn order.
pub fn prune_offscreen(obstacles: &mut Vec<Obstacle>) -> usize {
    let before = obstacles.len();
    obstacles.retain(|o| !o.is_offscreen());
    before - obstacles.len()
}
