//! Session module - one run from the first Playing tick to game over
//!
//! Holds the player, the live obstacles (spawn order), the survival score and
//! the frame counter that drives spawning. A restart replaces the whole value.

use log::debug;

use crate::collision::first_collision;
use crate::obstacle::{advance_obstacles, spawn_due, Obstacle};
use crate::player::Player;
use crate::rng::SimpleRng;
use crate::types::GameConfig;

/// Why a session stopped.
///
/// Both reasons lead to the same result screen; the distinction is kept for
/// logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    Collision,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    Over(EndReason),
}

/// What happened during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub spawned: Option<Obstacle>,
    pub pruned: usize,
    pub landed: bool,
    pub collided: bool,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    player: Player,
    obstacles: Vec<Obstacle>,
    score: u32,
    frame_count: u32,
    status: SessionStatus,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            player: Player::new(&config),
            obstacles: Vec::new(),
            score: 0,
            frame_count: 0,
            status: SessionStatus::Running,
        }
    }

    /// Return every field to its initial value.
    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn obstacles_mut(&mut self) -> &mut Vec<Obstacle> {
        &mut self.obstacles
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status, SessionStatus::Over(_))
    }

    pub fn jump(&mut self) {
        if !self.is_over() {
            self.player.jump();
        }
    }

    /// End the session without a collision (quit key while playing).
    pub fn force_quit(&mut self) {
        if !self.is_over() {
            self.status = SessionStatus::Over(EndReason::Quit);
        }
    }

    /// Collision pass: ends the session if any obstacle overlaps the player.
    pub fn check_collision(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        match first_collision(&self.player, &self.obstacles) {
            Some(i) => {
                debug!("collision with obstacle at x={}", self.obstacles[i].x);
                self.status = SessionStatus::Over(EndReason::Collision);
                true
            }
            None => false,
        }
    }

    /// Advance one fixed tick.
    ///
    /// Order: player physics, score, spawn roll, obstacle motion and pruning,
    /// collision. The frame counter advances last. A finished session is not
    /// advanced.
    pub fn step(&mut self, rng: &mut SimpleRng) -> TickReport {
        let mut report = TickReport::default();
        if self.is_over() {
            return report;
        }

        report.landed = self.player.update(&self.config);
        self.score = self.score.saturating_add(1);

        if spawn_due(self.frame_count, rng) {
            let obstacle = Obstacle::spawn(&self.config, rng);
            debug!(
                "spawned {:?} at x={} (frame {})",
                obstacle.kind, obstacle.x, self.frame_count
            );
            self.obstacles.push(obstacle);
            report.spawned = Some(obstacle);
        }

        report.pruned = advance_obstacles(&mut self.obstacles);
        if report.pruned > 0 {
            debug!("pruned {} obstacle(s)", report.pruned);
        }

        report.collided = self.check_collision();

        self.frame_count = self.frame_count.wrapping_add(1);
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ObstacleKind, PLAYER_X};

    fn session() -> GameSession {
        GameSession::new(GameConfig::default())
    }

    #[test]
    fn test_new_session() {
        let s = session();
        assert_eq!(s.score(), 0);
        assert_eq!(s.frame_count(), 0);
        assert!(s.obstacles().is_empty());
        assert_eq!(s.status(), SessionStatus::Running);
        assert_eq!(s.player().x, PLAYER_X);
        assert_eq!(s.player().y, 16);
    }

    #[test]
    fn test_first_tick_spawns_and_moves_obstacle() {
        let mut s = session();
        let mut rng = SimpleRng::new(1);

        let report = s.step(&mut rng);

        assert!(report.spawned.is_some());
        assert_eq!(s.obstacles().len(), 1);
        // Spawned at 78 and moved once in the same tick.
        assert_eq!(s.obstacles()[0].x, 77);
        assert_eq!(s.score(), 1);
        assert_eq!(s.frame_count(), 1);
    }

    #[test]
    fn test_score_counts_ticks() {
        let mut s = session();
        let mut rng = SimpleRng::new(1);
        for _ in 0..25 {
            s.obstacles_mut().clear();
            s.step(&mut rng);
        }
        assert_eq!(s.score(), 25);
        assert!(!s.is_over());
    }

    #[test]
    fn test_obstacle_in_player_column_ends_session() {
        let mut s = session();
        let mut rng = SimpleRng::new(1);
        let c = *s.config();
        // One column right of the player so it lands on x = player.x after moving.
        s.obstacles_mut()
            .push(Obstacle::new(PLAYER_X + 1, ObstacleKind::Cactus, &c));

        let report = s.step(&mut rng);

        assert!(report.collided);
        assert_eq!(s.status(), SessionStatus::Over(EndReason::Collision));
    }

    #[test]
    fn test_collision_pass_on_player_column() {
        let mut s = session();
        let c = *s.config();
        s.obstacles_mut()
            .push(Obstacle::new(PLAYER_X, ObstacleKind::Saguaro, &c));
        assert!(s.check_collision());
        assert!(s.is_over());
        // Already over: the pass reports nothing new.
        assert!(!s.check_collision());
    }

    #[test]
    fn test_finished_session_does_not_advance() {
        let mut s = session();
        let mut rng = SimpleRng::new(1);
        s.force_quit();
        let report = s.step(&mut rng);
        assert_eq!(report, TickReport::default());
        assert_eq!(s.score(), 0);
        assert_eq!(s.status(), SessionStatus::Over(EndReason::Quit));
    }

    #[test]
    fn test_force_quit_keeps_collision_reason() {
        let mut s = session();
        let mut rng = SimpleRng::new(1);
        let c = *s.config();
        s.obstacles_mut()
            .push(Obstacle::new(PLAYER_X + 1, ObstacleKind::Cactus, &c));
        s.step(&mut rng);
        s.force_quit();
        assert_eq!(s.status(), SessionStatus::Over(EndReason::Collision));
    }

    #[test]
    fn test_reset_restores_every_field() {
        let mut s = session();
        let mut rng = SimpleRng::new(9);
        for _ in 0..30 {
            s.step(&mut rng);
        }
        s.jump();
        s.step(&mut rng);
        s.force_quit();

        s.reset();

        assert_eq!(s.score(), 0);
        assert_eq!(s.frame_count(), 0);
        assert!(s.obstacles().is_empty());
        assert_eq!(s.status(), SessionStatus::Running);
        assert_eq!(*s.player(), Player::new(s.config()));
    }

    #[test]
    fn test_jump_ignored_after_game_over() {
        let mut s = session();
        s.force_quit();
        s.jump();
        assert!(!s.player().is_jumping);
    }
}
