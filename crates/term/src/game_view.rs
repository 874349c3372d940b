//! GameView: maps `core::Game` into a fresh screen each frame.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Canvas, Game, GameSession};
use crate::screen::Screen;
use crate::types::{GameConfig, Phase};

/// Control hint printed under the Playing frame.
pub const PLAYING_HINT: &str = "Press SPACE to Jump, Q to Quit";

pub const TITLE_TEXT: &str = "T - R E X   R U N";
pub const START_GUIDE: &str = "Press SPACE to Start";
pub const RESULT_GUIDE: &str = "Press 'R' to Retry, 'Q' to Quit";

const TREX_ART: [&str; 6] = [
    "        __",
    "       /..\\",
    "      (_.__)",
    "      /| |",
    "     //_//",
    "    \\___/",
];

const GAME_OVER_ART: [&str; 5] = [
    " ____                         ___",
    "/ ___| __ _ _ __ ___   ___   / _ \\__   _____ _ __",
    "| |  _ / _` | '_ ` _ \\ / _ \\ | | | \\ \\ / / _ \\ '__|",
    "| |_| | (_| | | | | | |  __/ | |_| |\\ V /  __/ |",
    " \\____|\\__,_|_| |_| |_|\\___|  \\___/  \\_/ \\___|_|",
];

/// Renders each phase of the game into a screen of the configured size.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView {
    ground: GroundStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroundStyle {
    pub ch: char,
}

impl Default for GroundStyle {
    fn default() -> Self {
        Self { ch: '-' }
    }
}

impl GameView {
    pub fn new(ground: GroundStyle) -> Self {
        Self { ground }
    }

    /// Render the screen for the game's current phase.
    pub fn render(&self, game: &Game) -> Screen {
        match game.phase() {
            Phase::StartScreen => self.render_start(game.config()),
            Phase::Playing => self.render_playing(game.session()),
            Phase::GameOver => self.render_game_over(game.config(), game.session().score()),
        }
    }

    /// Line printed under the frame, if the phase has one.
    pub fn hint(&self, phase: Phase) -> Option<&'static str> {
        match phase {
            Phase::Playing => Some(PLAYING_HINT),
            Phase::StartScreen | Phase::GameOver => None,
        }
    }

    pub fn render_start(&self, config: &GameConfig) -> Screen {
        let mut screen = Screen::new(config.width, config.height);
        let mid_x = config.width as i32 / 2;
        let mid_y = config.height as i32 / 2;

        for (i, line) in TREX_ART.iter().enumerate() {
            let y = mid_y - TREX_ART.len() as i32 + i as i32;
            screen.put_str(mid_x - 10, y, line);
        }
        screen.put_str_centered(mid_y + 2, TITLE_TEXT);
        screen.put_str_centered(mid_y + 4, START_GUIDE);
        screen
    }

    /// Ground line, player, obstacles, then the score on top.
    pub fn render_playing(&self, session: &GameSession) -> Screen {
        let config = session.config();
        let mut screen = Screen::new(config.width, config.height);

        screen.fill_row(config.ground_y(), self.ground.ch);
        session.player().draw(&mut screen);
        for obstacle in session.obstacles() {
            obstacle.draw(&mut screen);
        }
        screen.put_str(2, 0, &format!("Score: {}", session.score()));
        screen
    }

    pub fn render_game_over(&self, config: &GameConfig, score: u32) -> Screen {
        let mut screen = Screen::new(config.width, config.height);
        let mid_x = config.width as i32 / 2;
        let mid_y = config.height as i32 / 2;

        for (i, line) in GAME_OVER_ART.iter().enumerate() {
            let y = mid_y - (GAME_OVER_ART.len() as i32 - 1) + i as i32;
            screen.put_str(mid_x - 25, y, line);
        }
        screen.put_str_centered(mid_y + 3, &format!("Your Score: {}", score));
        screen.put_str_centered(mid_y + 5, RESULT_GUIDE);
        screen
    }
}
