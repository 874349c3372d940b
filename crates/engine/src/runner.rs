//! Fixed-timestep loop over the three screens.
//!
//! Per iteration:
//!
//! - **Start / Game over**: present the static screen, handle at most one
//!   key, sleep `menu_tick_ms`.
//! - **Playing**: handle at most one key (a quit ends the run immediately,
//!   without a final frame), tick the session, present the frame with the
//!   control hint, sleep `playing_tick_ms`. The screen is cleared once when
//!   the run ends.

use anyhow::Result;
use log::{debug, info};

use crate::core::{Flow, Game};
use crate::input::map_key;
use crate::term::{GameView, TerminalSurface};
use crate::types::{GameAction, Phase};

pub struct Runner<S: TerminalSurface> {
    surface: S,
    game: Game,
    view: GameView,
}

impl<S: TerminalSurface> Runner<S> {
    pub fn new(surface: S, game: Game) -> Self {
        Self {
            surface,
            game,
            view: GameView::default(),
        }
    }

    pub fn with_view(mut self, view: GameView) -> Self {
        self.view = view;
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_parts(self) -> (S, Game) {
        (self.surface, self.game)
    }

    /// Run until a quit from the start or result screen.
    pub fn run(&mut self) -> Result<()> {
        info!("runner started ({}x{})", self.game.config().width, self.game.config().height);
        loop {
            if self.step()? == Flow::Exit {
                break;
            }
        }
        if self.game.phase() == Phase::GameOver {
            // Leave the shell prompt below the result screen.
            self.surface.move_cursor(0, self.game.config().height)?;
        }
        info!("runner exiting from {}", self.game.phase().as_str());
        Ok(())
    }

    /// One loop iteration for the current phase.
    pub fn step(&mut self) -> Result<Flow> {
        match self.game.phase() {
            Phase::StartScreen | Phase::GameOver => self.step_menu(),
            Phase::Playing => self.step_playing(),
        }
    }

    fn step_menu(&mut self) -> Result<Flow> {
        let screen = self.view.render(&self.game);
        self.surface.present(&screen, None)?;

        if let Some(action) = self.poll_action()? {
            if self.game.apply_action(action) == Flow::Exit {
                return Ok(Flow::Exit);
            }
        }

        self.surface.sleep(self.game.config().menu_tick_ms);
        Ok(Flow::Continue)
    }

    fn step_playing(&mut self) -> Result<Flow> {
        if let Some(action) = self.poll_action()? {
            self.game.apply_action(action);
            if action == GameAction::Quit {
                self.surface.clear_screen()?;
                return Ok(Flow::Continue);
            }
        }

        self.game.tick();

        // The frame of the final tick is still shown before the result screen.
        let screen = self.view.render_playing(self.game.session());
        self.surface
            .present(&screen, self.view.hint(Phase::Playing))?;
        self.surface.sleep(self.game.config().playing_tick_ms);

        if self.game.phase() == Phase::GameOver {
            self.surface.clear_screen()?;
        }
        Ok(Flow::Continue)
    }

    fn poll_action(&mut self) -> Result<Option<GameAction>> {
        let Some(key) = self.surface.poll_key()? else {
            return Ok(None);
        };
        let action = map_key(self.game.phase(), key);
        if let Some(action) = action {
            debug!("{:?} in {}", action, self.game.phase().as_str());
        }
        Ok(action)
    }
}
