//! Key mapping from terminal events to game actions.

use crate::types::{GameAction, Phase};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press to the action it means in `phase`.
///
/// | Phase | Keys | Action |
/// |-------|------|--------|
/// | start | Space | Start |
/// | playing | Space, W | Jump |
/// | game over | R | Restart |
/// | any | Q, Ctrl+C | Quit |
///
/// Key releases are ignored so a press never acts twice on terminals that
/// report both edges.
pub fn map_key(phase: Phase, key: KeyEvent) -> Option<GameAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if should_quit(key) {
        return Some(GameAction::Quit);
    }

    match (phase, key.code) {
        (Phase::StartScreen, KeyCode::Char(' ')) => Some(GameAction::Start),

        (Phase::Playing, KeyCode::Char(' '))
        | (Phase::Playing, KeyCode::Char('w'))
        | (Phase::Playing, KeyCode::Char('W')) => Some(GameAction::Jump),

        (Phase::GameOver, KeyCode::Char('r')) | (Phase::GameOver, KeyCode::Char('R')) => {
            Some(GameAction::Restart)
        }

        _ => None,
    }
}

/// Check if key should quit (or, while playing, end the run).
///
/// Ctrl+C is included because raw mode delivers it as a key instead of a signal.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
