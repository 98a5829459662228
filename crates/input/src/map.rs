//! Key mapping from terminal events to logical keys.

use crate::types::LogicalKey;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a keyboard key to a logical key.
pub fn map_key(key: KeyEvent) -> Option<LogicalKey> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(LogicalKey::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(LogicalKey::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(LogicalKey::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(LogicalKey::Right),

        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Esc => Some(LogicalKey::Pause),
        KeyCode::Enter | KeyCode::Char(' ') => Some(LogicalKey::Confirm),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(LogicalKey::ReturnToMenu),
        KeyCode::F(11) | KeyCode::Char('f') | KeyCode::Char('F') => Some(LogicalKey::ToggleFullscreen),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
