//! Key mapping from terminal events to grid directions.

use crate::types::Point;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key to a unit direction.
///
/// Arrow keys, vim keys (`hjkl`) and `wasd` are supported. `y` grows downwards.
pub fn direction_for_key(key: KeyEvent) -> Option<Point> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Point::new(-1, 0))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Point::new(1, 0))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Point::new(0, -1))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Point::new(0, 1))
        }
        _ => None,
    }
}

/// Check if key should close the window.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
