//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into grid directions and provides
//! [`TerminalKeyboard`], the terminal-backed [`KeyboardService`].
//!
//! [`KeyboardService`]: tui_rfk_core::KeyboardService

pub mod keyboard;
pub mod map;

pub use tui_rfk_core as core;
pub use tui_rfk_types as types;

pub use keyboard::TerminalKeyboard;
pub use map::{direction_for_key, should_quit};
