//! Terminal-backed keyboard service.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::debug;

use crate::core::{KeyboardService, WindowSignal};
use crate::map::{direction_for_key, should_quit};
use crate::types::{Point, Velocity, CELL_SIZE};

/// Polls crossterm for key events without blocking.
///
/// Terminals report key presses (and auto-repeats) rather than held keys, so
/// the direction for a frame is built from every event queued since the last
/// poll: the latest horizontal key sets `x`, the latest vertical key sets `y`.
/// Quit keys and resizes are forwarded to the window through a [`WindowSignal`].
pub struct TerminalKeyboard {
    signal: WindowSignal,
    cell_size: i32,
}

/// Per-frame direction being assembled from events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Heading {
    x: i32,
    y: i32,
}

impl Heading {
    pub fn velocity(self, cell_size: i32) -> Velocity {
        Point::new(self.x, self.y).scale(cell_size)
    }
}

impl TerminalKeyboard {
    pub fn new(signal: WindowSignal) -> Self {
        Self::with_cell_size(signal, CELL_SIZE)
    }

    pub fn with_cell_size(signal: WindowSignal, cell_size: i32) -> Self {
        Self { signal, cell_size }
    }

    /// Fold one terminal event into `heading`.
    pub fn handle_event(&self, heading: &mut Heading, event: Event) {
        match event {
            Event::Key(key) => {
                if key.kind == KeyEventKind::Release {
                    return;
                }
                if should_quit(key) {
                    debug!(code = ?key.code, "quit key pressed");
                    self.signal.request_close();
                    return;
                }
                if let Some(dir) = direction_for_key(key) {
                    if dir.x != 0 {
                        heading.x = dir.x;
                    }
                    if dir.y != 0 {
                        heading.y = dir.y;
                    }
                }
            }
            Event::Resize(width, height) => {
                debug!(width, height, "terminal resized");
                self.signal.request_redraw();
            }
            _ => {}
        }
    }

    /// Direction for a batch of events, scaled to grid units.
    pub fn direction_from_events(&self, events: impl IntoIterator<Item = Event>) -> Velocity {
        let mut heading = Heading::default();
        for event in events {
            self.handle_event(&mut heading, event);
        }
        heading.velocity(self.cell_size)
    }
}

impl KeyboardService for TerminalKeyboard {
    fn get_direction(&mut self) -> Result<Velocity> {
        let mut heading = Heading::default();
        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            self.handle_event(&mut heading, ev);
        }
        Ok(heading.velocity(self.cell_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    fn press(code: KeyCode) -> Event {
        key(code, KeyEventKind::Press)
    }

    #[test]
    fn no_events_means_standing_still() {
        let kb = TerminalKeyboard::new(WindowSignal::new());
        assert_eq!(kb.direction_from_events(Vec::new()), Point::ZERO);
    }

    #[test]
    fn axes_combine_and_latest_wins() {
        let kb = TerminalKeyboard::new(WindowSignal::new());
        let v = kb.direction_from_events(vec![
            press(KeyCode::Left),
            press(KeyCode::Up),
            press(KeyCode::Right),
        ]);
        assert_eq!(v, Point::new(1, -1));
    }

    #[test]
    fn repeats_count_and_releases_do_not() {
        let kb = TerminalKeyboard::new(WindowSignal::new());
        assert_eq!(
            kb.direction_from_events(vec![key(KeyCode::Down, KeyEventKind::Repeat)]),
            Point::new(0, 1)
        );
        assert_eq!(
            kb.direction_from_events(vec![key(KeyCode::Down, KeyEventKind::Release)]),
            Point::ZERO
        );
    }

    #[test]
    fn direction_is_scaled_by_cell_size() {
        let kb = TerminalKeyboard::with_cell_size(WindowSignal::new(), 15);
        assert_eq!(
            kb.direction_from_events(vec![press(KeyCode::Char('a'))]),
            Point::new(-15, 0)
        );
    }

    #[test]
    fn quit_and_resize_reach_the_window() {
        let signal = WindowSignal::new();
        let kb = TerminalKeyboard::new(signal.clone());

        kb.direction_from_events(vec![Event::Resize(100, 40)]);
        assert!(signal.take_redraw());
        assert!(!signal.close_requested());

        kb.direction_from_events(vec![press(KeyCode::Char('q'))]);
        assert!(signal.close_requested());
    }
}
