//! Services the game loop talks to.
//!
//! The loop itself never touches a terminal. Keyboard polling and drawing go
//! through these traits so the loop can be driven by fakes in tests.

use std::cell::Cell;
use std::rc::Rc;

use anyhow::Result;

use crate::actor::Actor;
use crate::types::Velocity;

/// Directional input.
pub trait KeyboardService {
    /// Poll the current direction without blocking.
    ///
    /// Returns [`crate::types::Point::ZERO`] when no direction key is held.
    fn get_direction(&mut self) -> Result<Velocity>;
}

/// Video output and window lifecycle.
pub trait VideoService {
    fn open_window(&mut self) -> Result<()>;

    fn is_window_open(&self) -> bool;

    fn close_window(&mut self) -> Result<()>;

    /// Grid width in the same units as actor positions.
    fn width(&self) -> i32;

    /// Grid height in the same units as actor positions.
    fn height(&self) -> i32;

    fn clear_buffer(&mut self) -> Result<()>;

    /// Draw actors in iteration order; later actors cover earlier ones.
    fn draw_actors<'a, I>(&mut self, actors: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Actor>;

    fn flush_buffer(&mut self) -> Result<()>;
}

/// Requests passed from input handling to the window.
///
/// Cloning shares the same flags. Single-threaded by construction.
#[derive(Debug, Clone, Default)]
pub struct WindowSignal {
    inner: Rc<SignalState>,
}

#[derive(Debug, Default)]
struct SignalState {
    close: Cell<bool>,
    redraw: Cell<bool>,
}

impl WindowSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the window to close at the end of the current frame.
    pub fn request_close(&self) {
        self.inner.close.set(true);
    }

    pub fn close_requested(&self) -> bool {
        self.inner.close.get()
    }

    /// Ask for a full redraw on the next flush (e.g. after a terminal resize).
    pub fn request_redraw(&self) {
        self.inner.redraw.set(true);
    }

    /// Consume a pending redraw request.
    pub fn take_redraw(&self) -> bool {
        self.inner.redraw.replace(false)
    }

    /// Clear both requests, e.g. before reopening a window.
    pub fn reset(&self) {
        self.inner.close.set(false);
        self.inner.redraw.set(false);
    }
}
