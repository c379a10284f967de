//! Terminal-backed video service.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::core::{Actor, GameConfig, VideoService, WindowSignal};
use crate::fb::FrameBuffer;
use crate::renderer::TerminalRenderer;
use crate::scene_view::{SceneView, Viewport};

/// Draws the scene into a framebuffer and flushes it to the terminal.
///
/// The "window" is the alternate screen. It stays open until a close is
/// requested through the shared [`WindowSignal`]. `flush_buffer` also paces
/// the loop to the configured frame rate.
pub struct TerminalVideo {
    renderer: TerminalRenderer,
    view: SceneView,
    fb: FrameBuffer,
    signal: WindowSignal,
    caption: String,
    width: i32,
    height: i32,
    frame: Duration,
    next_frame: Option<Instant>,
    open: bool,
}

impl TerminalVideo {
    pub fn new(config: &GameConfig, signal: WindowSignal) -> Self {
        let view = SceneView::new(config.columns, config.rows, config.cell_size)
            .with_caption(config.caption.clone());
        Self {
            renderer: TerminalRenderer::new(),
            view,
            fb: FrameBuffer::new(0, 0),
            signal,
            caption: config.caption.clone(),
            width: config.max_x(),
            height: config.max_y(),
            frame: config.frame_duration(),
            next_frame: None,
            open: false,
        }
    }

    fn viewport() -> Viewport {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        Viewport::new(w, h)
    }

    /// Sleep until the next frame is due. A slow frame is not caught up on.
    fn pace(&mut self) {
        let now = Instant::now();
        let deadline = self.next_frame.unwrap_or(now);
        if deadline > now {
            std::thread::sleep(deadline - now);
        }
        self.next_frame = Some(deadline.max(now) + self.frame);
    }
}

impl VideoService for TerminalVideo {
    fn open_window(&mut self) -> Result<()> {
        self.signal.reset();
        self.renderer
            .enter(&self.caption)
            .context("failed to prepare the terminal")?;
        self.renderer.invalidate();
        self.next_frame = None;
        self.open = true;
        debug!(caption = %self.caption, "terminal window opened");
        Ok(())
    }

    fn is_window_open(&self) -> bool {
        self.open && !self.signal.close_requested()
    }

    fn close_window(&mut self) -> Result<()> {
        if !self.open {
            return Ok(());
        }
        self.open = false;
        self.renderer
            .exit()
            .context("failed to restore the terminal")?;
        debug!("terminal window closed");
        Ok(())
    }

    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn clear_buffer(&mut self) -> Result<()> {
        self.view.clear_into(Self::viewport(), &mut self.fb);
        Ok(())
    }

    fn draw_actors<'a, I>(&mut self, actors: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Actor>,
    {
        self.view.draw_actors(&mut self.fb, actors);
        Ok(())
    }

    fn flush_buffer(&mut self) -> Result<()> {
        if self.signal.take_redraw() {
            self.renderer.invalidate();
        }
        self.renderer.draw_swap(&mut self.fb)?;
        self.pace();
        Ok(())
    }
}

impl Drop for TerminalVideo {
    fn drop(&mut self) {
        if self.open {
            if let Err(err) = self.renderer.exit() {
                warn!(?err, "failed to restore the terminal");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Nothing here touches the real terminal.

    #[test]
    fn reports_grid_size_from_config() {
        let config = GameConfig {
            columns: 12,
            rows: 7,
            cell_size: 2,
            ..GameConfig::default()
        };
        let video = TerminalVideo::new(&config, WindowSignal::new());
        assert_eq!(video.width(), 24);
        assert_eq!(video.height(), 14);
    }

    #[test]
    fn window_starts_closed_and_close_is_a_noop() {
        let mut video = TerminalVideo::new(&GameConfig::default(), WindowSignal::new());
        assert!(!video.is_window_open());
        video.close_window().unwrap();
        assert!(!video.is_window_open());
    }

    #[test]
    fn close_request_shuts_an_open_window() {
        let signal = WindowSignal::new();
        let mut video = TerminalVideo::new(&GameConfig::default(), signal.clone());
        // Pretend the terminal was entered.
        video.open = true;
        assert!(video.is_window_open());
        signal.request_close();
        assert!(!video.is_window_open());
        video.open = false;
    }

    #[test]
    fn pacing_schedules_the_next_frame() {
        let config = GameConfig {
            frame_rate: 1000,
            ..GameConfig::default()
        };
        let mut video = TerminalVideo::new(&config, WindowSignal::new());
        let before = Instant::now();
        video.pace();
        let next = video.next_frame.unwrap();
        assert!(next >= before + Duration::from_millis(1));
    }
}
