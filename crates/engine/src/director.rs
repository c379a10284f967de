//! The director: owns the services and drives each frame.

use anyhow::Result;
use tracing::{debug, info};

use crate::core::{Cast, KeyboardService, VideoService};

pub struct Director<K, V> {
    keyboard: K,
    video: V,
    frames: u64,
}

impl<K: KeyboardService, V: VideoService> Director<K, V> {
    pub fn new(keyboard: K, video: V) -> Self {
        Self {
            keyboard,
            video,
            frames: 0,
        }
    }

    pub fn video(&self) -> &V {
        &self.video
    }

    /// Frames completed by [`Director::start_game`].
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run the game until the window closes.
    ///
    /// Blocks the calling thread. The window is closed even if a frame fails;
    /// the frame error wins over a close error.
    pub fn start_game(&mut self, cast: &mut Cast) -> Result<()> {
        self.video.open_window()?;
        info!(
            width = self.video.width(),
            height = self.video.height(),
            artifacts = cast.artifacts().len(),
            "window opened"
        );

        let result = self.run_frames(cast);
        let closed = self.video.close_window();
        info!(frames = self.frames, "window closed");

        result?;
        closed
    }

    fn run_frames(&mut self, cast: &mut Cast) -> Result<()> {
        while self.video.is_window_open() {
            self.get_inputs(cast)?;
            if let Some(index) = self.do_updates(cast) {
                debug!(
                    frame = self.frames,
                    artifact = index,
                    message = cast.banner().text(),
                    "robot found an artifact"
                );
            }
            self.do_outputs(cast)?;
            self.frames += 1;
        }
        Ok(())
    }

    /// Poll the keyboard and make the direction the robot's velocity.
    pub fn get_inputs(&mut self, cast: &mut Cast) -> Result<()> {
        let velocity = self.keyboard.get_direction()?;
        cast.robot_mut().set_velocity(velocity);
        Ok(())
    }

    /// Reset the banner, move the robot and resolve artifact collisions.
    ///
    /// Artifacts are checked in insertion order and the last one sharing the
    /// robot's position sets the banner. Returns that artifact's index.
    pub fn do_updates(&mut self, cast: &mut Cast) -> Option<usize> {
        cast.banner_mut().set_text("");

        let max_x = self.video.width();
        let max_y = self.video.height();
        cast.robot_mut().move_next(max_x, max_y);

        let robot_at = cast.robot().position();
        let found = cast
            .artifacts()
            .iter()
            .rposition(|artifact| artifact.position() == robot_at);

        if let Some(index) = found {
            let message = cast.artifacts()[index].message().to_string();
            cast.banner_mut().set_text(message);
        }
        found
    }

    /// Redraw every actor.
    pub fn do_outputs(&mut self, cast: &Cast) -> Result<()> {
        self.video.clear_buffer()?;
        self.video.draw_actors(cast.all_actors())?;
        self.video.flush_buffer()?;
        Ok(())
    }

    pub fn into_parts(self) -> (K, V) {
        (self.keyboard, self.video)
    }
}
