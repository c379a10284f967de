//! Terminal video module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. Actors are
//! painted into a framebuffer which is then diffed against the previous frame
//! and flushed through crossterm.
//!
//! - [`SceneView`] maps actors to framebuffer cells (pure, no I/O)
//! - [`TerminalRenderer`] encodes framebuffers as terminal commands
//! - [`TerminalVideo`] ties both together as the game's [`VideoService`]
//!
//! [`VideoService`]: tui_rfk_core::VideoService

pub mod fb;
pub mod renderer;
pub mod scene_view;
pub mod video;

pub use tui_rfk_core as core;
pub use tui_rfk_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use scene_view::{AnchorY, Origin, SceneView, Viewport};
pub use video::TerminalVideo;
