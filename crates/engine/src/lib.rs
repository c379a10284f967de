//! Game loop engine.
//!
//! [`Director`] runs the fixed three-phase loop over a [`Cast`]: read input,
//! update the world, render. It only talks to the outside through the
//! [`KeyboardService`] and [`VideoService`] traits.

pub mod director;

pub use tui_rfk_core as core;
pub use tui_rfk_types as types;

pub use director::Director;
