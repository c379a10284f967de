//! TUI Robot Finds Kitten (workspace facade crate).
//!
//! Re-exports the dedicated crates under `crates/` as
//! `tui_rfk::{core,engine,input,term,types}`.

pub use tui_rfk_core as core;
pub use tui_rfk_engine as engine;
pub use tui_rfk_input as input;
pub use tui_rfk_term as term;
pub use tui_rfk_types as types;
