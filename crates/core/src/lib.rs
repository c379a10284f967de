//! Core game model - pure, deterministic, and testable
//!
//! This crate holds everything the game loop reads and writes, plus the
//! service traits it talks through. It has **no dependency** on a terminal,
//! which keeps it:
//!
//! - **Deterministic**: the same seed builds the same scene
//! - **Testable**: the loop can be driven by fake keyboards and displays
//! - **Portable**: any backend that implements the service traits works
//!
//! # Module Structure
//!
//! - [`actor`]: actors and artifacts, including wraparound movement
//! - [`cast`]: the banner, the robot and the artifacts of a scene
//! - [`config`]: grid size, frame rate and setup parameters
//! - [`messages`]: messages hidden under artifacts
//! - [`rng`]: seeded LCG used for scene setup
//! - [`scene`]: builds the starting cast
//! - [`service`]: keyboard and video service traits
//!
//! # Example
//!
//! ```
//! use tui_rfk_core::{build_cast, GameConfig, MessageBook, SimpleRng};
//! use tui_rfk_types::{ActorKind, Point};
//!
//! let config = GameConfig::default();
//! let mut cast = build_cast(&config, &MessageBook::builtin(), &mut SimpleRng::new(1));
//!
//! let robot = cast.robot_mut();
//! robot.set_velocity(Point::new(1, 0));
//! robot.move_next(config.max_x(), config.max_y());
//!
//! assert_eq!(cast.first_actor(ActorKind::Robot).unwrap().position(), Point::new(31, 10));
//! ```

pub mod actor;
pub mod cast;
pub mod config;
pub mod messages;
pub mod rng;
pub mod scene;
pub mod service;

pub use tui_rfk_types as types;

// Re-export commonly used types for convenience
pub use actor::{Actor, Artifact};
pub use cast::Cast;
pub use config::GameConfig;
pub use messages::MessageBook;
pub use rng::SimpleRng;
pub use scene::build_cast;
pub use service::{KeyboardService, VideoService, WindowSignal};
