//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, tests).
//!
//! # Grid Dimensions
//!
//! The playfield is a toroidal grid measured in terminal cells:
//!
//! - **Columns**: 60 (indexed 0-59)
//! - **Rows**: 20 (indexed 0-19)
//! - **Cell size**: 1 (one grid unit per terminal cell)
//!
//! Row 0 is shared with the banner, which is painted first and can be covered
//! by the robot or an artifact.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_RATE` | 12 | Frames per second of the director loop |
//! | `FRAME_MS` | 83 | Frame budget in milliseconds |
//!
//! # Examples
//!
//! ```
//! use tui_rfk_types::{ActorKind, Point, COLUMNS, ROWS};
//!
//! let p = Point::new(3, 4).add(Point::new(1, -1));
//! assert_eq!(p, Point::new(4, 3));
//!
//! assert_eq!(ActorKind::parse_category("robots"), Some(ActorKind::Robot));
//! assert_eq!(COLUMNS, 60);
//! assert_eq!(ROWS, 20);
//! ```

/// Grid width in cells (60 columns)
pub const COLUMNS: u16 = 60;

/// Grid height in cells (20 rows)
pub const ROWS: u16 = 20;

/// Size of one grid unit in terminal cells
pub const CELL_SIZE: i32 = 1;

/// Target frames per second of the game loop
pub const FRAME_RATE: u32 = 12;

/// Frame budget at the default frame rate
pub const FRAME_MS: u32 = 1000 / FRAME_RATE;

/// Number of artifacts scattered on a fresh grid
pub const DEFAULT_ARTIFACTS: usize = 40;

/// Glyph used for the robot
pub const ROBOT_GLYPH: &str = "#";

/// Inclusive range of printable ASCII codes used for artifact glyphs
pub const ARTIFACT_GLYPH_MIN: u8 = 33;
pub const ARTIFACT_GLYPH_MAX: u8 = 126;

/// A point on the grid.
///
/// Used for both positions and velocities. Equality is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Where an actor is.
pub type Position = Point;

/// How far an actor moves per frame.
pub type Velocity = Point;

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise sum.
    pub fn add(self, other: Point) -> Self {
        Self {
            x: self.x.wrapping_add(other.x),
            y: self.y.wrapping_add(other.y),
        }
    }

    /// Multiply both components by `factor`.
    ///
    /// ```
    /// use tui_rfk_types::Point;
    ///
    /// assert_eq!(Point::new(-1, 1).scale(15), Point::new(-15, 15));
    /// ```
    pub fn scale(self, factor: i32) -> Self {
        Self {
            x: self.x.wrapping_mul(factor),
            y: self.y.wrapping_mul(factor),
        }
    }

    /// Wrap both coordinates into `[0, max_x) x [0, max_y)`.
    ///
    /// An axis with a non-positive bound is left untouched.
    ///
    /// ```
    /// use tui_rfk_types::Point;
    ///
    /// assert_eq!(Point::new(11, 5).wrap(10, 10), Point::new(1, 5));
    /// assert_eq!(Point::new(-1, -12).wrap(10, 10), Point::new(9, 8));
    /// ```
    pub fn wrap(self, max_x: i32, max_y: i32) -> Self {
        Self {
            x: wrap_axis(self.x, max_x),
            y: wrap_axis(self.y, max_y),
        }
    }
}

#[inline]
fn wrap_axis(v: i32, max: i32) -> i32 {
    if max > 0 {
        v.rem_euclid(max)
    } else {
        v
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Rgb::WHITE
    }
}

/// Actor categories of a cast.
///
/// - **Banner**: the one-line message shown at the top of the screen
/// - **Robot**: the keyboard-controlled actor
/// - **Artifact**: a static actor hiding a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorKind {
    Banner,
    Robot,
    Artifact,
}

impl ActorKind {
    /// Aggregate ordering of a cast. Later kinds are painted over earlier ones.
    pub const PAINT_ORDER: [ActorKind; 3] = [ActorKind::Banner, ActorKind::Robot, ActorKind::Artifact];

    /// Parse a category name (case-insensitive, singular or plural)
    ///
    /// ```
    /// use tui_rfk_types::ActorKind;
    ///
    /// assert_eq!(ActorKind::parse_category("Banner"), Some(ActorKind::Banner));
    /// assert_eq!(ActorKind::parse_category("artifacts"), Some(ActorKind::Artifact));
    /// assert_eq!(ActorKind::parse_category("kitten"), None);
    /// ```
    pub fn parse_category(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "banner" | "banners" => Some(ActorKind::Banner),
            "robot" | "robots" => Some(ActorKind::Robot),
            "artifact" | "artifacts" => Some(ActorKind::Artifact),
            _ => None,
        }
    }

    /// Plural category name
    pub fn as_str(&self) -> &'static str {
        match self {
            ActorKind::Banner => "banners",
            ActorKind::Robot => "robots",
            ActorKind::Artifact => "artifacts",
        }
    }
}
