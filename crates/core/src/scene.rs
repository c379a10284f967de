//! Scene setup: builds the initial cast for a new game.

use tracing::debug;

use crate::actor::{Actor, Artifact};
use crate::cast::Cast;
use crate::config::GameConfig;
use crate::messages::MessageBook;
use crate::rng::SimpleRng;
use crate::types::{Point, Rgb, ROBOT_GLYPH};

/// Build the starting cast.
///
/// - banner: empty, one cell in from the top-left corner
/// - robot: `#` at the grid center
/// - `config.artifact_count` artifacts with random glyph, color and position
///   (never on row or column 0), taking messages from `messages` in order
///
/// The same config and seed always produce the same cast.
pub fn build_cast(config: &GameConfig, messages: &MessageBook, rng: &mut SimpleRng) -> Cast {
    let max_x = config.max_x();
    let max_y = config.max_y();
    let cell = config.cell_size;

    let banner = Actor::new("", Point::new(cell, 0), Rgb::WHITE);
    let robot = Actor::new(ROBOT_GLYPH, Point::new(max_x / 2, max_y / 2), Rgb::WHITE);
    let mut cast = Cast::new(banner, robot);

    let columns = config.columns as i32;
    let rows = config.rows as i32;
    for i in 0..config.artifact_count {
        let glyph = rng.next_glyph();
        let position = rng.next_point(1, columns, 1, rows).scale(cell);
        let color = rng.next_color();
        let actor = Actor::new(glyph, position, color);
        cast.add_artifact(Artifact::new(actor, messages.get(i)));
    }

    debug!(
        artifacts = cast.artifacts().len(),
        seed = config.seed,
        "built cast"
    );
    cast
}
