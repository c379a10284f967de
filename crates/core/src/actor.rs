//! Actors: anything that is drawn on the grid.

use crate::types::{Point, Position, Rgb, Velocity};

/// A drawable, optionally moving, thing on the grid.
///
/// Banners and the robot are plain actors; artifacts wrap one in [`Artifact`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Actor {
    text: String,
    color: Rgb,
    position: Position,
    velocity: Velocity,
}

impl Actor {
    pub fn new(text: impl Into<String>, position: Position, color: Rgb) -> Self {
        Self {
            text: text.into(),
            color,
            position,
            velocity: Point::ZERO,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Velocity) {
        self.velocity = velocity;
    }

    /// Advance by the current velocity, wrapping around at `max_x`/`max_y`.
    ///
    /// Leaving one edge re-enters from the opposite one. For positive bounds the
    /// resulting position is always inside `[0, max_x) x [0, max_y)`.
    pub fn move_next(&mut self, max_x: i32, max_y: i32) {
        self.position = self.position.add(self.velocity).wrap(max_x, max_y);
    }
}

/// A static actor hiding a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    actor: Actor,
    message: String,
}

impl Artifact {
    pub fn new(actor: Actor, message: impl Into<String>) -> Self {
        Self {
            actor,
            message: message.into(),
        }
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn position(&self) -> Position {
        self.actor.position()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn robot_at(x: i32, y: i32) -> Actor {
        Actor::new("#", Point::new(x, y), Rgb::WHITE)
    }

    #[test]
    fn move_next_wraps_past_the_right_edge() {
        let mut robot = robot_at(9, 5);
        robot.set_velocity(Point::new(2, 0));
        robot.move_next(10, 10);
        assert_eq!(robot.position(), Point::new(1, 5));
    }

    #[test]
    fn move_next_wraps_past_the_top_left_corner() {
        let mut robot = robot_at(0, 0);
        robot.set_velocity(Point::new(-1, -1));
        robot.move_next(10, 10);
        assert_eq!(robot.position(), Point::new(9, 9));
    }

    #[test]
    fn move_next_stays_in_bounds_for_any_velocity() {
        for vx in -25..=25 {
            for vy in -25..=25 {
                let mut robot = robot_at(7, 3);
                robot.set_velocity(Point::new(vx, vy));
                robot.move_next(10, 8);
                let p = robot.position();
                assert!((0..10).contains(&p.x), "x out of bounds for v=({vx},{vy}): {p:?}");
                assert!((0..8).contains(&p.y), "y out of bounds for v=({vx},{vy}): {p:?}");
            }
        }
    }

    #[test]
    fn zero_velocity_keeps_position() {
        let mut robot = robot_at(4, 4);
        robot.move_next(10, 10);
        assert_eq!(robot.position(), Point::new(4, 4));
    }

    #[test]
    fn artifact_exposes_its_actor_position() {
        let artifact = Artifact::new(Actor::new("*", Point::new(3, 3), Rgb::WHITE), "Found key!");
        assert_eq!(artifact.position(), Point::new(3, 3));
        assert_eq!(artifact.message(), "Found key!");
        assert_eq!(artifact.actor().text(), "*");
    }
}
