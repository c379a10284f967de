//! Cast: every actor in the current scene, grouped by [`ActorKind`].
//!
//! The banner and the robot are singletons, so they live in their own fields
//! and always exist. Artifacts keep insertion order, which is both their paint
//! order and the order collisions are resolved in.

use crate::actor::{Actor, Artifact};
use crate::types::ActorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cast {
    banner: Actor,
    robot: Actor,
    artifacts: Vec<Artifact>,
}

impl Cast {
    pub fn new(banner: Actor, robot: Actor) -> Self {
        Self {
            banner,
            robot,
            artifacts: Vec::new(),
        }
    }

    pub fn banner(&self) -> &Actor {
        &self.banner
    }

    pub fn banner_mut(&mut self) -> &mut Actor {
        &mut self.banner
    }

    pub fn robot(&self) -> &Actor {
        &self.robot
    }

    pub fn robot_mut(&mut self) -> &mut Actor {
        &mut self.robot
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn add_artifact(&mut self, artifact: Artifact) {
        self.artifacts.push(artifact);
    }

    /// Remove and return the artifact at `index`, if any.
    pub fn remove_artifact(&mut self, index: usize) -> Option<Artifact> {
        if index < self.artifacts.len() {
            Some(self.artifacts.remove(index))
        } else {
            None
        }
    }

    /// First actor of a category. Always `Some` for banners and robots.
    pub fn first_actor(&self, kind: ActorKind) -> Option<&Actor> {
        self.actors(kind).next()
    }

    /// All actors of a category, in insertion order.
    pub fn actors(&self, kind: ActorKind) -> impl Iterator<Item = &Actor> + '_ {
        let banner = (kind == ActorKind::Banner).then_some(&self.banner);
        let robot = (kind == ActorKind::Robot).then_some(&self.robot);
        let artifacts: &[Artifact] = if kind == ActorKind::Artifact {
            &self.artifacts
        } else {
            &[]
        };
        banner
            .into_iter()
            .chain(robot)
            .chain(artifacts.iter().map(Artifact::actor))
    }

    /// Every actor, in [`ActorKind::PAINT_ORDER`].
    pub fn all_actors(&self) -> impl Iterator<Item = &Actor> + '_ {
        ActorKind::PAINT_ORDER
            .into_iter()
            .flat_map(move |kind| self.actors(kind))
    }

    /// Number of actors across all categories.
    pub fn actor_count(&self) -> usize {
        2 + self.artifacts.len()
    }
}
