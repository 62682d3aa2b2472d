//! Hazard contact messages.
//!
//! Whatever detects overlaps (a physics engine, or the grid check in
//! [`crate::systems::collision`]) reports a [`HazardContact`] through the
//! [`CollisionInbox`](crate::resources::collisioninbox::CollisionInbox). At
//! the start of every tick the inbox is drained into `Messages<HazardContact>`
//! and the actor consumes them before input or animation run, so a contact
//! always wins over a hop landing in the same tick.

use bevy_ecs::message::Message;
use glam::Vec3;

/// The actor touched a hazard at `point` (world space).
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct HazardContact {
    pub point: Vec3,
}
