//! Render-facing transform of the actor.
//!
//! [`ActorTransform`] is the hand-off point to whatever draws the actor. The
//! body carries the facing yaw; the model (a child of the body in a scene
//! graph) carries the hop pitch from [`Pose::orientation`].

use bevy_ecs::prelude::Component;
use glam::Quat;

use crate::components::gridposition::Direction;
use crate::components::pose::Pose;

#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct ActorTransform {
    /// World pose of the body plus the model's local orientation.
    pub pose: Pose,
    /// Direction the body faces.
    pub facing: Direction,
}

impl ActorTransform {
    /// Body rotation derived from the facing direction.
    pub fn body_rotation(&self) -> Quat {
        Quat::from_rotation_y(self.facing.yaw_degrees().to_radians())
    }

    /// Model rotation relative to the body.
    pub fn model_rotation(&self) -> Quat {
        self.pose.orientation.to_quat()
    }
}
