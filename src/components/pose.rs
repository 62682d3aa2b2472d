//! World-space poses.
//!
//! A [`Pose`] is what the render side needs to place the actor: a world
//! position plus the model's local [`Orientation`]. The body's facing yaw is
//! kept separately (see [`crate::components::actortransform`]) because the
//! jump animation only touches the model's pitch.

use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Euler angles in degrees, applied roll first, then pitch, then yaw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    /// Rotation about the x axis.
    pub pitch: f32,
    /// Rotation about the y (up) axis.
    pub yaw: f32,
    /// Rotation about the z axis.
    pub roll: f32,
}

impl Orientation {
    pub const IDENTITY: Orientation = Orientation {
        pitch: 0.0,
        yaw: 0.0,
        roll: 0.0,
    };

    pub fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Orientation { pitch, yaw, roll }
    }

    /// Same yaw and roll, different pitch.
    pub fn with_pitch(self, pitch: f32) -> Self {
        Orientation { pitch, ..self }
    }

    /// Quaternion equivalent of these angles.
    pub fn to_quat(self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.yaw.to_radians(),
            self.pitch.to_radians(),
            self.roll.to_radians(),
        )
    }
}

/// World position plus model orientation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub orientation: Orientation,
}

impl Pose {
    pub fn new(position: Vec3, orientation: Orientation) -> Self {
        Pose {
            position,
            orientation,
        }
    }

    /// Pose at `position` with an unrotated model.
    pub fn at(position: Vec3) -> Self {
        Pose {
            position,
            orientation: Orientation::IDENTITY,
        }
    }
}
