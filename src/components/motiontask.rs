//! A single in-flight hop animation.
//!
//! A [`MotionTask`] describes one jump from a start pose to an end pose over
//! a fixed duration. It carries no game rules; stepping it is done by
//! [`crate::systems::motion::step`], which returns a [`MotionStep`].

use glam::Vec3;

use crate::components::pose::{Orientation, Pose};

/// Height of the jump arc above the base height at mid-flight.
pub const ARC_AMPLITUDE: f32 = 0.5;

/// Pitch swing coefficient, in degrees: pitch is `-5π * cos(π p)`.
pub const PITCH_COEFFICIENT: f32 = 5.0 * std::f32::consts::PI;

/// Tunables shared by every task the actor starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionParams {
    /// Seconds one hop takes.
    pub move_duration: f32,
    /// World height of the actor while standing on a cell.
    pub base_height: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        MotionParams {
            move_duration: 0.2,
            base_height: 0.2,
        }
    }
}

/// One interpolation from `start` to `end`.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionTask {
    /// Pose when the hop began.
    pub start: Pose,
    /// Pose the hop lands on. Its orientation is the pre-move model
    /// orientation, restored on completion.
    pub end: Pose,
    /// Duration in seconds.
    pub duration: f32,
    /// Height the arc is measured from.
    pub base_height: f32,
    /// Seconds accumulated so far.
    pub elapsed: f32,
}

impl MotionTask {
    /// Hop from `start` to `target`, keeping the start's model orientation
    /// as the landing orientation.
    pub fn new(start: Pose, target: Vec3, duration: f32, base_height: f32) -> Self {
        MotionTask {
            start,
            end: Pose::new(target, start.orientation),
            duration,
            base_height,
            elapsed: 0.0,
        }
    }

    pub fn with_params(start: Pose, target: Vec3, params: MotionParams) -> Self {
        Self::new(start, target, params.move_duration, params.base_height)
    }

    /// Normalized progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Orientation restored when the hop lands.
    pub fn rest_orientation(&self) -> Orientation {
        self.end.orientation
    }
}

/// Result of advancing a task by one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionStep {
    /// Pose to apply this tick.
    pub pose: Pose,
    /// Whether the task reached its end; the owner drops it when set.
    pub done: bool,
}
