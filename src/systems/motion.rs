//! Hop interpolation.
//!
//! Pure functions that turn a [`MotionTask`] and its accumulated time into a
//! [`Pose`]. Nothing here touches the ECS world; the owner of a task (the
//! [`ActorStateMachine`](crate::resources::actor::ActorStateMachine)) applies
//! the returned pose and drops the task once a step reports `done`.
//!
//! The motion law, for progress `p = elapsed / duration`:
//! - x and z are interpolated linearly from start to end
//! - height is `base_height + 0.5 * sin(π p)`, a symmetric arc peaking at `p = 0.5`
//! - model pitch is `-5π * cos(π p)` degrees, yaw and roll are kept
//!
//! The pitch formula does not return to the start orientation by itself, so
//! the completion step restores it explicitly.

use std::f32::consts::PI;

use glam::Vec3;

use crate::components::motiontask::{ARC_AMPLITUDE, MotionStep, MotionTask, PITCH_COEFFICIENT};
use crate::components::pose::Pose;

/// Linearly interpolate between two floats.
pub(crate) fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Height of the jump arc at progress `p`.
pub fn arc_height(base_height: f32, p: f32) -> f32 {
    base_height + ARC_AMPLITUDE * (PI * p).sin()
}

/// Model pitch in degrees at progress `p`.
pub fn pitch_at(p: f32) -> f32 {
    -PITCH_COEFFICIENT * (PI * p).cos()
}

/// Pose of `task` at progress `p` (clamped to `[0, 1]`).
///
/// Depends only on the task's endpoints and `p`, never on wall-clock time,
/// so a task can be sampled again or resumed at any point.
pub fn sample(task: &MotionTask, p: f32) -> Pose {
    let p = p.clamp(0.0, 1.0);
    let start = task.start.position;
    let end = task.end.position;
    let position = Vec3::new(
        lerp_f32(start.x, end.x, p),
        arc_height(task.base_height, p),
        lerp_f32(start.z, end.z, p),
    );
    Pose::new(position, task.start.orientation.with_pitch(pitch_at(p)))
}

/// Advance `task` by `dt` seconds and return the pose to apply.
///
/// Negative deltas are treated as zero. Once the accumulated time reaches the
/// duration the step is `done` and the pose is exactly the task's end pose,
/// with the pre-move orientation restored.
pub fn step(task: &mut MotionTask, dt: f32) -> MotionStep {
    task.elapsed += dt.max(0.0);
    if task.is_finished() {
        return MotionStep {
            pose: task.end,
            done: true,
        };
    }
    MotionStep {
        pose: sample(task, task.progress()),
        done: false,
    }
}
