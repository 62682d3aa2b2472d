//! Simulation clock.
//!
//! [`WorldTime`] holds the scaled delta of the current tick; every system that
//! animates reads `delta` from here instead of a wall clock, which keeps runs
//! reproducible. It is advanced by [`crate::systems::time::update_world_time`].
use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct WorldTime {
    /// Scaled seconds since the world started.
    pub elapsed: f32,
    /// Scaled seconds of the current tick.
    pub delta: f32,
    /// Multiplier applied to incoming deltas.
    pub time_scale: f32,
    /// Ticks run so far.
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}
