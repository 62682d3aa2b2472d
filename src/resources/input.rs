//! Per-tick directional input resource.
//!
//! Captures the arrow-key state the actor cares about and exposes it to
//! systems via the [`InputState`] resource. Whatever reads the hardware (or a
//! script, see [`crate::resources::script`]) calls [`InputState::press`] and
//! [`InputState::release`]; the edges are cleared at the end of every tick
//! by [`crate::systems::input::clear_input_edges`].
use bevy_ecs::prelude::*;

use crate::components::gridposition::Direction;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Boolean key state.
pub struct BoolState {
    /// Whether the key is currently held.
    pub active: bool,
    /// Whether the key went down this tick.
    pub just_pressed: bool,
    /// Whether the key went up this tick.
    pub just_released: bool,
}

/// Resource capturing the per-tick arrow key state.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    pub up: BoolState,
    pub down: BoolState,
    pub left: BoolState,
    pub right: BoolState,
}

impl InputState {
    fn key(&self, direction: Direction) -> &BoolState {
        match direction {
            Direction::Up => &self.up,
            Direction::Down => &self.down,
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }

    fn key_mut(&mut self, direction: Direction) -> &mut BoolState {
        match direction {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }

    /// Key for `direction` went down.
    pub fn press(&mut self, direction: Direction) {
        let key = self.key_mut(direction);
        if !key.active {
            key.just_pressed = true;
        }
        key.active = true;
    }

    /// Key for `direction` went up.
    pub fn release(&mut self, direction: Direction) {
        let key = self.key_mut(direction);
        if key.active {
            key.just_released = true;
        }
        key.active = false;
    }

    /// The direction pressed this tick, if any.
    ///
    /// Edge triggered: holding a key yields it only on the tick it went down.
    /// When several went down together the first of up, down, left, right
    /// wins, so the actor never moves diagonally.
    pub fn poll_direction(&self) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|d| self.key(*d).just_pressed)
    }

    /// Forget this tick's press/release edges; held keys stay held.
    pub fn clear_edges(&mut self) {
        for d in Direction::ALL {
            let key = self.key_mut(d);
            key.just_pressed = false;
            key.just_released = false;
        }
    }
}
