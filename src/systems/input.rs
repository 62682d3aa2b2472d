//! Input systems.
//!
//! The hardware side writes presses into
//! [`InputState`](crate::resources::input::InputState) before the tick; the
//! only thing the tick itself does is forget the edges once every consumer
//! has seen them.
use bevy_ecs::prelude::*;

use crate::resources::input::InputState;

/// Clear this tick's press/release edges. Run last.
pub fn clear_input_edges(mut input: ResMut<InputState>) {
    input.clear_edges();
}
