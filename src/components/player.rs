//! Player marker component.

use bevy_ecs::prelude::Component;

/// Tag for the single actor entity driven by the
/// [`ActorStateMachine`](crate::resources::actor::ActorStateMachine).
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Player;
