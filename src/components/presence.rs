//! Visual presence of an entity.
//!
//! The render side shows an entity only while its [`Presence`] is visible.
//! For the actor it is written from
//! [`ActorStateMachine::is_present`](crate::resources::actor::ActorStateMachine::is_present)
//! every tick; a dead actor is hidden until the level resets.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Presence {
    pub visible: bool,
}

impl Default for Presence {
    fn default() -> Self {
        Presence { visible: true }
    }
}

impl Presence {
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
