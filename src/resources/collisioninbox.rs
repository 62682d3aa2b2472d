//! Channel bridging collision reports into the tick loop.
//!
//! Collision sources may live outside the ECS schedule (another thread, a
//! physics callback, a test). They hold a [`Sender`] obtained from
//! [`CollisionInbox::sender`] and push [`HazardContact`]s at any time. The
//! tick drains the receiver once, at a fixed point, so contacts are never
//! applied concurrently with [`advance`](crate::resources::actor::ActorStateMachine::advance).

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::events::collision::HazardContact;

#[derive(Resource)]
pub struct CollisionInbox {
    tx: Sender<HazardContact>,
    rx: Receiver<HazardContact>,
}

impl Default for CollisionInbox {
    fn default() -> Self {
        Self::new()
    }
}

impl CollisionInbox {
    pub fn new() -> Self {
        let (tx, rx) = unbounded::<HazardContact>();
        CollisionInbox { tx, rx }
    }

    /// A sender collision sources can keep.
    pub fn sender(&self) -> Sender<HazardContact> {
        self.tx.clone()
    }

    /// Report a contact from code that already has the resource.
    pub fn report(&self, contact: HazardContact) {
        // The receiver lives as long as self, so this cannot fail.
        let _ = self.tx.send(contact);
    }

    /// Non-blocking drain of everything reported so far.
    pub fn drain(&self) -> impl Iterator<Item = HazardContact> + '_ {
        self.rx.try_iter()
    }

    pub fn pending(&self) -> usize {
        self.rx.len()
    }
}

/// Register the inbox and its message queue in `world`.
pub fn setup_collision_inbox(world: &mut World) {
    world.insert_resource(CollisionInbox::new());
    world.insert_resource(Messages::<HazardContact>::default());
}
