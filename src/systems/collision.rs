//! Collision plumbing.
//!
//! - [`poll_collision_inbox`] drains the
//!   [`CollisionInbox`](crate::resources::collisioninbox::CollisionInbox) into
//!   `Messages<HazardContact>`.
//! - [`update_collision_messages`] advances that message queue; run it right
//!   before polling.
//! - [`hazard_contact_system`] is a grid-level overlap check between the
//!   actor's committed cell and [`Hazard`] entities, reporting through the
//!   inbox like any other collision source.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::gridposition::GridPosition;
use crate::components::hazard::Hazard;
use crate::components::player::Player;
use crate::components::presence::Presence;
use crate::events::collision::HazardContact;
use crate::resources::actor::ActorStateMachine;
use crate::resources::collisioninbox::CollisionInbox;

/// Move every reported contact into the ECS message queue.
pub fn poll_collision_inbox(inbox: Res<CollisionInbox>, mut writer: MessageWriter<HazardContact>) {
    writer.write_batch(inbox.drain());
}

/// Advance the `HazardContact` message queue once per tick.
pub fn update_collision_messages(mut messages: ResMut<Messages<HazardContact>>) {
    messages.update();
}

/// Report a contact when the actor's cell starts overlapping a hazard.
///
/// Only a visible actor can collide, and a contact is reported once per
/// overlap: staying on the hazard cell does not report again.
pub fn hazard_contact_system(
    actor: Res<ActorStateMachine>,
    players: Query<&Presence, With<Player>>,
    hazards: Query<&GridPosition, With<Hazard>>,
    inbox: Res<CollisionInbox>,
    mut touching: Local<bool>,
) {
    let present = players.iter().any(|presence| presence.visible);
    let cell = actor.position();
    let hit = hazards.iter().find(|hazard| **hazard == cell);

    let overlapping = present && hit.is_some();
    if let (true, false, Some(hazard)) = (overlapping, *touching, hit) {
        let hazard_world = hazard.to_world(actor.params().base_height);
        let point = actor.pose().position.lerp(hazard_world, 0.5);
        debug!("Hazard overlap on {} at {:?}", cell, point);
        inbox.report(HazardContact { point });
    }
    *touching = overlapping;
}
