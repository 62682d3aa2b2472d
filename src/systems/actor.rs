//! Actor systems.
//!
//! These systems connect the [`ActorStateMachine`] resource to the rest of the
//! world, in the order the tick runs them:
//! - [`actor_collision_system`] – apply hazard contacts (collision wins)
//! - [`actor_input_system`] – turn this tick's arrow press into a hop
//! - [`actor_advance_system`] – advance the hop in flight by the tick delta
//! - [`sync_actor_transform`] – publish pose, cell and presence to the
//!   [`Player`] entity for rendering
//!
//! Every state change is announced with an
//! [`ActorStateChangedEvent`](crate::events::actor::ActorStateChangedEvent).
use bevy_ecs::prelude::*;

use crate::components::actortransform::ActorTransform;
use crate::components::gridposition::GridPosition;
use crate::components::player::Player;
use crate::components::presence::Presence;
use crate::events::actor::ActorStateChangedEvent;
use crate::events::collision::HazardContact;
use crate::resources::actor::ActorStateMachine;
use crate::resources::effects::DeathParticles;
use crate::resources::input::InputState;
use crate::resources::level::Level;
use crate::resources::worldtime::WorldTime;

/// Kill the actor on the first hazard contact delivered this tick.
///
/// Later contacts in the same tick, or while already dead, are no-ops.
pub fn actor_collision_system(
    mut reader: MessageReader<HazardContact>,
    mut actor: ResMut<ActorStateMachine>,
    mut particles: ResMut<DeathParticles>,
    mut commands: Commands,
) {
    for contact in reader.read() {
        let from = actor.state();
        if actor.on_collision(contact.point, &mut *particles) {
            commands.trigger(ActorStateChangedEvent {
                from,
                to: actor.state(),
            });
        }
    }
}

/// Poll one directional intent and try to hop.
///
/// Presses that arrive while the actor is moving or dead are dropped, not
/// queued.
pub fn actor_input_system(
    input: Res<InputState>,
    level: Res<Level>,
    mut actor: ResMut<ActorStateMachine>,
    mut commands: Commands,
) {
    let Some(direction) = input.poll_direction() else {
        return;
    };
    let from = actor.state();
    if actor.try_move(direction, &*level) {
        commands.trigger(ActorStateChangedEvent {
            from,
            to: actor.state(),
        });
    }
}

/// Advance the hop in flight using the scaled tick delta.
pub fn actor_advance_system(
    time: Res<WorldTime>,
    mut actor: ResMut<ActorStateMachine>,
    mut commands: Commands,
) {
    if actor.motion_task().is_none() {
        return;
    }
    let from = actor.state();
    actor.advance(time.delta);
    let to = actor.state();
    if from != to {
        commands.trigger(ActorStateChangedEvent { from, to });
    }
}

/// Copy the machine's pose, committed cell and presence onto the player entity.
pub fn sync_actor_transform(
    actor: Res<ActorStateMachine>,
    mut query: Query<(&mut ActorTransform, &mut GridPosition, &mut Presence), With<Player>>,
) {
    for (mut transform, mut cell, mut presence) in query.iter_mut() {
        transform.pose = actor.pose();
        transform.facing = actor.facing();
        *cell = actor.position();
        presence.set_visible(actor.is_present());
    }
}
