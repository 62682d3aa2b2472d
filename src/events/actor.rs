//! Actor life-cycle events and observers.
//!
//! - [`ActorStateChangedEvent`] is triggered by the actor systems whenever the
//!   [`ActorStateMachine`] changes state; [`observe_actor_state_change`] logs
//!   it and keeps the [`RunLog`] up to date.
//! - [`LevelResetEvent`] requests a level reset; [`observe_level_reset`]
//!   applies it to the state machine and the death particles and drops any
//!   contact still waiting to be applied.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::events::collision::HazardContact;
use crate::resources::actor::{ActorState, ActorStateMachine};
use crate::resources::collisioninbox::CollisionInbox;
use crate::resources::effects::DeathParticles;
use crate::resources::runlog::RunLog;

/// The actor moved from `from` to `to`.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorStateChangedEvent {
    pub from: ActorState,
    pub to: ActorState,
}

/// Put the level back to its starting condition.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct LevelResetEvent {}

/// Log actor transitions and count hops, deaths and resets.
pub fn observe_actor_state_change(
    trigger: On<ActorStateChangedEvent>,
    mut run_log: Option<ResMut<RunLog>>,
) {
    let event = trigger.event();
    match event.to {
        ActorState::Dead => info!("Actor state {:?} -> {:?}", event.from, event.to),
        _ => debug!("Actor state {:?} -> {:?}", event.from, event.to),
    }
    if let Some(run_log) = run_log.as_deref_mut() {
        run_log.record(event.from, event.to);
    }
}

/// Reset the actor to its spawn cell and clear leftover effects.
///
/// A hop in flight is discarded without landing, and contacts reported
/// before the reset but not yet applied are dropped so they cannot reach the
/// new life. No [`ActorStateChangedEvent`] is sent: a reset is not a hop, a
/// landing or a death.
pub fn observe_level_reset(
    _trigger: On<LevelResetEvent>,
    mut actor: ResMut<ActorStateMachine>,
    mut particles: ResMut<DeathParticles>,
    inbox: Option<Res<CollisionInbox>>,
    mut contacts: Option<ResMut<Messages<HazardContact>>>,
    mut run_log: Option<ResMut<RunLog>>,
) {
    let from = actor.state();
    actor.reset(&mut *particles);
    let mut dropped = 0;
    if let Some(inbox) = inbox.as_deref() {
        dropped += inbox.drain().count();
    }
    if let Some(contacts) = contacts.as_deref_mut() {
        dropped += contacts.len();
        contacts.clear();
    }
    debug!("Level reset from {:?}, {} stale contacts dropped", from, dropped);
    if let Some(run_log) = run_log.as_deref_mut() {
        run_log.resets += 1;
    }
}
