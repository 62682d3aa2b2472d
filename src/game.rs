//! World assembly and the tick driver.
//!
//! [`build_world`] inserts every resource, registers the observers and spawns
//! the player entity; [`build_schedule`] returns the per-tick schedule; and
//! [`tick`] advances the clock and runs it once. The schedule is chained and
//! single threaded, so systems run in exactly this order every tick:
//!
//! 1. apply config changes
//! 2. feed scripted input (if an [`InputScript`](crate::resources::script::InputScript) is loaded)
//! 3. drain collision reports and apply them to the actor
//! 4. poll input and start a hop
//! 5. advance the hop in flight
//! 6. publish the actor's transform and presence
//! 7. detect hazard overlaps (reported for the next tick)
//! 8. clear input edges

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::ExecutorKind;
use log::info;
use serde::Serialize;

use crate::components::actortransform::ActorTransform;
use crate::components::gridposition::{Direction, GridPosition};
use crate::components::hazard::Hazard;
use crate::components::player::Player;
use crate::components::pose::Pose;
use crate::components::presence::Presence;
use crate::events::actor::{observe_actor_state_change, observe_level_reset};
use crate::resources::actor::{ActorState, ActorStateMachine};
use crate::resources::collisioninbox::setup_collision_inbox;
use crate::resources::effects::DeathParticles;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::level::Level;
use crate::resources::runlog::RunLog;
use crate::resources::worldtime::WorldTime;
use crate::systems::actor::{
    actor_advance_system, actor_collision_system, actor_input_system, sync_actor_transform,
};
use crate::systems::collision::{
    hazard_contact_system, poll_collision_inbox, update_collision_messages,
};
use crate::systems::gameconfig::apply_gameconfig_changes;
use crate::systems::input::clear_input_edges;
use crate::systems::script::script_input_system;
use crate::systems::time::update_world_time;

/// Create a world ready to tick, with the actor on the configured spawn cell.
pub fn build_world(config: &GameConfig) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(config.time_scale));
    world.insert_resource(config.clone());
    world.insert_resource(InputState::default());
    world.insert_resource(Level::new(config.start_area));
    world.insert_resource(DeathParticles::new());
    world.insert_resource(RunLog::default());
    world.insert_resource(ActorStateMachine::new(
        config.spawn,
        config.motion_params(),
    ));
    setup_collision_inbox(&mut world);

    world.add_observer(observe_actor_state_change);
    world.add_observer(observe_level_reset);

    spawn_player(&mut world);
    // Ensure the observers are registered before any system may trigger events.
    world.flush();

    info!("World ready, actor on {}", config.spawn);
    world
}

/// The per-tick schedule.
pub fn build_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.set_executor_kind(ExecutorKind::SingleThreaded);
    update.add_systems(
        (
            apply_gameconfig_changes,
            script_input_system,
            update_collision_messages,
            poll_collision_inbox,
            actor_collision_system,
            actor_input_system,
            actor_advance_system,
            sync_actor_transform,
            hazard_contact_system,
            clear_input_edges,
        )
            .chain(),
    );
    update
}

/// Advance the clock by `dt` seconds (before time scaling) and run one tick.
pub fn tick(world: &mut World, schedule: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    schedule.run(world);
    world.clear_trackers(); // Clear changed components for next tick
}

/// Spawn the entity the renderer draws for the actor.
pub fn spawn_player(world: &mut World) -> Entity {
    let (pose, facing, cell) = {
        let actor = world.resource::<ActorStateMachine>();
        (actor.pose(), actor.facing(), actor.position())
    };
    world
        .spawn((
            Player,
            ActorTransform { pose, facing },
            cell,
            Presence::default(),
        ))
        .id()
}

/// Place a hazard on `cell`.
pub fn spawn_hazard(world: &mut World, cell: GridPosition) -> Entity {
    world.spawn((Hazard, cell)).id()
}

/// Serializable view of the actor after a tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorSnapshot {
    pub frame: u64,
    pub elapsed: f32,
    pub state: ActorState,
    pub cell: GridPosition,
    pub facing: Direction,
    pub pose: Pose,
    pub present: bool,
    pub effects_played: u32,
}

/// Capture the actor's current state.
pub fn snapshot(world: &World) -> ActorSnapshot {
    let time = world.resource::<WorldTime>();
    let actor = world.resource::<ActorStateMachine>();
    let particles = world.resource::<DeathParticles>();
    ActorSnapshot {
        frame: time.frame_count,
        elapsed: time.elapsed,
        state: actor.state(),
        cell: actor.position(),
        facing: actor.facing(),
        pose: actor.pose(),
        present: actor.is_present(),
        effects_played: particles.played(),
    }
}
