//! Game configuration change detection system.
//!
//! Monitors [`GameConfig`] for changes and pushes the new tunables into the
//! resources that use them.

use bevy_ecs::prelude::*;
use log::info;

use crate::resources::actor::ActorStateMachine;
use crate::resources::gameconfig::GameConfig;
use crate::resources::level::Level;
use crate::resources::worldtime::WorldTime;

/// System that applies game configuration changes.
///
/// When [`GameConfig`] is added or modified:
/// - motion tunables go to the [`ActorStateMachine`] (next hop on; a hop in
///   flight keeps its own duration)
/// - the start area replaces the [`Level`] bounds, blocked cells are kept
/// - the time scale goes to [`WorldTime`]
///
/// The spawn cell is only read when the world is built.
pub fn apply_gameconfig_changes(
    maybe_config: Option<Res<GameConfig>>,
    mut actor: ResMut<ActorStateMachine>,
    mut level: ResMut<Level>,
    mut time: ResMut<WorldTime>,
) {
    let Some(config) = maybe_config else {
        return;
    };

    if config.is_changed() || config.is_added() {
        let params = config.motion_params();
        if actor.params() != params {
            actor.set_params(params);
        }
        if level.area != config.start_area {
            level.area = config.start_area;
        }
        if time.time_scale != config.time_scale {
            time.time_scale = config.time_scale;
        }
        info!("GameConfig changes applied.");
    }
}
