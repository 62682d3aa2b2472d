//! Counters describing the current run.

use bevy_ecs::prelude::Resource;
use serde::Serialize;

use crate::resources::actor::ActorState;

/// How many hops started and landed, how often the actor died and how often
/// the level was reset.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunLog {
    pub hops: u32,
    pub landings: u32,
    pub deaths: u32,
    pub resets: u32,
}

impl RunLog {
    /// Account for one state transition.
    pub fn record(&mut self, from: ActorState, to: ActorState) {
        match (from, to) {
            (ActorState::Ready, ActorState::Moving) => self.hops += 1,
            (ActorState::Moving, ActorState::Ready) => self.landings += 1,
            (_, ActorState::Dead) if from != ActorState::Dead => self.deaths += 1,
            _ => {}
        }
    }
}
