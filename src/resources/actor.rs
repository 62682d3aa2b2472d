//! The actor state machine.
//!
//! [`ActorStateMachine`] owns the actor's committed grid cell, its life state
//! and the hop animation in flight. It reacts to three inputs:
//! - a movement intent ([`ActorStateMachine::try_move`]), honored only while
//!   [`ActorState::Ready`]
//! - the tick delta ([`ActorStateMachine::advance`]), which drives the live
//!   [`MotionTask`]
//! - a hazard contact ([`ActorStateMachine::on_collision`]), which wins over
//!   anything else and cancels the hop
//!
//! The committed cell moves the moment a hop is accepted, not when it lands,
//! so bounds and hazard checks always see the destination.
//!
//! The live task is stored inside the `Moving` phase, so the machine cannot be
//! `Moving` without a task nor `Ready`/`Dead` with one.

use bevy_ecs::prelude::Resource;
use glam::Vec3;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::components::gridposition::{Direction, GridPosition};
use crate::components::motiontask::{MotionParams, MotionTask};
use crate::components::pose::Pose;
use crate::resources::effects::EffectSink;
use crate::resources::level::Traversable;
use crate::systems::motion;

/// Cell the actor starts every level on.
pub const DEFAULT_SPAWN: GridPosition = GridPosition::new(0, -1);

/// Observable life state of the actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ActorState {
    /// Idle, accepts input.
    #[default]
    Ready,
    /// Animating a committed hop; input is ignored.
    Moving,
    /// Hit a hazard. Only a level reset leaves this state.
    Dead,
}

#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Ready,
    Moving(MotionTask),
    Dead,
}

impl Phase {
    fn state(&self) -> ActorState {
        match self {
            Phase::Ready => ActorState::Ready,
            Phase::Moving(_) => ActorState::Moving,
            Phase::Dead => ActorState::Dead,
        }
    }
}

/// Single-actor movement and life-cycle state.
#[derive(Resource, Debug, Clone)]
pub struct ActorStateMachine {
    phase: Phase,
    position: GridPosition,
    spawn: GridPosition,
    facing: Direction,
    pose: Pose,
    present: bool,
    params: MotionParams,
}

impl Default for ActorStateMachine {
    fn default() -> Self {
        Self::new(DEFAULT_SPAWN, MotionParams::default())
    }
}

impl ActorStateMachine {
    /// Create a machine standing on `spawn`.
    pub fn new(spawn: GridPosition, params: MotionParams) -> Self {
        let mut machine = ActorStateMachine {
            phase: Phase::Ready,
            position: spawn,
            spawn,
            facing: Direction::default(),
            pose: Pose::at(spawn.to_world(params.base_height)),
            present: true,
            params,
        };
        machine.initialize(spawn);
        machine
    }

    /// Put the actor back on `spawn`: ready, facing forward, visible, with no
    /// hop in flight. `spawn` becomes the cell later resets return to.
    pub fn initialize(&mut self, spawn: GridPosition) {
        self.phase = Phase::Ready;
        self.spawn = spawn;
        self.position = spawn;
        self.facing = Direction::default();
        self.pose = Pose::at(spawn.to_world(self.params.base_height));
        self.present = true;
    }

    /// Try to hop one cell towards `direction`.
    ///
    /// Returns `false` without touching any state when the actor is not
    /// ready or the destination is not traversable. On success the facing
    /// and committed cell update immediately and a hop from the current pose
    /// to the destination starts.
    pub fn try_move<T>(&mut self, direction: Direction, level: &T) -> bool
    where
        T: Traversable + ?Sized,
    {
        if !matches!(self.phase, Phase::Ready) {
            return false;
        }
        let destination = self.position + direction;
        if !level.is_traversable(destination) {
            debug!("Move {:?} into {} rejected", direction, destination);
            return false;
        }

        self.facing = direction;
        self.position = destination;
        let target = destination.to_world(self.params.base_height);
        self.phase = Phase::Moving(MotionTask::with_params(self.pose, target, self.params));
        debug!("Hopping {:?} to {}", direction, destination);
        true
    }

    /// Advance the hop in flight by `dt` seconds.
    ///
    /// Returns the pose applied this tick, or `None` when nothing is
    /// animating. When the hop lands the pose snaps to the destination, the
    /// pre-move model orientation is restored and the actor becomes ready.
    pub fn advance(&mut self, dt: f32) -> Option<Pose> {
        let Phase::Moving(task) = &mut self.phase else {
            return None;
        };
        let step = motion::step(task, dt);
        self.pose = step.pose;
        if step.done {
            // Only a hop that is still Moving can land; a collision already
            // replaced the phase with Dead.
            self.phase = Phase::Ready;
            debug!("Landed on {}", self.position);
        }
        Some(step.pose)
    }

    /// React to touching a hazard at `contact`.
    ///
    /// Returns `false` if the actor is already dead. Otherwise the hop in
    /// flight is dropped with the pose frozen where it was, the actor is
    /// hidden, the death effect plays at `contact` facing the actor and the
    /// state becomes [`ActorState::Dead`].
    pub fn on_collision<E>(&mut self, contact: Vec3, effects: &mut E) -> bool
    where
        E: EffectSink + ?Sized,
    {
        if matches!(self.phase, Phase::Dead) {
            return false;
        }
        self.phase = Phase::Dead;
        self.present = false;
        effects.play_effect(contact, self.pose.position + Vec3::Y);
        info!("Actor hit a hazard at {:?} on cell {}", contact, self.position);
        true
    }

    /// Level reset: back to the stored spawn cell, visible, effect cleared.
    ///
    /// A hop in flight is discarded without landing.
    pub fn reset<E>(&mut self, effects: &mut E)
    where
        E: EffectSink + ?Sized,
    {
        self.initialize(self.spawn);
        effects.clear_effect();
        info!("Actor reset to {}", self.spawn);
    }

    pub fn state(&self) -> ActorState {
        self.phase.state()
    }

    /// Whether a movement intent would be considered right now.
    pub fn can_accept_input(&self) -> bool {
        matches!(self.phase, Phase::Ready)
    }

    pub fn is_dead(&self) -> bool {
        matches!(self.phase, Phase::Dead)
    }

    /// Committed cell. Already the destination while a hop is in flight.
    pub fn position(&self) -> GridPosition {
        self.position
    }

    pub fn spawn(&self) -> GridPosition {
        self.spawn
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    /// Last applied world pose.
    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn is_present(&self) -> bool {
        self.present
    }

    /// The hop in flight, present exactly while [`ActorState::Moving`].
    pub fn motion_task(&self) -> Option<&MotionTask> {
        match &self.phase {
            Phase::Moving(task) => Some(task),
            _ => None,
        }
    }

    pub fn params(&self) -> MotionParams {
        self.params
    }

    /// Replace the motion tunables. Applies from the next hop on.
    pub fn set_params(&mut self, params: MotionParams) {
        self.params = params;
    }
}
