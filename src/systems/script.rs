//! Scripted input.
//!
//! Feeds an [`InputScript`] into the world: presses go to [`InputState`],
//! `hit` reports a contact through the [`CollisionInbox`] and `reset`
//! triggers a [`LevelResetEvent`]. Does nothing when no script is loaded.
use bevy_ecs::prelude::*;

use crate::events::actor::LevelResetEvent;
use crate::events::collision::HazardContact;
use crate::resources::actor::ActorStateMachine;
use crate::resources::collisioninbox::CollisionInbox;
use crate::resources::input::InputState;
use crate::resources::script::{InputScript, ScriptCmd};

pub fn script_input_system(
    script: Option<ResMut<InputScript>>,
    mut input: ResMut<InputState>,
    actor: Res<ActorStateMachine>,
    inbox: Res<CollisionInbox>,
    mut commands: Commands,
) {
    let Some(mut script) = script else {
        return;
    };
    if let Some(cmd) = script.next_tick() {
        match cmd {
            ScriptCmd::Press(direction) => {
                // Tap: down and up within the tick, the down edge survives.
                input.press(direction);
                input.release(direction);
            }
            ScriptCmd::Hit => inbox.report(HazardContact {
                point: actor.pose().position,
            }),
            ScriptCmd::Reset => commands.trigger(LevelResetEvent {}),
            ScriptCmd::Wait(_) => {}
        }
    }
}
