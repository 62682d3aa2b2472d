//! Scripted input sessions.
//!
//! An [`InputScript`] is a queue of [`ScriptCmd`]s the headless runner feeds
//! into the world one tick at a time (see
//! [`crate::systems::script::script_input_system`]). It stands in for a
//! keyboard and for a physics engine when running without a window.
//!
//! # Text form
//!
//! Commands are separated by commas or whitespace:
//!
//! ```text
//! up, up, wait:12, left, hit, wait:5, reset
//! ```
//!
//! - `up` / `down` / `left` / `right` (or `u`/`d`/`l`/`r`) – press an arrow for one tick
//! - `wait:N` – do nothing for `N` ticks
//! - `hit` – report a hazard contact at the actor's current position
//! - `reset` – request a level reset

use std::collections::VecDeque;

use bevy_ecs::prelude::Resource;
use fastrand::Rng;

use crate::components::gridposition::Direction;

/// One scripted action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptCmd {
    /// Press (and release) an arrow key.
    Press(Direction),
    /// Idle for the given number of ticks.
    Wait(u32),
    /// Report a hazard contact at the actor.
    Hit,
    /// Request a level reset.
    Reset,
}

impl std::str::FromStr for ScriptCmd {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        if let Some(ticks) = token.strip_prefix("wait:") {
            let ticks = ticks
                .parse::<u32>()
                .map_err(|e| format!("Invalid wait '{}': {}", ticks, e))?;
            return Ok(ScriptCmd::Wait(ticks));
        }
        match token.as_str() {
            "hit" => Ok(ScriptCmd::Hit),
            "reset" => Ok(ScriptCmd::Reset),
            other => other
                .parse::<Direction>()
                .map(ScriptCmd::Press)
                .map_err(|_| format!("Unknown script command '{}'", other)),
        }
    }
}

/// Queue of commands plus the idle ticks still owed by the last `wait`.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputScript {
    queue: VecDeque<ScriptCmd>,
    waiting: u32,
}

impl InputScript {
    pub fn new(commands: impl IntoIterator<Item = ScriptCmd>) -> Self {
        InputScript {
            queue: commands.into_iter().collect(),
            waiting: 0,
        }
    }

    /// Parse the text form described in the module docs.
    pub fn parse(text: &str) -> Result<Self, String> {
        let commands = text
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .map(str::parse::<ScriptCmd>)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(commands))
    }

    /// `hops` random presses, each followed by `settle_ticks` of waiting.
    pub fn random(rng: &mut Rng, hops: usize, settle_ticks: u32) -> Self {
        let mut commands = Vec::with_capacity(hops * 2);
        for _ in 0..hops {
            let direction = Direction::ALL[rng.usize(..Direction::ALL.len())];
            commands.push(ScriptCmd::Press(direction));
            if settle_ticks > 0 {
                commands.push(ScriptCmd::Wait(settle_ticks));
            }
        }
        Self::new(commands)
    }

    /// Append the unplayed commands of `other`.
    pub fn append(&mut self, mut other: InputScript) {
        self.queue.append(&mut other.queue);
    }

    /// Command to apply this tick.
    ///
    /// Every command takes one tick; a `wait:N` takes `N`.
    pub fn next_tick(&mut self) -> Option<ScriptCmd> {
        if self.waiting > 0 {
            self.waiting -= 1;
            return None;
        }
        while let Some(cmd) = self.queue.pop_front() {
            match cmd {
                ScriptCmd::Wait(0) => continue,
                ScriptCmd::Wait(ticks) => {
                    self.waiting = ticks - 1;
                    return None;
                }
                _ => return Some(cmd),
            }
        }
        None
    }

    pub fn is_finished(&self) -> bool {
        self.queue.is_empty() && self.waiting == 0
    }

    /// Commands not yet handed out.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}
