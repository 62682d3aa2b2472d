//! ECS resources made available to systems.
//!
//! Overview
//! - `actor` – the actor state machine
//! - `collisioninbox` – channel carrying hazard contacts into the tick
//! - `effects` – one-shot death effect sink
//! - `gameconfig` – INI-backed tunables
//! - `input` – per-tick arrow key state
//! - `level` – traversability of grid cells
//! - `runlog` – hop, landing, death and reset counters
//! - `script` – scripted input sessions
//! - `worldtime` – simulation time and delta
pub mod actor;
pub mod collisioninbox;
pub mod effects;
pub mod gameconfig;
pub mod input;
pub mod level;
pub mod runlog;
pub mod script;
pub mod worldtime;
