//! Engine systems.
//!
//! Submodules overview
//! - [`actor`] – drive the actor state machine from contacts, input and time
//! - [`collision`] – drain the collision inbox and detect hazard overlaps
//! - [`gameconfig`] – push config changes into the running world
//! - [`input`] – end-of-tick input edge clearing
//! - [`motion`] – pure hop interpolation
//! - [`script`] – feed scripted input into the world
//! - [`time`] – update simulation time and delta

pub mod actor;
pub mod collision;
pub mod gameconfig;
pub mod input;
pub mod motion;
pub mod script;
pub mod time;
