//! ECS components for entities.
//!
//! Submodules overview:
//! - [`actortransform`] – render-facing pose and facing of the actor
//! - [`gridposition`] – integer grid cells and cardinal directions
//! - [`hazard`] – marker for cells that kill the actor
//! - [`motiontask`] – one in-flight hop animation and its tunables
//! - [`player`] – marker for the actor entity
//! - [`pose`] – world position plus model orientation
//! - [`presence`] – whether an entity is shown

pub mod actortransform;
pub mod gridposition;
pub mod hazard;
pub mod motiontask;
pub mod player;
pub mod pose;
pub mod presence;
