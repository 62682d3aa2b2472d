//! Hazard marker component.
//!
//! An entity with [`Hazard`] and a
//! [`GridPosition`](crate::components::gridposition::GridPosition) kills the
//! actor when the actor's committed cell overlaps it. Overlap detection lives
//! in [`crate::systems::collision`].

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Hazard;
