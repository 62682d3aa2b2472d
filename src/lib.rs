//! gridhopper library.
//!
//! Movement and collision core of a grid-hopping road-crossing game: an actor
//! state machine that turns arrow presses into animated hops and hazard
//! contacts into a death, driven by an explicit tick. The ECS components,
//! resources, systems and events are exposed for integration tests and for
//! embedding in a renderer.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
