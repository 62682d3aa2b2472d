//! Event types and observers.
//!
//! Submodules:
//! - [`actor`] – actor state transitions and level reset requests
//! - [`collision`] – hazard contacts reported by collision sources
pub mod actor;
pub mod collision;
