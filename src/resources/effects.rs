//! One-shot visual effects.
//!
//! The actor only needs to fire a death burst at a point and to clear it on
//! reset. That is the [`EffectSink`] capability; [`DeathParticles`] is the
//! resource implementation the renderer reads to place and play the burst.

use bevy_ecs::prelude::Resource;
use glam::{Quat, Vec3};
use log::debug;

/// Receiver for one-shot effect playback.
pub trait EffectSink {
    /// Play the effect at `at`, oriented so its forward axis points at
    /// `orient_towards`.
    fn play_effect(&mut self, at: Vec3, orient_towards: Vec3);
    /// Remove any leftover effect.
    fn clear_effect(&mut self);
}

/// A placed burst.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectBurst {
    pub position: Vec3,
    pub rotation: Quat,
}

impl EffectBurst {
    /// Burst at `position` whose +Z axis looks at `target`.
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        let dir = (target - position).normalize_or_zero();
        let rotation = if dir == Vec3::ZERO {
            Quat::IDENTITY
        } else {
            Quat::from_rotation_arc(Vec3::Z, dir)
        };
        EffectBurst { position, rotation }
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }
}

/// Death particle state shown by the renderer.
#[derive(Resource, Clone, Debug, Default)]
pub struct DeathParticles {
    active: Option<EffectBurst>,
    played: u32,
}

impl DeathParticles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Burst currently showing, if any.
    pub fn active(&self) -> Option<&EffectBurst> {
        self.active.as_ref()
    }

    /// Number of bursts played since creation.
    pub fn played(&self) -> u32 {
        self.played
    }
}

impl EffectSink for DeathParticles {
    fn play_effect(&mut self, at: Vec3, orient_towards: Vec3) {
        debug!("Death particles at {:?} towards {:?}", at, orient_towards);
        self.active = Some(EffectBurst::looking_at(at, orient_towards));
        self.played += 1;
    }

    fn clear_effect(&mut self) {
        self.active = None;
    }
}
