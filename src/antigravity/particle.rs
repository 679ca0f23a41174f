use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

use crate::core::config::AntigravityConfig;

/// A single point in the pointer-reactive ring. `pos` converges toward a
/// target recomputed every frame; everything else is fixed at creation and
/// only desynchronizes the animation across particles.
#[derive(Component, Debug, Clone)]
pub struct Particle {
    pub pos: Vec3,
    pub initial_angle: f32,
    /// Per-particle multiplier on the pulse frequency, near 1.
    pub pulse_rate: f32,
    /// Per-particle phase offset for the scale pulse.
    pub offset: f32,
}

impl Particle {
    pub fn random(rng: &mut impl Rng, cfg: &AntigravityConfig) -> Self {
        // Scattered start; the smoothing step draws everything onto the ring.
        let spread = cfg.ring_radius * 2.0;
        Self {
            pos: Vec3::new(
                (rng.gen::<f32>() - 0.5) * spread,
                (rng.gen::<f32>() - 0.5) * spread,
                (rng.gen::<f32>() - 0.5) * cfg.depth_factor * 10.0,
            ),
            initial_angle: rng.gen::<f32>() * TAU,
            pulse_rate: 0.8 + rng.gen::<f32>() * 0.4,
            offset: rng.gen::<f32>() * 100.0,
        }
    }
}
