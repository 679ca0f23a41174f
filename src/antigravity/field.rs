//! Pure field math for the pointer-reactive ring: target computation,
//! pointer magnet, and the exponential smoothing step.

use bevy::prelude::*;

use crate::core::config::AntigravityConfig;

/// Normalized pointer coords are treated as covering roughly this many world
/// units at the ring's depth, a projection approximation rather than an unproject.
pub const POINTER_WORLD_SCALE: f32 = 20.0;

/// Smallest particle scale; keeps a large variance from inverting the mesh.
pub const MIN_SCALE: f32 = 0.01;

/// Ring target for a particle at `t` seconds: uniform rotation from the fixed
/// initial angle, plus a sinusoidal depth perturbation.
pub fn ring_target(initial_angle: f32, t: f32, cfg: &AntigravityConfig) -> Vec3 {
    let angle = initial_angle + t * cfg.wave_speed * 0.5;
    Vec3::new(
        angle.cos() * cfg.ring_radius,
        angle.sin() * cfg.ring_radius,
        (angle * 3.0 + t).sin() * cfg.wave_amplitude,
    )
}

/// Planar displacement applied to a target near the pointer. Zero outside
/// `magnet_radius`; inside, proportional to `(magnet_radius - d) / magnet_radius`
/// and directed away from the pointer (repulsion, the chosen sign).
pub fn magnet_displacement(
    target: Vec2,
    pointer: Vec2,
    magnet_radius: f32,
    field_strength: f32,
) -> Vec2 {
    let delta = pointer - target;
    let dist = delta.length();
    if magnet_radius <= 0.0 || dist >= magnet_radius {
        return Vec2::ZERO;
    }
    let force = (magnet_radius - dist) / magnet_radius;
    -delta * force * field_strength * 0.1
}

/// Effective interpolation fraction for `frames` reference frames of
/// exponential smoothing at `lerp_speed` per frame.
pub fn smoothing_fraction(lerp_speed: f32, frames: f32) -> f32 {
    1.0 - (1.0 - lerp_speed.clamp(0.0, 1.0)).powf(frames.max(0.0))
}

/// Pulsing scale at `t` seconds for a particle with the given rate/offset pair.
pub fn pulse_scale(cfg: &AntigravityConfig, pulse_rate: f32, offset: f32, t: f32) -> f32 {
    (cfg.particle_size + (t * cfg.pulse_speed * pulse_rate + offset).sin() * cfg.particle_variance)
        .max(MIN_SCALE)
}
