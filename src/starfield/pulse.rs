//! Staggered breathing effect: an infinite two-phase tween per star, keyed
//! off global elapsed time, writing radius/alpha into the same `Star` the
//! draw path reads.

use bevy::prelude::*;

use crate::core::config::{GalaxyConfig, PulseConfig};
use crate::core::system::system_order::AnimateSet;
use crate::starfield::ease::tween;
use crate::starfield::star::Star;

/// Per-star start delay; the ripple across the field comes from this alone.
#[derive(Component, Debug, Clone, Copy)]
pub struct PulsePhase {
    pub stagger: f32,
}

/// Runtime switch (debug key). Stars hold their current radius/alpha while off.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseEnabled(pub bool);

impl Default for PulseEnabled {
    fn default() -> Self {
        Self(true)
    }
}

pub struct PulsePlugin;

impl Plugin for PulsePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PulseEnabled>()
            .add_systems(Update, pulse_stars.in_set(AnimateSet));
    }
}

/// Radius/alpha for one star at `local` seconds into its loop.
/// Phase A: radius base -> base*peak while alpha high -> low.
/// Phase B: the reverse. Negative `local` means the stagger delay has not
/// elapsed yet and the creation values stand.
pub fn pulse_values(base_radius: f32, cfg: &PulseConfig, local: f32) -> (f32, f32) {
    let pd = cfg.phase_duration;
    let peak = base_radius * cfg.radius_peak;
    let t = local % (2.0 * pd);
    if t < pd {
        (
            tween(base_radius, peak, pd, t),
            tween(cfg.alpha_high, cfg.alpha_low, pd, t),
        )
    } else {
        (
            tween(peak, base_radius, pd, t - pd),
            tween(cfg.alpha_low, cfg.alpha_high, pd, t - pd),
        )
    }
}

fn pulse_stars(
    time: Res<Time>,
    cfg: Res<GalaxyConfig>,
    enabled: Res<PulseEnabled>,
    mut q: Query<(&PulsePhase, &mut Star)>,
) {
    if !enabled.0 || cfg.pulse.phase_duration <= 0.0 {
        return;
    }
    let now = time.elapsed_secs();
    for (phase, mut star) in q.iter_mut() {
        let local = now - phase.stagger;
        if local < 0.0 {
            continue;
        }
        let (radius, alpha) = pulse_values(star.base_radius, &cfg.pulse, local);
        star.radius = radius;
        star.alpha = alpha;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_always_within_endpoints() {
        let cfg = PulseConfig::default();
        for i in 0..2000 {
            let local = i as f32 * 0.013;
            let (_, alpha) = pulse_values(1.0, &cfg, local);
            assert!(
                (cfg.alpha_low - 1e-5..=cfg.alpha_high + 1e-5).contains(&alpha),
                "alpha {alpha} out of [{}, {}] at t={local}",
                cfg.alpha_low,
                cfg.alpha_high
            );
        }
    }

    #[test]
    fn radius_always_within_base_and_peak() {
        let cfg = PulseConfig::default();
        let base = 0.8;
        for i in 0..2000 {
            let (radius, _) = pulse_values(base, &cfg, i as f32 * 0.017);
            assert!(radius >= base - 1e-5 && radius <= base * cfg.radius_peak + 1e-5);
        }
    }

    #[test]
    fn phase_boundaries_hit_extremes() {
        let cfg = PulseConfig::default();
        let (r0, a0) = pulse_values(1.0, &cfg, 0.0);
        assert!((r0 - 1.0).abs() < 1e-5);
        assert!((a0 - cfg.alpha_high).abs() < 1e-5);
        // End of the grow phase: peak radius, low alpha.
        let (r1, a1) = pulse_values(1.0, &cfg, cfg.phase_duration - 1e-4);
        assert!((r1 - cfg.radius_peak).abs() < 1e-3);
        assert!((a1 - cfg.alpha_low).abs() < 1e-3);
    }

    #[test]
    fn loop_repeats_each_cycle() {
        let cfg = PulseConfig::default();
        let cycle = 2.0 * cfg.phase_duration;
        let (r_a, a_a) = pulse_values(1.0, &cfg, 0.37);
        let (r_b, a_b) = pulse_values(1.0, &cfg, 0.37 + 5.0 * cycle);
        assert!((r_a - r_b).abs() < 1e-4);
        assert!((a_a - a_b).abs() < 1e-4);
    }
}
