//! Scroll-reactive "warp speed": every change of scroll depth reassigns all
//! star speeds to a fresh random base scaled by `1 + depth / divisor`.
//! A direct overwrite, no smoothing.

use bevy::prelude::*;
use rand::Rng;

use crate::core::config::GalaxyConfig;
use crate::core::system::system_order::AnimateSet;
use crate::interaction::scroll::ScrollDepth;
use crate::starfield::star::{sample_range, Star};

pub struct WarpPlugin;

impl Plugin for WarpPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            warp_star_speeds
                .in_set(AnimateSet)
                .run_if(resource_changed::<ScrollDepth>),
        );
    }
}

/// Multiplier applied to freshly drawn base speeds at a given scroll depth.
/// Non-positive divisors fall back to the default denominator of 1000.
#[inline]
pub fn speed_multiplier(depth: f32, divisor: f32) -> f32 {
    let divisor = if divisor > 0.0 { divisor } else { 1000.0 };
    1.0 + depth.max(0.0) / divisor
}

fn warp_star_speeds(cfg: Res<GalaxyConfig>, depth: Res<ScrollDepth>, mut q: Query<&mut Star>) {
    let mult = speed_multiplier(depth.0, cfg.warp.divisor);
    let range = cfg.starfield.speed_range;
    let mut rng = rand::thread_rng();
    for mut star in q.iter_mut() {
        star.speed = sample_range(&mut rng, range.min, range.max) * mult;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplier_grows_linearly_with_depth() {
        assert_eq!(speed_multiplier(0.0, 1000.0), 1.0);
        assert!((speed_multiplier(500.0, 1000.0) - 1.5).abs() < 1e-6);
        assert!((speed_multiplier(2000.0, 1000.0) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn fractional_divisors_are_honored() {
        // Divisors in (0, 1) are valid and must not be rounded up.
        assert!((speed_multiplier(1.0, 0.5) - 3.0).abs() < 1e-6);
        assert!((speed_multiplier(0.25, 0.25) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn negative_depth_and_bad_divisor_guarded() {
        assert_eq!(speed_multiplier(-50.0, 1000.0), 1.0);
        // Non-positive divisors use the default denominator instead of dividing by zero.
        assert!((speed_multiplier(100.0, 0.0) - 1.1).abs() < 1e-6);
        assert!((speed_multiplier(100.0, -5.0) - 1.1).abs() < 1e-6);
    }
}
