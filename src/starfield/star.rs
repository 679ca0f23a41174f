use bevy::prelude::*;
use rand::Rng;

use crate::core::config::StarfieldConfig;
use crate::core::palette::STAR_COLORS;

/// Logical display area in screen-space pixels (origin top-left, y down).
/// Mirrors the primary window; star math runs entirely in this space and is
/// mapped to world coordinates only when transforms are written.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Screen-space (top-left origin, y down) to world-space (center origin, y up).
    pub fn to_world(&self, pos: Vec2) -> Vec2 {
        Vec2::new(pos.x - self.width * 0.5, self.height * 0.5 - pos.y)
    }
}

/// A single point in the drifting background field.
///
/// `radius` and `alpha` are the live values the renderer draws; the pulse
/// animator rewrites them every frame from the `base_*` values, and the warp
/// controller rewrites `speed`. Position is screen-space.
#[derive(Component, Debug, Clone)]
pub struct Star {
    pub pos: Vec2,
    pub base_radius: f32,
    pub radius: f32,
    pub color_index: usize,
    pub base_alpha: f32,
    pub alpha: f32,
    pub speed: f32,
}

impl Star {
    pub fn random(rng: &mut impl Rng, viewport: Viewport, cfg: &StarfieldConfig) -> Self {
        let radius = sample_range(rng, cfg.radius_range.min, cfg.radius_range.max);
        let alpha = rng.gen::<f32>();
        Self {
            pos: Vec2::new(
                sample_range(rng, 0.0, viewport.width),
                sample_range(rng, 0.0, viewport.height),
            ),
            base_radius: radius,
            radius,
            color_index: rng.gen_range(0..STAR_COLORS.len()),
            base_alpha: alpha,
            alpha,
            speed: sample_range(rng, cfg.speed_range.min, cfg.speed_range.max),
        }
    }
}

/// Uniform draw tolerant of degenerate / inverted bounds (bad config must not panic).
pub fn sample_range(rng: &mut impl Rng, min: f32, max: f32) -> f32 {
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}

/// One drift step. `frames` is elapsed time expressed in 60 Hz reference
/// frames so the per-frame speeds of the config keep their meaning at any
/// refresh rate. A star leaving the top edge wraps to the bottom with a fresh
/// horizontal position; the collection itself never grows or shrinks.
pub fn advance_star(star: &mut Star, frames: f32, viewport: Viewport, rng: &mut impl Rng) {
    star.pos.y -= star.speed * frames;
    if star.pos.y < 0.0 {
        star.pos.y = viewport.height;
        star.pos.x = sample_range(rng, 0.0, viewport.width);
    }
}
