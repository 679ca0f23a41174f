use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use crate::core::config::GalaxyConfig;
use crate::core::system::system_order::InputSet;

/// Accumulated scroll offset in pixels, 0 at the top, growing as the user
/// scrolls down. Never negative.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollDepth(pub f32);

pub struct ScrollPlugin;

impl Plugin for ScrollPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScrollDepth>()
            .add_systems(Update, accumulate_scroll.in_set(InputSet));
    }
}

/// Pixel delta for one wheel event; line units scale by the configured step.
/// Wheel-down (negative y) scrolls deeper, hence the sign flip.
pub fn wheel_to_pixels(unit: MouseScrollUnit, y: f32, scroll_step: f32) -> f32 {
    match unit {
        MouseScrollUnit::Line => -y * scroll_step,
        MouseScrollUnit::Pixel => -y,
    }
}

fn accumulate_scroll(
    mut wheel: EventReader<MouseWheel>,
    cfg: Res<GalaxyConfig>,
    mut depth: ResMut<ScrollDepth>,
) {
    let mut delta = 0.0;
    for e in wheel.read() {
        delta += wheel_to_pixels(e.unit, e.y, cfg.warp.scroll_step);
    }
    if delta != 0.0 {
        // Write only on movement so change detection gates the warp system.
        depth.0 = (depth.0 + delta).max(0.0);
    }
}
