//! Debug module: feature gated runtime stats/logging and control keys.
//! Built only when compiled with `--features debug`.

#[cfg(feature = "debug")]
mod keys;
#[cfg(feature = "debug")]
mod logging;
#[cfg(feature = "debug")]
mod stats;

#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
use crate::core::system::system_order::SyncSet;

#[cfg(feature = "debug")]
#[derive(Resource, Debug)]
pub struct DebugState {
    pub time_accum: f32,
    pub log_interval: f32,
    pub frame_counter: u64,
}

#[cfg(feature = "debug")]
impl Default for DebugState {
    fn default() -> Self {
        Self {
            time_accum: 0.0,
            log_interval: 2.0,
            frame_counter: 0,
        }
    }
}

#[cfg(feature = "debug")]
#[derive(Resource, Debug, Default)]
pub struct DebugStats {
    pub fps: f32,
    pub frame_time_ms: f32,
    pub star_count: usize,
    pub particle_count: usize,
    pub scroll_depth: f32,
    pub pointer: Vec2,
}

#[cfg(feature = "debug")]
pub struct DebugPlugin;

#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        use keys::debug_key_input_system;
        use logging::debug_logging_system;
        use stats::debug_stats_collect_system;

        app.init_resource::<DebugState>()
            .init_resource::<DebugStats>()
            .add_systems(
                Update,
                (
                    debug_key_input_system,
                    debug_stats_collect_system,
                    debug_logging_system,
                )
                    .chain()
                    .after(SyncSet),
            );
    }
}

#[cfg(not(feature = "debug"))]
pub struct DebugPlugin;
#[cfg(not(feature = "debug"))]
impl bevy::prelude::Plugin for DebugPlugin {
    fn build(&self, _app: &mut bevy::prelude::App) {}
}
