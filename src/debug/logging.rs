use bevy::prelude::*;

use super::{DebugState, DebugStats};

pub fn debug_logging_system(
    time: Res<Time>,
    mut state: ResMut<DebugState>,
    stats: Res<DebugStats>,
) {
    state.time_accum += time.delta_secs();
    if state.time_accum >= state.log_interval {
        state.time_accum = 0.0;
        info!(
            "BACKDROP frame={} t={:.3}s fps={:.1} ft_ms={:.1} stars={} particles={} depth={:.0} pointer=({:.2},{:.2})",
            state.frame_counter,
            time.elapsed_secs(),
            stats.fps,
            stats.frame_time_ms,
            stats.star_count,
            stats.particle_count,
            stats.scroll_depth,
            stats.pointer.x,
            stats.pointer.y,
        );
    }
}
