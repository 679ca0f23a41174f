use bevy::prelude::*;

use super::{DebugState, DebugStats};
use crate::antigravity::particle::Particle;
use crate::interaction::pointer::NormalizedPointer;
use crate::interaction::scroll::ScrollDepth;
use crate::starfield::star::Star;

pub fn debug_stats_collect_system(
    time: Res<Time>,
    mut state: ResMut<DebugState>,
    mut stats: ResMut<DebugStats>,
    q_stars: Query<&Star>,
    q_particles: Query<&Particle>,
    depth: Res<ScrollDepth>,
    pointer: Res<NormalizedPointer>,
) {
    state.frame_counter += 1;
    let dt = time.delta_secs().max(1e-6);
    let inst_fps = 1.0 / dt;
    if stats.fps == 0.0 {
        stats.fps = inst_fps;
    } else {
        stats.fps = stats.fps * 0.9 + inst_fps * 0.1;
    }
    let inst_ms = dt * 1000.0;
    if stats.frame_time_ms == 0.0 {
        stats.frame_time_ms = inst_ms;
    } else {
        stats.frame_time_ms = stats.frame_time_ms * 0.9 + inst_ms * 0.1;
    }
    stats.star_count = q_stars.iter().count();
    stats.particle_count = q_particles.iter().count();
    stats.scroll_depth = depth.0;
    stats.pointer = pointer.0;
}
