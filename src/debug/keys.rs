use bevy::prelude::*;

use crate::interaction::scroll::ScrollDepth;
use crate::starfield::pulse::PulseEnabled;

/// P toggles the pulse animator, R resets scroll depth to the top.
pub fn debug_key_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut pulse: ResMut<PulseEnabled>,
    mut depth: ResMut<ScrollDepth>,
) {
    if keys.just_pressed(KeyCode::KeyP) {
        pulse.0 = !pulse.0;
        info!("Pulse animator {}", if pulse.0 { "resumed" } else { "paused" });
    }
    if keys.just_pressed(KeyCode::KeyR) && depth.0 != 0.0 {
        depth.0 = 0.0;
        info!("Scroll depth reset");
    }
}
