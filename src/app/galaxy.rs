use bevy::prelude::*;

use crate::antigravity::AntigravityPlugin;
use crate::core::config::GalaxyConfig;
use crate::core::system::system_order::{AnimateSet, InputSet, SyncSet};
use crate::debug::DebugPlugin;
use crate::interaction::session::AutoClosePlugin;
use crate::interaction::{PointerPlugin, ScrollPlugin};
use crate::rendering::CameraPlugin;
use crate::starfield::{PulsePlugin, StarfieldPlugin, WarpPlugin};

/// Where the loaded config came from, plus validation warnings; inserted by
/// the binary and reported once logging is up.
#[derive(Resource, Debug, Default, Clone)]
pub struct ConfigReport {
    pub used: Vec<String>,
    pub warnings: Vec<String>,
}

/// The composed animated background: starfield + pulse + warp + pointer ring.
/// All mutation runs on the main schedule in Input -> Animate -> Sync order;
/// tearing the app down (window close / auto-close) stops every loop at once.
pub struct GalaxyPlugin;

impl Plugin for GalaxyPlugin {
    fn build(&self, app: &mut App) {
        // Defaults apply when the embedding app inserts no config of its own.
        app.init_resource::<GalaxyConfig>()
            .configure_sets(
                Update,
                (
                    InputSet,
                    AnimateSet.after(InputSet),
                    SyncSet.after(AnimateSet),
                ),
            )
            .add_systems(Startup, report_config)
            .add_plugins((
                CameraPlugin,
                PointerPlugin,
                ScrollPlugin,
                StarfieldPlugin,
                PulsePlugin,
                WarpPlugin,
                AntigravityPlugin,
                AutoClosePlugin,
                DebugPlugin,
            ));
    }
}

fn report_config(report: Option<Res<ConfigReport>>) {
    let Some(report) = report else {
        return;
    };
    if report.used.is_empty() {
        warn!("No config files loaded; running on built-in defaults");
    } else {
        info!("Config loaded from: {}", report.used.join(", "));
    }
    for w in &report.warnings {
        warn!("config: {w}");
    }
}
