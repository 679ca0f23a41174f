use std::path::PathBuf;

use anyhow::bail;
use bevy::prelude::*;
use clap::Parser;

use galaxy_backdrop::{ConfigReport, GalaxyConfig, GalaxyPlugin};

const BASE_CONFIG: &str = "assets/config/galaxy.ron";

#[derive(Parser, Debug)]
#[command(name = "galaxy_backdrop", about = "Animated starfield + pointer-reactive particle ring")]
struct Cli {
    /// Extra RON config overlays, applied over the base file in order.
    #[arg(long = "config")]
    config: Vec<PathBuf>,
    /// Override window.autoClose (seconds; 0 disables).
    #[arg(long = "auto-close")]
    auto_close: Option<f32>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    // Explicitly requested overlays must exist; the base file may be absent
    // (defaults apply and a warning is logged once the app is up).
    for p in &cli.config {
        if !p.is_file() {
            bail!("config overlay not found: {}", p.display());
        }
    }

    let mut paths = vec![PathBuf::from(BASE_CONFIG)];
    paths.extend(cli.config);
    let (mut cfg, used, mut warnings) = GalaxyConfig::load_layered(&paths);
    if let Some(secs) = cli.auto_close {
        cfg.window.auto_close = secs;
    }
    warnings.extend(cfg.validate());

    let exit = App::new()
        .insert_resource(ConfigReport { used, warnings })
        .insert_resource(cfg.clone())
        .add_plugins(
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: cfg.window.title.clone(),
                    resolution: (cfg.window.width, cfg.window.height).into(),
                    resizable: true,
                    ..default()
                }),
                ..default()
            }),
        )
        .add_plugins(GalaxyPlugin)
        .run();
    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => bail!("app exited with error code {code}"),
    }
}
