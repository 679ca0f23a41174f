use bevy::prelude::*;
use bevy::window::WindowResized;
use rand::Rng;

use crate::core::config::GalaxyConfig;
use crate::core::palette::color_for_index;
use crate::core::system::system_order::{AnimateSet, InputSet, SyncSet};
use crate::starfield::pulse::PulsePhase;
use crate::starfield::star::{advance_star, Star, Viewport};

/// Elapsed time in 60 Hz reference frames; per-frame speeds and interpolation
/// fractions in the config are defined against this rate.
pub const REFERENCE_FPS: f32 = 60.0;

pub struct StarfieldPlugin;

impl Plugin for StarfieldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Viewport>()
            .add_systems(Startup, spawn_stars)
            .add_systems(
                Update,
                (
                    track_viewport.in_set(InputSet),
                    drift_stars.in_set(AnimateSet),
                    sync_star_visuals.in_set(SyncSet),
                ),
            );
    }
}

fn spawn_stars(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    cfg: Res<GalaxyConfig>,
    windows: Query<&Window>,
) {
    let viewport = match windows.single() {
        Ok(win) => Viewport::new(win.width(), win.height()),
        // Headless / unsupported surface: keep the default viewport and
        // degrade to an invisible field rather than failing startup.
        Err(_) => Viewport::default(),
    };
    commands.insert_resource(viewport);

    // Shared unit circle (radius 0.5); each star scales it to its diameter.
    let circle = meshes.add(Mesh::from(Circle { radius: 0.5 }));
    let mut rng = rand::thread_rng();
    for i in 0..cfg.starfield.num_stars {
        let star = Star::random(&mut rng, viewport, &cfg.starfield);
        let color = color_for_index(star.color_index).with_alpha(star.alpha);
        // Per-star material: alpha is animated independently for every star.
        let material = materials.add(ColorMaterial::from(color));
        let world = viewport.to_world(star.pos);
        commands.spawn((
            Mesh2d(circle.clone()),
            MeshMaterial2d(material),
            Transform::from_translation(world.extend(0.0))
                .with_scale(Vec3::splat(star.radius * 2.0)),
            PulsePhase {
                stagger: i as f32 * cfg.pulse.stagger,
            },
            star,
        ));
    }
    info!(
        "Starfield spawned: {} stars over {}x{}",
        cfg.starfield.num_stars, viewport.width, viewport.height
    );
}

/// Keep the logical viewport in step with the window. Star positions are
/// deliberately left untouched; off-bounds stars re-enter when they wrap.
fn track_viewport(mut resize: EventReader<WindowResized>, mut viewport: ResMut<Viewport>) {
    if let Some(e) = resize.read().last() {
        viewport.set_if_neq(Viewport::new(e.width, e.height));
    }
}

fn drift_stars(time: Res<Time>, viewport: Res<Viewport>, mut q: Query<&mut Star>) {
    let frames = time.delta_secs() * REFERENCE_FPS;
    let mut rng = rand::thread_rng();
    for mut star in q.iter_mut() {
        advance_star(&mut star, frames, *viewport, &mut rng);
    }
}

fn sync_star_visuals(
    viewport: Res<Viewport>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut q: Query<(&Star, &mut Transform, &MeshMaterial2d<ColorMaterial>)>,
) {
    for (star, mut tf, mat) in q.iter_mut() {
        let world = viewport.to_world(star.pos);
        tf.translation.x = world.x;
        tf.translation.y = world.y;
        tf.scale = Vec3::splat(star.radius * 2.0);
        if let Some(m) = materials.get_mut(&mat.0) {
            m.color = color_for_index(star.color_index).with_alpha(star.alpha);
        }
    }
}
