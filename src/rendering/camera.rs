use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy::render::camera::ClearColorConfig;

/// Page background behind the starfield (near-black with a blue cast).
pub const BACKDROP_CLEAR: Color = Color::srgb(0.04, 0.04, 0.08);

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(BACKDROP_CLEAR))
            .add_systems(Startup, setup_cameras);
    }
}

fn setup_cameras(mut commands: Commands) {
    // 2D pass first: clears to the backdrop color and draws the starfield.
    commands.spawn(Camera2d);
    // 3D pass layered on top for the particle ring; must not clear.
    commands.spawn((
        Camera3d::default(),
        Camera {
            order: 1,
            clear_color: ClearColorConfig::None,
            ..default()
        },
        Projection::Perspective(PerspectiveProjection {
            fov: 60.0_f32.to_radians(),
            ..default()
        }),
        Tonemapping::None,
        Transform::from_xyz(0.0, 0.0, 20.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
