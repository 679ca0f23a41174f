use bevy::prelude::*;

use crate::antigravity::field::{
    magnet_displacement, pulse_scale, ring_target, smoothing_fraction, POINTER_WORLD_SCALE,
};
use crate::antigravity::particle::Particle;
use crate::core::config::{GalaxyConfig, ParticleShape};
use crate::core::system::system_order::{AnimateSet, SyncSet};
use crate::interaction::pointer::NormalizedPointer;
use crate::starfield::REFERENCE_FPS;

/// Shared orientation of the whole ring, accumulated when `rotation_speed`
/// is nonzero. One value for all particles, as in a single rotating mount.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct RingRotation(pub Vec2);

pub struct AntigravityPlugin;

impl Plugin for AntigravityPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RingRotation>()
            .add_systems(Startup, spawn_particles)
            .add_systems(
                Update,
                (
                    update_particles.in_set(AnimateSet),
                    sync_particle_transforms.in_set(SyncSet),
                ),
            );
    }
}

fn spawn_particles(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    cfg: Res<GalaxyConfig>,
) {
    let ag = &cfg.antigravity;
    // One mesh + one material shared by every particle: the renderer batches
    // the whole ring into a single instanced draw, re-uploading per-instance
    // transforms each frame.
    let mesh = match ag.shape {
        ParticleShape::Capsule => meshes.add(Capsule3d::new(0.05, 0.15)),
        ParticleShape::Sphere => meshes.add(Sphere::new(0.1)),
    };
    let [r, g, b] = ag.color;
    let material = materials.add(StandardMaterial {
        base_color: Color::srgba(r, g, b, ag.opacity),
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        ..default()
    });

    let mut rng = rand::thread_rng();
    for _ in 0..ag.count {
        let particle = Particle::random(&mut rng, ag);
        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(particle.pos).with_scale(Vec3::splat(ag.particle_size)),
            particle,
        ));
    }
    info!("Antigravity ring spawned: {} particles ({:?})", ag.count, ag.shape);
}

fn update_particles(
    time: Res<Time>,
    cfg: Res<GalaxyConfig>,
    pointer: Res<NormalizedPointer>,
    mut rotation: ResMut<RingRotation>,
    mut q: Query<&mut Particle>,
) {
    let ag = &cfg.antigravity;
    let t = time.elapsed_secs();
    let frames = time.delta_secs() * REFERENCE_FPS;
    let pointer_world = pointer.0 * POINTER_WORLD_SCALE;

    if ag.rotation_speed != 0.0 {
        rotation.0 += Vec2::splat(ag.rotation_speed * 0.01 * frames);
    }

    let fraction = smoothing_fraction(ag.lerp_speed, frames);
    for mut particle in q.iter_mut() {
        let mut target = ring_target(particle.initial_angle, t, ag);
        let push = magnet_displacement(
            target.truncate(),
            pointer_world,
            ag.magnet_radius,
            ag.field_strength,
        );
        target.x += push.x;
        target.y += push.y;
        let delta = target - particle.pos;
        particle.pos += delta * fraction;
    }
}

fn sync_particle_transforms(
    time: Res<Time>,
    cfg: Res<GalaxyConfig>,
    rotation: Res<RingRotation>,
    mut q: Query<(&Particle, &mut Transform)>,
) {
    let ag = &cfg.antigravity;
    let t = time.elapsed_secs();
    let quat = Quat::from_euler(EulerRot::XYZ, rotation.0.x, rotation.0.y, 0.0);
    for (particle, mut tf) in q.iter_mut() {
        tf.translation = particle.pos;
        tf.rotation = quat;
        tf.scale = Vec3::splat(pulse_scale(ag, particle.pulse_rate, particle.offset, t));
    }
}
