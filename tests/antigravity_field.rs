//! Headless simulation of the particle ring through the same field math the
//! runtime systems call.

use bevy::math::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

use galaxy_backdrop::antigravity::field::{
    magnet_displacement, ring_target, smoothing_fraction, POINTER_WORLD_SCALE,
};
use galaxy_backdrop::antigravity::particle::Particle;
use galaxy_backdrop::core::config::GalaxyConfig;

#[test]
fn particle_count_fixed_for_session() {
    let cfg = GalaxyConfig::default();
    let mut rng = StdRng::seed_from_u64(1);
    let mut particles: Vec<Particle> = (0..cfg.antigravity.count)
        .map(|_| Particle::random(&mut rng, &cfg.antigravity))
        .collect();
    for step in 0..5_000 {
        let t = step as f32 / 60.0;
        let fraction = smoothing_fraction(cfg.antigravity.lerp_speed, 1.0);
        for p in particles.iter_mut() {
            let target = ring_target(p.initial_angle, t, &cfg.antigravity);
            p.pos += (target - p.pos) * fraction;
        }
    }
    assert_eq!(particles.len(), 300);
}

#[test]
fn particles_converge_onto_the_ring() {
    let cfg = GalaxyConfig::default();
    let ag = &cfg.antigravity;
    let mut rng = StdRng::seed_from_u64(2);
    let mut p = Particle::random(&mut rng, ag);

    // Freeze time: the target is fixed, so the distance to it must shrink by
    // (1 - lerp_speed) every step.
    let target = ring_target(p.initial_angle, 12.5, ag);
    let d0 = (target - p.pos).length();
    let fraction = smoothing_fraction(ag.lerp_speed, 1.0);
    let mut last = d0;
    for n in 1..=200 {
        p.pos += (target - p.pos) * fraction;
        let d = (target - p.pos).length();
        let expect = d0 * (1.0 - ag.lerp_speed).powi(n);
        assert!(
            (d - expect).abs() < d0 * 1e-4 + 1e-4,
            "step {n}: distance {d} vs expected {expect}"
        );
        assert!(d <= last + 1e-6);
        last = d;
    }
}

#[test]
fn convergence_matches_reference_decay() {
    // Reference decay: f = 0.05, initial distance 10, distance after n steps
    // is 10 * 0.95^n.
    let f = 0.05_f32;
    let target = Vec3::new(10.0, 0.0, 0.0);
    let mut pos = Vec3::ZERO;
    for n in 1..=100 {
        pos += (target - pos) * smoothing_fraction(f, 1.0);
        let expect = 10.0 * 0.95_f32.powi(n);
        assert!(((target - pos).length() - expect).abs() < 1e-3);
    }
}

#[test]
fn pointer_only_disturbs_nearby_targets() {
    let cfg = GalaxyConfig::default();
    let ag = &cfg.antigravity;
    // Pointer at the far corner of its normalized range.
    let pointer_world = Vec2::new(1.0, 1.0) * POINTER_WORLD_SCALE;

    let far_target = Vec2::new(-15.0, -15.0); // well outside magnet_radius of the pointer
    assert_eq!(
        magnet_displacement(far_target, pointer_world, ag.magnet_radius, ag.field_strength),
        Vec2::ZERO
    );

    let near_target = pointer_world + Vec2::new(5.0, 0.0);
    let push = magnet_displacement(near_target, pointer_world, ag.magnet_radius, ag.field_strength);
    // Force factor (10-5)/10 = 0.5, strength 10 * 0.1 = 1.0, delta (-5, 0):
    // displacement (-(-5))*0.5 = (2.5, 0) pointing away from the pointer.
    assert!((push.x - 2.5).abs() < 1e-4);
    assert!(push.y.abs() < 1e-4);
}

#[test]
fn disturbed_ring_recovers_when_pointer_leaves() {
    let cfg = GalaxyConfig::default();
    let ag = &cfg.antigravity;
    let mut rng = StdRng::seed_from_u64(3);
    let mut p = Particle::random(&mut rng, ag);
    let t = 4.0;
    let fraction = smoothing_fraction(ag.lerp_speed, 1.0);

    // Pointer parked just beside the particle's ring slot drives it off target.
    let ring = ring_target(p.initial_angle, t, ag);
    let pointer = ring.truncate() + Vec2::new(2.0, 0.0);
    for _ in 0..300 {
        let mut target = ring;
        let push = magnet_displacement(target.truncate(), pointer, ag.magnet_radius, ag.field_strength);
        target.x += push.x;
        target.y += push.y;
        p.pos += (target - p.pos) * fraction;
    }
    let displaced = (p.pos - ring).length();
    assert!(displaced > 0.01, "magnet should hold the particle off its slot");

    // Pointer leaves: the particle settles back onto the undisturbed target.
    let pointer = Vec2::new(1000.0, 1000.0);
    for _ in 0..600 {
        let mut target = ring;
        let push = magnet_displacement(target.truncate(), pointer, ag.magnet_radius, ag.field_strength);
        target.x += push.x;
        target.y += push.y;
        p.pos += (target - p.pos) * fraction;
    }
    assert!((p.pos - ring).length() < 1e-2);
}
