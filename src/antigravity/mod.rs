pub mod field;
pub mod particle;
pub mod systems;

pub use particle::Particle;
pub use systems::AntigravityPlugin;
