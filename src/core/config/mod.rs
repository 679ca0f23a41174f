pub mod config;

pub use config::{
    AntigravityConfig, GalaxyConfig, ParticleShape, PulseConfig, SpawnRange, StarfieldConfig,
    WarpConfig, WindowConfig,
};
