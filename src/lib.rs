pub mod antigravity;
pub mod app;
pub mod core;
pub mod debug;
pub mod interaction;
pub mod rendering;
pub mod starfield;

// Curated re-exports
pub use crate::antigravity::{AntigravityPlugin, Particle};
pub use crate::app::{ConfigReport, GalaxyPlugin};
pub use crate::core::config::{GalaxyConfig, WindowConfig};
pub use crate::starfield::{Star, Viewport};
