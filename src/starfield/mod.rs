pub mod ease;
pub mod pulse;
pub mod star;
pub mod systems;
pub mod warp;

pub use pulse::{PulseEnabled, PulsePlugin};
pub use star::{Star, Viewport};
pub use systems::{StarfieldPlugin, REFERENCE_FPS};
pub use warp::WarpPlugin;
