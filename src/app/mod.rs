pub mod galaxy;

pub use galaxy::{ConfigReport, GalaxyPlugin};
