pub mod config;
pub mod palette;
pub mod system;
