pub mod pointer;
pub mod scroll;
pub mod session;

pub use pointer::{NormalizedPointer, PointerPlugin};
pub use scroll::{ScrollDepth, ScrollPlugin};
