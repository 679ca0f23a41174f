//! Centralized star color palette & helpers.
//! Single source of truth for the starfield's fixed set of tints.

use bevy::prelude::*;

/// Base SRGB palette: white plus three saturated accents. Update here only.
pub const STAR_COLORS: [Color; 4] = [
    Color::srgb(1.0, 1.0, 1.0),  // white
    Color::srgb(0.54, 0.17, 0.89), // blue-violet
    Color::srgb(0.0, 1.0, 1.0),  // cyan
    Color::srgb(1.0, 0.0, 1.0),  // magenta
];

/// Returns a color for arbitrary index, wrapping around the base palette.
#[inline]
pub fn color_for_index(i: usize) -> Color {
    STAR_COLORS[i % STAR_COLORS.len()]
}
