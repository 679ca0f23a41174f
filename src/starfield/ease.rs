//! Explicit per-attribute interpolation: one eased tween function instead of
//! a generic keyframe-descriptor interpreter.

use std::f32::consts::PI;

/// Sinusoidal ease-in-out over normalized progress `x` in [0,1].
#[inline]
pub fn ease_in_out_sine(x: f32) -> f32 {
    0.5 - 0.5 * (PI * x).cos()
}

/// Eased value between `start` and `end` after `elapsed` seconds of a
/// `duration`-second phase. Clamped, so the output never leaves the
/// start/end interval even for out-of-range elapsed times.
#[inline]
pub fn tween(start: f32, end: f32, duration: f32, elapsed: f32) -> f32 {
    if duration <= 0.0 {
        return end;
    }
    let x = (elapsed / duration).clamp(0.0, 1.0);
    start + (end - start) * ease_in_out_sine(x)
}
