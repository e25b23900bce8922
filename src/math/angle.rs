//! Angle helpers.
//!
//! Rotations are stored in radians and kept in the canonical range `[0, 2*pi)`.

use std::f64::consts::TAU;

/// Reduces `angle` (radians) to its canonical representative in `[0, 2*pi)`.
///
/// The magnitude is reduced modulo `2*pi` first; a negative input is then
/// reflected as `2*pi - reduced`. Inputs that land exactly on `2*pi` after the
/// reflection (for example `-2*pi`, or a negative angle too small to survive
/// the subtraction) map to `0`.
///
/// Non-finite inputs are returned as `NaN`.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let reduced = angle.abs() % TAU;
    let canonical = if angle < 0.0 { TAU - reduced } else { reduced };
    if canonical >= TAU {
        0.0
    } else {
        canonical
    }
}

/// Converts degrees to radians.
#[must_use]
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees.to_radians()
}
