//! Angle helpers.
//!
//! All angles in the simulation are radians. Compass angles are measured
//! clockwise from north (`+y`), matching [`Vector2D::compass_angle`].
//!
//! [`Vector2D::compass_angle`]: crate::Vector2D::compass_angle

use std::f64::consts::{PI, TAU};

/// Wraps `angle` into the half-open interval `(-π, π]`.
///
/// Uses a closed-form Euclidean remainder, so the cost is constant for any
/// finite input. Non-finite input yields `NaN`.
///
/// # Examples
///
/// ```
/// use sailsim::normalize_angle;
/// use std::f64::consts::PI;
/// assert!((normalize_angle(3.0 * PI) - PI).abs() < 1e-9);
/// assert!((normalize_angle(-PI) - PI).abs() < 1e-12);
/// assert!((normalize_angle(0.25) - 0.25).abs() < 1e-12);
/// ```
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Wraps `angle` into `[0, 360)` degrees for display.
#[must_use]
pub fn to_compass_degrees(angle: f64) -> f64 {
    let degrees = angle.to_degrees().rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if degrees >= 360.0 {
        0.0
    } else {
        degrees
    }
}
