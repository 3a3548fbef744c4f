//! Quasi-static heel estimate.
//!
//! Heel is derived from the sail's side force for display only; it never feeds
//! back into the force balance.

use crate::config::PhysicsConfig;
use crate::constants::MAX_HEEL;
use crate::forces::sail_force_magnitude;
use crate::Vector2D;

/// Heel angle in radians, clamped to `±MAX_HEEL`.
///
/// The sail force is resolved athwartships with `sin(sail_angle)`, turned
/// into a heeling moment about the sail's centre of effort and balanced
/// against a linear righting moment. The sign follows the side the boom is
/// on.
///
/// # Examples
///
/// ```
/// use sailsim::{heel::heel_angle, PhysicsConfig, Vector2D};
/// let heel = heel_angle(Vector2D::new(0.0, 1.0e4), 0.0, 1.0, &PhysicsConfig::default());
/// assert!(heel <= std::f64::consts::FRAC_PI_4);
/// ```
#[must_use]
pub fn heel_angle(
    apparent_wind: Vector2D,
    heading: f64,
    sail_angle: f64,
    config: &PhysicsConfig,
) -> f64 {
    let side_force = sail_force_magnitude(apparent_wind, heading, sail_angle, config)
        * sail_angle.sin();
    let moment = side_force.abs() * config.sail_center_height;
    let magnitude = (moment / config.righting_constant).min(MAX_HEEL);
    if sail_angle > 0.0 {
        magnitude
    } else {
        -magnitude
    }
}
