//! Sail driving force and hull drag.
//!
//! Both forces are quadratic in speed. Each has a numerical floor below which
//! it is exactly zero so direction math never divides by a vanishing length.

use std::f64::consts::FRAC_PI_2;

use crate::config::PhysicsConfig;
use crate::constants::{DEAD_AIR_THRESHOLD, DRAG_SPEED_FLOOR};
use crate::{normalize_angle, Vector2D};

/// Angle between the apparent wind and the sail plane, radians in `(-π, π]`.
///
/// `sail_angle` is relative to the bow.
#[must_use]
pub fn incidence(apparent_wind: Vector2D, heading: f64, sail_angle: f64) -> f64 {
    normalize_angle(apparent_wind.compass_angle() - (heading + sail_angle))
}

/// Magnitude of the aerodynamic force on the sail, newtons.
///
/// Efficiency follows `sin(|incidence|)`: full drive with the wind square
/// across the sail, none with it along the sail.
#[must_use]
pub fn sail_force_magnitude(
    apparent_wind: Vector2D,
    heading: f64,
    sail_angle: f64,
    config: &PhysicsConfig,
) -> f64 {
    let speed = apparent_wind.magnitude();
    if speed < DEAD_AIR_THRESHOLD {
        return 0.0;
    }
    let efficiency = incidence(apparent_wind, heading, sail_angle).abs().sin();
    config.sail_force_factor() * efficiency * speed * speed
}

/// Force the sail exerts on the boat, perpendicular to the sail plane on the
/// side the wind strikes.
///
/// # Examples
///
/// ```
/// use sailsim::{forces::sail_force, PhysicsConfig, Vector2D};
/// let calm = sail_force(Vector2D::new(0.0, 0.05), 0.0, 3.0, &PhysicsConfig::default());
/// assert_eq!(calm, Vector2D::ZERO);
/// ```
#[must_use]
pub fn sail_force(
    apparent_wind: Vector2D,
    heading: f64,
    sail_angle: f64,
    config: &PhysicsConfig,
) -> Vector2D {
    let magnitude = sail_force_magnitude(apparent_wind, heading, sail_angle, config);
    if magnitude == 0.0 {
        return Vector2D::ZERO;
    }
    let orientation = heading + sail_angle;
    let side = if incidence(apparent_wind, heading, sail_angle) > 0.0 {
        FRAC_PI_2
    } else {
        -FRAC_PI_2
    };
    Vector2D::from_compass(orientation + side, magnitude)
}

/// Quadratic hull drag opposing `velocity`.
///
/// # Examples
///
/// ```
/// use sailsim::{forces::drag, PhysicsConfig, Vector2D};
/// assert_eq!(drag(Vector2D::ZERO, &PhysicsConfig::default()), Vector2D::ZERO);
/// ```
#[must_use]
pub fn drag(velocity: Vector2D, config: &PhysicsConfig) -> Vector2D {
    let speed = velocity.magnitude();
    if speed < DRAG_SPEED_FLOOR {
        return Vector2D::ZERO;
    }
    velocity.normalized() * (-config.drag_factor() * speed * speed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::{fixture, rstest};
    use std::f64::consts::PI;

    #[fixture]
    fn config() -> PhysicsConfig {
        PhysicsConfig::default()
    }

    #[rstest]
    #[case::still(Vector2D::ZERO)]
    #[case::creeping(Vector2D::new(0.005, -0.005))]
    fn drag_vanishes_below_floor(config: PhysicsConfig, #[case] velocity: Vector2D) {
        assert_eq!(drag(velocity, &config), Vector2D::ZERO);
    }

    #[rstest]
    fn drag_opposes_motion_quadratically(config: PhysicsConfig) {
        let d = drag(Vector2D::new(3.0, 4.0), &config);
        // 0.5 · 1000 · 0.01 · 2 · 25
        assert_relative_eq!(d.magnitude(), 250.0, epsilon = 1e-9);
        assert_relative_eq!(d.x, -150.0, epsilon = 1e-9);
        assert_relative_eq!(d.y, -200.0, epsilon = 1e-9);
    }

    #[rstest]
    fn dead_air_produces_no_force(config: PhysicsConfig) {
        let f = sail_force(Vector2D::new(0.05, 0.05), 0.4, 2.5, &config);
        assert_eq!(f, Vector2D::ZERO);
    }

    #[rstest]
    fn square_wind_gives_full_drive(config: PhysicsConfig) {
        // Sail athwartships, air moving north: incidence is a right angle.
        let aw = Vector2D::new(0.0, 10.0);
        let magnitude = sail_force_magnitude(aw, 0.0, PI / 2.0, &config);
        assert_relative_eq!(magnitude, 0.5 * 3.0 * 8.0 * 100.0, epsilon = 1e-9);
        let f = sail_force(aw, 0.0, PI / 2.0, &config);
        assert_relative_eq!(f.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(f.y, magnitude, epsilon = 1e-9);
    }

    #[rstest]
    fn feathered_sail_produces_no_drive(config: PhysicsConfig) {
        let aw = Vector2D::new(0.0, -10.0);
        let magnitude = sail_force_magnitude(aw, 0.0, PI, &config);
        assert_relative_eq!(magnitude, 0.0, epsilon = 1e-9);
    }

    #[rstest]
    fn force_is_perpendicular_to_sail(
        config: PhysicsConfig,
        #[values(-2.5, -0.8, 0.3, 1.9)] heading: f64,
        #[values(-2.8, -1.2, 2.0, 3.0)] sail_angle: f64,
    ) {
        let aw = Vector2D::from_compass(0.6, 12.0);
        let f = sail_force(aw, heading, sail_angle, &config);
        let along_sail = f.along(heading + sail_angle);
        assert_relative_eq!(along_sail, 0.0, epsilon = 1e-6);
        assert!(f.magnitude() <= config.sail_force_factor() * 144.0 + 1e-9);
    }
}
