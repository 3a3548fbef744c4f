//! Boat integrator.
//!
//! [`step`] is a pure function of `(boat, wind, config, dt)`. It trims the
//! sail, resolves the sail force onto the bow, adds hull drag, integrates with
//! semi-implicit Euler and applies the keel constraint so the boat only ever
//! moves along its centerline. [`advance`] splits long frames into sub-steps
//! no longer than [`PhysicsConfig::max_substep`].

use crate::config::PhysicsConfig;
use crate::forces::{drag, sail_force};
use crate::heel::heel_angle;
use crate::numeric::substep_count;
use crate::sail::{clamp_to_sheet, enforce_sheet, trim};
use crate::wind::{apparent_wind, Wind};
use crate::{normalize_angle, Boat, Vector2D};

/// Advances `boat` by one step of `dt` seconds.
///
/// A `dt` that is not a positive finite duration leaves the boat unchanged.
///
/// After the rudder turns the hull, the velocity is carried onto the new
/// heading with its signed speed preserved, so on return the velocity is
/// always parallel to the bow.
///
/// # Examples
///
/// ```
/// use sailsim::{integrator::step, Boat, PhysicsConfig, Wind};
/// let boat = Boat::new();
/// let calm = Wind::new(0.0, 0.0);
/// let next = step(&boat, &calm, &PhysicsConfig::default(), 1.0 / 60.0);
/// assert_eq!(next.position, boat.position);
/// assert_eq!(next.velocity, boat.velocity);
/// ```
#[must_use]
pub fn step(boat: &Boat, wind: &Wind, config: &PhysicsConfig, dt: f64) -> Boat {
    if !dt.is_finite() || dt <= 0.0 {
        return boat.clone();
    }
    let heading = boat.heading;
    let bow = boat.heading_vector();

    let aw = apparent_wind(wind, boat.velocity);
    let trimmed = trim(boat.sail, aw, heading, boat.sheet, config, dt);
    let sail_angle = trimmed.relative_angle(heading);
    let heel = heel_angle(aw, heading, sail_angle, config);

    // The keel resists everything but the component along the bow.
    let drive = bow * sail_force(aw, heading, sail_angle, config).along(heading);
    let acceleration = (drive + drag(boat.velocity, config)) * (1.0 / config.boat_mass);
    let integrated = boat.velocity + acceleration * dt;
    let speed_along_bow = integrated.along(heading);
    let position = boat.position + bow * (speed_along_bow * dt);

    let turn = boat.rudder * config.rudder_effectiveness * speed_along_bow.abs() * dt;
    let new_heading = normalize_angle(heading + turn);
    let velocity = Vector2D::unit_compass(new_heading) * speed_along_bow;

    // The boom keeps its bearing while the hull turns beneath it.
    let sail = if clamp_to_sheet(trimmed.relative_angle(new_heading), boat.sheet).is_some() {
        enforce_sheet(trimmed, new_heading, boat.sheet)
    } else {
        trimmed
    };

    Boat {
        position,
        velocity,
        heading: new_heading,
        heel,
        sail,
        ..boat.clone()
    }
}

/// Advances `boat` by `dt` seconds in equal sub-steps.
#[must_use]
pub fn advance(boat: &Boat, wind: &Wind, config: &PhysicsConfig, dt: f64) -> Boat {
    let count = substep_count(dt, config.max_substep);
    if count == 0 {
        return boat.clone();
    }
    let h = dt / f64::from(count);
    (0..count).fold(boat.clone(), |state, _| step(&state, wind, config, h))
}
