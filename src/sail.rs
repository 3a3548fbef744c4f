//! Sail trim.
//!
//! The boom seeks the downwind side of the apparent wind. The sheet limits
//! how far it may swing away from the stern: at `sheet = 0` it is pinned to
//! the centerline, at `sheet = 1` it may reach the beam. When the natural
//! angle lies outside that arc the boom rests against the limit and the sail
//! is luffing against the sheet.
//!
//! Two boom models are provided. [`instantaneous_sail_angle`] is a stateless
//! formula. [`SailSpring`] treats the boom as a rotational spring-damper with
//! its state carried in [`SailState`]; it is the default because it gives the
//! boom inertia and overshoot.

use std::f64::consts::{FRAC_PI_2, PI};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::{PhysicsConfig, SailModel};
use crate::{normalize_angle, Vector2D};

/// Boom state carried between ticks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SailState {
    /// Compass bearing of the boom, radians.
    pub world_angle: f64,
    /// rad/s
    pub angular_velocity: f64,
    /// Whether the sheet stopped the boom on the last update.
    pub luffing: bool,
}

impl SailState {
    /// A boom at rest along the stern of a boat on `heading`.
    #[must_use]
    pub fn trailing(heading: f64) -> Self {
        Self {
            world_angle: normalize_angle(heading + PI),
            angular_velocity: 0.0,
            luffing: false,
        }
    }

    /// Boom angle relative to the bow, radians in `(-π, π]`.
    #[must_use]
    pub fn relative_angle(&self, heading: f64) -> f64 {
        normalize_angle(self.world_angle - heading)
    }
}

/// Largest permitted deviation of the boom from the stern, `sheet · π/2`.
#[must_use]
pub fn sheet_limit(sheet: f64) -> f64 {
    sheet.clamp(0.0, 1.0) * FRAC_PI_2
}

/// How far a relative boom angle lies from the stern (`±π`).
#[must_use]
pub fn deviation_from_stern(relative_angle: f64) -> f64 {
    (relative_angle.abs() - PI).abs()
}

/// Relative angle the boom would take if the sheet were slack.
#[must_use]
pub fn natural_sail_angle(apparent_wind: Vector2D, heading: f64) -> f64 {
    let relative_wind = normalize_angle(apparent_wind.compass_angle() - heading);
    normalize_angle(relative_wind + PI)
}

/// Returns the boundary angle when `relative_angle` lies beyond the sheet
/// limit, or `None` when the sheet allows it.
#[must_use]
pub fn clamp_to_sheet(relative_angle: f64, sheet: f64) -> Option<f64> {
    let limit = sheet_limit(sheet);
    if deviation_from_stern(relative_angle) <= limit {
        return None;
    }
    let boundary = if relative_angle > 0.0 {
        PI - limit
    } else {
        -PI + limit
    };
    Some(normalize_angle(boundary))
}

/// Stateless trim: the natural angle, clamped by the sheet.
///
/// # Examples
///
/// ```
/// use sailsim::{instantaneous_sail_angle, Vector2D};
/// use std::f64::consts::PI;
/// // Running dead downwind, the boom trails straight aft.
/// let angle = instantaneous_sail_angle(Vector2D::new(0.0, -10.0), PI, 0.5);
/// assert!((angle.abs() - PI).abs() < 1e-9);
/// ```
#[must_use]
pub fn instantaneous_sail_angle(apparent_wind: Vector2D, heading: f64, sheet: f64) -> f64 {
    let natural = natural_sail_angle(apparent_wind, heading);
    clamp_to_sheet(natural, sheet).unwrap_or(natural)
}

/// Rotational spring-damper boom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SailSpring {
    /// Angular acceleration per radian of error.
    pub stiffness: f64,
    /// Angular acceleration per rad/s of boom rate.
    pub damping: f64,
}

impl SailSpring {
    /// Spring constants taken from `config`.
    #[must_use]
    pub const fn from_config(config: &PhysicsConfig) -> Self {
        Self {
            stiffness: config.sail_spring,
            damping: config.sail_damping,
        }
    }

    /// Relaxes the boom toward the downwind bearing for `dt` seconds, then
    /// applies the sheet. A boom stopped by the sheet loses its rate.
    #[must_use]
    pub fn step(
        &self,
        state: SailState,
        apparent_wind: Vector2D,
        heading: f64,
        sheet: f64,
        dt: f64,
    ) -> SailState {
        let target = normalize_angle(apparent_wind.compass_angle() + PI);
        let error = normalize_angle(target - state.world_angle);
        let angular_accel = error * self.stiffness - state.angular_velocity * self.damping;
        let angular_velocity = state.angular_velocity + angular_accel * dt;
        let world_angle = normalize_angle(state.world_angle + angular_velocity * dt);
        enforce_sheet(
            SailState {
                world_angle,
                angular_velocity,
                luffing: false,
            },
            heading,
            sheet,
        )
    }
}

/// Pulls the boom back inside the sheet arc for a boat on `heading`.
#[must_use]
pub fn enforce_sheet(state: SailState, heading: f64, sheet: f64) -> SailState {
    match clamp_to_sheet(state.relative_angle(heading), sheet) {
        Some(boundary) => SailState {
            world_angle: normalize_angle(heading + boundary),
            angular_velocity: 0.0,
            luffing: true,
        },
        None => SailState {
            luffing: false,
            ..state
        },
    }
}

/// Updates the boom using the model selected in `config`.
#[must_use]
pub fn trim(
    state: SailState,
    apparent_wind: Vector2D,
    heading: f64,
    sheet: f64,
    config: &PhysicsConfig,
    dt: f64,
) -> SailState {
    let next = match config.sail_model {
        SailModel::Dynamic => {
            SailSpring::from_config(config).step(state, apparent_wind, heading, sheet, dt)
        }
        SailModel::Instantaneous => {
            let natural = natural_sail_angle(apparent_wind, heading);
            let clamped = clamp_to_sheet(natural, sheet);
            SailState {
                world_angle: normalize_angle(heading + clamped.unwrap_or(natural)),
                angular_velocity: 0.0,
                luffing: clamped.is_some(),
            }
        }
    };
    if next.luffing != state.luffing {
        debug!(
            "sail {} at sheet {sheet:.2}",
            if next.luffing { "luffing" } else { "drawing" }
        );
    }
    next
}
