//! Read-outs for the instrument panel.
//!
//! Headings and bearings use the display frame, which is rotated half a turn
//! from the simulation frame so they agree with the on-screen chart. Wind
//! directions are reported as the bearing the wind blows from.

use std::f64::consts::PI;
use std::fmt;

use bevy::prelude::Resource;
use serde::Serialize;

use crate::angle::to_compass_degrees;
use crate::navigation::{vmg, Waypoint};
use crate::wind::{apparent_wind, Wind};
use crate::{normalize_angle, Boat};

/// Waypoint read-outs; present only while a waypoint is active.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct WaypointTelemetry {
    /// Display bearing to the waypoint, degrees in `(-180, 180]`.
    pub bearing_deg: f64,
    /// m
    pub distance: f64,
    /// m/s
    pub vmg: f64,
}

/// Snapshot of everything the instrument panel shows.
#[derive(Resource, Clone, Debug, Default, PartialEq, Serialize)]
pub struct Telemetry {
    /// m/s
    pub speed: f64,
    /// Display heading, degrees in `(-180, 180]`.
    pub heading_deg: f64,
    /// Degrees.
    pub heel_deg: f64,
    /// Sheet setting, 0–100.
    pub sheet_percent: f64,
    /// Boom angle relative to the bow, degrees.
    pub sail_angle_deg: f64,
    /// m/s
    pub true_wind_speed: f64,
    /// Degrees in `[0, 360)`.
    pub true_wind_from_deg: f64,
    /// m/s
    pub apparent_wind_speed: f64,
    /// Degrees in `(-180, 180]`.
    pub apparent_wind_from_deg: f64,
    /// Waypoint read-outs.
    pub waypoint: Option<WaypointTelemetry>,
}

impl Telemetry {
    /// Reads the instruments for `boat` sailing in `wind` toward `waypoint`.
    #[must_use]
    pub fn capture(boat: &Boat, wind: &Wind, waypoint: &Waypoint) -> Self {
        let aw = apparent_wind(wind, boat.velocity);
        let waypoint = waypoint.active.then(|| WaypointTelemetry {
            bearing_deg: display_degrees(waypoint.bearing_from(boat)),
            distance: waypoint.distance_from(boat),
            vmg: vmg(boat, waypoint),
        });
        Self {
            speed: boat.speed(),
            heading_deg: display_degrees(boat.heading),
            heel_deg: boat.heel.to_degrees(),
            sheet_percent: boat.sheet * 100.0,
            sail_angle_deg: boat.sail_angle().to_degrees(),
            true_wind_speed: wind.speed,
            true_wind_from_deg: to_compass_degrees(wind.direction),
            apparent_wind_speed: aw.magnitude(),
            apparent_wind_from_deg: display_degrees(aw.compass_angle()),
            waypoint,
        }
    }
}

fn display_degrees(angle: f64) -> f64 {
    normalize_angle(angle + PI).to_degrees()
}

impl fmt::Display for Telemetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "heading {:.1}° speed {:.2} m/s sheet {:.0}% heel {:.1}° \
             wind {:.1} m/s from {:.0}° apparent {:.1} m/s from {:.0}°",
            self.heading_deg,
            self.speed,
            self.sheet_percent,
            self.heel_deg,
            self.true_wind_speed,
            self.true_wind_from_deg,
            self.apparent_wind_speed,
            self.apparent_wind_from_deg,
        )?;
        if let Some(wp) = &self.waypoint {
            write!(
                f,
                " waypoint {:.0}° / {:.0} m vmg {:.2} m/s",
                wp.bearing_deg, wp.distance, wp.vmg
            )?;
        }
        Ok(())
    }
}
