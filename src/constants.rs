//! Default calibration and guard constants.
//!
//! The calibration values seed [`PhysicsConfig::default`] and friends; they can
//! be overridden at runtime through configuration. The guard thresholds are
//! fixed numerical floors and are not configurable.
//!
//! [`PhysicsConfig::default`]: crate::config::PhysicsConfig

use std::f64::consts::FRAC_PI_4;

/// Density of water in kg/m³.
pub const WATER_DENSITY: f64 = 1000.0;
/// Hull drag coefficient.
pub const DRAG_COEFFICIENT: f64 = 0.01;
/// Hull cross-sectional area in m².
pub const HULL_AREA: f64 = 2.0;
/// Sail area in m².
pub const SAIL_AREA: f64 = 8.0;
/// How much of the aerodynamic force reaches the boat.
pub const SAIL_EFFICIENCY: f64 = 3.0;
/// Boat mass in kg.
pub const BOAT_MASS: f64 = 50.0;
/// Turn rate in rad/s per unit rudder at 1 m/s.
pub const RUDDER_EFFECTIVENESS: f64 = 0.5;
/// Rotational stiffness of the boom in the dynamic sail model.
pub const SAIL_SPRING: f64 = 10.0;
/// Rotational damping of the boom in the dynamic sail model.
pub const SAIL_DAMPING: f64 = 5.0;
/// Height of the sail's centre of effort above the waterline in metres.
pub const SAIL_CENTER_HEIGHT: f64 = 3.0;
/// Hull stability: heeling moment per radian of heel.
pub const RIGHTING_CONSTANT: f64 = 10000.0;
/// Longest integration sub-step in seconds.
pub const MAX_SUBSTEP: f64 = 1.0 / 30.0;

/// Apparent wind below this speed (m/s) produces no sail force.
pub const DEAD_AIR_THRESHOLD: f64 = 0.1;
/// Boat speed below this (m/s) produces no drag.
pub const DRAG_SPEED_FLOOR: f64 = 0.01;
/// Waypoints closer than this (m) report zero VMG.
pub const VMG_MIN_DISTANCE: f64 = 0.1;
/// Largest heel angle the estimator reports.
pub const MAX_HEEL: f64 = FRAC_PI_4;

/// Sheet travel per second while the trim controls are held.
pub const SHEET_RATE: f64 = 0.5;
/// Initial sheet setting.
pub const INITIAL_SHEET: f64 = 0.5;
/// Initial heading in degrees.
pub const INITIAL_HEADING_DEG: f64 = 45.0;
/// Hull length in metres.
pub const BOAT_LENGTH: f64 = 5.0;

/// Mean true wind speed in m/s.
pub const WIND_SPEED: f64 = 15.0;
/// Mean wind direction (blowing from) in degrees.
pub const WIND_BASE_DIRECTION_DEG: f64 = 0.0;
/// Amplitude of the wind direction swing in degrees.
pub const WIND_SWING_DEG: f64 = 45.0;
/// Period of the wind direction swing in seconds.
pub const WIND_PERIOD: f64 = 120.0;

/// Distance at which a waypoint counts as reached, in metres.
pub const ARRIVAL_RADIUS: f64 = 10.0;
/// Closest distance a new waypoint is placed from the boat.
pub const WAYPOINT_MIN_DISTANCE: f64 = 80.0;
/// Furthest distance a new waypoint is placed from the boat.
pub const WAYPOINT_MAX_DISTANCE: f64 = 150.0;

/// Interval between wake samples in seconds.
pub const WAKE_INTERVAL: f64 = 0.1;
/// Number of wake samples retained.
pub const WAKE_LENGTH: usize = 50;
