//! Waypoints and velocity made good.

use std::f64::consts::TAU;

use bevy::prelude::Resource;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::config::NavigationConfig;
use crate::constants::VMG_MIN_DISTANCE;
use crate::{Boat, Vector2D};

/// A mark to sail toward.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// m
    pub position: Vector2D,
    /// Inactive waypoints are ignored by every metric.
    pub active: bool,
}

impl Waypoint {
    /// An active waypoint at `(x, y)`.
    #[must_use]
    pub const fn at(x: f64, y: f64) -> Self {
        Self {
            position: Vector2D::new(x, y),
            active: true,
        }
    }

    /// Vector from `boat` to the waypoint.
    #[must_use]
    pub fn offset_from(&self, boat: &Boat) -> Vector2D {
        self.position - boat.position
    }

    /// Straight-line distance from `boat`, m.
    #[must_use]
    pub fn distance_from(&self, boat: &Boat) -> f64 {
        self.offset_from(boat).magnitude()
    }

    /// Compass bearing from `boat` to the waypoint, radians.
    #[must_use]
    pub fn bearing_from(&self, boat: &Boat) -> f64 {
        self.offset_from(boat).compass_angle()
    }
}

/// Component of the boat's velocity toward `waypoint`, m/s.
///
/// Positive when closing, negative when opening. Zero for an inactive
/// waypoint or one the boat is practically on top of.
///
/// # Examples
///
/// ```
/// use sailsim::{vmg, Boat, Vector2D, Waypoint};
/// let mut boat = Boat::new();
/// boat.velocity = Vector2D::new(0.0, 5.0);
/// assert!((vmg(&boat, &Waypoint::at(0.0, 100.0)) - 5.0).abs() < 1e-12);
/// assert!((vmg(&boat, &Waypoint::at(0.0, -100.0)) + 5.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn vmg(boat: &Boat, waypoint: &Waypoint) -> f64 {
    if !waypoint.active {
        return 0.0;
    }
    let offset = waypoint.offset_from(boat);
    let distance = offset.magnitude();
    if distance < VMG_MIN_DISTANCE {
        return 0.0;
    }
    boat.velocity.dot(offset) / distance
}

/// Places a fresh waypoint whenever the boat reaches the current one.
///
/// Placement draws from a seeded generator so runs are reproducible.
#[derive(Resource, Debug)]
pub struct WaypointSpawner {
    rng: StdRng,
    arrival_radius: f64,
    min_distance: f64,
    max_distance: f64,
}

impl WaypointSpawner {
    /// Builds a spawner from `config`.
    #[must_use]
    pub fn new(config: &NavigationConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(config.seed),
            arrival_radius: config.arrival_radius,
            min_distance: config.min_distance,
            max_distance: config.max_distance.max(config.min_distance),
        }
    }

    /// Whether `boat` is inside the arrival radius of an active `waypoint`.
    #[must_use]
    pub fn has_arrived(&self, boat: &Boat, waypoint: &Waypoint) -> bool {
        waypoint.active && waypoint.distance_from(boat) < self.arrival_radius
    }

    /// A new active waypoint at a random bearing and distance from `origin`.
    pub fn place_around(&mut self, origin: Vector2D) -> Waypoint {
        let bearing = self.rng.gen_range(0.0..TAU);
        let distance = self.rng.gen_range(self.min_distance..=self.max_distance);
        let position = origin + Vector2D::from_compass(bearing, distance);
        Waypoint {
            position,
            active: true,
        }
    }

    /// Replaces `waypoint` if `boat` has reached it. Returns whether it did.
    pub fn refresh(&mut self, boat: &Boat, waypoint: &mut Waypoint) -> bool {
        if !self.has_arrived(boat, waypoint) {
            return false;
        }
        *waypoint = self.place_around(boat.position);
        debug!(
            "waypoint reached; next at ({:.1}, {:.1})",
            waypoint.position.x, waypoint.position.y
        );
        true
    }
}

impl Default for WaypointSpawner {
    fn default() -> Self {
        Self::new(&NavigationConfig::default())
    }
}
