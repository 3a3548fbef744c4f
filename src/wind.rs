//! True and apparent wind.
//!
//! [`Wind`] follows the meteorological convention: `direction` is the compass
//! bearing the wind blows *from*. The vector form points the other way, along
//! the motion of the air.

use std::f64::consts::TAU;

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::config::WindConfig;
use crate::Vector2D;

/// True wind over the water.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    /// m/s, non-negative.
    pub speed: f64,
    /// Compass bearing the wind blows from, radians.
    pub direction: f64,
}

impl Wind {
    /// Creates a wind blowing from `direction` at `speed`.
    #[must_use]
    pub const fn new(speed: f64, direction: f64) -> Self {
        Self { speed, direction }
    }

    /// Velocity of the air as a vector; see [`wind_vector`].
    #[must_use]
    pub fn vector(&self) -> Vector2D {
        wind_vector(self)
    }
}

/// Converts `(speed, direction-from)` into the air's velocity vector.
///
/// # Examples
///
/// ```
/// use sailsim::{wind_vector, Wind};
/// // A northerly pushes air south.
/// let v = wind_vector(&Wind::new(10.0, 0.0));
/// assert!(v.x.abs() < 1e-12);
/// assert!((v.y + 10.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn wind_vector(wind: &Wind) -> Vector2D {
    -Vector2D::from_compass(wind.direction, wind.speed)
}

/// Wind felt aboard a boat moving with `boat_velocity`: true wind minus the
/// boat's own motion.
#[must_use]
pub fn apparent_wind(true_wind: &Wind, boat_velocity: Vector2D) -> Vector2D {
    wind_vector(true_wind) - boat_velocity
}

/// Swings the wind direction sinusoidally around a base bearing.
///
/// The clock lives here rather than in the caller so the oscillation is a pure
/// function of accumulated time.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct WindOscillator {
    config: WindConfig,
    elapsed: f64,
}

impl WindOscillator {
    /// Starts an oscillator at `t = 0`.
    #[must_use]
    pub const fn new(config: WindConfig) -> Self {
        Self {
            config,
            elapsed: 0.0,
        }
    }

    /// Seconds accumulated so far.
    #[must_use]
    pub const fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Wind at the current time.
    #[must_use]
    pub fn current(&self) -> Wind {
        let phase = self.elapsed / self.config.period * TAU;
        let offset = phase.sin() * self.config.swing_deg.to_radians();
        Wind::new(
            self.config.speed,
            self.config.base_direction_deg.to_radians() + offset,
        )
    }

    /// Advances the clock by `dt` seconds and returns the new wind.
    pub fn advance(&mut self, dt: f64) -> Wind {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        self.current()
    }
}

impl Default for WindOscillator {
    fn default() -> Self {
        Self::new(WindConfig::default())
    }
}
