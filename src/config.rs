//! Runtime configuration.
//!
//! Every tunable of the physics model lives in [`PhysicsConfig`]; the wind
//! oscillator and waypoint placement have their own sections. [`SimConfig`]
//! groups them and loads them in layers: compiled defaults, then an optional
//! TOML file, then `SAILSIM_`-prefixed environment variables. Nested keys use
//! a double underscore, e.g. `SAILSIM_PHYSICS__BOAT_MASS=80`.

use std::path::{Path, PathBuf};

use bevy::prelude::Resource;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    ARRIVAL_RADIUS, BOAT_MASS, DRAG_COEFFICIENT, HULL_AREA, MAX_SUBSTEP, RIGHTING_CONSTANT,
    RUDDER_EFFECTIVENESS, SAIL_AREA, SAIL_CENTER_HEIGHT, SAIL_DAMPING, SAIL_EFFICIENCY,
    SAIL_SPRING, WATER_DENSITY, WAYPOINT_MAX_DISTANCE, WAYPOINT_MIN_DISTANCE,
    WIND_BASE_DIRECTION_DEG, WIND_PERIOD, WIND_SPEED, WIND_SWING_DEG,
};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "SAILSIM_";

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested configuration file does not exist.
    #[error("configuration file {0} does not exist")]
    MissingFile(PathBuf),
    /// A provider could not be read or a value had the wrong type.
    #[error("failed to read configuration: {0}")]
    Extract(#[source] Box<figment::Error>),
    /// A value that must be strictly positive was not.
    #[error("{field} must be positive and finite, got {value}")]
    NotPositive {
        /// Dotted key of the offending value.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A value that must not be negative was.
    #[error("{field} must be non-negative and finite, got {value}")]
    Negative {
        /// Dotted key of the offending value.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A value that must be finite was not.
    #[error("{field} must be finite, got {value}")]
    NotFinite {
        /// Dotted key of the offending value.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The waypoint distance range is empty.
    #[error("navigation.min_distance ({min}) exceeds navigation.max_distance ({max})")]
    InvertedRange {
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
    },
}

/// Which boom model drives the sail angle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SailModel {
    /// Spring-damper boom with inertia and overshoot.
    #[default]
    Dynamic,
    /// Boom snaps to its constrained downwind angle every tick.
    Instantaneous,
}

/// Calibration of the force model and integrator.
#[derive(Resource, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// kg/m³
    pub water_density: f64,
    /// Dimensionless hull drag coefficient.
    pub drag_coefficient: f64,
    /// m²
    pub hull_area: f64,
    /// m²
    pub sail_area: f64,
    /// Dimensionless scale on the sail force.
    pub sail_efficiency: f64,
    /// kg
    pub boat_mass: f64,
    /// rad/s per unit rudder per m/s of boat speed.
    pub rudder_effectiveness: f64,
    /// Boom stiffness for [`SailModel::Dynamic`].
    pub sail_spring: f64,
    /// Boom damping for [`SailModel::Dynamic`].
    pub sail_damping: f64,
    /// Height of the sail's centre of effort, m.
    pub sail_center_height: f64,
    /// Heeling moment per radian of heel.
    pub righting_constant: f64,
    /// Boom model.
    pub sail_model: SailModel,
    /// Longest integration sub-step, s.
    pub max_substep: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            water_density: WATER_DENSITY,
            drag_coefficient: DRAG_COEFFICIENT,
            hull_area: HULL_AREA,
            sail_area: SAIL_AREA,
            sail_efficiency: SAIL_EFFICIENCY,
            boat_mass: BOAT_MASS,
            rudder_effectiveness: RUDDER_EFFECTIVENESS,
            sail_spring: SAIL_SPRING,
            sail_damping: SAIL_DAMPING,
            sail_center_height: SAIL_CENTER_HEIGHT,
            righting_constant: RIGHTING_CONSTANT,
            sail_model: SailModel::default(),
            max_substep: MAX_SUBSTEP,
        }
    }
}

impl PhysicsConfig {
    /// Same calibration with a different boom model.
    #[must_use]
    pub fn with_sail_model(mut self, sail_model: SailModel) -> Self {
        self.sail_model = sail_model;
        self
    }

    /// `0.5 · efficiency · area`, the factor applied to `speed²` for sail force.
    #[must_use]
    pub fn sail_force_factor(&self) -> f64 {
        0.5 * self.sail_efficiency * self.sail_area
    }

    /// `0.5 · ρ · Cd · A`, the factor applied to `speed²` for hull drag.
    #[must_use]
    pub fn drag_factor(&self) -> f64 {
        0.5 * self.water_density * self.drag_coefficient * self.hull_area
    }

    /// Checks the calibration for values the integrator cannot use.
    ///
    /// # Errors
    /// Returns the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("physics.boat_mass", self.boat_mass)?;
        positive("physics.max_substep", self.max_substep)?;
        positive("physics.righting_constant", self.righting_constant)?;
        for (field, value) in [
            ("physics.water_density", self.water_density),
            ("physics.drag_coefficient", self.drag_coefficient),
            ("physics.hull_area", self.hull_area),
            ("physics.sail_area", self.sail_area),
            ("physics.sail_efficiency", self.sail_efficiency),
            ("physics.rudder_effectiveness", self.rudder_effectiveness),
            ("physics.sail_spring", self.sail_spring),
            ("physics.sail_damping", self.sail_damping),
            ("physics.sail_center_height", self.sail_center_height),
        ] {
            non_negative(field, value)?;
        }
        Ok(())
    }
}

/// Sinusoidal wind driver settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindConfig {
    /// True wind speed, m/s.
    pub speed: f64,
    /// Mean direction the wind blows from, degrees.
    pub base_direction_deg: f64,
    /// Peak deviation from the mean direction, degrees.
    pub swing_deg: f64,
    /// Duration of one full swing cycle, s.
    pub period: f64,
}

impl Default for WindConfig {
    fn default() -> Self {
        Self {
            speed: WIND_SPEED,
            base_direction_deg: WIND_BASE_DIRECTION_DEG,
            swing_deg: WIND_SWING_DEG,
            period: WIND_PERIOD,
        }
    }
}

impl WindConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        non_negative("wind.speed", self.speed)?;
        positive("wind.period", self.period)?;
        if !self.base_direction_deg.is_finite() {
            return Err(ConfigError::NotFinite {
                field: "wind.base_direction_deg",
                value: self.base_direction_deg,
            });
        }
        non_negative("wind.swing_deg", self.swing_deg)
    }
}

/// Waypoint placement settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Distance at which the current waypoint counts as reached, m.
    pub arrival_radius: f64,
    /// Closest placement of a new waypoint, m.
    pub min_distance: f64,
    /// Furthest placement of a new waypoint, m.
    pub max_distance: f64,
    /// Seed for waypoint placement.
    pub seed: u64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            arrival_radius: ARRIVAL_RADIUS,
            min_distance: WAYPOINT_MIN_DISTANCE,
            max_distance: WAYPOINT_MAX_DISTANCE,
            seed: 0,
        }
    }
}

impl NavigationConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        non_negative("navigation.arrival_radius", self.arrival_radius)?;
        non_negative("navigation.min_distance", self.min_distance)?;
        non_negative("navigation.max_distance", self.max_distance)?;
        if self.min_distance > self.max_distance {
            return Err(ConfigError::InvertedRange {
                min: self.min_distance,
                max: self.max_distance,
            });
        }
        Ok(())
    }
}

/// Complete simulation configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Force model and integrator calibration.
    pub physics: PhysicsConfig,
    /// Wind driver.
    pub wind: WindConfig,
    /// Waypoint placement.
    pub navigation: NavigationConfig,
}

impl SimConfig {
    /// Loads configuration from defaults, an optional TOML file, and the
    /// environment, then validates it.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingFile`] when `path` is given but absent,
    /// [`ConfigError::Extract`] when a provider fails, or a validation error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(file) = path {
            if !file.is_file() {
                return Err(ConfigError::MissingFile(file.to_path_buf()));
            }
            figment = figment.merge(Toml::file(file));
        }
        let config: Self = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|e| ConfigError::Extract(Box::new(e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates every section.
    ///
    /// # Errors
    /// Returns the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.physics.validate()?;
        self.wind.validate()?;
        self.navigation.validate()
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}
