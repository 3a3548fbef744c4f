//! Library crate providing the sailing physics core.
//! Re-exports the model types and the Bevy plugin for the binary and tests.
pub mod angle;
pub mod boat;
pub mod config;
pub mod constants;
pub mod forces;
pub mod heel;
pub mod helm;
pub mod integrator;
pub mod logging;
pub mod navigation;
pub mod numeric;
pub mod plugin;
pub mod sail;
pub mod telemetry;
pub mod vector_math;
pub mod wake;
pub mod wind;

// Re-export commonly used items
pub use angle::{normalize_angle, to_compass_degrees};
pub use boat::Boat;
pub use config::{ConfigError, PhysicsConfig, SailModel, SimConfig};
pub use helm::HelmInput;
pub use integrator::{advance, step};
pub use logging::init as init_logging;
pub use navigation::{vmg, Waypoint, WaypointSpawner};
pub use plugin::{SailingPlugin, SailingSet, SimulationError};
pub use sail::{instantaneous_sail_angle, SailSpring, SailState};
pub use telemetry::Telemetry;
pub use vector_math::Vector2D;
pub use wake::WakeTrail;
pub use wind::{apparent_wind, wind_vector, Wind, WindOscillator};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use sailsim::prelude::*;
    //! ```

    pub use crate::advance;
    pub use crate::apparent_wind;
    pub use crate::Boat;
    pub use crate::PhysicsConfig;
    pub use crate::SailingPlugin;
    pub use crate::Vector2D;
    pub use crate::Waypoint;
    pub use crate::Wind;
}
