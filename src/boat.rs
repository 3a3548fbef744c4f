//! The simulated vessel.

use bevy::prelude::{Component, Quat, Transform};
use serde::{Deserialize, Serialize};

use crate::constants::{BOAT_LENGTH, INITIAL_HEADING_DEG, INITIAL_SHEET};
use crate::numeric::expect_f32;
use crate::sail::SailState;
use crate::{normalize_angle, Vector2D};

/// Kinematic state of the boat plus its control settings.
///
/// `heading` is a compass angle in `(-π, π]`. `heel` is derived each step and
/// is never integrated. The boom lives in [`SailState`] so the dynamic sail
/// model keeps its state with the boat that carries it.
#[derive(Component, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Boat {
    /// m
    pub position: Vector2D,
    /// m/s
    pub velocity: Vector2D,
    /// Compass bearing of the bow, radians.
    pub heading: f64,
    /// Roll angle for display, radians.
    pub heel: f64,
    /// Sheet setting in `[0, 1]`: 0 is sheeted in, 1 is fully eased.
    pub sheet: f64,
    /// Rudder deflection in `[-1, 1]`; positive turns clockwise.
    pub rudder: f64,
    /// Hull length, m.
    pub length: f64,
    /// Boom state.
    pub sail: SailState,
}

impl Default for Boat {
    fn default() -> Self {
        Self::new()
    }
}

impl Boat {
    /// A boat at rest at the origin on the initial heading.
    #[must_use]
    pub fn new() -> Self {
        Self::at_rest(Vector2D::ZERO, INITIAL_HEADING_DEG.to_radians())
    }

    /// A boat at rest at `position` on `heading`, boom trailing astern.
    #[must_use]
    pub fn at_rest(position: Vector2D, heading: f64) -> Self {
        let bow = normalize_angle(heading);
        Self {
            position,
            velocity: Vector2D::ZERO,
            heading: bow,
            heel: 0.0,
            sheet: INITIAL_SHEET,
            rudder: 0.0,
            length: BOAT_LENGTH,
            sail: SailState::trailing(bow),
        }
    }

    /// Same boat moving at `speed` along its heading.
    #[must_use]
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.velocity = self.heading_vector() * speed;
        self
    }

    /// Speed over ground, m/s.
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    /// Unit vector along the bow.
    #[must_use]
    pub fn heading_vector(&self) -> Vector2D {
        Vector2D::unit_compass(self.heading)
    }

    /// Boom angle relative to the bow, radians.
    #[must_use]
    pub fn sail_angle(&self) -> f64 {
        self.sail.relative_angle(self.heading)
    }

    /// Whether every numeric field is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.velocity.is_finite()
            && [
                self.heading,
                self.heel,
                self.sheet,
                self.rudder,
                self.sail.world_angle,
                self.sail.angular_velocity,
            ]
            .iter()
            .all(|v| v.is_finite())
    }

    /// World transform for the hull: translate to the boat's position, yaw to
    /// its heading, then roll by its heel.
    ///
    /// The simulation plane maps onto Bevy's ground plane with north along
    /// `-Z`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sailsim::{Boat, Vector2D};
    /// let pose = Boat::at_rest(Vector2D::new(3.0, 4.0), 0.0).pose();
    /// assert_eq!(pose.translation.x, 3.0);
    /// assert_eq!(pose.translation.z, -4.0);
    /// ```
    #[must_use]
    pub fn pose(&self) -> Transform {
        let yaw = Quat::from_rotation_y(-expect_f32(self.heading));
        let roll = Quat::from_rotation_z(-expect_f32(self.heel));
        Transform::from_xyz(
            expect_f32(self.position.x),
            0.0,
            -expect_f32(self.position.y),
        )
        .with_rotation(yaw * roll)
    }
}
