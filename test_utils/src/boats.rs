//! Builders for boats and wind used across scenario tests.

use sailsim::{Boat, Vector2D, Wind};

/// Builder for [`Boat`] test fixtures.
///
/// # Examples
/// ```
/// use test_utils::boats::BoatBuilder;
/// let boat = BoatBuilder::heading_deg(90.0).speed(2.0).build();
/// assert!((boat.velocity.x - 2.0).abs() < 1e-12);
/// ```
#[derive(Clone, Debug)]
pub struct BoatBuilder {
    boat: Boat,
}

impl BoatBuilder {
    /// A boat at rest at the origin on `heading` degrees.
    #[must_use]
    pub fn heading_deg(heading: f64) -> Self {
        Self {
            boat: Boat::at_rest(Vector2D::ZERO, heading.to_radians()),
        }
    }

    /// Place the boat at `(x, y)`.
    #[must_use]
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.boat.position = Vector2D::new(x, y);
        self
    }

    /// Give the boat `speed` m/s along its heading.
    #[must_use]
    pub fn speed(mut self, speed: f64) -> Self {
        self.boat = self.boat.with_speed(speed);
        self
    }

    /// Set the sheet.
    #[must_use]
    pub fn sheet(mut self, sheet: f64) -> Self {
        self.boat.sheet = sheet;
        self
    }

    /// Hold the rudder at `rudder`.
    #[must_use]
    pub fn rudder(mut self, rudder: f64) -> Self {
        self.boat.rudder = rudder;
        self
    }

    /// Finish the boat.
    #[must_use]
    pub fn build(self) -> Boat {
        self.boat
    }
}

/// Wind blowing from `direction` degrees at `speed` m/s.
///
/// # Examples
/// ```
/// use test_utils::boats::wind_from_deg;
/// let wind = wind_from_deg(90.0, 10.0);
/// assert!((wind.direction - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
#[must_use]
pub fn wind_from_deg(direction: f64, speed: f64) -> Wind {
    Wind::new(speed, direction.to_radians())
}
