//! Planar vector type shared by the physics pipeline.
//!
//! [`Vector2D`] is a plain value type: every operation returns a new vector.
//! Lengths and dot products are delegated to `glam` so the arithmetic matches
//! what the rendering side uses.
use std::ops::{Add, Mul, Neg, Sub};

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Magnitudes at or below this are treated as the zero vector when normalising.
pub const NORMALIZE_EPSILON: f64 = 1e-9;

/// A vector in the horizontal plane.
///
/// Units depend on context: metres for positions, metres per second for
/// velocities and wind, newtons for forces. The `y` axis points north and
/// compass angles are measured clockwise from it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2D {
    /// East component.
    pub x: f64,
    /// North component.
    pub y: f64,
}

impl Vector2D {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a vector from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a vector of length `magnitude` pointing along the compass
    /// `angle` (radians clockwise from north).
    ///
    /// # Examples
    ///
    /// ```
    /// use sailsim::Vector2D;
    /// let east = Vector2D::from_compass(std::f64::consts::FRAC_PI_2, 2.0);
    /// assert!((east.x - 2.0).abs() < 1e-12);
    /// assert!(east.y.abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn from_compass(angle: f64, magnitude: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(magnitude * sin, magnitude * cos)
    }

    /// Unit vector along the compass `angle`.
    #[must_use]
    pub fn unit_compass(angle: f64) -> Self {
        Self::from_compass(angle, 1.0)
    }

    /// Euclidean length.
    #[must_use]
    pub fn magnitude(self) -> f64 {
        DVec2::from(self).length()
    }

    /// Unit vector in the same direction, or [`Vector2D::ZERO`] when the
    /// magnitude is too small (or not finite) to divide by.
    ///
    /// # Examples
    ///
    /// ```
    /// use sailsim::Vector2D;
    /// assert_eq!(Vector2D::ZERO.normalized(), Vector2D::ZERO);
    /// let n = Vector2D::new(3.0, 4.0).normalized();
    /// assert!((n.x - 0.6).abs() < 1e-12);
    /// assert!((n.y - 0.8).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn normalized(self) -> Self {
        let mag = self.magnitude();
        if !mag.is_finite() || mag <= NORMALIZE_EPSILON {
            return Self::ZERO;
        }
        self * (1.0 / mag)
    }

    /// Dot product.
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        DVec2::from(self).dot(DVec2::from(other))
    }

    /// Compass angle of the vector: `atan2(x, y)`, clockwise from north.
    ///
    /// The zero vector reports an angle of `0`.
    #[must_use]
    pub fn compass_angle(self) -> f64 {
        self.x.atan2(self.y)
    }

    /// Component of `self` along the compass `angle`.
    #[must_use]
    pub fn along(self, angle: f64) -> f64 {
        self.dot(Self::unit_compass(angle))
    }

    /// Whether both components are finite.
    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<Vector2D> for DVec2 {
    fn from(v: Vector2D) -> Self {
        Self::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[rstest]
    #[case::north(0.0, (0.0, 1.0))]
    #[case::east(FRAC_PI_2, (1.0, 0.0))]
    #[case::south(PI, (0.0, -1.0))]
    #[case::west(-FRAC_PI_2, (-1.0, 0.0))]
    fn compass_directions(#[case] angle: f64, #[case] expected: (f64, f64)) {
        let v = Vector2D::unit_compass(angle);
        assert_relative_eq!(v.x, expected.0, epsilon = 1e-12);
        assert_relative_eq!(v.y, expected.1, epsilon = 1e-12);
        if expected != (0.0, -1.0) {
            assert_relative_eq!(v.compass_angle(), angle, epsilon = 1e-12);
        }
    }

    #[rstest]
    #[case::zero(Vector2D::ZERO)]
    #[case::tiny(Vector2D::new(1e-12, -1e-12))]
    #[case::nan(Vector2D::new(f64::NAN, 1.0))]
    #[case::infinite(Vector2D::new(f64::INFINITY, 0.0))]
    fn degenerate_vectors_normalise_to_zero(#[case] v: Vector2D) {
        assert_eq!(v.normalized(), Vector2D::ZERO);
    }

    #[test]
    fn arithmetic_returns_new_values() {
        let a = Vector2D::new(1.0, 2.0);
        let b = Vector2D::new(-3.0, 0.5);
        assert_eq!(a + b, Vector2D::new(-2.0, 2.5));
        assert_eq!(a - b, Vector2D::new(4.0, 1.5));
        assert_eq!(a * 2.0, Vector2D::new(2.0, 4.0));
        assert_eq!(-a, Vector2D::new(-1.0, -2.0));
        assert_eq!(a, Vector2D::new(1.0, 2.0));
    }

    #[test]
    fn along_projects_onto_compass_axis() {
        let v = Vector2D::new(3.0, 4.0);
        assert_relative_eq!(v.along(0.0), 4.0, epsilon = 1e-12);
        assert_relative_eq!(v.along(FRAC_PI_2), 3.0, epsilon = 1e-12);
    }
}
