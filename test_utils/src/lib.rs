//! Utility helpers for tests.

pub mod app;
pub mod boats;

use sailsim::sail::{deviation_from_stern, sheet_limit};
use sailsim::Boat;

/// Lateral slip tolerated by [`assert_on_heading_axis`], m/s.
pub const SLIP_TOLERANCE: f64 = 1e-9;

/// Assert that the boat's velocity is parallel to its heading.
///
/// # Panics
/// Panics with the offending sideways component if the boat is slipping.
pub fn assert_on_heading_axis(boat: &Boat) {
    let slip = boat.velocity.x * boat.heading.cos() - boat.velocity.y * boat.heading.sin();
    assert!(
        slip.abs() < SLIP_TOLERANCE,
        "boat on heading {} slips sideways at {slip} m/s",
        boat.heading
    );
}

/// Assert that the boom lies inside the arc the sheet allows.
///
/// # Panics
/// Panics if the boom has swung further from the stern than the sheet permits.
pub fn assert_within_sheet(boat: &Boat) {
    let deviation = deviation_from_stern(boat.sail_angle());
    let limit = sheet_limit(boat.sheet);
    assert!(
        deviation <= limit + 1e-9,
        "boom {deviation} rad off the stern exceeds sheet limit {limit} rad"
    );
}
