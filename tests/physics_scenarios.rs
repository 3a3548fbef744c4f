//! Scenario tables for the physics core.

use std::f64::consts::{FRAC_PI_4, PI};

use approx::assert_relative_eq;
use rstest::rstest;
use sailsim::constants::MAX_HEEL;
use sailsim::forces::drag;
use sailsim::heel::heel_angle;
use sailsim::sail::{deviation_from_stern, sheet_limit};
use sailsim::{
    advance, apparent_wind, instantaneous_sail_angle, step, vmg, PhysicsConfig, SailModel,
    Vector2D, Waypoint, Wind,
};
use test_utils::boats::{wind_from_deg, BoatBuilder};
use test_utils::{assert_on_heading_axis, assert_within_sheet};

const DT: f64 = 1.0 / 60.0;

#[rstest]
#[case::dynamic(SailModel::Dynamic)]
#[case::instantaneous(SailModel::Instantaneous)]
fn calm_leaves_resting_boat_in_place(#[case] model: SailModel) {
    let config = PhysicsConfig::default().with_sail_model(model);
    let calm = wind_from_deg(30.0, 0.0);
    let start = BoatBuilder::heading_deg(45.0).at(12.0, -7.0).build();
    let end = (0..1000).fold(start.clone(), |b, _| step(&b, &calm, &config, DT));
    assert_eq!(end.position, start.position);
    assert_eq!(end.velocity, start.velocity);
}

#[rstest]
#[case::still(0.0, 0.0)]
#[case::below_floor(0.007, 0.007)]
fn drag_floor(#[case] vx: f64, #[case] vy: f64) {
    assert_eq!(drag(Vector2D::new(vx, vy), &PhysicsConfig::default()), Vector2D::ZERO);
}

#[test]
fn running_at_wind_speed_feels_no_wind() {
    let aw = apparent_wind(&Wind::new(10.0, 0.0), Vector2D::new(0.0, -10.0));
    assert_relative_eq!(aw.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(aw.y, 0.0, epsilon = 1e-12);
}

#[rstest]
#[case::closing(100.0, 5.0)]
#[case::opening(-100.0, -5.0)]
fn vmg_sign(#[case] waypoint_y: f64, #[case] expected: f64) {
    let mut boat = BoatBuilder::heading_deg(0.0).build();
    boat.velocity = Vector2D::new(0.0, 5.0);
    assert_relative_eq!(vmg(&boat, &Waypoint::at(0.0, waypoint_y)), expected, epsilon = 1e-12);
}

#[rstest]
fn trim_never_leaves_sheet_arc(
    #[values(0.0, 0.1, 0.33, 0.5, 0.9, 1.0)] sheet: f64,
    #[values(-PI, -2.0, -0.4, 0.0, 1.1, 2.9)] heading: f64,
    #[values(0.3, 5.0, 25.0)] speed: f64,
    #[values(-2.5, -1.0, 0.0, 0.8, 2.2, PI)] bearing: f64,
) {
    let angle = instantaneous_sail_angle(Vector2D::from_compass(bearing, speed), heading, sheet);
    assert!(deviation_from_stern(angle) <= sheet_limit(sheet) + 1e-9);
}

#[rstest]
fn heel_is_bounded_under_any_wind(
    #[values(1.0, 1.0e2, 1.0e4, 1.0e8)] speed: f64,
    #[values(-3.0, -FRAC_PI_4, 0.5, 2.0)] sail_angle: f64,
) {
    let aw = Vector2D::from_compass(1.3, speed);
    let heel = heel_angle(aw, 0.2, sail_angle, &PhysicsConfig::default());
    assert!(heel.abs() <= MAX_HEEL);
}

#[rstest]
#[case::dynamic(SailModel::Dynamic)]
#[case::instantaneous(SailModel::Instantaneous)]
fn long_passage_keeps_invariants(#[case] model: SailModel) {
    let config = PhysicsConfig::default().with_sail_model(model);
    let mut boat = BoatBuilder::heading_deg(45.0).sheet(0.4).build();
    for frame in 0..3000_u32 {
        let wind = wind_from_deg(20.0 * (f64::from(frame) / 300.0).sin(), 15.0);
        boat.rudder = match (frame / 200) % 3 {
            0 => 0.0,
            1 => 1.0,
            _ => -1.0,
        };
        // Frame times jitter between 8 ms and 50 ms.
        let dt = 0.008 + 0.042 * f64::from(frame % 7) / 6.0;
        boat = advance(&boat, &wind, &config, dt);
        assert!(boat.is_finite(), "non-finite state at frame {frame}");
        assert_on_heading_axis(&boat);
        assert_within_sheet(&boat);
        assert!(boat.heading > -PI && boat.heading <= PI);
        assert!(boat.heel.abs() <= MAX_HEEL);
    }
}

#[test]
fn nan_wind_poisons_the_step() {
    let boat = BoatBuilder::heading_deg(90.0).speed(2.0).build();
    let next = step(&boat, &Wind::new(f64::NAN, 0.0), &PhysicsConfig::default(), DT);
    assert!(!next.is_finite());
}
