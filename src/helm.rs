//! Helm input boundary.
//!
//! Whatever drives the boat, a keyboard, a script or a test, writes a
//! [`HelmInput`]; [`apply_helm`] folds it into the boat's control settings.

use bevy::prelude::Resource;

use crate::constants::SHEET_RATE;
use crate::Boat;

/// Rudder position requested by the helm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RudderCommand {
    /// Turn anticlockwise.
    Port,
    /// Rudder amidships.
    #[default]
    Centre,
    /// Turn clockwise.
    Starboard,
}

impl RudderCommand {
    /// Rudder deflection in `{-1, 0, 1}`.
    #[must_use]
    pub const fn deflection(self) -> f64 {
        match self {
            Self::Port => -1.0,
            Self::Centre => 0.0,
            Self::Starboard => 1.0,
        }
    }

    /// Nearest command to a signed deflection.
    #[must_use]
    pub fn from_deflection(value: f64) -> Self {
        if value > 0.5 {
            Self::Starboard
        } else if value < -0.5 {
            Self::Port
        } else {
            Self::Centre
        }
    }
}

/// Sheet adjustment requested by the helm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SheetCommand {
    /// Leave the sheet where it is.
    #[default]
    Hold,
    /// Pull the sail in toward the centerline.
    TrimIn,
    /// Let the sail out.
    Ease,
}

/// Controls held this frame.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HelmInput {
    /// Rudder position.
    pub rudder: RudderCommand,
    /// Sheet adjustment.
    pub sheet: SheetCommand,
}

/// Applies `helm` to `boat` for a frame of `dt` seconds.
///
/// The rudder is set directly; the sheet moves at [`SHEET_RATE`] per second
/// and is clamped to `[0, 1]`.
///
/// # Examples
///
/// ```
/// use sailsim::helm::{apply_helm, HelmInput, SheetCommand};
/// use sailsim::Boat;
/// let mut boat = Boat::new();
/// let helm = HelmInput { sheet: SheetCommand::Ease, ..HelmInput::default() };
/// apply_helm(&mut boat, helm, 0.2);
/// assert!((boat.sheet - 0.6).abs() < 1e-12);
/// ```
pub fn apply_helm(boat: &mut Boat, helm: HelmInput, dt: f64) {
    boat.rudder = helm.rudder.deflection();
    if !dt.is_finite() || dt <= 0.0 {
        return;
    }
    let delta = match helm.sheet {
        SheetCommand::Hold => return,
        SheetCommand::TrimIn => -SHEET_RATE * dt,
        SheetCommand::Ease => SHEET_RATE * dt,
    };
    boat.sheet = (boat.sheet + delta).clamp(0.0, 1.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case::trim(SheetCommand::TrimIn, 0.4)]
    #[case::ease(SheetCommand::Ease, 0.6)]
    #[case::hold(SheetCommand::Hold, 0.5)]
    fn sheet_moves_at_fixed_rate(#[case] command: SheetCommand, #[case] expected: f64) {
        let mut boat = Boat::new();
        apply_helm(
            &mut boat,
            HelmInput {
                sheet: command,
                ..HelmInput::default()
            },
            0.2,
        );
        assert_relative_eq!(boat.sheet, expected, epsilon = 1e-12);
    }

    #[rstest]
    #[case::trimmed_in(SheetCommand::TrimIn, 0.0)]
    #[case::eased_out(SheetCommand::Ease, 1.0)]
    fn sheet_stays_in_range(#[case] command: SheetCommand, #[case] limit: f64) {
        let mut boat = Boat::new();
        let helm = HelmInput {
            sheet: command,
            rudder: RudderCommand::Starboard,
        };
        for _ in 0..100 {
            apply_helm(&mut boat, helm, 0.1);
        }
        assert_relative_eq!(boat.sheet, limit);
        assert_relative_eq!(boat.rudder, 1.0);
    }

    #[rstest]
    #[case(-1.0, RudderCommand::Port)]
    #[case(0.2, RudderCommand::Centre)]
    #[case(1.0, RudderCommand::Starboard)]
    fn rudder_commands_round_to_nearest(#[case] value: f64, #[case] expected: RudderCommand) {
        assert_eq!(RudderCommand::from_deflection(value), expected);
    }
}
