//! Numeric conversion helpers.
//!
//! The physics core works in `f64`; Bevy transforms are `f32`. These helpers
//! guard the narrowing with debug assertions while keeping call-sites terse.

/// Convert a finite `f64` into `f32`, asserting that it fits the target type.
#[expect(
    clippy::cast_possible_truncation,
    reason = "Callers only pass finite simulation state, which fits within f32 bounds."
)]
#[must_use]
pub fn expect_f32(value: f64) -> f32 {
    debug_assert!(value.is_finite(), "expected finite f64 for f32 conversion");
    debug_assert!(
        value <= f64::from(f32::MAX),
        "f64 value {value} exceeds f32::MAX"
    );
    debug_assert!(
        value >= f64::from(f32::MIN),
        "f64 value {value} is below f32::MIN"
    );
    value as f32
}

/// Number of equal sub-steps needed so that none exceeds `max_substep`.
///
/// Returns `0` when `dt` is not a positive finite duration, and `1` when
/// `max_substep` is not a usable bound.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "The ratio is positive and clamped to the u32 domain before casting."
)]
#[must_use]
pub fn substep_count(dt: f64, max_substep: f64) -> u32 {
    if !dt.is_finite() || dt <= 0.0 {
        return 0;
    }
    if !max_substep.is_finite() || max_substep <= 0.0 {
        return 1;
    }
    let count = (dt / max_substep).ceil().clamp(1.0, f64::from(u32::MAX));
    count as u32
}
