//! Shared scaling primitives for the profile compiler.
//!
//! These pure functions are the building blocks every resolved balance
//! field goes through. The compiler and the offline simulators both use
//! them so that rounding and clamping behave identically everywhere.

/// Margin buildings must keep over per-wave enemy attack growth.
///
/// See [`ensure_building_growth_floor`].
pub const GROWTH_FLOOR_MARGIN: f64 = 0.03;

/// Round a ratio to 2 decimal places.
///
/// Ratio fields are stored rounded so profiles are human-readable and
/// reproduce bit-identically across runs.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round a quantity to a whole number, never below 1.
///
/// Used for counts and costs; a compiled profile never contains a zero
/// count even under extreme downscaling.
pub fn round_count(value: f64) -> u32 {
    (value.round() as i64).max(1) as u32
}

/// Direct scaling: quantities that grow linearly with a tuning knob.
pub fn scale_value(base: f64, scale: f64) -> f64 {
    base * scale
}

/// Inverse scaling for time costs (intervals, cooldowns, XP budgets).
///
/// A larger power scale *shortens* the interval instead of lengthening
/// it. `bias + weight` should sum to 1.0 so a neutral scale of 1.0
/// reproduces the authored base exactly.
pub fn inverse_time_scale(base: f64, bias: f64, scale: f64, weight: f64) -> f64 {
    base / (bias + scale * weight)
}

/// Deviation scaling around the neutral 1.0 multiplier.
///
/// `1 + (base - 1) * scale`: a neutral scale reproduces the authored
/// multiplier exactly, and scale 0 collapses the multiplier to 1.0.
pub fn deviation_scale(base: f64, scale: f64) -> f64 {
    1.0 + (base - 1.0) * scale
}

/// Reciprocal deviation scaling for "lower is better" multipliers
/// (e.g. an elite's reduced move speed): `1 - (1 - base) * scale`.
pub fn reciprocal_deviation_scale(base: f64, scale: f64) -> f64 {
    1.0 - (1.0 - base) * scale
}

/// Clamped percentage scaling.
///
/// Crit rates, heal percents and slow percents stay inside a fixed band
/// no matter how aggressive the preset is; out-of-band values break game
/// feel regardless of difficulty.
pub fn clamped_percent(base: f64, scale: f64, min: f64, max: f64) -> f64 {
    (base * scale).clamp(min, max)
}

/// Raise a per-upgrade-level power multiplier to the growth floor.
///
/// Static defenses must out-scale the enemy's per-wave attack growth by
/// at least [`GROWTH_FLOOR_MARGIN`], or the simulated late game becomes
/// unwinnable by construction.
pub fn ensure_building_growth_floor(multiplier: f64, attack_mult_per_wave: f64) -> f64 {
    multiplier.max(1.0 + attack_mult_per_wave.max(0.0) + GROWTH_FLOOR_MARGIN)
}
