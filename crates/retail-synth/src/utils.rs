//! Rounding and comparison helpers.
//!
//! Stored columns are rounded half-to-even at a fixed number of decimals,
//! scaling by a power of ten and rounding the scaled value.
//!
//! # Example
//!
//! ```
//! use retail_synth::utils::round_to;
//!
//! assert_eq!(round_to(12.345_6, 2), 12.35);
//! assert_eq!(round_to(2.5, 0), 2.0);
//! assert_eq!(round_to(3.5, 0), 4.0);
//! ```

/// Standard epsilon for floating-point comparisons in tests.
pub const EPSILON: f64 = 1e-10;

/// Rounds `value` to `decimals` places, ties to even.
#[inline]
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (value * scale).round_ties_even() / scale
}

/// Approximate equality check for floating-point values.
///
/// Returns `true` if `a` and `b` are within `tolerance` of each other,
/// or if both are NaN.
#[inline]
#[must_use]
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < tolerance
}
