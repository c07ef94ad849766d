//! Lenient arithmetic helpers for values rendered on dashboard pages.
//!
//! These never fail: a bad divisor yields 0 so a single odd row cannot
//! break a whole page.

/// `value / arg`, or `0.0` when `arg` is zero or the result is not finite.
pub fn safe_div(value: f64, arg: f64) -> f64 {
    if arg == 0.0 {
        return 0.0;
    }
    let result = value / arg;
    if result.is_finite() {
        result
    } else {
        0.0
    }
}

/// `value * arg`, or `0.0` when the result is not finite.
pub fn mul(value: f64, arg: f64) -> f64 {
    let result = value * arg;
    if result.is_finite() {
        result
    } else {
        0.0
    }
}
