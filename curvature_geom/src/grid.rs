// Copyright 2025 the Curvature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar helpers for snapping values to a regular grid.
//!
//! A zero or non-finite `step` leaves the value untouched.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Rounds `value` to the nearest multiple of `step`.
#[must_use]
pub fn round_to(value: f64, step: f64) -> f64 {
    if !usable_step(step) {
        return value;
    }
    (value / step).round() * step
}

/// Rounds `value` down to a multiple of `step`.
#[must_use]
pub fn floor_to(value: f64, step: f64) -> f64 {
    if !usable_step(step) {
        return value;
    }
    (value / step).floor() * step
}

/// Rounds `value` up to a multiple of `step`.
#[must_use]
pub fn ceil_to(value: f64, step: f64) -> f64 {
    if !usable_step(step) {
        return value;
    }
    (value / step).ceil() * step
}

/// Chooses a "nice" spacing from the 1-2-5 ladder for a visible `span`.
///
/// The result is `m * 10^k / 10`, where `10^k` is the largest power of ten not
/// above `span` and `m` is 5, 2 or 1 depending on how many of those powers fit.
/// A span of `10` yields `1`, a span of `25` yields `2`, a span of `60` yields `5`.
#[must_use]
pub fn nice_step(span: f64) -> f64 {
    let span = span.abs();
    if span == 0.0 || !span.is_finite() {
        return 0.0;
    }
    let mut magnitude = 10.0_f64.powf((span.ln() / core::f64::consts::LN_10).floor());
    // The logarithm may land a hair off an exact power of ten.
    if span / magnitude >= 10.0 {
        magnitude *= 10.0;
    } else if span / magnitude < 1.0 {
        magnitude /= 10.0;
    }
    let ratio = span / magnitude;
    let mantissa = if ratio >= 5.0 {
        5.0
    } else if ratio >= 2.0 {
        2.0
    } else {
        1.0
    };
    mantissa * magnitude / 10.0
}

fn usable_step(step: f64) -> bool {
    step != 0.0 && step.is_finite()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn zero_step_is_identity() {
        assert_eq!(round_to(1.234, 0.0), 1.234);
        assert_eq!(floor_to(1.234, f64::NAN), 1.234);
        assert_eq!(ceil_to(1.234, f64::INFINITY), 1.234);
    }

    #[test]
    fn snapping_to_quarter_steps() {
        assert_eq!(round_to(1.1, 0.25), 1.0);
        assert_eq!(floor_to(-0.1, 0.25), -0.25);
        assert_eq!(ceil_to(-0.1, 0.25), 0.0);
    }

    #[test]
    fn nice_step_ladder() {
        assert_relative_eq!(nice_step(10.0), 1.0);
        assert_relative_eq!(nice_step(25.0), 2.0);
        assert_relative_eq!(nice_step(60.0), 5.0);
        assert_relative_eq!(nice_step(0.3), 0.02, max_relative = 1e-12);
        assert_eq!(nice_step(0.0), 0.0);
    }
}
