// Copyright 2025 the Curvature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use curvature_view::{DrawError, Frame};

/// Upper bound on the samples one graph takes per frame.
pub const MAX_SAMPLES: usize = 1_000_000;

/// A number that is either fixed or recomputed every frame.
pub enum Param {
    /// The same value every frame.
    Fixed(f64),
    /// Computed from the frame, for example from the current scale.
    Computed(Box<dyn Fn(&Frame<'_>) -> f64>),
}

impl Param {
    /// Wraps a per-frame computation.
    pub fn computed(f: impl Fn(&Frame<'_>) -> f64 + 'static) -> Self {
        Self::Computed(Box::new(f))
    }

    /// Value for this frame.
    #[must_use]
    pub fn resolve(&self, frame: &Frame<'_>) -> f64 {
        match self {
            Self::Fixed(value) => *value,
            Self::Computed(f) => f(frame),
        }
    }
}

impl From<f64> for Param {
    fn from(value: f64) -> Self {
        Self::Fixed(value)
    }
}

impl fmt::Debug for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(value) => f.debug_tuple("Fixed").field(value).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Checks a sampling range and returns how many steps it takes to cover it.
pub(crate) fn checked_steps(start: f64, end: f64, step: f64) -> Result<f64, DrawError> {
    if !start.is_finite() {
        return Err(DrawError::NonFinite {
            what: "range start",
            value: start,
        });
    }
    if !end.is_finite() {
        return Err(DrawError::NonFinite {
            what: "range end",
            value: end,
        });
    }
    if step.is_nan() || step <= 0.0 {
        return Err(DrawError::InvalidStep { start, end, step });
    }
    let steps = ((end - start) / step).max(0.0);
    if steps > MAX_SAMPLES as f64 {
        return Err(DrawError::TooManySamples {
            samples: steps,
            limit: MAX_SAMPLES,
        });
    }
    Ok(steps)
}
