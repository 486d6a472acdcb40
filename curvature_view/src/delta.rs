// Copyright 2025 the Curvature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Measures seconds between drawn ticks.
///
/// The first reading after construction or [`DeltaTimer::reset`] has nothing
/// to measure against and returns the default delta instead. Later readings
/// return the elapsed time, capped at `max_delta` so a long pause does not
/// make animations jump.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeltaTimer {
    default_delta: f64,
    max_delta: f64,
    last_ms: Option<f64>,
}

impl DeltaTimer {
    /// Creates a timer. Both arguments are in seconds.
    #[must_use]
    pub fn new(default_delta: f64, max_delta: f64) -> Self {
        Self {
            default_delta,
            max_delta,
            last_ms: None,
        }
    }

    /// Seconds since the previous reading, given the current time in
    /// milliseconds.
    pub fn get(&mut self, now_ms: f64) -> f64 {
        let delta = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0).clamp(0.0, self.max_delta),
            None => self.default_delta,
        };
        self.last_ms = Some(now_ms);
        delta
    }

    /// Forgets the previous reading.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }

    /// Delta returned by the first reading.
    #[must_use]
    pub fn default_delta(&self) -> f64 {
        self.default_delta
    }
}
