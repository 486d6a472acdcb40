// Copyright 2025 the Curvature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

use crate::ColorError;

/// Failure reported by a drawable for a single tick.
///
/// The scheduler logs the error and moves on to the next drawable; the
/// failing drawable stays attached and runs again on the next tick.
#[derive(Debug, Error)]
pub enum DrawError {
    /// A sampling step that would never advance (zero, negative or NaN).
    #[error("sampling step {step} does not advance from {start} to {end}")]
    InvalidStep {
        /// First sample position.
        start: f64,
        /// Last sample position.
        end: f64,
        /// Offending step.
        step: f64,
    },
    /// A sampling range bound that is NaN or infinite.
    #[error("{what} is not finite: {value}")]
    NonFinite {
        /// Name of the offending parameter.
        what: &'static str,
        /// Offending value.
        value: f64,
    },
    /// A sampling range that needs more samples than allowed.
    #[error("{samples} samples requested, limit is {limit}")]
    TooManySamples {
        /// Samples the range would produce.
        samples: f64,
        /// Allowed maximum.
        limit: usize,
    },
    /// A color that could not be resolved.
    #[error(transparent)]
    Color(#[from] ColorError),
    /// Free-form failure from a caller-provided drawable.
    #[error("{0}")]
    Message(String),
}

impl DrawError {
    /// Creates a [`DrawError::Message`].
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }
}
