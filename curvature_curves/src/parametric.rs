// Copyright 2025 the Curvature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use curvature_geom::Vector2;
use curvature_view::{ColorError, ColorSpec, DEFAULT_PRIORITY, DrawError, Drawable, Frame};
use peniko::Color;
use peniko::color::palette::css;

use crate::{Layer, Param};
use crate::param::checked_steps;

/// Default parameter range start.
pub const DEFAULT_T_START: f64 = -10.0;
/// Default parameter range end.
pub const DEFAULT_T_END: f64 = 10.0;
/// Default parameter step.
pub const DEFAULT_T_STEP: f64 = 0.01;

/// Curve traced by `(x(t), y(t))`.
///
/// `t` runs from `start` to `end` inclusive by `step`; by default from -10 to
/// 10 by 0.01.
pub struct ParametricGraph {
    x: Box<dyn Fn(f64) -> f64>,
    y: Box<dyn Fn(f64) -> f64>,
    start: Param,
    end: Param,
    step: Param,
    color: Color,
    priority: f64,
}

impl fmt::Debug for ParametricGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParametricGraph")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("step", &self.step)
            .field("color", &self.color)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

impl ParametricGraph {
    /// Curve of `(x(t), y(t))`, black, at the default priority.
    pub fn new(x: impl Fn(f64) -> f64 + 'static, y: impl Fn(f64) -> f64 + 'static) -> Self {
        Self {
            x: Box::new(x),
            y: Box::new(y),
            start: Param::Fixed(DEFAULT_T_START),
            end: Param::Fixed(DEFAULT_T_END),
            step: Param::Fixed(DEFAULT_T_STEP),
            color: css::BLACK,
            priority: DEFAULT_PRIORITY,
        }
    }

    /// Sets the parameter range.
    #[must_use]
    pub fn with_range(mut self, start: impl Into<Param>, end: impl Into<Param>) -> Self {
        self.start = start.into();
        self.end = end.into();
        self
    }

    /// Sets the parameter step.
    #[must_use]
    pub fn with_step(mut self, step: impl Into<Param>) -> Self {
        self.step = step.into();
        self
    }

    /// Sets the stroke color.
    pub fn with_color(mut self, color: impl Into<ColorSpec>) -> Result<Self, ColorError> {
        self.color = color.into().resolve()?;
        Ok(self)
    }

    /// Sets the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: f64) -> Self {
        self.priority = priority;
        self
    }

    /// Samples the curve for `frame`.
    pub fn sample(&self, frame: &Frame<'_>) -> Result<Vec<Vector2>, DrawError> {
        trace_points(
            &*self.x,
            &*self.y,
            self.start.resolve(frame),
            self.end.resolve(frame),
            self.step.resolve(frame),
        )
    }
}

fn trace_points(
    x: &dyn Fn(f64) -> f64,
    y: &dyn Fn(f64) -> f64,
    start: f64,
    end: f64,
    step: f64,
) -> Result<Vec<Vector2>, DrawError> {
    let steps = checked_steps(start, end, step)?;
    if start > end {
        return Ok(Vec::new());
    }
    // Tolerate rounding so that an end reached by whole steps is included.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "checked_steps bounds steps to [0, MAX_SAMPLES]"
    )]
    let last = (steps + 1e-9).floor() as usize;
    Ok((0..=last)
        .map(|i| {
            let t = start + i as f64 * step;
            Vector2::new(x(t), y(t))
        })
        .collect())
}

impl Layer for ParametricGraph {
    fn priority(&self) -> f64 {
        self.priority
    }
}

impl Drawable for ParametricGraph {
    fn draw(&mut self, frame: &mut Frame<'_>) -> Result<(), DrawError> {
        let points = self.sample(frame)?;
        frame.set_color(self.color).draw_line(&points);
        Ok(())
    }
}
