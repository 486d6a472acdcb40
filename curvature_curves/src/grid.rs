// Copyright 2025 the Curvature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use curvature_geom::Vector2;
use curvature_geom::grid::nice_step;
use curvature_view::{ColorError, ColorSpec, DrawError, Drawable, Frame};
use peniko::Color;
use peniko::color::palette::css;

use crate::Layer;

/// Default priority of [`Grid`]: below everything else.
pub const GRID_PRIORITY: f64 = -20.0;

/// Grid spacing per axis for a camera scale.
///
/// Each axis independently picks a 1-2-5 step so that ten to fifty lines are
/// visible across the scale.
#[must_use]
pub fn grid_step(scale: Vector2) -> Vector2 {
    Vector2::new(nice_step(scale.x), nice_step(scale.y))
}

/// Multiples of `step` within `[from, to]`, as `(index, value)` pairs.
///
/// The value is computed from the index, so zero is hit exactly. An unusable
/// step yields nothing.
#[allow(
    clippy::cast_possible_truncation,
    reason = "float to int casts saturate; a visible zone spans a bounded number of steps"
)]
pub(crate) fn multiples(from: f64, to: f64, step: f64) -> impl Iterator<Item = (i64, f64)> {
    let usable = step > 0.0 && step.is_finite() && from.is_finite() && to.is_finite();
    let (first, last) = if usable {
        ((from / step).ceil(), (to / step).floor())
    } else {
        (1.0, 0.0)
    };
    (first as i64..=last as i64).map(move |k| (k, k as f64 * step))
}

/// Background grid: evenly spaced lines plus optional emphasized axes.
#[derive(Clone, Debug)]
pub struct Grid {
    color: Color,
    x_axis_color: Option<Color>,
    y_axis_color: Option<Color>,
    priority: f64,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            color: css::LIGHT_GRAY,
            x_axis_color: Some(css::GRAY),
            y_axis_color: Some(css::GRAY),
            priority: GRID_PRIORITY,
        }
    }
}

impl Grid {
    /// Light gray lines with gray axes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the color of the regular lines.
    pub fn with_color(mut self, color: impl Into<ColorSpec>) -> Result<Self, ColorError> {
        self.color = color.into().resolve()?;
        Ok(self)
    }

    /// Sets the color of the X axis (the line `y = 0`), or hides it with `None`.
    ///
    /// A hidden axis is drawn as a regular line.
    pub fn with_x_axis_color(
        mut self,
        color: Option<impl Into<ColorSpec>>,
    ) -> Result<Self, ColorError> {
        self.x_axis_color = color.map(|c| c.into().resolve()).transpose()?;
        Ok(self)
    }

    /// Sets the color of the Y axis (the line `x = 0`), or hides it with `None`.
    pub fn with_y_axis_color(
        mut self,
        color: Option<impl Into<ColorSpec>>,
    ) -> Result<Self, ColorError> {
        self.y_axis_color = color.map(|c| c.into().resolve()).transpose()?;
        Ok(self)
    }

    /// Sets the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: f64) -> Self {
        self.priority = priority;
        self
    }
}

impl Layer for Grid {
    fn priority(&self) -> f64 {
        self.priority
    }
}

impl Drawable for Grid {
    fn draw(&mut self, frame: &mut Frame<'_>) -> Result<(), DrawError> {
        let zone = frame.drawing_zone();
        let step = grid_step(frame.scale());
        frame.set_color(self.color);
        for (k, x) in multiples(zone.left(), zone.right(), step.x) {
            if k == 0 && self.y_axis_color.is_some() {
                continue;
            }
            frame.draw_line(&[Vector2::new(x, zone.top()), Vector2::new(x, zone.bottom())]);
        }
        for (k, y) in multiples(zone.bottom(), zone.top(), step.y) {
            if k == 0 && self.x_axis_color.is_some() {
                continue;
            }
            frame.draw_line(&[Vector2::new(zone.left(), y), Vector2::new(zone.right(), y)]);
        }
        if let Some(color) = self.x_axis_color {
            frame
                .set_color(color)
                .draw_line(&[Vector2::new(zone.left(), 0.0), Vector2::new(zone.right(), 0.0)]);
        }
        if let Some(color) = self.y_axis_color {
            frame
                .set_color(color)
                .draw_line(&[Vector2::new(0.0, zone.top()), Vector2::new(0.0, zone.bottom())]);
        }
        Ok(())
    }
}
