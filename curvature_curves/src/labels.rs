// Copyright 2025 the Curvature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use curvature_geom::Vector2;
use curvature_view::{ColorError, ColorSpec, DrawError, Drawable, Frame, TextOptions};
use peniko::Color;
use peniko::color::palette::css;

use crate::Layer;
use crate::grid::{grid_step, multiples};

/// Default priority of [`GridLabels`]: above the grid, below curves.
pub const LABELS_PRIORITY: f64 = -9.0;

/// Formats a tick value with at most ten decimals and no trailing zeros.
///
/// ```
/// use curvature_curves::labels::format_tick;
///
/// assert_eq!(format_tick(0.1 + 0.2), "0.3");
/// assert_eq!(format_tick(-2.0), "-2");
/// assert_eq!(format_tick(-0.0), "0");
/// ```
#[must_use]
pub fn format_tick(value: f64) -> String {
    let mut text = format!("{value:.10}");
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text.remove(0);
    }
    text
}

fn clamp_between(value: f64, low: f64, high: f64) -> f64 {
    value.max(low).min(high)
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum AxisPaint {
    FollowZero,
    Custom(Color),
    Hidden,
}

impl AxisPaint {
    fn from_option(color: Option<impl Into<ColorSpec>>) -> Result<Self, ColorError> {
        Ok(match color {
            Some(color) => Self::Custom(color.into().resolve()?),
            None => Self::Hidden,
        })
    }

    fn color(self, zero: Color) -> Option<Color> {
        match self {
            Self::FollowZero => Some(zero),
            Self::Custom(color) => Some(color),
            Self::Hidden => None,
        }
    }
}

/// Numeric tick labels along both axes, plus axis names.
///
/// Labels follow the grid spacing. Each axis' labels stay on screen: when
/// the axis itself scrolls out of view, they stick to the nearest edge. The
/// `0` label has its own color, and is printed once, on the X axis, when
/// both axes are labeled.
#[derive(Clone, Debug)]
pub struct GridLabels {
    zero_color: Color,
    x_axis: AxisPaint,
    y_axis: AxisPaint,
    x_axis_label: Option<String>,
    y_axis_label: Option<String>,
    text: TextOptions,
    priority: f64,
}

impl Default for GridLabels {
    fn default() -> Self {
        Self {
            zero_color: css::BLACK,
            x_axis: AxisPaint::FollowZero,
            y_axis: AxisPaint::FollowZero,
            x_axis_label: Some("X".to_owned()),
            y_axis_label: Some("Y".to_owned()),
            text: TextOptions::default(),
            priority: LABELS_PRIORITY,
        }
    }
}

impl GridLabels {
    /// Black labels named `X` and `Y`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the color of the `0` label. Axes without a color of their own
    /// use it too.
    pub fn with_zero_color(mut self, color: impl Into<ColorSpec>) -> Result<Self, ColorError> {
        self.zero_color = color.into().resolve()?;
        Ok(self)
    }

    /// Sets the color of the X axis labels, or hides them with `None`.
    pub fn with_x_axis_color(
        mut self,
        color: Option<impl Into<ColorSpec>>,
    ) -> Result<Self, ColorError> {
        self.x_axis = AxisPaint::from_option(color)?;
        Ok(self)
    }

    /// Sets the color of the Y axis labels, or hides them with `None`.
    pub fn with_y_axis_color(
        mut self,
        color: Option<impl Into<ColorSpec>>,
    ) -> Result<Self, ColorError> {
        self.y_axis = AxisPaint::from_option(color)?;
        Ok(self)
    }

    /// Sets the name printed at the right end of the X axis.
    #[must_use]
    pub fn with_x_axis_label(mut self, label: Option<impl Into<String>>) -> Self {
        self.x_axis_label = label.map(Into::into);
        self
    }

    /// Sets the name printed at the top end of the Y axis.
    #[must_use]
    pub fn with_y_axis_label(mut self, label: Option<impl Into<String>>) -> Self {
        self.y_axis_label = label.map(Into::into);
        self
    }

    /// Sets alignment and font for every label.
    #[must_use]
    pub fn with_text_options(mut self, text: TextOptions) -> Self {
        self.text = text;
        self
    }

    /// Sets the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: f64) -> Self {
        self.priority = priority;
        self
    }
}

impl Layer for GridLabels {
    fn priority(&self) -> f64 {
        self.priority
    }
}

impl Drawable for GridLabels {
    fn draw(&mut self, frame: &mut Frame<'_>) -> Result<(), DrawError> {
        let zone = frame.drawing_zone();
        let cpp = frame.coord_per_pixel();
        let step = grid_step(frame.scale());
        // Offset of a tick label from its tick: 5 px right, 5 px up.
        let tick_offset = Vector2::new(5.0, -5.0).scale_by(cpp);
        let x_color = self.x_axis.color(self.zero_color);
        let y_color = self.y_axis.color(self.zero_color);

        if let Some(color) = x_color {
            frame.set_color(color);
            let y = clamp_between(0.0, zone.bottom(), zone.top() + cpp.y * 20.0);
            if let Some(label) = &self.x_axis_label {
                let at = Vector2::new(zone.right(), y).minus(Vector2::new(10.0, 5.0).scale_by(cpp));
                frame.print_text(label, at, &self.text);
            }
            for (k, x) in multiples(zone.left() - cpp.x * 5.0, zone.right(), step.x) {
                if k == 0 {
                    frame.set_color(self.zero_color);
                }
                let at = Vector2::new(x, y).plus(tick_offset);
                frame.print_text(&format_tick(x), at, &self.text);
                if k == 0 {
                    frame.set_color(color);
                }
            }
        }

        if let Some(color) = y_color {
            frame.set_color(color);
            let x = clamp_between(0.0, zone.left(), zone.right() - cpp.x * 20.0);
            if let Some(label) = &self.y_axis_label {
                let at = Vector2::new(x, zone.top()).plus(Vector2::new(5.0, 10.0).scale_by(cpp));
                frame.print_text(label, at, &self.text);
            }
            for (k, y) in multiples(zone.bottom(), zone.top(), step.y) {
                if k == 0 {
                    if x_color.is_some() {
                        continue;
                    }
                    frame.set_color(self.zero_color);
                }
                let at = Vector2::new(x, y).plus(tick_offset);
                frame.print_text(&format_tick(y), at, &self.text);
                if k == 0 {
                    frame.set_color(color);
                }
            }
        }
        Ok(())
    }
}
