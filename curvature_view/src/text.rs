// Copyright 2025 the Curvature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use curvature_geom::Vector2;

/// Which side of the text sits on the anchor horizontally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HorizontalAlign {
    /// Text starts at the anchor and runs right.
    #[default]
    Left,
    /// Text is centered on the anchor.
    Center,
    /// Text ends at the anchor.
    Right,
}

/// Which line of the text sits on the anchor vertically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VerticalAlign {
    /// Top of the em box; text hangs below the anchor.
    Top,
    /// Middle of the em box.
    Middle,
    /// Alphabetic baseline; text stands above the anchor.
    #[default]
    Alphabetic,
    /// Bottom of the em box; text stands above the anchor.
    Bottom,
}

/// Placement options for [`Frame::print_text`](crate::Frame::print_text).
///
/// `margin` is in pixels and always pushes text away from its anchor edge:
/// left-aligned text moves right, right-aligned text moves left, text hanging
/// below the anchor moves down and text standing on it moves up. Centered
/// axes ignore the margin.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextOptions {
    /// Horizontal alignment.
    pub horizontal_align: HorizontalAlign,
    /// Vertical alignment.
    pub vertical_align: VerticalAlign,
    /// Margin magnitude per axis, in pixels.
    pub margin: Vector2,
    /// CSS font shorthand, or `None` for the surface default.
    pub font: Option<String>,
}

impl TextOptions {
    /// Options with the given alignment and no margin.
    #[must_use]
    pub fn aligned(horizontal_align: HorizontalAlign, vertical_align: VerticalAlign) -> Self {
        Self {
            horizontal_align,
            vertical_align,
            ..Self::default()
        }
    }

    /// Sets the margin. A plain number applies to both axes.
    #[must_use]
    pub fn with_margin(mut self, margin: impl Into<Vector2>) -> Self {
        self.margin = margin.into();
        self
    }

    /// Sets the font.
    #[must_use]
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    /// Pixel offset to add to the anchor.
    #[must_use]
    pub fn margin_offset(&self) -> Vector2 {
        let margin = self.margin.abs();
        let x = match self.horizontal_align {
            HorizontalAlign::Left => margin.x,
            HorizontalAlign::Center => 0.0,
            HorizontalAlign::Right => -margin.x,
        };
        // Pixel Y grows downward.
        let y = match self.vertical_align {
            VerticalAlign::Top => margin.y,
            VerticalAlign::Middle => 0.0,
            VerticalAlign::Alphabetic | VerticalAlign::Bottom => -margin.y,
        };
        Vector2::new(x, y)
    }
}
