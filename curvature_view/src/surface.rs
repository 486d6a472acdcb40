// Copyright 2025 the Curvature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};
use peniko::Color;

use crate::TextOptions;

/// The drawing primitives the renderer needs from its host.
///
/// All coordinates are device pixels with the origin at the top-left corner.
/// Implementations forward these calls to a canvas, a vector backend, or a
/// recorder such as [`RecordingSurface`](crate::RecordingSurface). Paint set
/// with [`Surface::set_paint`] applies to both strokes and fills until
/// changed.
pub trait Surface {
    /// Clears a rectangle to transparent.
    fn clear_rect(&mut self, rect: Rect);

    /// Sets the current stroke and fill paint.
    fn set_paint(&mut self, color: Color);

    /// Starts a new path, discarding any unstroked one.
    fn begin_path(&mut self);

    /// Starts a new subpath at `point`.
    fn move_to(&mut self, point: Point);

    /// Adds a straight line from the current point to `point`.
    fn line_to(&mut self, point: Point);

    /// Strokes the current path with the current paint.
    fn stroke(&mut self);

    /// Fills a rectangle with the current paint.
    fn fill_rect(&mut self, rect: Rect);

    /// Draws `text` anchored at `anchor`.
    ///
    /// `options` carries alignment and font; any margin has already been
    /// applied to `anchor`.
    fn fill_text(&mut self, text: &str, anchor: Point, options: &TextOptions);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn clear_rect(&mut self, rect: Rect) {
        (**self).clear_rect(rect);
    }

    fn set_paint(&mut self, color: Color) {
        (**self).set_paint(color);
    }

    fn begin_path(&mut self) {
        (**self).begin_path();
    }

    fn move_to(&mut self, point: Point) {
        (**self).move_to(point);
    }

    fn line_to(&mut self, point: Point) {
        (**self).line_to(point);
    }

    fn stroke(&mut self) {
        (**self).stroke();
    }

    fn fill_rect(&mut self, rect: Rect) {
        (**self).fill_rect(rect);
    }

    fn fill_text(&mut self, text: &str, anchor: Point, options: &TextOptions) {
        (**self).fill_text(text, anchor, options);
    }
}
