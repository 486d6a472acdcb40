// Copyright 2025 the Curvature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`Surface`] that records calls instead of rasterizing.
//!
//! It is intended for tests and debugging that want to assert on the
//! primitives a frame emitted. It does not produce pixels.

use kurbo::{Point, Rect};
use peniko::Color;

use crate::{Surface, TextOptions};

/// One recorded [`Surface`] call.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    /// [`Surface::clear_rect`].
    ClearRect(Rect),
    /// [`Surface::set_paint`].
    SetPaint(Color),
    /// [`Surface::begin_path`].
    BeginPath,
    /// [`Surface::move_to`].
    MoveTo(Point),
    /// [`Surface::line_to`].
    LineTo(Point),
    /// [`Surface::stroke`].
    Stroke,
    /// [`Surface::fill_rect`].
    FillRect(Rect),
    /// [`Surface::fill_text`].
    FillText {
        /// Text drawn.
        text: String,
        /// Anchor after margins.
        anchor: Point,
        /// Options passed along.
        options: TextOptions,
    },
}

/// Recorded text draw, as returned by [`RecordingSurface::texts`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedText {
    /// Text drawn.
    pub text: String,
    /// Anchor after margins.
    pub anchor: Point,
    /// Paint current at the time of drawing.
    pub paint: Option<Color>,
}

/// Surface that appends every call to a log.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded calls, oldest first.
    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Forgets everything recorded so far.
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Number of [`Surface::clear_rect`] calls; one per redrawn frame.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::ClearRect(_)))
            .count()
    }

    /// Subpaths that were stroked, each as its list of points.
    ///
    /// A subpath starts at a `MoveTo` and collects the following `LineTo`s.
    /// Subpaths of a path discarded by `BeginPath` without a `Stroke` are
    /// not returned, and neither are lone `MoveTo`s.
    #[must_use]
    pub fn stroked_subpaths(&self) -> Vec<Vec<Point>> {
        let mut stroked = Vec::new();
        let mut pending: Vec<Vec<Point>> = Vec::new();
        for op in &self.ops {
            match op {
                SurfaceOp::BeginPath => pending.clear(),
                SurfaceOp::MoveTo(p) => pending.push(vec![*p]),
                SurfaceOp::LineTo(p) => match pending.last_mut() {
                    Some(subpath) => subpath.push(*p),
                    // Canvas semantics: a line with no current point starts one.
                    None => pending.push(vec![*p]),
                },
                SurfaceOp::Stroke => {
                    stroked.extend(pending.iter().filter(|s| s.len() > 1).cloned());
                }
                _ => {}
            }
        }
        stroked
    }

    /// Filled rectangles, in order.
    #[must_use]
    pub fn filled_rects(&self) -> Vec<Rect> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::FillRect(rect) => Some(*rect),
                _ => None,
            })
            .collect()
    }

    /// Text draws with the paint that was current for each.
    #[must_use]
    pub fn texts(&self) -> Vec<RecordedText> {
        let mut paint = None;
        let mut texts = Vec::new();
        for op in &self.ops {
            match op {
                SurfaceOp::SetPaint(color) => paint = Some(*color),
                SurfaceOp::FillText { text, anchor, .. } => texts.push(RecordedText {
                    text: text.clone(),
                    anchor: *anchor,
                    paint,
                }),
                _ => {}
            }
        }
        texts
    }

    /// Paints set, in order.
    #[must_use]
    pub fn paints(&self) -> Vec<Color> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::SetPaint(color) => Some(*color),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear_rect(&mut self, rect: Rect) {
        self.ops.push(SurfaceOp::ClearRect(rect));
    }

    fn set_paint(&mut self, color: Color) {
        self.ops.push(SurfaceOp::SetPaint(color));
    }

    fn begin_path(&mut self) {
        self.ops.push(SurfaceOp::BeginPath);
    }

    fn move_to(&mut self, point: Point) {
        self.ops.push(SurfaceOp::MoveTo(point));
    }

    fn line_to(&mut self, point: Point) {
        self.ops.push(SurfaceOp::LineTo(point));
    }

    fn stroke(&mut self) {
        self.ops.push(SurfaceOp::Stroke);
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.ops.push(SurfaceOp::FillRect(rect));
    }

    fn fill_text(&mut self, text: &str, anchor: Point, options: &TextOptions) {
        self.ops.push(SurfaceOp::FillText {
            text: text.to_owned(),
            anchor,
            options: options.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::RecordingSurface;
    use crate::Surface;

    #[test]
    fn subpaths_follow_move_and_line() {
        let mut s = RecordingSurface::new();
        s.begin_path();
        s.move_to(Point::new(0.0, 0.0));
        s.line_to(Point::new(1.0, 0.0));
        s.move_to(Point::new(5.0, 5.0));
        s.move_to(Point::new(2.0, 2.0));
        s.line_to(Point::new(3.0, 3.0));
        s.stroke();
        let paths = s.stroked_subpaths();
        assert_eq!(paths.len(), 2, "lone move_to is not a subpath");
        assert_eq!(paths[1], vec![Point::new(2.0, 2.0), Point::new(3.0, 3.0)]);
    }

    #[test]
    fn unstroked_paths_are_dropped() {
        let mut s = RecordingSurface::new();
        s.begin_path();
        s.move_to(Point::new(0.0, 0.0));
        s.line_to(Point::new(1.0, 0.0));
        s.begin_path();
        s.stroke();
        assert!(s.stroked_subpaths().is_empty());
    }
}
