// Copyright 2025 the Curvature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use curvature_geom::{Direction, LineSegment, Vector2, ZeroAngleRect};
use kurbo::Rect;
use peniko::Color;
use tracing::debug;

use crate::{Camera, Surface, TextOptions, Viewport};

/// Per-tick drawing context handed to every drawable.
///
/// The viewport is frozen when the tick starts; camera changes made through
/// [`Frame::camera_mut`] take effect on the next tick.
pub struct Frame<'a> {
    surface: &'a mut dyn Surface,
    camera: &'a mut Camera,
    viewport: Viewport,
    delta_time: f64,
    finished: bool,
}

impl fmt::Debug for Frame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("camera", &self.camera)
            .field("viewport", &self.viewport)
            .field("delta_time", &self.delta_time)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

impl<'a> Frame<'a> {
    pub(crate) fn new(
        surface: &'a mut dyn Surface,
        camera: &'a mut Camera,
        viewport: Viewport,
        delta_time: f64,
    ) -> Self {
        Self {
            surface,
            camera,
            viewport,
            delta_time,
            finished: false,
        }
    }

    /// Viewport for this tick.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Visible coordinate-space rectangle.
    #[must_use]
    pub fn drawing_zone(&self) -> ZeroAngleRect {
        self.viewport.drawing_zone()
    }

    /// Coordinate units per device pixel; the Y component is negative.
    #[must_use]
    pub fn coord_per_pixel(&self) -> Vector2 {
        self.viewport.coord_per_pixel()
    }

    /// Scale at the start of the tick.
    #[must_use]
    pub fn scale(&self) -> Vector2 {
        self.viewport.scale()
    }

    /// Focus at the start of the tick.
    #[must_use]
    pub fn focus(&self) -> Vector2 {
        self.viewport.focus()
    }

    /// Surface size in pixels.
    #[must_use]
    pub fn size(&self) -> Vector2 {
        self.viewport.size()
    }

    /// Seconds since the previous drawn tick.
    #[must_use]
    pub fn delta_time(&self) -> f64 {
        self.delta_time
    }

    /// Live camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        self.camera
    }

    /// Live camera, for drawables that steer it.
    pub fn camera_mut(&mut self) -> &mut Camera {
        self.camera
    }

    /// Detaches the current drawable once this tick's pass completes.
    pub fn finish(&mut self) {
        self.finished = true;
    }

    /// Returns and clears the finish request of the drawable just run.
    pub(crate) fn take_finished(&mut self) -> bool {
        core::mem::take(&mut self.finished)
    }

    /// Maps a coordinate-space point to the pixel grid.
    #[must_use]
    pub fn absolute_to_pixel(&self, point: Vector2) -> Vector2 {
        self.viewport.absolute_to_pixel(point)
    }

    /// Maps a pixel-space point to coordinate space.
    #[must_use]
    pub fn pixel_to_absolute(&self, point: Vector2) -> Vector2 {
        self.viewport.pixel_to_absolute(point)
    }

    /// Clears the whole surface.
    pub fn clear(&mut self) -> &mut Self {
        self.surface.clear_rect(self.viewport.pixel_rect());
        self
    }

    /// Sets the paint for subsequent lines and text.
    pub fn set_color(&mut self, color: Color) -> &mut Self {
        self.surface.set_paint(color);
        self
    }

    /// Strokes a polyline given in coordinate space, clipped to the view.
    ///
    /// A point with any NaN component (such as [`Vector2::NAV`]) lifts the
    /// pen, so one call can draw several disjoint strokes. Pairs of points
    /// beyond the same edge are skipped without clipping; other pairs that
    /// leave the view are clipped and start a new subpath where they re-enter.
    /// A single point paints one pixel if it is visible.
    pub fn draw_line(&mut self, points: &[Vector2]) -> &mut Self {
        let zone = self.viewport.drawing_zone();
        match points {
            [] => {
                debug!("nothing to draw: empty polyline");
            }
            [point] => {
                if !point.has_nan() && zone.point_direction(*point, false).is_inside() {
                    let p = self.absolute_to_pixel(*point);
                    self.surface
                        .fill_rect(Rect::new(p.x, p.y, p.x + 1.0, p.y + 1.0));
                }
            }
            _ => {
                self.surface.begin_path();
                let mut pen = Pen::default();
                let mut previous: Option<(Vector2, Direction)> = None;
                for &point in points {
                    if point.has_nan() {
                        previous = None;
                        pen.lift();
                        continue;
                    }
                    let direction = zone.point_direction(point, false);
                    match previous {
                        None => {
                            if direction.is_inside() {
                                pen.move_to(self.surface, &self.viewport, point);
                            }
                        }
                        Some((last, last_direction)) => {
                            if last_direction.is_inside() && direction.is_inside() {
                                pen.line_to(self.surface, &self.viewport, point);
                            } else if Direction::at_same_side(last_direction, direction) {
                                pen.lift();
                            } else if let Some(visible) =
                                LineSegment::new(last, point).fit_in(&zone)
                            {
                                pen.move_to(self.surface, &self.viewport, visible.p1);
                                pen.line_to(self.surface, &self.viewport, visible.p2);
                                if !direction.is_inside() {
                                    pen.lift();
                                }
                            } else {
                                pen.lift();
                            }
                        }
                    }
                    previous = Some((point, direction));
                }
                self.surface.stroke();
            }
        }
        self
    }

    /// Strokes several polylines, one stroke per branch.
    pub fn draw_lines<I>(&mut self, branches: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<[Vector2]>,
    {
        for branch in branches {
            self.draw_line(branch.as_ref());
        }
        self
    }

    /// Draws text anchored at a coordinate-space point.
    ///
    /// The anchor is converted to pixels without rounding, then shifted by
    /// the margin from `options`. An anchor with a NaN component is skipped.
    pub fn print_text(&mut self, text: &str, point: Vector2, options: &TextOptions) -> &mut Self {
        if point.has_nan() {
            debug!(text, "skipping text with an invalid anchor");
            return self;
        }
        let anchor = self
            .viewport
            .absolute_to_pixel_exact(point)
            .plus(options.margin_offset());
        self.surface.fill_text(text, anchor.to_point(), options);
        self
    }
}

/// Pen position in pixel space, `None` while lifted.
#[derive(Default)]
struct Pen {
    at: Option<Vector2>,
}

impl Pen {
    fn lift(&mut self) {
        self.at = None;
    }

    /// Starts a subpath at `point` unless the pen already rests there.
    fn move_to(&mut self, surface: &mut dyn Surface, viewport: &Viewport, point: Vector2) {
        let pixel = viewport.absolute_to_pixel(point);
        if self.at != Some(pixel) {
            surface.move_to(pixel.to_point());
            self.at = Some(pixel);
        }
    }

    fn line_to(&mut self, surface: &mut dyn Surface, viewport: &Viewport, point: Vector2) {
        let pixel = viewport.absolute_to_pixel(point);
        if self.at.is_none() {
            surface.move_to(pixel.to_point());
        } else {
            surface.line_to(pixel.to_point());
        }
        self.at = Some(pixel);
    }
}
