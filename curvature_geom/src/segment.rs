// Copyright 2025 the Curvature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Line;

use crate::rect::ON_SIDE_PRECISION;
use crate::{Direction, Vector2, ZeroAngleRect};

/// A straight segment between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    /// Start point.
    pub p1: Vector2,
    /// End point.
    pub p2: Vector2,
}

impl LineSegment {
    /// Creates a segment from `p1` to `p2`.
    #[inline]
    #[must_use]
    pub const fn new(p1: Vector2, p2: Vector2) -> Self {
        Self { p1, p2 }
    }

    /// Difference `p2 - p1`.
    #[inline]
    #[must_use]
    pub fn delta(&self) -> Vector2 {
        self.p2.minus(self.p1)
    }

    /// Clips the segment to `rect`.
    ///
    /// Endpoints inside the rectangle are kept. Each outside endpoint is moved
    /// to where the segment crosses the edge named by its region code: first
    /// the vertical edge (for a `LEFT`/`RIGHT` code), then the horizontal edge
    /// (for `TOP`/`BOTTOM`). A candidate is accepted only when it lands on the
    /// perimeter. The crossing for `p2` is measured from the already clipped
    /// `p1`, along the original direction.
    ///
    /// Returns `None` when an outside endpoint has no valid crossing, which is
    /// the case whenever the segment misses the rectangle.
    #[must_use]
    pub fn fit_in(&self, rect: &ZeroAngleRect) -> Option<Self> {
        let d1 = rect.point_direction(self.p1, true);
        let d2 = rect.point_direction(self.p2, true);
        if d1.is_inside() && d2.is_inside() {
            return Some(*self);
        }
        let diff = self.delta();
        let mut p1 = self.p1;
        let mut p2 = self.p2;
        if !d1.is_inside() {
            let end = p2;
            p1 = crossing(
                rect,
                d1,
                |x| end.minus(diff.scale_to_x(end.x - x)),
                |y| end.minus(diff.scale_to_y(end.y - y)),
            )?;
        }
        if !d2.is_inside() {
            let start = p1;
            p2 = crossing(
                rect,
                d2,
                |x| start.plus(diff.scale_to_x(x - start.x)),
                |y| start.plus(diff.scale_to_y(y - start.y)),
            )?;
        }
        Some(Self::new(p1, p2))
    }

    /// Converts into a [`kurbo::Line`].
    #[must_use]
    pub fn to_line(&self) -> Line {
        Line::new(self.p1.to_point(), self.p2.to_point())
    }
}

/// Tries the vertical edge, then the horizontal edge, named by `direction`.
fn crossing(
    rect: &ZeroAngleRect,
    direction: Direction,
    at_vertical_edge: impl Fn(f64) -> Vector2,
    at_horizontal_edge: impl Fn(f64) -> Vector2,
) -> Option<Vector2> {
    let horizontal = direction.horizontal();
    if !horizontal.is_inside() {
        let candidate = at_vertical_edge(rect.vertical_edge(horizontal));
        if rect.test_on_side(candidate, ON_SIDE_PRECISION) {
            return Some(candidate);
        }
    }
    let vertical = direction.vertical();
    if !vertical.is_inside() {
        let candidate = at_horizontal_edge(rect.horizontal_edge(vertical));
        if rect.test_on_side(candidate, ON_SIDE_PRECISION) {
            return Some(candidate);
        }
    }
    None
}

impl From<(Vector2, Vector2)> for LineSegment {
    fn from((p1, p2): (Vector2, Vector2)) -> Self {
        Self::new(p1, p2)
    }
}

impl From<Line> for LineSegment {
    fn from(line: Line) -> Self {
        Self::new(line.p0.into(), line.p1.into())
    }
}
