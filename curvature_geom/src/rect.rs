// Copyright 2025 the Curvature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Rect;

use crate::{Direction, Vector2};

/// Default tolerance for [`ZeroAngleRect::test_on_side`].
pub const ON_SIDE_PRECISION: f64 = 1e-12;

/// Axis-aligned rectangle in Y-up coordinate space.
///
/// Edges are normalized at construction so that `left <= right` and
/// `bottom <= top` always hold, whatever order the inputs arrive in.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct ZeroAngleRect {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl ZeroAngleRect {
    /// Creates a rectangle from its four edges, swapping them as needed.
    #[must_use]
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        let (left, right) = if left > right {
            (right, left)
        } else {
            (left, right)
        };
        let (top, bottom) = if bottom > top {
            (bottom, top)
        } else {
            (top, bottom)
        };
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Creates the rectangle spanned by two arbitrary opposite corners.
    #[must_use]
    pub fn by_points(p1: Vector2, p2: Vector2) -> Self {
        Self::new(p1.x, p2.x, p1.y, p2.y)
    }

    /// Left edge (smallest X).
    #[inline]
    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Right edge (largest X).
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.right
    }

    /// Top edge (largest Y).
    #[inline]
    #[must_use]
    pub fn top(&self) -> f64 {
        self.top
    }

    /// Bottom edge (smallest Y).
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    /// `right - left`.
    #[inline]
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// `top - bottom`.
    #[inline]
    #[must_use]
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// Width and height as a vector.
    #[must_use]
    pub fn size(&self) -> Vector2 {
        Vector2::new(self.width(), self.height())
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Vector2 {
        Vector2::new(
            (self.left + self.right) / 2.0,
            (self.bottom + self.top) / 2.0,
        )
    }

    /// Top-left corner; the origin of pixel space.
    #[must_use]
    pub fn top_left(&self) -> Vector2 {
        Vector2::new(self.left, self.top)
    }

    /// Returns `true` for a zero-area or non-finite rectangle.
    ///
    /// Degenerate rectangles classify every point as outside.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
            || !self.width().is_finite()
            || !self.height().is_finite()
    }

    /// Returns `true` if the point lies strictly within the edges.
    #[must_use]
    pub fn test_inside(&self, point: Vector2) -> bool {
        point.x > self.left && point.x < self.right && point.y > self.bottom && point.y < self.top
    }

    /// Returns `true` if the point lies strictly beyond any edge.
    #[must_use]
    pub fn test_outside(&self, point: Vector2) -> bool {
        point.x < self.left || point.x > self.right || point.y < self.bottom || point.y > self.top
    }

    /// Returns `true` if the point lies on the perimeter.
    ///
    /// `precision` is a tolerance relative to the magnitude of the compared
    /// values (never below an absolute `precision`); `0.0` demands exact
    /// equality. Intersection arithmetic is inexact, so the clipper validates
    /// its candidates with [`ON_SIDE_PRECISION`].
    #[must_use]
    pub fn test_on_side(&self, point: Vector2, precision: f64) -> bool {
        let Vector2 { x, y } = point;
        if precision == 0.0 {
            return ((x == self.left || x == self.right) && y >= self.bottom && y <= self.top)
                || ((y == self.top || y == self.bottom) && x >= self.left && x <= self.right);
        }
        let x_close = are_close(x, self.left, precision) || are_close(x, self.right, precision);
        if x_close && y >= self.bottom && y <= self.top {
            return true;
        }
        let y_close = are_close(y, self.bottom, precision) || are_close(y, self.top, precision);
        y_close && ((x >= self.left && x <= self.right) || x_close)
    }

    /// Returns `true` if the point coincides with one of the four corners.
    #[must_use]
    pub fn test_on_corner(&self, point: Vector2, precision: f64) -> bool {
        let Vector2 { x, y } = point;
        (are_close(x, self.left, precision) || are_close(x, self.right, precision))
            && (are_close(y, self.top, precision) || are_close(y, self.bottom, precision))
    }

    /// Classifies a point against the rectangle.
    ///
    /// With `side_is_inside == false`, points exactly on an edge count as
    /// inside. With `true`, they count as outside that edge; the clipper uses
    /// this so that a boundary point always gets a candidate intersection
    /// (itself) and validation terminates.
    ///
    /// A NaN coordinate lies beyond `LEFT` (for X) or `BOTTOM` (for Y). A
    /// degenerate rectangle puts every point at `LEFT | BOTTOM`.
    #[must_use]
    pub fn point_direction(&self, point: Vector2, side_is_inside: bool) -> Direction {
        if self.is_degenerate() {
            return Direction::LEFT | Direction::BOTTOM;
        }
        let Vector2 { x, y } = point;
        let mut direction = Direction::INSIDE;
        let (beyond_left, beyond_right) = if side_is_inside {
            (x <= self.left, x >= self.right)
        } else {
            (x < self.left, x > self.right)
        };
        if beyond_left || x.is_nan() {
            direction |= Direction::LEFT;
        } else if beyond_right {
            direction |= Direction::RIGHT;
        }
        let (beyond_bottom, beyond_top) = if side_is_inside {
            (y <= self.bottom, y >= self.top)
        } else {
            (y < self.bottom, y > self.top)
        };
        if beyond_bottom || y.is_nan() {
            direction |= Direction::BOTTOM;
        } else if beyond_top {
            direction |= Direction::TOP;
        }
        direction
    }

    /// X coordinate of the vertical edge named by a horizontal code.
    pub(crate) fn vertical_edge(&self, horizontal: Direction) -> f64 {
        if horizontal == Direction::LEFT {
            self.left
        } else {
            self.right
        }
    }

    /// Y coordinate of the horizontal edge named by a vertical code.
    pub(crate) fn horizontal_edge(&self, vertical: Direction) -> f64 {
        if vertical == Direction::BOTTOM {
            self.bottom
        } else {
            self.top
        }
    }

    /// Converts into a [`kurbo::Rect`] with `y0 = bottom` and `y1 = top`.
    #[must_use]
    pub fn to_kurbo(&self) -> Rect {
        Rect::new(self.left, self.bottom, self.right, self.top)
    }
}

impl From<Rect> for ZeroAngleRect {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x0, rect.x1, rect.y1, rect.y0)
    }
}

impl fmt::Debug for ZeroAngleRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:?}-{:?}; {:?}-{:?})",
            self.left, self.right, self.bottom, self.top
        )
    }
}

fn are_close(a: f64, b: f64, precision: f64) -> bool {
    if a == b {
        return true;
    }
    (a - b).abs() <= precision * a.abs().max(b.abs()).max(1.0)
}
