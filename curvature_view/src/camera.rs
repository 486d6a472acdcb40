// Copyright 2025 the Curvature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use curvature_geom::{Vector2, ZeroAngleRect};
use kurbo::{Affine, Rect};

/// Camera inputs: what is looked at, how much of it, and on how many pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    /// Coordinate-space point rendered at the surface center.
    pub focus: Vector2,
    /// Coordinate-space span covered by the shorter surface axis, per axis.
    pub scale: Vector2,
    /// Surface size in device pixels.
    pub size: Vector2,
}

/// Frozen pixel/coordinate mapping derived from a [`CameraState`].
///
/// Pixel space has its origin at the top-left corner of the surface with Y
/// growing downward. Coordinate space has Y growing upward, so the Y component
/// of [`Viewport::coord_per_pixel`] is negative. Both axes divide the scale by
/// the *shorter* surface side, which keeps a uniform scale circular on any
/// aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    state: CameraState,
    coord_per_pixel: Vector2,
    drawing_zone: ZeroAngleRect,
    pixel_to_absolute: Affine,
    absolute_to_pixel: Affine,
}

impl Viewport {
    /// Derives the mapping for the given camera state.
    #[must_use]
    pub fn new(state: CameraState) -> Self {
        let min_side = state.size.min_component();
        let coord_per_pixel = state.scale.divide_by(Vector2::new(min_side, -min_side));
        let half = state.size.scale_by(coord_per_pixel).divide(2.0);
        let drawing_zone =
            ZeroAngleRect::by_points(state.focus.plus(half), state.focus.minus(half));
        let corner = drawing_zone.top_left();
        // Pixel → coordinate: scale by the (Y-flipped) pixel size, then move
        // the pixel origin onto the top-left corner of the visible zone.
        let pixel_to_absolute = Affine::translate(corner.to_vec2())
            * Affine::scale_non_uniform(coord_per_pixel.x, coord_per_pixel.y);
        Self {
            state,
            coord_per_pixel,
            drawing_zone,
            pixel_to_absolute,
            absolute_to_pixel: pixel_to_absolute.inverse(),
        }
    }

    /// Camera state this viewport was derived from.
    #[must_use]
    pub fn state(&self) -> CameraState {
        self.state
    }

    /// Focus point.
    #[must_use]
    pub fn focus(&self) -> Vector2 {
        self.state.focus
    }

    /// Scale vector.
    #[must_use]
    pub fn scale(&self) -> Vector2 {
        self.state.scale
    }

    /// Surface size in pixels.
    #[must_use]
    pub fn size(&self) -> Vector2 {
        self.state.size
    }

    /// Coordinate units per device pixel; the Y component is negative.
    #[must_use]
    pub fn coord_per_pixel(&self) -> Vector2 {
        self.coord_per_pixel
    }

    /// Visible coordinate-space rectangle.
    #[must_use]
    pub fn drawing_zone(&self) -> ZeroAngleRect {
        self.drawing_zone
    }

    /// Surface rectangle in pixels.
    #[must_use]
    pub fn pixel_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.state.size.x, self.state.size.y)
    }

    /// Transform from pixel space to coordinate space.
    #[must_use]
    pub fn pixel_to_absolute_transform(&self) -> Affine {
        self.pixel_to_absolute
    }

    /// Transform from coordinate space to pixel space.
    #[must_use]
    pub fn absolute_to_pixel_transform(&self) -> Affine {
        self.absolute_to_pixel
    }

    /// Maps a coordinate-space point to the integer pixel grid.
    #[must_use]
    pub fn absolute_to_pixel(&self, point: Vector2) -> Vector2 {
        self.absolute_to_pixel_exact(point).round()
    }

    /// Maps a coordinate-space point to pixel space without rounding.
    #[must_use]
    pub fn absolute_to_pixel_exact(&self, point: Vector2) -> Vector2 {
        (self.absolute_to_pixel * point.to_point()).into()
    }

    /// Maps a pixel-space point to coordinate space.
    #[must_use]
    pub fn pixel_to_absolute(&self, point: Vector2) -> Vector2 {
        (self.pixel_to_absolute * point.to_point()).into()
    }
}

/// Owner of the camera state and the redraw flag.
///
/// Every mutation goes through a setter that reports whether anything
/// changed; a change marks the camera dirty so the next tick redraws.
/// A fresh camera starts dirty.
#[derive(Clone, Debug)]
pub struct Camera {
    state: CameraState,
    dirty: bool,
}

impl Camera {
    /// Creates a camera that will draw on the next tick.
    #[must_use]
    pub fn new(state: CameraState) -> Self {
        Self { state, dirty: true }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> CameraState {
        self.state
    }

    /// Current focus.
    #[must_use]
    pub fn focus(&self) -> Vector2 {
        self.state.focus
    }

    /// Current scale.
    #[must_use]
    pub fn scale(&self) -> Vector2 {
        self.state.scale
    }

    /// Current surface size.
    #[must_use]
    pub fn size(&self) -> Vector2 {
        self.state.size
    }

    /// Viewport for the current state.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.state)
    }

    /// Sets the focus. Returns `false` when it is numerically unchanged.
    pub fn set_focus(&mut self, focus: impl Into<Vector2>) -> bool {
        let focus = focus.into();
        if focus == self.state.focus {
            return false;
        }
        self.state.focus = focus;
        self.dirty = true;
        true
    }

    /// Sets the scale. Returns `false` when it is numerically unchanged.
    pub fn set_scale(&mut self, scale: impl Into<Vector2>) -> bool {
        let scale = scale.into();
        if scale == self.state.scale {
            return false;
        }
        self.state.scale = scale;
        self.dirty = true;
        true
    }

    /// Sets the surface size.
    ///
    /// Sizes are compared bit for bit, so re-applying an unknown (NaN) size
    /// is not reported as a change.
    pub fn set_size(&mut self, size: impl Into<Vector2>) -> bool {
        let size = size.into();
        if size.same_bits(self.state.size) {
            return false;
        }
        self.state.size = size;
        self.dirty = true;
        true
    }

    /// Returns `true` when the next tick must redraw.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clears the redraw flag, returning its previous value.
    pub fn take_dirty(&mut self) -> bool {
        core::mem::take(&mut self.dirty)
    }

    /// Forces a redraw on the next tick.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }
}
