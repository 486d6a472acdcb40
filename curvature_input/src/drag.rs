// Copyright 2025 the Curvature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan the camera by dragging with a mouse button held.
//!
//! ## Usage
//!
//! 1) Feed button presses to [`DragPan::on_pointer_down`].
//! 2) Feed moves to [`DragPan::on_pointer_move`] with the buttons currently
//!    held; the camera focus follows the pointer.
//! 3) Feed releases to [`DragPan::on_pointer_up`].
//!
//! Hosts that report relative movement instead of positions can call
//! [`DragPan::on_movement`] directly.
//!
//! ```
//! use curvature_geom::Vector2;
//! use curvature_input::drag::{DragConfig, DragPan, MouseButtons};
//! use curvature_view::{Camera, CameraState};
//! use kurbo::Point;
//!
//! let mut camera = Camera::new(CameraState {
//!     focus: Vector2::ZERO,
//!     scale: Vector2::splat(10.0),
//!     size: Vector2::splat(100.0),
//! });
//! let mut pan = DragPan::new(DragConfig::default());
//!
//! pan.on_pointer_down(Point::new(50.0, 50.0), MouseButtons::PRIMARY);
//! pan.on_pointer_move(&mut camera, Point::new(60.0, 50.0), MouseButtons::PRIMARY);
//! // Ten pixels right at 0.1 units per pixel: the content follows the pointer.
//! assert_eq!(camera.focus(), Vector2::new(-1.0, 0.0));
//! ```

use curvature_geom::Vector2;
use curvature_view::Camera;
use kurbo::{Point, Vec2};
use tracing::trace;

use crate::GestureResponse;

bitflags::bitflags! {
    /// Mouse buttons, numbered the way pointer events report them.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct MouseButtons: u8 {
        /// Usually the left button.
        const PRIMARY   = 1;
        /// Usually the right button.
        const SECONDARY = 2;
        /// Usually the wheel button.
        const AUXILIARY = 4;
        /// Browser back.
        const BACK      = 8;
        /// Browser forward.
        const FORWARD   = 16;
    }
}

impl Default for MouseButtons {
    fn default() -> Self {
        Self::PRIMARY
    }
}

/// Settings for [`DragPan`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragConfig {
    /// Buttons that pan when held. Any one of them is enough.
    pub buttons: MouseButtons,
    /// Device pixels per reported pixel. Movement is divided by this ratio.
    pub device_pixel_ratio: f64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            buttons: MouseButtons::PRIMARY,
            device_pixel_ratio: 1.0,
        }
    }
}

impl DragConfig {
    /// Sets the buttons that pan.
    #[must_use]
    pub fn with_buttons(mut self, buttons: MouseButtons) -> Self {
        self.buttons = buttons;
        self
    }

    /// Sets the device pixel ratio.
    #[must_use]
    pub fn with_device_pixel_ratio(mut self, device_pixel_ratio: f64) -> Self {
        self.device_pixel_ratio = device_pixel_ratio;
        self
    }
}

/// Pointer position of a drag in progress.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct DragState {
    last: Option<Point>,
}

impl DragState {
    /// Starts tracking a drag from `pos`.
    pub fn start(&mut self, pos: Point) {
        self.last = Some(pos);
    }

    /// Records `pos`, returning the movement since the previous position.
    ///
    /// Returns `None` when no drag is in progress.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let last = self.last?;
        self.last = Some(pos);
        Some(pos - last)
    }

    /// Stops tracking.
    pub fn end(&mut self) {
        self.last = None;
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.last.is_some()
    }
}

/// Drag-to-pan gesture handler.
#[derive(Debug, Clone, Default)]
pub struct DragPan {
    config: DragConfig,
    state: DragState,
}

impl DragPan {
    /// Creates a handler.
    #[must_use]
    pub fn new(config: DragConfig) -> Self {
        Self {
            config,
            state: DragState::default(),
        }
    }

    /// Settings in use.
    #[must_use]
    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    /// Drag positions tracked so far.
    #[must_use]
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// A button went down at `pos`. `buttons` is the full set now held.
    pub fn on_pointer_down(&mut self, pos: Point, buttons: MouseButtons) -> GestureResponse {
        if !buttons.intersects(self.config.buttons) {
            return GestureResponse::IGNORED;
        }
        self.state.start(pos);
        GestureResponse::HANDLED
    }

    /// The pointer moved to `pos` with `buttons` held.
    ///
    /// Pans while a configured button is held. Releasing every configured
    /// button ends the drag even if the release event itself was missed.
    pub fn on_pointer_move(
        &mut self,
        camera: &mut Camera,
        pos: Point,
        buttons: MouseButtons,
    ) -> GestureResponse {
        if !buttons.intersects(self.config.buttons) {
            self.state.end();
            return GestureResponse::IGNORED;
        }
        if !self.state.is_dragging() {
            // Pressed outside the surface and dragged in.
            self.state.start(pos);
            return GestureResponse::HANDLED;
        }
        match self.state.update(pos) {
            Some(delta) => self.on_movement(camera, delta, buttons),
            None => GestureResponse::HANDLED,
        }
    }

    /// A button was released. `buttons` is the set still held.
    pub fn on_pointer_up(&mut self, buttons: MouseButtons) -> GestureResponse {
        if buttons.intersects(self.config.buttons) || !self.state.is_dragging() {
            return GestureResponse::IGNORED;
        }
        self.state.end();
        GestureResponse::HANDLED
    }

    /// Pans by a relative movement in reported pixels.
    pub fn on_movement(
        &mut self,
        camera: &mut Camera,
        movement: Vec2,
        buttons: MouseButtons,
    ) -> GestureResponse {
        if !buttons.intersects(self.config.buttons) {
            return GestureResponse::IGNORED;
        }
        let pixels = Vector2::from(movement).divide(self.config.device_pixel_ratio);
        let cpp = camera.viewport().coord_per_pixel();
        let focus = camera.focus().minus(pixels.scale_by(cpp));
        trace!(%focus, "drag pan");
        camera.set_focus(focus);
        GestureResponse::HANDLED
    }
}

#[cfg(test)]
mod tests {
    use curvature_geom::Vector2;
    use curvature_view::{Camera, CameraState};
    use kurbo::{Point, Vec2};

    use super::{DragConfig, DragPan, DragState, MouseButtons};

    fn camera() -> Camera {
        Camera::new(CameraState {
            focus: Vector2::ZERO,
            scale: Vector2::splat(10.0),
            size: Vector2::splat(100.0),
        })
    }

    #[test]
    fn drag_state_tracks_incremental_deltas() {
        let mut drag = DragState::default();
        assert_eq!(drag.update(Point::new(1.0, 1.0)), None);
        drag.start(Point::new(0.0, 0.0));
        assert_eq!(drag.update(Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(drag.update(Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
        drag.end();
        assert!(!drag.is_dragging());
        assert_eq!(drag.update(Point::new(10.0, 10.0)), None);
        assert!(!drag.is_dragging(), "updates alone never start a drag");
    }

    #[test]
    fn moving_down_moves_focus_up() {
        let mut camera = camera();
        let mut pan = DragPan::default();
        let held = MouseButtons::PRIMARY;
        pan.on_movement(&mut camera, Vec2::new(0.0, 20.0), held);
        assert_eq!(camera.focus(), Vector2::new(0.0, 2.0));
    }

    #[test]
    fn device_pixel_ratio_divides_movement() {
        let mut camera = camera();
        let mut pan = DragPan::new(DragConfig::default().with_device_pixel_ratio(2.0));
        pan.on_movement(&mut camera, Vec2::new(20.0, 0.0), MouseButtons::PRIMARY);
        assert_eq!(camera.focus(), Vector2::new(-1.0, 0.0));
    }

    #[test]
    fn other_buttons_are_ignored() {
        let mut camera = camera();
        let mut pan = DragPan::default();
        let response = pan.on_movement(&mut camera, Vec2::new(20.0, 0.0), MouseButtons::SECONDARY);
        assert!(!response.handled);
        assert_eq!(camera.focus(), Vector2::ZERO);

        let mut pan = DragPan::new(
            DragConfig::default().with_buttons(MouseButtons::SECONDARY | MouseButtons::AUXILIARY),
        );
        let response = pan.on_movement(&mut camera, Vec2::new(20.0, 0.0), MouseButtons::AUXILIARY);
        assert!(response.handled);
    }

    #[test]
    fn releasing_the_button_ends_the_drag() {
        let mut camera = camera();
        let mut pan = DragPan::default();
        pan.on_pointer_down(Point::new(0.0, 0.0), MouseButtons::PRIMARY);
        assert!(pan.on_pointer_up(MouseButtons::empty()).handled);
        assert!(!pan.state().is_dragging());

        let response =
            pan.on_pointer_move(&mut camera, Point::new(5.0, 0.0), MouseButtons::empty());
        assert!(!response.handled);
        assert_eq!(camera.focus(), Vector2::ZERO);
    }

    #[test]
    fn entering_with_button_held_starts_without_jump() {
        let mut camera = camera();
        let mut pan = DragPan::default();
        pan.on_pointer_move(&mut camera, Point::new(40.0, 40.0), MouseButtons::PRIMARY);
        assert_eq!(camera.focus(), Vector2::ZERO);
        pan.on_pointer_move(&mut camera, Point::new(30.0, 40.0), MouseButtons::PRIMARY);
        assert_eq!(camera.focus(), Vector2::new(1.0, 0.0));
    }
}
