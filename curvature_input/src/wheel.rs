// Copyright 2025 the Curvature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom the camera with the mouse wheel.

use curvature_geom::Vector2;
use curvature_view::Camera;
use tracing::{debug, trace};

use crate::GestureResponse;

/// Smallest scale reachable by gestures.
pub const MIN_SCALE: f64 = 1e-10;
/// Largest scale reachable by gestures.
pub const MAX_SCALE: f64 = 1e20;

/// Point that stays put while zooming.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ZoomAnchor {
    /// The coordinate under the pointer keeps its pixel position.
    #[default]
    Pointer,
    /// The focus is kept; zoom happens around the surface center.
    Center,
}

/// Settings for [`WheelZoom`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelConfig {
    /// Zoom rate. One wheel unit changes `log10(scale)` by `speed / 10000`.
    pub speed: f64,
    /// Lower scale limit per axis.
    pub min_scale: f64,
    /// Upper scale limit per axis.
    pub max_scale: f64,
    /// Where the zoom is anchored.
    pub anchor: ZoomAnchor,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            speed: 3.0,
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            anchor: ZoomAnchor::Pointer,
        }
    }
}

impl WheelConfig {
    /// Sets the zoom rate.
    #[must_use]
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Sets the scale limits. They are swapped if given in the wrong order.
    #[must_use]
    pub fn with_scale_limits(mut self, min_scale: f64, max_scale: f64) -> Self {
        self.min_scale = min_scale.min(max_scale);
        self.max_scale = max_scale.max(min_scale);
        self
    }

    /// Sets the zoom anchor.
    #[must_use]
    pub fn with_anchor(mut self, anchor: ZoomAnchor) -> Self {
        self.anchor = anchor;
        self
    }
}

/// `10^(log10(scale) - delta)` per axis, clamped to `[min, max]`.
pub fn zoom_scale(scale: Vector2, delta: f64, min: f64, max: f64) -> Vector2 {
    scale
        .log10()
        .minus(Vector2::splat(delta))
        .pow10()
        .clamp(Vector2::splat(min), Vector2::splat(max))
}

/// Sets the scale so that `anchor` (in coordinate space) keeps its pixel
/// position. Returns `true` if the camera changed.
pub fn zoom_about(camera: &mut Camera, anchor: Vector2, new_scale: Vector2) -> bool {
    let ratio = new_scale.divide_by(camera.scale());
    let focus = anchor.minus(anchor.minus(camera.focus()).scale_by(ratio));
    let scaled = camera.set_scale(new_scale);
    let moved = camera.set_focus(focus);
    scaled || moved
}

/// Wheel-to-zoom gesture handler.
#[derive(Clone, Copy, Debug, Default)]
pub struct WheelZoom {
    config: WheelConfig,
}

impl WheelZoom {
    /// Creates a handler.
    #[must_use]
    pub fn new(config: WheelConfig) -> Self {
        Self { config }
    }

    /// Settings in use.
    #[must_use]
    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    /// Handles a wheel event.
    ///
    /// `pointer` is in surface pixels; `delta_y` is the vertical wheel delta
    /// as reported by the host, positive when scrolling down. Scrolling down
    /// zooms out.
    pub fn on_wheel(&self, camera: &mut Camera, pointer: Vector2, delta_y: f64) -> GestureResponse {
        if !delta_y.is_finite() {
            debug!(delta_y, "ignoring non-finite wheel delta");
            return GestureResponse::IGNORED;
        }
        let delta = delta_y * self.config.speed / -10_000.0;
        let new_scale = zoom_scale(
            camera.scale(),
            delta,
            self.config.min_scale,
            self.config.max_scale,
        );
        trace!(%new_scale, delta_y, "wheel zoom");
        match self.config.anchor {
            ZoomAnchor::Pointer => {
                let anchor = camera.viewport().pixel_to_absolute(pointer);
                zoom_about(camera, anchor, new_scale);
            }
            ZoomAnchor::Center => {
                camera.set_scale(new_scale);
            }
        }
        GestureResponse::HANDLED
    }
}
