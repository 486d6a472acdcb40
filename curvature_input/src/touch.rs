// Copyright 2025 the Curvature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan with one finger, pan and pinch-zoom with two.
//!
//! Touch positions are surface pixels. Each handler takes the full list of
//! touches currently on the surface, as touch events report them.

use curvature_geom::Vector2;
use curvature_view::Camera;
use tracing::trace;

use crate::GestureResponse;
use crate::wheel::{MAX_SCALE, MIN_SCALE, zoom_about, zoom_scale};

/// Settings for [`TouchZoom`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchConfig {
    /// Lower scale limit per axis.
    pub min_scale: f64,
    /// Upper scale limit per axis.
    pub max_scale: f64,
}

impl Default for TouchConfig {
    fn default() -> Self {
        Self {
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
        }
    }
}

impl TouchConfig {
    /// Sets the scale limits. They are swapped if given in the wrong order.
    #[must_use]
    pub fn with_scale_limits(mut self, min_scale: f64, max_scale: f64) -> Self {
        self.min_scale = min_scale.min(max_scale);
        self.max_scale = max_scale.max(min_scale);
        self
    }
}

/// Touches seen by the previous event.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Contact {
    One(Vector2),
    Two { center: Vector2, distance: f64 },
}

impl Contact {
    fn from_touches(touches: &[Vector2]) -> Option<Self> {
        match touches {
            [one] => Some(Self::One(*one)),
            [a, b] => Some(Self::Two {
                center: a.plus(*b).divide(2.0),
                distance: a.minus(*b).length(),
            }),
            _ => None,
        }
    }
}

/// Touch pan and pinch gesture handler.
#[derive(Clone, Debug, Default)]
pub struct TouchZoom {
    config: TouchConfig,
    last: Option<Contact>,
}

impl TouchZoom {
    /// Creates a handler.
    #[must_use]
    pub fn new(config: TouchConfig) -> Self {
        Self { config, last: None }
    }

    /// Settings in use.
    #[must_use]
    pub fn config(&self) -> &TouchConfig {
        &self.config
    }

    /// Returns `true` while a one or two finger gesture is tracked.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.last.is_some()
    }

    /// Touches began. Gestures with more than two fingers are not tracked.
    pub fn on_touch_start(&mut self, touches: &[Vector2]) -> GestureResponse {
        self.last = Contact::from_touches(touches);
        if self.last.is_some() {
            GestureResponse::HANDLED
        } else {
            GestureResponse::IGNORED
        }
    }

    /// Touches moved.
    ///
    /// A change in finger count restarts the gesture from the new touches
    /// without moving the camera.
    pub fn on_touch_move(&mut self, camera: &mut Camera, touches: &[Vector2]) -> GestureResponse {
        let current = Contact::from_touches(touches);
        let previous = core::mem::replace(&mut self.last, current);
        match (previous, current) {
            (Some(Contact::One(last)), Some(Contact::One(touch))) => {
                let cpp = camera.viewport().coord_per_pixel();
                let focus = camera.focus().minus(touch.minus(last).scale_by(cpp));
                trace!(%focus, "touch pan");
                camera.set_focus(focus);
                GestureResponse::HANDLED
            }
            (
                Some(Contact::Two {
                    center: last_center,
                    distance: last_distance,
                }),
                Some(Contact::Two { center, distance }),
            ) => {
                let cpp = camera.viewport().coord_per_pixel();
                camera.set_focus(camera.focus().minus(center.minus(last_center).scale_by(cpp)));
                if distance > 0.0 && last_distance > 0.0 {
                    let delta = (distance / last_distance).ln();
                    let new_scale = zoom_scale(
                        camera.scale(),
                        delta,
                        self.config.min_scale,
                        self.config.max_scale,
                    );
                    let anchor = camera.viewport().pixel_to_absolute(center);
                    trace!(%new_scale, %anchor, "pinch zoom");
                    zoom_about(camera, anchor, new_scale);
                }
                GestureResponse::HANDLED
            }
            (_, Some(_)) => GestureResponse::HANDLED,
            (_, None) => GestureResponse::IGNORED,
        }
    }

    /// Touches ended or were cancelled. Forgets the gesture.
    pub fn on_touch_end(&mut self) -> GestureResponse {
        let was_active = self.last.take().is_some();
        GestureResponse {
            handled: was_active,
        }
    }
}
