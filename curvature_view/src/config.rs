// Copyright 2025 the Curvature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use curvature_geom::Vector2;

use crate::CameraState;

/// How scale animations interpolate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScaleMode {
    /// Interpolate in `ln(scale)` space: a constant multiplicative zoom rate.
    #[default]
    Logarithmic,
    /// Interpolate the scale vector itself at a constant absolute rate.
    Linear,
}

/// Settings for programmatic camera animations.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct AnimationConfig {
    /// Interpolation used by scale animations.
    pub scale_mode: ScaleMode,
}

impl AnimationConfig {
    /// Sets the scale interpolation mode.
    #[must_use]
    pub fn with_scale_mode(mut self, scale_mode: ScaleMode) -> Self {
        self.scale_mode = scale_mode;
        self
    }
}

/// Settings for a [`GraphDrawer`](crate::GraphDrawer).
///
/// Defaults: focus at the origin, a scale of 10 on both axes, a 300×100
/// surface, a 16 ms update period and a delta time capped at one second.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerConfig {
    /// Focus of the camera on creation.
    pub initial_focus: Vector2,
    /// Scale of the camera on creation.
    pub initial_scale: Vector2,
    /// Surface size on creation, in device pixels.
    pub initial_size: Vector2,
    /// Expected interval between ticks. Its length in seconds is the delta
    /// time reported by the first tick after an idle period.
    pub update_period_ms: f64,
    /// Upper bound for the delta time handed to drawables, in seconds.
    pub max_delta: f64,
    /// Animation settings.
    pub animation: AnimationConfig,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            initial_focus: Vector2::ZERO,
            initial_scale: Vector2::splat(10.0),
            initial_size: Vector2::new(300.0, 100.0),
            update_period_ms: 16.0,
            max_delta: 1.0,
            animation: AnimationConfig::default(),
        }
    }
}

impl DrawerConfig {
    /// Sets the initial focus.
    #[must_use]
    pub fn with_focus(mut self, focus: impl Into<Vector2>) -> Self {
        self.initial_focus = focus.into();
        self
    }

    /// Sets the initial scale. A plain number applies to both axes.
    #[must_use]
    pub fn with_scale(mut self, scale: impl Into<Vector2>) -> Self {
        self.initial_scale = scale.into();
        self
    }

    /// Sets the initial surface size.
    #[must_use]
    pub fn with_size(mut self, size: impl Into<Vector2>) -> Self {
        self.initial_size = size.into();
        self
    }

    /// Sets the update period.
    #[must_use]
    pub fn with_update_period_ms(mut self, update_period_ms: f64) -> Self {
        self.update_period_ms = update_period_ms;
        self
    }

    /// Sets the delta time cap.
    #[must_use]
    pub fn with_max_delta(mut self, max_delta: f64) -> Self {
        self.max_delta = max_delta;
        self
    }

    /// Sets the animation settings.
    #[must_use]
    pub fn with_animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }

    /// Delta time for the first tick after an idle period, in seconds.
    #[must_use]
    pub fn default_delta(&self) -> f64 {
        self.update_period_ms / 1000.0
    }

    /// Initial camera state.
    #[must_use]
    pub fn initial_state(&self) -> CameraState {
        CameraState {
            focus: self.initial_focus,
            scale: self.initial_scale,
            size: self.initial_size,
        }
    }
}
