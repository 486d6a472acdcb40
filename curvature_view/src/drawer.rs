// Copyright 2025 the Curvature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use curvature_geom::Vector2;
use tracing::{debug, trace, warn};

use crate::{
    Camera, DeltaTimer, DrawError, Drawable, DrawableId, DrawerConfig, FocusAnimation, Frame,
    ScaleAnimation, ScaleMode, Scheduler, Surface, Viewport,
};

/// Priority of camera animations: after everything else in the frame.
pub const ANIMATION_PRIORITY: f64 = f64::INFINITY;

/// Owns a camera and a scheduler and decides when a frame is drawn.
///
/// The host calls [`GraphDrawer::tick`] once per display refresh with its
/// clock. A frame is only drawn when something marked the camera dirty:
/// a camera change, an attach or detach, or [`GraphDrawer::request_redraw`].
#[derive(Debug)]
pub struct GraphDrawer {
    config: DrawerConfig,
    camera: Camera,
    scheduler: Scheduler,
    delta: DeltaTimer,
    focus_animation: Option<DrawableId>,
    scale_animation: Option<DrawableId>,
    last_viewport: Viewport,
}

impl Default for GraphDrawer {
    fn default() -> Self {
        Self::new(DrawerConfig::default())
    }
}

impl GraphDrawer {
    /// Creates a drawer. The first tick always draws.
    #[must_use]
    pub fn new(config: DrawerConfig) -> Self {
        let camera = Camera::new(config.initial_state());
        Self {
            last_viewport: camera.viewport(),
            delta: DeltaTimer::new(config.default_delta(), config.max_delta),
            camera,
            scheduler: Scheduler::new(),
            focus_animation: None,
            scale_animation: None,
            config,
        }
    }

    /// Configuration this drawer was created with.
    #[must_use]
    pub fn config(&self) -> &DrawerConfig {
        &self.config
    }

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The camera, for direct changes. Setters that report a change schedule
    /// a redraw.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// The drawables, read-only.
    #[must_use]
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Viewport of the most recently drawn frame, or of the initial camera
    /// state before the first frame.
    #[must_use]
    pub fn last_viewport(&self) -> &Viewport {
        &self.last_viewport
    }

    /// Registers a drawable and schedules a redraw.
    pub fn attach(&mut self, drawable: impl Drawable + 'static, priority: f64) -> DrawableId {
        self.camera.invalidate();
        self.scheduler.attach(drawable, priority)
    }

    /// Registers a closure and schedules a redraw.
    pub fn attach_fn<F>(&mut self, draw: F, priority: f64) -> DrawableId
    where
        F: FnMut(&mut Frame<'_>) -> Result<(), DrawError> + 'static,
    {
        self.camera.invalidate();
        self.scheduler.attach_fn(draw, priority)
    }

    /// Unregisters a drawable and schedules a redraw.
    ///
    /// Returns `false` if it was not attached.
    pub fn detach(&mut self, id: DrawableId) -> bool {
        if !self.scheduler.detach(id) {
            return false;
        }
        if self.focus_animation == Some(id) {
            self.focus_animation = None;
        }
        if self.scale_animation == Some(id) {
            self.scale_animation = None;
        }
        self.camera.invalidate();
        true
    }

    /// Forces a redraw on the next tick.
    pub fn request_redraw(&mut self) {
        self.camera.invalidate();
    }

    /// Attaches a drawable that requests a redraw on every frame, so ticks
    /// never go idle. Detach it to stop.
    ///
    /// Use it when a drawable depends on something other than the camera,
    /// such as the clock.
    pub fn keep_redrawing(&mut self) -> DrawableId {
        self.attach_fn(
            |frame| {
                frame.camera_mut().invalidate();
                Ok(())
            },
            f64::NEG_INFINITY,
        )
    }

    /// Updates the surface size. Returns `true` if it changed.
    pub fn resize(&mut self, size: impl Into<Vector2>) -> bool {
        self.camera.set_size(size)
    }

    /// Draws a frame if one is due.
    ///
    /// `now_ms` is the host clock in milliseconds. Returns `true` if a
    /// frame was drawn. Idle ticks reset the delta timer, so the first frame
    /// after a pause gets the default delta time.
    pub fn tick(&mut self, surface: &mut dyn Surface, now_ms: f64) -> bool {
        if !self.camera.take_dirty() {
            trace!(now_ms, "camera unchanged; skipping tick");
            self.delta.reset();
            return false;
        }
        let delta_time = self.delta.get(now_ms);
        self.last_viewport = self.scheduler.update(surface, &mut self.camera, delta_time);
        self.forget_finished_animations();
        true
    }

    /// Animates the focus to `target` over `time` seconds.
    ///
    /// Replaces any focus animation in flight. A `time` that is not
    /// positive moves the camera at once and returns `None`. A target with a
    /// non-finite component is ignored and also returns `None`.
    pub fn animate_focus(&mut self, target: impl Into<Vector2>, time: f64) -> Option<DrawableId> {
        let target = target.into();
        let animation = FocusAnimation::new(self.camera.focus(), target, time);
        if !animation.is_reachable() {
            warn!(%target, "ignoring focus animation to a non-finite target");
            return None;
        }
        Self::cancel(&mut self.scheduler, &mut self.focus_animation, "focus");
        if time.is_nan() || time <= 0.0 {
            self.camera.set_focus(target);
            return None;
        }
        debug!(%target, time, "starting focus animation");
        let id = self.attach(animation, ANIMATION_PRIORITY);
        self.focus_animation = Some(id);
        Some(id)
    }

    /// Animates the scale to `target` over `time` seconds using the
    /// configured [`ScaleMode`].
    pub fn animate_scale(&mut self, target: impl Into<Vector2>, time: f64) -> Option<DrawableId> {
        let mode = self.config.animation.scale_mode;
        self.animate_scale_with(target, time, mode)
    }

    /// Animates the scale to `target` over `time` seconds.
    ///
    /// Replaces any scale animation in flight. A `time` that is not
    /// positive applies the scale at once and returns `None`. A target that
    /// cannot be reached is ignored and also returns `None`: one with a
    /// non-finite component, or in [`ScaleMode::Logarithmic`] one that is
    /// not positive on both axes.
    pub fn animate_scale_with(
        &mut self,
        target: impl Into<Vector2>,
        time: f64,
        mode: ScaleMode,
    ) -> Option<DrawableId> {
        let target = target.into();
        let animation = ScaleAnimation::new(self.camera.scale(), target, time, mode);
        if !animation.is_reachable() {
            warn!(%target, ?mode, "ignoring scale animation to an unreachable target");
            return None;
        }
        Self::cancel(&mut self.scheduler, &mut self.scale_animation, "scale");
        if time.is_nan() || time <= 0.0 {
            self.camera.set_scale(target);
            return None;
        }
        debug!(%target, time, ?mode, "starting scale animation");
        let id = self.attach(animation, ANIMATION_PRIORITY);
        self.scale_animation = Some(id);
        Some(id)
    }

    /// Id of the focus animation in flight, if any.
    #[must_use]
    pub fn focus_animation(&self) -> Option<DrawableId> {
        self.focus_animation
    }

    /// Id of the scale animation in flight, if any.
    #[must_use]
    pub fn scale_animation(&self) -> Option<DrawableId> {
        self.scale_animation
    }

    fn cancel(scheduler: &mut Scheduler, slot: &mut Option<DrawableId>, what: &'static str) {
        if let Some(id) = slot.take() {
            if scheduler.detach(id) {
                debug!(?id, what, "replacing animation in flight");
            }
        }
    }

    fn forget_finished_animations(&mut self) {
        for slot in [&mut self.focus_animation, &mut self.scale_animation] {
            if slot.is_some_and(|id| !self.scheduler.contains(id)) {
                *slot = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use curvature_geom::Vector2;

    use super::GraphDrawer;
    use crate::{DrawerConfig, RecordingSurface};

    #[test]
    fn first_tick_draws_then_goes_idle() {
        let mut drawer = GraphDrawer::default();
        let mut surface = RecordingSurface::new();
        assert!(drawer.tick(&mut surface, 0.0));
        assert!(!drawer.tick(&mut surface, 16.0));
        assert_eq!(surface.frame_count(), 1);
    }

    #[test]
    fn attach_and_detach_schedule_redraws() {
        let mut drawer = GraphDrawer::default();
        let mut surface = RecordingSurface::new();
        drawer.tick(&mut surface, 0.0);

        let id = drawer.attach_fn(|_| Ok(()), 0.0);
        assert!(drawer.tick(&mut surface, 16.0));
        assert!(!drawer.tick(&mut surface, 32.0));

        assert!(drawer.detach(id));
        assert!(drawer.tick(&mut surface, 48.0));
        assert!(!drawer.detach(id));
        assert!(!drawer.tick(&mut surface, 64.0));
    }

    #[test]
    fn zero_time_animation_applies_at_once() {
        let mut drawer = GraphDrawer::new(DrawerConfig::default().with_size((100.0, 100.0)));
        assert_eq!(drawer.animate_focus((3.0, 4.0), 0.0), None);
        assert_eq!(drawer.camera().focus(), Vector2::new(3.0, 4.0));
        assert!(drawer.scheduler().is_empty());
    }

    #[test]
    fn keep_redrawing_never_idles() {
        let mut drawer = GraphDrawer::default();
        let mut surface = RecordingSurface::new();
        drawer.keep_redrawing();
        for i in 0..5 {
            assert!(drawer.tick(&mut surface, f64::from(i) * 16.0));
        }
    }

    #[test]
    fn resize_changes_the_next_viewport() {
        let mut drawer = GraphDrawer::default();
        let mut surface = RecordingSurface::new();
        drawer.tick(&mut surface, 0.0);
        assert!(drawer.resize((200.0, 200.0)));
        assert!(!drawer.resize((200.0, 200.0)));
        drawer.tick(&mut surface, 16.0);
        assert_eq!(drawer.last_viewport().size(), Vector2::splat(200.0));
    }
}
