// Copyright 2025 the Curvature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Camera animations.
//!
//! Both animations are [`Drawable`]s meant to run last in a frame, at
//! priority `f64::INFINITY`. Each tick moves the camera toward the target by
//! `delta_time * speed`; the animation finishes itself on the first tick
//! where the camera setter reports that nothing changed, or where the step
//! is not finite.

use curvature_geom::Vector2;
use tracing::{debug, warn};

use crate::{DrawError, Drawable, Frame, ScaleMode};

/// Speed that covers `distance` in `time` seconds.
///
/// A non-positive or NaN `time` means "jump at once".
fn speed_for(distance: f64, time: f64) -> f64 {
    if time > 0.0 {
        distance / time
    } else {
        f64::INFINITY
    }
}

fn max_step(speed: f64, delta_time: f64) -> f64 {
    if speed.is_infinite() {
        f64::INFINITY
    } else {
        delta_time * speed
    }
}

/// Moves the camera focus toward a target at a constant speed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusAnimation {
    target: Vector2,
    speed: f64,
}

impl FocusAnimation {
    /// Plans a move from `current` to `target` taking `time` seconds.
    #[must_use]
    pub fn new(current: Vector2, target: Vector2, time: f64) -> Self {
        Self {
            target,
            speed: speed_for(target.minus(current).length(), time),
        }
    }

    /// Focus being approached.
    #[must_use]
    pub fn target(&self) -> Vector2 {
        self.target
    }

    /// Speed in world units per second.
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Returns `false` if the target has a non-finite component.
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        self.target.is_finite()
    }

    /// Focus after `delta_time` seconds starting from `current`.
    #[must_use]
    pub fn step(&self, current: Vector2, delta_time: f64) -> Vector2 {
        current.move_to(self.target, max_step(self.speed, delta_time))
    }
}

impl Drawable for FocusAnimation {
    fn draw(&mut self, frame: &mut Frame<'_>) -> Result<(), DrawError> {
        let next = self.step(frame.camera().focus(), frame.delta_time());
        if !self.is_reachable() || !next.is_finite() {
            warn!(goal = %self.target, %next, "focus animation cannot reach its goal; stopping");
            frame.finish();
        } else if !frame.camera_mut().set_focus(next) {
            debug!(goal = %self.target, "focus animation finished");
            frame.finish();
        }
        Ok(())
    }
}

/// Moves the camera scale toward a target.
///
/// In [`ScaleMode::Logarithmic`] the walk happens in `ln(scale)` space, so
/// zooming from 1 to 100 passes 10 at the halfway time. The exact target is
/// written once the walk reaches it, so rounding in `exp` never leaves the
/// camera a hair away from the requested scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleAnimation {
    target: Vector2,
    target_log: Vector2,
    speed: f64,
    mode: ScaleMode,
}

impl ScaleAnimation {
    /// Plans a zoom from `current` to `target` taking `time` seconds.
    #[must_use]
    pub fn new(current: Vector2, target: Vector2, time: f64, mode: ScaleMode) -> Self {
        let target_log = target.ln();
        let distance = match mode {
            ScaleMode::Logarithmic => target_log.minus(current.ln()).length(),
            ScaleMode::Linear => target.minus(current).length(),
        };
        Self {
            target,
            target_log,
            speed: speed_for(distance, time),
            mode,
        }
    }

    /// Scale being approached.
    #[must_use]
    pub fn target(&self) -> Vector2 {
        self.target
    }

    /// Interpolation mode.
    #[must_use]
    pub fn mode(&self) -> ScaleMode {
        self.mode
    }

    /// Returns `false` if the target has a non-finite component, or, in
    /// [`ScaleMode::Logarithmic`], is not positive on both axes.
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        match self.mode {
            ScaleMode::Logarithmic => self.target.is_finite() && self.target_log.is_finite(),
            ScaleMode::Linear => self.target.is_finite(),
        }
    }

    /// Scale after `delta_time` seconds starting from `current`.
    #[must_use]
    pub fn step(&self, current: Vector2, delta_time: f64) -> Vector2 {
        let max_delta = max_step(self.speed, delta_time);
        match self.mode {
            ScaleMode::Linear => current.move_to(self.target, max_delta),
            ScaleMode::Logarithmic => {
                let next_log = current.ln().move_to(self.target_log, max_delta);
                if next_log.same_bits(self.target_log) {
                    self.target
                } else {
                    next_log.exp()
                }
            }
        }
    }
}

impl Drawable for ScaleAnimation {
    fn draw(&mut self, frame: &mut Frame<'_>) -> Result<(), DrawError> {
        let next = self.step(frame.camera().scale(), frame.delta_time());
        if !self.is_reachable() || !next.is_finite() {
            warn!(goal = %self.target, %next, "scale animation cannot reach its goal; stopping");
            frame.finish();
        } else if !frame.camera_mut().set_scale(next) {
            debug!(goal = %self.target, "scale animation finished");
            frame.finish();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use curvature_geom::Vector2;

    use super::{FocusAnimation, ScaleAnimation};
    use crate::{Camera, CameraState, RecordingSurface, ScaleMode, Scheduler};

    #[test]
    fn logarithmic_zoom_passes_geometric_mean_at_half_time() {
        let anim = ScaleAnimation::new(
            Vector2::splat(1.0),
            Vector2::splat(100.0),
            2.0,
            ScaleMode::Logarithmic,
        );
        let half = anim.step(Vector2::splat(1.0), 1.0);
        assert_abs_diff_eq!(half.x, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(half.y, 10.0, epsilon = 1e-9);
        assert_eq!(anim.step(half, 1.5), Vector2::splat(100.0));
    }

    #[test]
    fn linear_zoom_moves_at_constant_rate() {
        let anim = ScaleAnimation::new(
            Vector2::splat(1.0),
            Vector2::new(1.0, 101.0),
            2.0,
            ScaleMode::Linear,
        );
        let half = anim.step(Vector2::splat(1.0), 1.0);
        assert_abs_diff_eq!(half.y, 51.0, epsilon = 1e-9);
    }

    #[test]
    fn focus_reaches_target_exactly() {
        let anim = FocusAnimation::new(Vector2::ZERO, Vector2::new(3.0, 4.0), 1.0);
        assert_abs_diff_eq!(anim.speed(), 5.0);
        let mid = anim.step(Vector2::ZERO, 0.5);
        assert_abs_diff_eq!(mid.x, 1.5, epsilon = 1e-12);
        assert_eq!(anim.step(mid, 0.75), Vector2::new(3.0, 4.0));
    }

    #[test]
    fn zero_time_jumps_immediately() {
        let anim = FocusAnimation::new(Vector2::ZERO, Vector2::new(7.0, -1.0), 0.0);
        assert_eq!(anim.step(Vector2::ZERO, 0.0), Vector2::new(7.0, -1.0));
        let zoom = ScaleAnimation::new(
            Vector2::splat(10.0),
            Vector2::splat(2.0),
            0.0,
            ScaleMode::Logarithmic,
        );
        assert_eq!(zoom.step(Vector2::splat(10.0), 0.0), Vector2::splat(2.0));
    }

    #[test]
    fn animation_detaches_once_camera_stops_changing() {
        let mut camera = Camera::new(CameraState {
            focus: Vector2::ZERO,
            scale: Vector2::splat(10.0),
            size: Vector2::splat(100.0),
        });
        let mut scheduler = Scheduler::new();
        let mut surface = RecordingSurface::new();
        let id = scheduler.attach(
            FocusAnimation::new(Vector2::ZERO, Vector2::new(1.0, 0.0), 0.1),
            f64::INFINITY,
        );

        scheduler.update(&mut surface, &mut camera, 0.2);
        assert_eq!(camera.focus(), Vector2::new(1.0, 0.0));
        assert!(scheduler.contains(id), "still attached on the arriving tick");

        scheduler.update(&mut surface, &mut camera, 0.2);
        assert!(!scheduler.contains(id));
    }

    #[test]
    fn reachability() {
        let origin = Vector2::ZERO;
        assert!(FocusAnimation::new(origin, Vector2::new(1.0, 2.0), 1.0).is_reachable());
        let off_plane = Vector2::new(f64::INFINITY, 0.0);
        assert!(!FocusAnimation::new(origin, off_plane, 1.0).is_reachable());
        let ten = Vector2::splat(10.0);
        let zoom = |target, mode| ScaleAnimation::new(ten, target, 1.0, mode).is_reachable();
        assert!(zoom(Vector2::splat(1e-300), ScaleMode::Logarithmic));
        assert!(!zoom(Vector2::new(1.0, 0.0), ScaleMode::Logarithmic));
        assert!(!zoom(Vector2::new(-1.0, 1.0), ScaleMode::Logarithmic));
        assert!(zoom(Vector2::new(-1.0, 0.0), ScaleMode::Linear));
        assert!(!zoom(Vector2::new(f64::NAN, 1.0), ScaleMode::Linear));
    }

    #[test]
    fn non_finite_step_finishes_without_touching_the_camera() {
        let mut camera = Camera::new(CameraState {
            focus: Vector2::ZERO,
            scale: Vector2::splat(10.0),
            size: Vector2::splat(100.0),
        });
        let mut scheduler = Scheduler::new();
        let mut surface = RecordingSurface::new();
        let focus = scheduler.attach(
            FocusAnimation::new(Vector2::ZERO, Vector2::new(f64::NAN, 0.0), 0.5),
            f64::INFINITY,
        );
        let scale = scheduler.attach(
            ScaleAnimation::new(
                Vector2::splat(10.0),
                Vector2::splat(0.0),
                0.5,
                ScaleMode::Logarithmic,
            ),
            f64::INFINITY,
        );

        scheduler.update(&mut surface, &mut camera, 0.016);
        assert!(!scheduler.contains(focus));
        assert!(!scheduler.contains(scale));
        assert_eq!(camera.focus(), Vector2::ZERO);
        assert_eq!(camera.scale(), Vector2::splat(10.0));
    }
}
