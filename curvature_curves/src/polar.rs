// Copyright 2025 the Curvature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::TAU;
use core::fmt;

use curvature_geom::Vector2;
use curvature_view::{ColorError, ColorSpec, DEFAULT_PRIORITY, DrawError, Drawable, Frame};
use peniko::Color;
use peniko::color::palette::css;
use tracing::debug;

use crate::{Layer, Param};
use crate::param::checked_steps;

/// Number of segments the default step divides the angle range into.
const DEFAULT_SEGMENTS: f64 = 180.0;

/// Graph of `r = f(φ)` in polar coordinates.
///
/// `φ` runs from `start` (default `0`) to `end` (default `start + 2π`) by
/// `step` (default a 180th of the range). The last sample is the first one
/// at or past `end`.
pub struct PolarGraph {
    f: Box<dyn Fn(f64) -> f64>,
    start: Param,
    end: Option<Param>,
    step: Option<Param>,
    color: Color,
    priority: f64,
}

impl fmt::Debug for PolarGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolarGraph")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("step", &self.step)
            .field("color", &self.color)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

impl PolarGraph {
    /// One full turn of `r = f(φ)`, black, at the default priority.
    pub fn new(f: impl Fn(f64) -> f64 + 'static) -> Self {
        Self {
            f: Box::new(f),
            start: Param::Fixed(0.0),
            end: None,
            step: None,
            color: css::BLACK,
            priority: DEFAULT_PRIORITY,
        }
    }

    /// Sets the angle range.
    #[must_use]
    pub fn with_range(mut self, start: impl Into<Param>, end: impl Into<Param>) -> Self {
        self.start = start.into();
        self.end = Some(end.into());
        self
    }

    /// Sets the first angle; the range stays one full turn.
    #[must_use]
    pub fn with_start(mut self, start: impl Into<Param>) -> Self {
        self.start = start.into();
        self
    }

    /// Sets the angle step.
    #[must_use]
    pub fn with_step(mut self, step: impl Into<Param>) -> Self {
        self.step = Some(step.into());
        self
    }

    /// Sets the stroke color.
    pub fn with_color(mut self, color: impl Into<ColorSpec>) -> Result<Self, ColorError> {
        self.color = color.into().resolve()?;
        Ok(self)
    }

    /// Sets the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: f64) -> Self {
        self.priority = priority;
        self
    }

    /// Samples the curve for `frame`.
    pub fn sample(&self, frame: &Frame<'_>) -> Result<Vec<Vector2>, DrawError> {
        let start = self.start.resolve(frame);
        let end = match &self.end {
            Some(end) => end.resolve(frame),
            None => start + TAU,
        };
        let step = match &self.step {
            Some(step) => step.resolve(frame),
            None => (end - start) / DEFAULT_SEGMENTS,
        };
        polar_points(&*self.f, start, end, step)
    }
}

/// Samples `r = f(φ)` from `start` by `step` up to the first angle at or
/// past `end`. At least one step is taken.
fn polar_points(
    f: &dyn Fn(f64) -> f64,
    start: f64,
    end: f64,
    step: f64,
) -> Result<Vec<Vector2>, DrawError> {
    if step == 0.0 && start == end {
        debug!(start, "empty polar range");
        return Ok(Vec::new());
    }
    let steps = checked_steps(start, end, step)?;
    let point = |phi: f64| Vector2::from_angle(phi, f(phi));

    #[allow(
        clippy::cast_possible_truncation,
        reason = "checked_steps bounds steps to [0, MAX_SAMPLES]"
    )]
    let capacity = steps as usize + 2;
    let mut points = Vec::with_capacity(capacity);
    points.push(point(start));
    let limit = steps.ceil() + 1.0;
    let mut i = 1.0;
    loop {
        let phi = start + i * step;
        points.push(point(phi));
        if phi >= end || i >= limit {
            break;
        }
        i += 1.0;
    }
    Ok(points)
}

impl Layer for PolarGraph {
    fn priority(&self) -> f64 {
        self.priority
    }
}

impl Drawable for PolarGraph {
    fn draw(&mut self, frame: &mut Frame<'_>) -> Result<(), DrawError> {
        let points = self.sample(frame)?;
        frame.set_color(self.color).draw_line(&points);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::{PI, TAU};

    use approx::assert_abs_diff_eq;
    use curvature_geom::Vector2;
    use curvature_view::{Camera, CameraState, DrawError, RecordingSurface, Scheduler};

    use super::{PolarGraph, polar_points};

    #[test]
    fn circle_covers_a_full_turn() {
        let points = polar_points(&|_| 2.0, 0.0, TAU, TAU / 180.0).unwrap();
        // 180 steps, plus one more if rounding leaves the 180th short of 2π.
        assert!((181..=182).contains(&points.len()), "{}", points.len());
        assert_eq!(points[0], Vector2::new(2.0, 0.0));
        for p in &points {
            assert_abs_diff_eq!(p.length(), 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn do_while_takes_at_least_one_step() {
        let points = polar_points(&|phi| phi, 1.0, 0.5, 0.25).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], Vector2::from_angle(1.0, 1.0));
    }

    #[test]
    fn non_advancing_step_is_an_error() {
        assert!(matches!(
            polar_points(&|_| 1.0, 0.0, PI, -0.1),
            Err(DrawError::InvalidStep { .. })
        ));
        assert!(polar_points(&|_| 1.0, 0.0, 0.0, 0.0).unwrap().is_empty());
    }

    #[test]
    fn draws_one_stroke() {
        let mut camera = Camera::new(CameraState {
            focus: Vector2::ZERO,
            scale: Vector2::splat(10.0),
            size: Vector2::splat(100.0),
        });
        let mut scheduler = Scheduler::new();
        scheduler.attach(PolarGraph::new(|_| 3.0), 100.0);
        let mut surface = RecordingSurface::new();
        scheduler.update(&mut surface, &mut camera, 0.0);
        let paths = surface.stroked_subpaths();
        assert_eq!(paths.len(), 1);
        assert!(paths[0].len() > 150, "one vertex per sampled angle");
    }
}
