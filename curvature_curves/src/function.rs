// Copyright 2025 the Curvature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use curvature_geom::Vector2;
use curvature_geom::grid::round_to;
use curvature_view::{ColorError, ColorSpec, DEFAULT_PRIORITY, DrawError, Drawable, Frame};
use peniko::Color;
use peniko::color::palette::css;
use smallvec::{SmallVec, smallvec};

use crate::{Layer, Param};
use crate::param::MAX_SAMPLES;

/// Values of a multi-valued function at one `x`, one per branch.
pub type Branches = SmallVec<[f64; 2]>;

enum Sampler {
    Single(Box<dyn Fn(f64) -> f64>),
    Multi(Box<dyn Fn(f64) -> Branches>),
}

impl Sampler {
    fn sample(&self, x: f64) -> Branches {
        match self {
            Self::Single(f) => smallvec![f(x)],
            Self::Multi(f) => f(x),
        }
    }
}

/// How the `x` handed to the function is rounded.
#[derive(Debug, Default)]
pub enum RoundX {
    /// The exact sample position.
    #[default]
    Off,
    /// A power of ten at or just below the width of one pixel, so nearby
    /// columns share an argument at deep zoom.
    Auto,
    /// A multiple of the given step. A zero step disables rounding.
    Step(Param),
}

impl RoundX {
    fn step(&self, frame: &Frame<'_>) -> f64 {
        match self {
            Self::Off => 0.0,
            Self::Auto => 10_f64.powf((frame.scale().x / frame.size().x).log10().floor()),
            Self::Step(step) => step.resolve(frame),
        }
    }
}

/// Graph of `y = f(x)`, sampled once per pixel column.
///
/// A multi-valued function returns one value per branch; each branch is
/// drawn as its own polyline. When a sample returns fewer values than there
/// are branches, the missing branches are broken at that column. A NaN
/// value breaks its branch too.
pub struct FunctionGraph {
    sampler: Sampler,
    color: Color,
    round_x: RoundX,
    priority: f64,
}

impl fmt::Debug for FunctionGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionGraph")
            .field("color", &self.color)
            .field("round_x", &self.round_x)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

impl FunctionGraph {
    /// Graph of a single-valued function, black, at the default priority.
    pub fn new(f: impl Fn(f64) -> f64 + 'static) -> Self {
        Self::with_sampler(Sampler::Single(Box::new(f)))
    }

    /// Graph of a multi-valued function such as `x = y²`.
    pub fn multi(f: impl Fn(f64) -> Branches + 'static) -> Self {
        Self::with_sampler(Sampler::Multi(Box::new(f)))
    }

    fn with_sampler(sampler: Sampler) -> Self {
        Self {
            sampler,
            color: css::BLACK,
            round_x: RoundX::Off,
            priority: DEFAULT_PRIORITY,
        }
    }

    /// Sets the stroke color.
    pub fn with_color(mut self, color: impl Into<ColorSpec>) -> Result<Self, ColorError> {
        self.color = color.into().resolve()?;
        Ok(self)
    }

    /// Sets argument rounding.
    #[must_use]
    pub fn with_round_x(mut self, round_x: RoundX) -> Self {
        self.round_x = round_x;
        self
    }

    /// Sets the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: f64) -> Self {
        self.priority = priority;
        self
    }

    /// Samples the graph for `frame`, one polyline per branch.
    pub fn sample(&self, frame: &Frame<'_>) -> Result<Vec<Vec<Vector2>>, DrawError> {
        let width = frame.size().x;
        if !(width.is_finite() && width > 0.0) {
            return Ok(Vec::new());
        }
        if width > MAX_SAMPLES as f64 {
            return Err(DrawError::TooManySamples {
                samples: width,
                limit: MAX_SAMPLES,
            });
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "width is positive and at most MAX_SAMPLES, checked above"
        )]
        let columns = width.ceil() as usize;
        let left = frame.drawing_zone().left();
        let cpp = frame.coord_per_pixel().x;
        let round = self.round_x.step(frame);

        let mut branches = vec![Vec::with_capacity(columns)];
        for column in 0..columns {
            let x = column as f64 * cpp + left;
            let ys = self.sampler.sample(round_to(x, round));
            if branches.len() < ys.len() {
                branches.resize_with(ys.len(), Vec::new);
            }
            for (i, branch) in branches.iter_mut().enumerate() {
                match ys.get(i) {
                    Some(&y) => branch.push(Vector2::new(x, y)),
                    None => {
                        if !branch.last().is_some_and(|p| p.has_nan()) {
                            branch.push(Vector2::NAV);
                        }
                    }
                }
            }
        }
        Ok(branches)
    }
}

impl Layer for FunctionGraph {
    fn priority(&self) -> f64 {
        self.priority
    }
}

impl Drawable for FunctionGraph {
    fn draw(&mut self, frame: &mut Frame<'_>) -> Result<(), DrawError> {
        let branches = self.sample(frame)?;
        frame.set_color(self.color).draw_lines(&branches);
        Ok(())
    }
}
