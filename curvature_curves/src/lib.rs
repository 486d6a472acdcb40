// Copyright 2025 the Curvature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Curvature Curves: ready-made drawables for plotting.
//!
//! - [`Grid`]: background lines on a 1-2-5 spacing with emphasized axes.
//! - [`GridLabels`]: numeric tick labels and axis names.
//! - [`FunctionGraph`]: `y = f(x)`, one sample per pixel column, with
//!   multi-valued functions drawn branch by branch.
//! - [`PolarGraph`]: `r = f(φ)`.
//! - [`ParametricGraph`]: `(x(t), y(t))`.
//!
//! Every one of them is a [`Drawable`](curvature_view::Drawable) with a
//! default priority, exposed through [`Layer`]. Colors are resolved when a
//! producer is built, so a bad color token is reported there rather than on
//! every frame.
//!
//! ```rust
//! use curvature_curves::{FunctionGraph, Grid, GridLabels, Layer};
//! use curvature_view::{DrawerConfig, GraphDrawer, RecordingSurface};
//!
//! let mut drawer = GraphDrawer::new(DrawerConfig::default().with_size((200.0, 100.0)));
//! Grid::new().attach_to(&mut drawer);
//! GridLabels::new().attach_to(&mut drawer);
//! FunctionGraph::new(f64::sin)
//!     .with_color("crimson")
//!     .unwrap()
//!     .attach_to(&mut drawer);
//!
//! let mut surface = RecordingSurface::new();
//! drawer.tick(&mut surface, 0.0);
//! assert!(!surface.stroked_subpaths().is_empty());
//! assert!(!surface.texts().is_empty());
//! ```

use curvature_view::{Drawable, DrawableId, GraphDrawer};

pub mod function;
pub mod grid;
pub mod labels;
mod param;
pub mod parametric;
pub mod polar;

pub use function::{Branches, FunctionGraph, RoundX};
pub use grid::Grid;
pub use labels::GridLabels;
pub use param::{MAX_SAMPLES, Param};
pub use parametric::ParametricGraph;
pub use polar::PolarGraph;

/// A drawable that knows the priority it belongs at.
pub trait Layer: Drawable + Sized + 'static {
    /// Priority to attach at.
    fn priority(&self) -> f64;

    /// Attaches `self` to `drawer` at its own priority.
    fn attach_to(self, drawer: &mut GraphDrawer) -> DrawableId {
        let priority = self.priority();
        drawer.attach(self, priority)
    }
}
