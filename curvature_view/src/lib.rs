// Copyright 2025 the Curvature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Curvature View: a camera over an abstract coordinate space and a
//! priority-ordered draw loop that paints onto a host surface.
//!
//! The pieces, from the bottom up:
//! - [`Camera`] holds focus, scale and surface size, and tracks whether a
//!   redraw is due. [`Viewport`] is the frozen pixel/coordinate mapping for
//!   one frame, with Y up in coordinate space and Y down in pixels.
//! - [`Surface`] is the set of drawing primitives the host provides.
//!   [`RecordingSurface`] implements it by logging calls.
//! - [`Scheduler`] runs [`Drawable`]s in ascending priority each frame,
//!   handing each a [`Frame`] that clips polylines to the visible zone and
//!   converts them to pixels.
//! - [`FocusAnimation`] and [`ScaleAnimation`] are drawables that move the
//!   camera over time.
//! - [`GraphDrawer`] ties these together and only draws when the camera is
//!   dirty.
//!
//! ## Example
//!
//! ```rust
//! use curvature_geom::Vector2;
//! use curvature_view::{DrawerConfig, GraphDrawer, RecordingSurface};
//! use peniko::Color;
//!
//! let mut drawer = GraphDrawer::new(DrawerConfig::default().with_size((100.0, 100.0)));
//! drawer.attach_fn(
//!     |frame| {
//!         frame
//!             .set_color(Color::from_rgb8(0, 0, 0))
//!             .draw_line(&[Vector2::new(-20.0, 0.0), Vector2::new(20.0, 0.0)]);
//!         Ok(())
//!     },
//!     100.0,
//! );
//!
//! let mut surface = RecordingSurface::new();
//! assert!(drawer.tick(&mut surface, 0.0));
//! // The line was clipped to the visible zone, x in [-5, 5].
//! let paths = surface.stroked_subpaths();
//! assert_eq!(paths.len(), 1);
//! assert_eq!(paths[0][0].x, 0.0);
//! assert_eq!(paths[0][1].x, 100.0);
//!
//! // Nothing changed, so the next tick is skipped.
//! assert!(!drawer.tick(&mut surface, 16.0));
//! ```

mod animation;
mod camera;
mod color;
mod config;
mod delta;
mod drawer;
mod error;
mod frame;
pub mod recording;
mod scheduler;
mod surface;
mod text;

pub use animation::{FocusAnimation, ScaleAnimation};
pub use camera::{Camera, CameraState, Viewport};
pub use color::{ColorError, ColorSpec};
pub use config::{AnimationConfig, DrawerConfig, ScaleMode};
pub use delta::DeltaTimer;
pub use drawer::{ANIMATION_PRIORITY, GraphDrawer};
pub use error::DrawError;
pub use frame::Frame;
pub use recording::{RecordedText, RecordingSurface, SurfaceOp};
pub use scheduler::{DEFAULT_PRIORITY, Drawable, DrawableId, Scheduler};
pub use surface::Surface;
pub use text::{HorizontalAlign, TextOptions, VerticalAlign};
