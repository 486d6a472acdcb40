// Copyright 2025 the Curvature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Curvature Input: map raw pointer, wheel and touch input onto a camera.
//!
//! Each handler is a small state machine fed with already decoded event data
//! (positions in surface pixels, a button mask, a wheel delta, a touch list)
//! and a `&mut Camera` from `curvature_view`:
//!
//! - [`drag::DragPan`]: pan while a configured [`drag::MouseButtons`] mask is
//!   held.
//! - [`wheel::WheelZoom`]: logarithmic zoom, anchored at the pointer or at the
//!   center.
//! - [`touch::TouchZoom`]: one finger pans, two fingers pan and pinch-zoom.
//!
//! Every handler returns a [`GestureResponse`]. When `handled` is set the host
//! should suppress the event's default action.
//!
//! The crate does not assume any particular windowing or event system.
//! Camera changes mark the camera dirty, so the next `GraphDrawer::tick`
//! redraws.
//!
//! ```rust
//! use curvature_geom::Vector2;
//! use curvature_input::wheel::WheelZoom;
//! use curvature_view::{DrawerConfig, GraphDrawer, RecordingSurface};
//!
//! let mut drawer = GraphDrawer::new(DrawerConfig::default().with_size((100.0, 100.0)));
//! let mut surface = RecordingSurface::new();
//! drawer.tick(&mut surface, 0.0);
//!
//! let wheel = WheelZoom::default();
//! let response = wheel.on_wheel(drawer.camera_mut(), Vector2::new(50.0, 50.0), -120.0);
//! assert!(response.handled);
//! assert!(drawer.tick(&mut surface, 16.0));
//! ```

pub mod drag;
mod response;
pub mod touch;
pub mod wheel;

pub use response::GestureResponse;
