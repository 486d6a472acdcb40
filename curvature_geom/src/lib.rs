// Copyright 2025 the Curvature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Curvature Geom: plane geometry for plotting in an abstract coordinate space.
//!
//! This crate provides the small value types the rest of Curvature is built on:
//! - [`Vector2`]: an immutable 2D value with a "not a vector" sentinel
//!   ([`Vector2::NAV`]) that polylines use to lift the pen.
//! - [`ZeroAngleRect`]: an axis-aligned rectangle in Y-up space that classifies
//!   points into [`Direction`] region codes.
//! - [`LineSegment`]: a segment that can be clipped to a rectangle with
//!   [`LineSegment::fit_in`].
//! - [`grid`]: helpers for snapping values to a regular step and picking
//!   "nice" 1-2-5 spacings.
//!
//! All types interoperate with [`kurbo`] (`Point`, `Vec2`, `Rect`, `Line`).
//!
//! ## Clipping example
//!
//! ```rust
//! use curvature_geom::{LineSegment, Vector2, ZeroAngleRect};
//!
//! let view = ZeroAngleRect::new(-5.0, 5.0, 5.0, -5.0);
//! let segment = LineSegment::new(Vector2::new(-10.0, 0.0), Vector2::new(10.0, 0.0));
//!
//! let clipped = segment.fit_in(&view).unwrap();
//! assert_eq!(clipped.p1, Vector2::new(-5.0, 0.0));
//! assert_eq!(clipped.p2, Vector2::new(5.0, 0.0));
//! ```
//!
//! ## Region codes
//!
//! ```rust
//! use curvature_geom::{Direction, Vector2, ZeroAngleRect};
//!
//! let view = ZeroAngleRect::by_points(Vector2::new(0.0, 0.0), Vector2::new(1.0, 1.0));
//! let a = view.point_direction(Vector2::new(-1.0, 2.0), false);
//! let b = view.point_direction(Vector2::new(0.5, 3.0), false);
//! assert_eq!(a, Direction::LEFT | Direction::TOP);
//! // Both lie above the top edge, so the segment between them is invisible.
//! assert!(Direction::at_same_side(a, b));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

// Float math (`round`, `ln`, `powf`) comes from std when it is enabled, and
// from kurbo's `FloatFuncs` over libm otherwise.
#[cfg(feature = "std")]
extern crate std;

mod direction;
pub mod grid;
mod rect;
mod segment;
mod vector;

pub use direction::Direction;
pub use rect::{ON_SIDE_PRECISION, ZeroAngleRect};
pub use segment::LineSegment;
pub use vector::Vector2;
