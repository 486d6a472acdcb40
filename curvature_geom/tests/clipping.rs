// Copyright 2025 the Curvature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for region classification and segment clipping together.
//!
//! These sweep segments through and around a rectangle and check that every
//! clipped result stays on or within it.

use curvature_geom::{Direction, LineSegment, ON_SIDE_PRECISION, Vector2, ZeroAngleRect};

fn view() -> ZeroAngleRect {
    ZeroAngleRect::new(-5.0, 5.0, 5.0, -5.0)
}

fn within(rect: &ZeroAngleRect, p: Vector2) -> bool {
    !rect.test_outside(p) || rect.test_on_side(p, ON_SIDE_PRECISION)
}

#[test]
fn clipped_segment_through_the_middle() {
    let s = LineSegment::new(Vector2::new(-10.0, 0.0), Vector2::new(10.0, 0.0));
    let clipped = s.fit_in(&view()).expect("crosses the view");
    assert_eq!(clipped.p1, Vector2::new(-5.0, 0.0));
    assert_eq!(clipped.p2, Vector2::new(5.0, 0.0));
}

#[test]
fn sweep_of_segments_never_leaves_the_rect() {
    let rect = view();
    let mut accepted = 0;
    for i in 0..24 {
        let a = f64::from(i) * core::f64::consts::TAU / 24.0;
        for j in 0..24 {
            let b = f64::from(j) * core::f64::consts::TAU / 24.0;
            let p1 = Vector2::from_angle(a, 9.0);
            let p2 = Vector2::from_angle(b, 3.0 + f64::from(j % 5) * 2.0);
            if let Some(clipped) = LineSegment::new(p1, p2).fit_in(&rect) {
                accepted += 1;
                assert!(within(&rect, clipped.p1), "{clipped:?} starts outside");
                assert!(within(&rect, clipped.p2), "{clipped:?} ends outside");
            }
        }
    }
    assert!(accepted > 0, "some segments cross the rect");
}

#[test]
fn segments_on_the_same_side_are_skipped_by_region_codes() {
    let rect = view();
    let a = rect.point_direction(Vector2::new(-8.0, 7.0), false);
    let b = rect.point_direction(Vector2::new(8.0, 6.0), false);
    assert_eq!(Direction::shared_side(a, b), Direction::TOP);
    assert!(Direction::at_same_side(a, b));
}

#[test]
fn degenerate_view_hides_everything() {
    let flat = ZeroAngleRect::new(0.0, 0.0, 1.0, -1.0);
    let a = flat.point_direction(Vector2::new(-1.0, 0.0), false);
    let b = flat.point_direction(Vector2::new(1.0, 0.0), false);
    assert!(Direction::at_same_side(a, b));
}

#[test]
fn nan_endpoint_is_never_clipped_into_view() {
    let s = LineSegment::new(Vector2::NAV, Vector2::ZERO);
    assert_eq!(s.fit_in(&view()), None);
}
