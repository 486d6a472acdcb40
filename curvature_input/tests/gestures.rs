// Copyright 2025 the Curvature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gestures driving a `GraphDrawer`.

use approx::assert_abs_diff_eq;
use curvature_geom::Vector2;
use curvature_input::drag::{DragPan, MouseButtons};
use curvature_input::touch::TouchZoom;
use curvature_input::wheel::{WheelConfig, WheelZoom};
use curvature_view::{DrawerConfig, GraphDrawer, RecordingSurface};
use kurbo::Point;

fn drawer() -> GraphDrawer {
    GraphDrawer::new(DrawerConfig::default().with_size((100.0, 100.0)))
}

#[test]
fn ignored_events_do_not_redraw() {
    let mut drawer = drawer();
    let mut surface = RecordingSurface::new();
    drawer.tick(&mut surface, 0.0);

    let mut pan = DragPan::default();
    let response = pan.on_pointer_move(
        drawer.camera_mut(),
        Point::new(10.0, 10.0),
        MouseButtons::SECONDARY,
    );
    assert!(!response.handled);
    assert!(!drawer.tick(&mut surface, 16.0));
}

#[test]
fn zoom_in_then_out_returns_to_start() {
    let mut drawer = drawer();
    let wheel = WheelZoom::new(WheelConfig::default().with_speed(5.0));
    let pointer = Vector2::new(20.0, 80.0);
    wheel.on_wheel(drawer.camera_mut(), pointer, -240.0);
    wheel.on_wheel(drawer.camera_mut(), pointer, 240.0);
    let camera = drawer.camera();
    assert_abs_diff_eq!(camera.scale().x, 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(camera.focus().x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(camera.focus().y, 0.0, epsilon = 1e-9);
}

#[test]
fn drag_session_pans_by_the_summed_moves() {
    let mut drawer = drawer();
    let mut pan = DragPan::default();
    let held = MouseButtons::PRIMARY | MouseButtons::AUXILIARY;
    pan.on_pointer_down(Point::new(50.0, 50.0), held);
    for x in [55.0, 61.0, 70.0] {
        pan.on_pointer_move(drawer.camera_mut(), Point::new(x, 50.0), held);
    }
    assert!(pan.on_pointer_up(MouseButtons::empty()).handled);
    assert_abs_diff_eq!(drawer.camera().focus().x, -2.0, epsilon = 1e-12);
}

#[test]
fn pinch_then_release_then_pan() {
    let mut drawer = drawer();
    let mut touch = TouchZoom::default();
    touch.on_touch_start(&[Vector2::new(40.0, 50.0), Vector2::new(60.0, 50.0)]);
    touch.on_touch_move(
        drawer.camera_mut(),
        &[Vector2::new(45.0, 50.0), Vector2::new(55.0, 50.0)],
    );
    assert!(drawer.camera().scale().x > 10.0, "pinching in zooms out");
    touch.on_touch_end();

    let focus = drawer.camera().focus();
    touch.on_touch_start(&[Vector2::new(10.0, 10.0)]);
    touch.on_touch_move(drawer.camera_mut(), &[Vector2::new(10.0, 10.0)]);
    assert_eq!(drawer.camera().focus(), focus);
}
