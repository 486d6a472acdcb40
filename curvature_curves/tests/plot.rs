// Copyright 2025 the Curvature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A full plot: grid, labels and curves attached to one drawer.

use curvature_curves::{FunctionGraph, Grid, GridLabels, Layer, Param, ParametricGraph, PolarGraph};
use curvature_view::{DrawerConfig, GraphDrawer, RecordingSurface, SurfaceOp};
use peniko::Color;
use peniko::color::palette::css;

fn drawer() -> GraphDrawer {
    GraphDrawer::new(
        DrawerConfig::default()
            .with_size((100.0, 100.0))
            .with_scale(10.0),
    )
}

#[test]
fn layers_paint_back_to_front() {
    let red = Color::from_rgb8(255, 0, 0);
    let mut drawer = drawer();
    // Attached out of order on purpose: priorities decide.
    FunctionGraph::new(|x| x)
        .with_color(red)
        .unwrap()
        .attach_to(&mut drawer);
    GridLabels::new().attach_to(&mut drawer);
    Grid::new().attach_to(&mut drawer);

    let mut surface = RecordingSurface::new();
    assert!(drawer.tick(&mut surface, 0.0), "first tick draws");

    let paints = surface.paints();
    assert_eq!(paints.first(), Some(&css::LIGHT_GRAY), "grid first");
    assert_eq!(paints.last(), Some(&red), "function last");

    let first_text = surface
        .ops()
        .iter()
        .position(|op| matches!(op, SurfaceOp::FillText { .. }))
        .unwrap();
    let curve_paint = surface
        .ops()
        .iter()
        .position(|op| matches!(op, SurfaceOp::SetPaint(c) if *c == red))
        .unwrap();
    assert!(first_text < curve_paint, "labels above the grid, below the curve");
}

#[test]
fn nothing_is_redrawn_until_the_view_changes() {
    let mut drawer = drawer();
    Grid::new().attach_to(&mut drawer);
    let mut surface = RecordingSurface::new();
    assert!(drawer.tick(&mut surface, 0.0));
    assert!(!drawer.tick(&mut surface, 16.0));

    drawer.camera_mut().set_focus((1.0, 0.0));
    assert!(drawer.tick(&mut surface, 32.0));
    assert_eq!(surface.frame_count(), 2);
}

#[test]
fn computed_ranges_follow_the_view() {
    let mut drawer = drawer();
    // Trace the diagonal over exactly the visible X range.
    ParametricGraph::new(|t| t, |t| t)
        .with_range(
            Param::computed(|frame| frame.drawing_zone().left()),
            Param::computed(|frame| frame.drawing_zone().right()),
        )
        .with_step(Param::computed(|frame| frame.coord_per_pixel().x))
        .attach_to(&mut drawer);

    let mut surface = RecordingSurface::new();
    drawer.tick(&mut surface, 0.0);
    let paths = surface.stroked_subpaths();
    assert_eq!(paths.len(), 1);
    assert!(paths[0].len() >= 100, "one vertex per pixel");
}

#[test]
fn polar_curve_off_screen_draws_nothing() {
    let mut drawer = drawer();
    PolarGraph::new(|_| 1.0).attach_to(&mut drawer);
    drawer.camera_mut().set_focus((100.0, 100.0));
    let mut surface = RecordingSurface::new();
    drawer.tick(&mut surface, 0.0);
    assert!(surface.stroked_subpaths().is_empty());
}

#[test]
fn failing_layer_does_not_stop_the_frame() {
    let mut drawer = drawer();
    ParametricGraph::new(|t| t, |t| t)
        .with_step(0.0)
        .attach_to(&mut drawer);
    Grid::new().attach_to(&mut drawer);
    let mut surface = RecordingSurface::new();
    drawer.tick(&mut surface, 0.0);
    assert!(!surface.stroked_subpaths().is_empty(), "grid still drawn");
    assert_eq!(drawer.scheduler().len(), 2);
}

#[test]
fn panicking_curve_does_not_stop_the_frame() {
    let mut drawer = drawer();
    FunctionGraph::new(|x| if x > 0.0 { panic!("undefined for x > 0") } else { x })
        .with_priority(0.0)
        .attach_to(&mut drawer);
    FunctionGraph::new(|x| x / 2.0)
        .with_priority(1.0)
        .attach_to(&mut drawer);
    let mut surface = RecordingSurface::new();
    assert!(drawer.tick(&mut surface, 0.0));
    assert!(!drawer.tick(&mut surface, 16.0), "the frame was complete");

    let paths = surface.stroked_subpaths();
    assert_eq!(paths.len(), 1, "only the second curve strokes");
    assert_eq!(paths[0].len(), 100);
}
