// Copyright 2025 the Curvature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, criterion_group, criterion_main};
use curvature_curves::{FunctionGraph, Grid, GridLabels, Layer, PolarGraph};
use curvature_view::{DrawerConfig, GraphDrawer, RecordingSurface};

fn plot() -> GraphDrawer {
    let mut drawer = GraphDrawer::new(DrawerConfig::default().with_size((1920.0, 1080.0)));
    Grid::new().attach_to(&mut drawer);
    GridLabels::new().attach_to(&mut drawer);
    FunctionGraph::new(f64::sin).attach_to(&mut drawer);
    PolarGraph::new(|phi| phi.cos() * 3.0).attach_to(&mut drawer);
    drawer
}

fn bench_full_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");
    group.bench_function("plot_1080p", |b| {
        let mut drawer = plot();
        let mut surface = RecordingSurface::new();
        let mut now = 0.0;
        b.iter(|| {
            drawer.request_redraw();
            now += 16.0;
            drawer.tick(&mut surface, now);
            surface.clear_ops();
        });
    });
    group.bench_function("pan_1080p", |b| {
        let mut drawer = plot();
        let mut surface = RecordingSurface::new();
        let mut now = 0.0;
        b.iter(|| {
            let focus = drawer.camera().focus();
            drawer.camera_mut().set_focus((focus.x + 0.01, focus.y));
            now += 16.0;
            drawer.tick(&mut surface, now);
            surface.clear_ops();
        });
    });
    group.finish();
}

criterion_group!(benches, bench_full_frame);
criterion_main!(benches);
