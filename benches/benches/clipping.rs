// Copyright 2025 the Curvature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use curvature_geom::{LineSegment, Vector2, ZeroAngleRect};
use curvature_view::{DrawError, DrawerConfig, Frame, GraphDrawer, RecordingSurface};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }

    fn point(&mut self, extent: f64) -> Vector2 {
        Vector2::new(
            (self.next_f64() * 2.0 - 1.0) * extent,
            (self.next_f64() * 2.0 - 1.0) * extent,
        )
    }
}

fn segments(n: usize, extent: f64) -> Vec<LineSegment> {
    let mut rng = Lcg(7);
    (0..n)
        .map(|_| LineSegment::new(rng.point(extent), rng.point(extent)))
        .collect()
}

fn bench_fit_in(c: &mut Criterion) {
    let zone = ZeroAngleRect::new(-5.0, 5.0, 5.0, -5.0);
    let mut group = c.benchmark_group("fit_in");
    for (name, extent) in [("mostly_inside", 6.0), ("mostly_outside", 50.0)] {
        let segments = segments(10_000, extent);
        group.bench_function(name, |b| {
            b.iter(|| {
                segments
                    .iter()
                    .filter_map(|s| s.fit_in(black_box(&zone)))
                    .count()
            });
        });
    }
    group.finish();
}

fn bench_draw_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_line");
    // A sine wave ten times wider than the view, sampled finely.
    let points: Vec<Vector2> = (0..100_000)
        .map(|i| {
            let x = -50.0 + f64::from(i) * 1e-3;
            Vector2::new(x, x.sin() * 3.0)
        })
        .collect();
    group.bench_function("sine_100k", |b| {
        let mut drawer = GraphDrawer::new(DrawerConfig::default().with_size((800.0, 600.0)));
        drawer.attach_fn(
            move |frame: &mut Frame<'_>| -> Result<(), DrawError> {
                frame.draw_line(&points);
                Ok(())
            },
            0.0,
        );
        let mut surface = RecordingSurface::new();
        let mut now = 0.0;
        b.iter(|| {
            drawer.request_redraw();
            now += 16.0;
            drawer.tick(&mut surface, now);
            surface.clear_ops();
        });
    });
    group.finish();
}

criterion_group!(benches, bench_fit_in, bench_draw_line);
criterion_main!(benches);
