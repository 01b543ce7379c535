// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use understory_carousel::position::snap_index;
use understory_carousel::{
    Carousel, CarouselConfig, FrameHandle, FrameScheduler, PaneRenderer, StripFrame,
};

#[derive(Default)]
struct Sink(f64);

impl PaneRenderer for Sink {
    fn render(&mut self, frame: &StripFrame) {
        self.0 = black_box(frame.translate);
    }
}

#[derive(Default)]
struct Clock {
    next: u64,
}

impl FrameScheduler for Clock {
    fn request_frame(&mut self) -> FrameHandle {
        self.next += 1;
        FrameHandle(self.next)
    }

    fn cancel_frame(&mut self, _: FrameHandle) {}
}

fn bench_drag_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/drag");

    // One pointer move plus one display frame per step, then release.
    for moves in [16usize, 128, 1_024] {
        group.throughput(Throughput::Elements(moves as u64));
        group.bench_with_input(BenchmarkId::from_parameter(moves), &moves, |b, &moves| {
            let mut carousel = Carousel::new(
                CarouselConfig::new(8).with_start_index(4),
                Sink::default(),
                Clock::default(),
            );
            carousel.on_resize(&Size::new(1280.0, 720.0));
            b.iter(|| {
                carousel.pointer_down(Point::new(900.0, 300.0).into());
                for step in 0..moves {
                    carousel.pointer_move(Point::new(900.0 - step as f64, 300.0).into());
                    let handle = FrameHandle(carousel.scheduler().next);
                    carousel.on_animation_frame(handle);
                }
                carousel.pointer_up();
                carousel.go_to(4);
                black_box(carousel.state());
            });
        });
    }

    group.finish();
}

fn bench_snap_decision(c: &mut Criterion) {
    let offsets: Vec<f64> = (-400..=400).map(|d| f64::from(d) * 0.75).collect();
    c.bench_function("carousel/snap_index", |b| {
        b.iter(|| {
            let mut acc = 0usize;
            for &moved_by in &offsets {
                acc += snap_index(black_box(3), 8, moved_by, 100.0);
            }
            black_box(acc)
        });
    });
}

criterion_group!(benches, bench_drag_session, bench_snap_decision);
criterion_main!(benches);
