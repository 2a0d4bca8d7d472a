//! Benchmarks for timeline layout and the playback reducer.
//!
//! Run with: cargo bench -p storyboard-core --bench timeline_bench

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use storyboard_core::controller::TICKS_PER_RUN;
use storyboard_core::timeline;
use storyboard_core::{Action, Dataset, ViewState};

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("timeline/layout");

    for dataset in Dataset::ALL {
        group.bench_with_input(
            BenchmarkId::new("spans", dataset.short_label()),
            &dataset,
            |b, &dataset| {
                b.iter(|| {
                    for slot in dataset.slots() {
                        black_box(timeline::span_for(black_box(slot)));
                    }
                })
            },
        );
    }

    for columns in [40u16, 80, 200] {
        group.bench_with_input(
            BenchmarkId::new("project_all", columns),
            &columns,
            |b, &columns| {
                b.iter(|| {
                    for dataset in Dataset::ALL {
                        for slot in dataset.slots() {
                            black_box(timeline::span_for(slot).project(black_box(columns)));
                        }
                    }
                })
            },
        );
    }

    group.finish();
}

fn bench_playback(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller/playback");

    group.bench_function("full_run", |b| {
        b.iter(|| {
            let mut state = ViewState::new();
            state.update(Action::TogglePlayback);
            for _ in 0..TICKS_PER_RUN {
                black_box(state.update(Action::Tick));
            }
            black_box(state)
        })
    });

    group.bench_function("classify_all_mid_run", |b| {
        let mut state = ViewState::new();
        state.update(Action::TogglePlayback);
        for _ in 0..300 {
            state.update(Action::Tick);
        }
        b.iter(|| {
            for dataset in Dataset::ALL {
                for slot in dataset.slots() {
                    black_box(state.slot_phase(slot));
                }
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_layout, bench_playback);
criterion_main!(benches);
