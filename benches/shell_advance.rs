// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the transition event loop.
//!
//! Measures the performance of:
//! - A full mode switch advanced at frame rate
//! - A full scan (flash, loading, drawer) advanced at frame rate
//! - The same scan advanced in one large step

use criterion::{criterion_group, criterion_main, Criterion};
use smart_scan::application::port::ScreenHost;
use smart_scan::application::shell::{AppShell, Tap};
use smart_scan::domain::scan::{Mode, ResultKind, Step, Version};
use std::hint::black_box;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

/// Host that only counts calls, so the benchmark measures the core.
#[derive(Default)]
struct CountingHost {
    calls: usize,
}

impl ScreenHost for CountingHost {
    fn render(&mut self, _mode: Mode, _step: Step) {
        self.calls += 1;
    }

    fn render_result(&mut self, _kind: ResultKind) {
        self.calls += 1;
    }

    fn unmount_result(&mut self) {
        self.calls += 1;
    }

    fn render_tabs(&mut self, _modes: &[Mode], _highlighted: Mode) {
        self.calls += 1;
    }
}

fn run_until_idle(shell: &mut AppShell<CountingHost>, frame: Duration) {
    while shell.is_animating() {
        shell.advance(frame);
    }
}

fn bench_mode_switch(c: &mut Criterion) {
    let mut group = c.benchmark_group("shell_advance");

    group.bench_function("mode_switch_at_frame_rate", |b| {
        b.iter(|| {
            let mut shell = AppShell::new(CountingHost::default(), Version::B);
            shell.tap(Tap::Mode(Mode::Barcode));
            run_until_idle(&mut shell, FRAME);
            black_box(shell.host().calls);
        });
    });

    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("shell_advance");

    group.bench_function("scan_at_frame_rate", |b| {
        b.iter(|| {
            let mut shell = AppShell::new(CountingHost::default(), Version::A);
            shell.tap(Tap::Shutter);
            shell.tap(Tap::Shutter);
            run_until_idle(&mut shell, FRAME);
            black_box(shell.host().calls);
        });
    });

    group.bench_function("scan_single_step", |b| {
        b.iter(|| {
            let mut shell = AppShell::new(CountingHost::default(), Version::A);
            shell.tap(Tap::Shutter);
            shell.tap(Tap::Shutter);
            shell.advance(black_box(Duration::from_secs(5)));
            black_box(shell.host().calls);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_mode_switch, bench_scan);
criterion_main!(benches);
