// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the per-event inset path: merge + normalize,
// script rendering, and a full listener call through the stub bridge.

use std::sync::Arc;

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use lokalhunt_bridge::reporter::{InsetReporter, compute};
use lokalhunt_bridge::script::SafeAreaScript;
use lokalhunt_bridge::stub::{SimulatedInsets, StubBridge};
use lokalhunt_core::ShellConfig;
use lokalhunt_core::types::{ApiLevel, Density, EdgeInsets, InsetStrategy, NormalizedInsets};

fn bench_compute(c: &mut Criterion) {
    let bars = EdgeInsets::new(110, 66, 0, 0);
    let cutout = EdgeInsets::new(121, 0, 0, 0);
    let density = Density::new(2.75).unwrap();

    c.bench_function("compute_merge_normalize", |b| {
        b.iter(|| compute(black_box(bars), black_box(cutout), black_box(density)))
    });
}

fn bench_render(c: &mut Criterion) {
    let script = SafeAreaScript::from_config(&ShellConfig::default()).unwrap();
    let insets = NormalizedInsets::from_dp(40, 24, 0, 0);

    c.bench_function("render_safe_area_script", |b| {
        b.iter(|| script.render(black_box(&insets)).unwrap())
    });
}

fn bench_listener(c: &mut Criterion) {
    let bridge = Arc::new(StubBridge::new(ApiLevel(34), 2.75));
    // No web view attached: measures everything up to the evaluate call.
    let reporter = InsetReporter::new(
        InsetStrategy::Modern,
        SafeAreaScript::from_config(&ShellConfig::default()).unwrap(),
        bridge.clone(),
        bridge.clone(),
        bridge.clone(),
    );
    let event = SimulatedInsets::new(EdgeInsets::new(110, 66, 0, 0), EdgeInsets::new(121, 0, 0, 0));

    c.bench_function("on_apply_window_insets_no_webview", |b| {
        b.iter(|| {
            reporter.on_apply_window_insets(black_box(&event));
        })
    });
}

criterion_group!(benches, bench_compute, bench_render, bench_listener);
criterion_main!(benches);
