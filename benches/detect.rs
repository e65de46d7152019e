// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gridsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridsketch::{detect_widgets, detect_widgets_with_diagnostics, RepairSettings};

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `detect.plain`, `detect.repair`
// - Case IDs (the string after the `/`) must remain stable across refactors so
//   results stay comparable over time (`small`, `medium_damaged`, `large_damaged`).
fn benches_detect(c: &mut Criterion) {
    let cases = [
        fixtures::Case::Small,
        fixtures::Case::MediumDamaged,
        fixtures::Case::LargeDamaged,
    ];

    let mut group = c.benchmark_group("detect.plain");
    for case in cases {
        let grid = fixtures::fixture(case);
        group.bench_function(case.id(), move |b| {
            b.iter(|| black_box(detect_widgets(black_box(&grid)).len()))
        });
    }
    group.finish();

    let mut group = c.benchmark_group("detect.repair");
    let settings = RepairSettings::default();
    for case in cases {
        let grid = fixtures::fixture(case);
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let report = detect_widgets_with_diagnostics(black_box(&grid), black_box(&settings));
                black_box((report.widgets.len(), report.repairs.len()))
            })
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_detect
}
criterion_main!(benches);
