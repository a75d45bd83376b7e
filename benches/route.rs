// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use proteus::grid::{build_cells, build_coordinates};
use proteus::router::build;

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `route.grid`, `route.build`
// - Case IDs (the string after the `/`) must remain stable across refactors
//   so results stay comparable over time (e.g. `small`, `medium_grid`).
// - If implementations move/deduplicate, update the wiring but do not rename
//   group or case IDs.
fn benches_route(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("route.grid");

        for (case_id, case) in [
            ("small", fixtures::Case::Small),
            ("medium_grid", fixtures::Case::MediumGrid),
            ("large_grid", fixtures::Case::LargeGrid),
        ] {
            let task = fixtures::task(case);
            group.throughput(Throughput::Elements(task.rectangles().len() as u64));
            group.bench_function(case_id, move |b| {
                b.iter(|| {
                    let registry = build_coordinates(black_box(&task));
                    let cells = build_cells(&registry, &task);
                    black_box(registry.width() + cells.height())
                })
            });
        }

        group.finish();
    }

    {
        let mut group = c.benchmark_group("route.build");

        for (case_id, case) in [
            ("small", fixtures::Case::Small),
            ("medium_grid", fixtures::Case::MediumGrid),
            ("large_grid", fixtures::Case::LargeGrid),
        ] {
            let task = fixtures::task(case);
            group.throughput(Throughput::Elements(task.connections().len() as u64));
            group.bench_function(case_id, move |b| {
                b.iter(|| {
                    let result = build(black_box(&task));
                    assert!(result.unrouted().is_empty());
                    black_box(fixtures::checksum_routes(result.routes()))
                })
            });
        }

        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_route
}
criterion_main!(benches);
