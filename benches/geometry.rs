// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use naiad::geometry::{
    compute_edge_config, project_handles, rounded_path, Point, CORNER_RADIUS,
};

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `geometry.config`, `geometry.path`, `geometry.handles`
// - Case IDs (the string after the `/`) must remain stable across refactors so
//   results stay comparable over time (e.g. `no_waypoints`, `three_bend`).
// - If implementations move/deduplicate, update the wiring but do not rename
//   group or case IDs.
fn benches_geometry(c: &mut Criterion) {
    let pairs = fixtures::port_pairs(512);

    {
        let mut group = c.benchmark_group("geometry.config");
        group.throughput(Throughput::Elements(pairs.len() as u64));

        group.bench_function("no_waypoints", |b| {
            b.iter(|| {
                let mut acc = 0usize;
                for (source, target) in &pairs {
                    let config =
                        compute_edge_config(black_box(*source), black_box(*target), &[]);
                    acc = acc.wrapping_add(config.points().len());
                }
                black_box(acc)
            })
        });

        group.bench_function("three_bend", |b| {
            b.iter(|| {
                let mut acc = 0usize;
                for (source, target) in &pairs {
                    let detour_x = source.x.max(target.x) + 120.0;
                    let stored = [
                        Point::new(source.x, source.y + 40.0),
                        Point::new(detour_x, source.y + 40.0),
                        Point::new(detour_x, target.y - 40.0),
                        Point::new(target.x, target.y - 40.0),
                    ];
                    let config =
                        compute_edge_config(black_box(*source), black_box(*target), &stored);
                    acc = acc.wrapping_add(config.effective_waypoints().len());
                }
                black_box(acc)
            })
        });

        group.finish();
    }

    {
        let mut group = c.benchmark_group("geometry.path");
        group.throughput(Throughput::Elements(pairs.len() as u64));

        group.bench_function("rounded", |b| {
            b.iter(|| {
                let mut acc = 0usize;
                for (source, target) in &pairs {
                    let config = compute_edge_config(*source, *target, &[]);
                    let commands = rounded_path(black_box(config.points()), CORNER_RADIUS);
                    acc = acc.wrapping_add(commands.len());
                }
                black_box(acc)
            })
        });

        group.finish();
    }

    {
        let mut group = c.benchmark_group("geometry.handles");
        group.throughput(Throughput::Elements(pairs.len() as u64));

        group.bench_function("project", |b| {
            b.iter(|| {
                let mut acc = 0usize;
                for (source, target) in &pairs {
                    let config = compute_edge_config(*source, *target, &[]);
                    let handles = project_handles(black_box(&config));
                    acc = acc.wrapping_add(handles.len());
                }
                black_box(acc)
            })
        });

        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_geometry
}
criterion_main!(benches);
