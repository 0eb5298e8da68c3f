// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use naiad::layout::{classify_edges, layout_graph, LayoutConfig};

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `layout.layered`, `layout.classify`
// - Case IDs (the string after the `/`) must remain stable across refactors so
//   results stay comparable over time (e.g. `chain_small`, `dag_dense`).
// - If implementations move/deduplicate, update the wiring but do not rename
//   group or case IDs.
fn benches_layout(c: &mut Criterion) {
    let kinds = fixtures::kind_registry();

    {
        let mut group = c.benchmark_group("layout.layered");

        for (case_id, graph) in [
            ("chain_small", fixtures::chain(8)),
            ("chain_long", fixtures::chain(120)),
            ("dag_dense", fixtures::dag(fixtures::DagParams::new(12, 16, 3))),
            ("tangled", fixtures::tangled_chain(60)),
        ] {
            let nodes = graph.nodes().len() as u64;
            group.throughput(Throughput::Elements(nodes));
            group.bench_function(case_id, |b| {
                b.iter(|| {
                    let positions = layout_graph(
                        black_box(&graph),
                        black_box(&kinds),
                        &LayoutConfig::default(),
                    );
                    black_box(fixtures::checksum_positions(&positions))
                })
            });
        }

        group.finish();
    }

    {
        let mut group = c.benchmark_group("layout.classify");

        for (case_id, graph) in [
            ("chain_long", fixtures::chain(120)),
            ("tangled", fixtures::tangled_chain(60)),
        ] {
            let entry = graph.entry_node(&kinds).cloned();
            let edges = graph.edges().len() as u64;
            group.throughput(Throughput::Elements(edges));
            group.bench_function(case_id, |b| {
                b.iter(|| {
                    let classification =
                        classify_edges(black_box(&graph), entry.as_ref());
                    black_box(classification.back_edges().len())
                })
            });
        }

        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_layout
}
criterion_main!(benches);
