use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use dualgraph::{DiGraph, GraphOptions, UnGraph};
use std::hint::black_box;
use std::time::Duration;

#[derive(Debug, Clone)]
struct Workload {
    vertex_count: usize,
    edges: Vec<(usize, usize)>,
}

// Deterministic xorshift so runs are comparable.
fn next(state: &mut u64) -> u64 {
    *state ^= *state << 13;
    *state ^= *state >> 7;
    *state ^= *state << 17;
    *state
}

fn uniform_workload(vertex_count: usize, edge_count: usize) -> Workload {
    let mut state = 0x9e37_79b9_7f4a_7c15_u64;
    let edges = (0..edge_count)
        .map(|_| {
            let h = (next(&mut state) % vertex_count as u64) as usize;
            let t = (next(&mut state) % vertex_count as u64) as usize;
            (h, t)
        })
        .collect();
    Workload {
        vertex_count,
        edges,
    }
}

/// One hub with every vertex as a successor, plus a sparse random remainder.
fn hub_workload(vertex_count: usize, extra: usize) -> Workload {
    let mut load = uniform_workload(vertex_count, extra);
    load.edges.extend((1..vertex_count).map(|t| (0, t)));
    load
}

fn bench_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion");
    group.measurement_time(Duration::from_secs(5));

    let cases = [
        ("v100_e1k", 100usize, 1_000usize),
        ("v1k_e10k", 1_000usize, 10_000usize),
    ];

    for (name, vertices, edges) in cases {
        let load = uniform_workload(vertices, edges);

        group.bench_with_input(BenchmarkId::new("add_edge", name), &load, |b, load| {
            b.iter_batched(
                || DiGraph::with_vertex_count(load.vertex_count),
                |mut g| {
                    for &(h, t) in &load.edges {
                        let _ = g.add_edge(h, t);
                    }
                    black_box(g.edge_count());
                },
                BatchSize::LargeInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("add_edges", name), &load, |b, load| {
            b.iter_batched(
                || DiGraph::with_vertex_count(load.vertex_count),
                |mut g| {
                    let _ = g.add_edges(load.edges.iter().copied());
                    black_box(g.edge_count());
                },
                BatchSize::LargeInput,
            )
        });

        group.bench_with_input(
            BenchmarkId::new("add_edges_incremental", name),
            &load,
            |b, load| {
                b.iter_batched(
                    || {
                        DiGraph::new(GraphOptions {
                            vertex_count: load.vertex_count,
                            incremental_batch_limit: usize::MAX,
                            ..Default::default()
                        })
                    },
                    |mut g| {
                        let _ = g.add_edges(load.edges.iter().copied());
                        black_box(g.edge_count());
                    },
                    BatchSize::LargeInput,
                )
            },
        );
    }

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    let load = hub_workload(2_000, 4_000);
    let directed = DiGraph::from_edges(load.vertex_count, load.edges.iter().copied())
        .unwrap_or_default();
    let undirected = UnGraph::from_edges(load.vertex_count, load.edges.iter().copied())
        .unwrap_or_default();
    let probes: Vec<(usize, usize)> = (0..load.vertex_count).map(|v| (0, v)).collect();

    group.bench_function("directed/is_edge_hub", |b| {
        b.iter(|| {
            for &(h, t) in &probes {
                black_box(directed.is_edge(h, t));
            }
        })
    });

    group.bench_function("directed/edge_id_hub", |b| {
        b.iter(|| {
            for &(h, t) in &probes {
                let _ = black_box(directed.edge_id(h, t));
            }
        })
    });

    group.bench_function("undirected/is_edge_reversed", |b| {
        b.iter(|| {
            for &(h, t) in &probes {
                black_box(undirected.is_edge(t, h));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_insertion, bench_lookup);
criterion_main!(benches);
