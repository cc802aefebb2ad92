use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use graphwalk::{walk_bfs, walk_dijkstra, walk_topo_order, Graph, Visit};

/// Layered DAG: every vertex in layer `l` points at three vertices of layer `l + 1`
fn layered_dag(size: u64) -> Graph<u64> {
    let mut graph = Graph::directed();
    let width = 32;
    for v in 0..size {
        graph.add_vertex(v);
        let next = (v / width + 1) * width;
        for offset in 0..3 {
            let to = next + (v + offset * 7) % width;
            if to < size {
                graph.add_weighted_edge(v, to, ((v + offset) % 10 + 1) as f64);
            }
        }
    }
    graph
}

/// Undirected ring with chords
fn ring(size: u64) -> Graph<u64> {
    let mut graph = Graph::undirected();
    for v in 0..size {
        graph.add_weighted_edge(v, (v + 1) % size, 1.0);
        graph.add_weighted_edge(v, (v * 7 + 3) % size, (v % 5 + 2) as f64);
    }
    graph
}

/// Benchmark edge insertion throughput
fn bench_edge_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_insertion");

    for size in [100, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| criterion::black_box(ring(size).edge_count()));
        });
    }
    group.finish();
}

fn bench_bfs(c: &mut Criterion) {
    let mut group = c.benchmark_group("bfs");

    for size in [100, 1000, 10_000].iter() {
        let mut graph = ring(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut visited = 0usize;
                walk_bfs(&mut graph, &0, |_| {
                    visited += 1;
                    Visit::Continue
                })
                .unwrap();
                criterion::black_box(visited);
            });
        });
    }
    group.finish();
}

fn bench_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra");

    for size in [100, 1000, 10_000].iter() {
        let mut graph = ring(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut farthest = 0.0f64;
                walk_dijkstra(&mut graph, &0, |v| {
                    farthest = farthest.max(v.distance());
                    Visit::Continue
                })
                .unwrap();
                criterion::black_box(farthest);
            });
        });
    }
    group.finish();
}

fn bench_topo_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("topo_order");

    for size in [100, 1000, 10_000].iter() {
        let mut graph = layered_dag(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut order = Vec::with_capacity(graph.vertex_count());
                walk_topo_order(&mut graph, |v| {
                    order.push(*v.key());
                    Visit::Continue
                })
                .unwrap();
                criterion::black_box(order.len());
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_edge_insertion,
    bench_bfs,
    bench_dijkstra,
    bench_topo_order
);
criterion_main!(benches);
