use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dijkstra_sssp::graph::generators::{generate_grid, generate_random};
use dijkstra_sssp::{par_solve_many, solve, solve_many};

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra_random");
    for &size in &[1_000usize, 10_000, 100_000] {
        let graph = generate_random(size, 4.0, 100, 7);
        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, graph| {
            b.iter(|| solve(graph, black_box(0)).unwrap())
        });
    }
    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let graph = generate_grid(200, 200);
    c.bench_function("dijkstra_grid_200x200", |b| b.iter(|| solve(&graph, black_box(0)).unwrap()));
}

fn bench_batch(c: &mut Criterion) {
    let graph = generate_random(20_000, 4.0, 100, 11);
    let sources: Vec<usize> = (0..32).map(|i| i * 600).collect();

    let mut group = c.benchmark_group("batch_32_sources");
    group.sample_size(10);
    group.bench_function("sequential", |b| b.iter(|| solve_many(&graph, &sources).unwrap()));
    group.bench_function("parallel", |b| b.iter(|| par_solve_many(&graph, &sources).unwrap()));
    group.finish();
}

criterion_group!(benches, bench_random, bench_grid, bench_batch);
criterion_main!(benches);
