use std::env;
use std::time::{Duration, Instant};
use dijkstra_sssp::graph::generators::generate_random;
use dijkstra_sssp::graph::{AdjacencyGraph, Graph};
use dijkstra_sssp::{par_solve_many, solve_many, Dijkstra};

// Time a single solve from `source`
fn benchmark_single(graph: &AdjacencyGraph<u64>, source: usize) -> Result<Duration, dijkstra_sssp::Error> {
    println!("Running Dijkstra on graph with {} vertices...", graph.vertex_count());

    let start = Instant::now();
    let (result, stats) = Dijkstra::new().compute_with_stats(graph, source)?;
    let duration = start.elapsed();

    println!("  - Found {} reachable vertices in {:?}", result.reachable_count(), duration);
    println!(
        "  - {} settled, {} relaxations, {} stale entries, frontier peak {}",
        stats.settled, stats.relaxations, stats.stale_skipped, stats.frontier_peak
    );

    Ok(duration)
}

// Time sequential and parallel solving from the same batch of sources
fn benchmark_batch(graph: &AdjacencyGraph<u64>, sources: &[usize]) -> Result<(Duration, Duration), dijkstra_sssp::Error> {
    let start = Instant::now();
    let sequential = solve_many(graph, sources)?;
    let sequential_time = start.elapsed();

    let start = Instant::now();
    let parallel = par_solve_many(graph, sources)?;
    let parallel_time = start.elapsed();

    if sequential != parallel {
        eprintln!("WARNING: sequential and parallel results differ");
    }

    Ok((sequential_time, parallel_time))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Optional seed as the first argument
    let args: Vec<String> = env::args().collect();
    let seed = if args.len() > 1 { args[1].parse()? } else { 42 };

    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000, 200_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 4.0;
    let batch_size = 16;

    println!("=====================================================");
    println!("Benchmark: Dijkstra");
    println!("Edge factor: {} edges per vertex (on average), seed {}", edge_factor, seed);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generate_random(size, edge_factor, 100, seed);
        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let single_time = benchmark_single(&graph, 0)?;

        let sources: Vec<usize> = (0..batch_size).map(|i| i * size / batch_size).collect();
        let (sequential_time, parallel_time) = benchmark_batch(&graph, &sources)?;

        let speedup = sequential_time.as_secs_f64() / parallel_time.as_secs_f64();
        println!("Batch of {} sources - sequential {:?}, parallel {:?} ({:.2}x)", batch_size, sequential_time, parallel_time, speedup);

        results.push((size, single_time, sequential_time, parallel_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<12} | {:<14} | {:<14} | {:<8}", "Vertices", "Single (ms)", "Batch seq (ms)", "Batch par (ms)", "Speedup");
    println!("-----------------------------------------------------");

    for (size, single_time, sequential_time, parallel_time) in &results {
        let speedup = sequential_time.as_secs_f64() / parallel_time.as_secs_f64();
        println!(
            "{:<10} | {:<12} | {:<14} | {:<14} | {:<8.2}",
            size,
            single_time.as_millis(),
            sequential_time.as_millis(),
            parallel_time.as_millis(),
            speedup
        );
    }

    Ok(())
}
