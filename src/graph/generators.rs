use crate::graph::AdjacencyGraph;
use rand::prelude::*;

/// Undirected edges of the demonstration network as `(a, b, weight)`
pub const DEMO_EDGES: [(usize, usize, u32); 5] = [(0, 1, 2), (0, 3, 1), (1, 2, 4), (2, 4, 1), (3, 4, 3)];

/// Number of vertices in the demonstration network
pub const DEMO_VERTICES: usize = 5;

/// Builds the five-vertex demonstration network
///
/// ```text
///   0 --2-- 1 --4-- 2
///   |               |
///   1               1
///   |               |
///   3 ------3------ 4
/// ```
///
/// From vertex 0 the shortest distances are `[0, 2, 5, 1, 4]`.
pub fn demo_graph() -> AdjacencyGraph<u32> {
    let mut graph = AdjacencyGraph::with_vertices(DEMO_VERTICES);
    for (a, b, weight) in DEMO_EDGES {
        graph.push_edge(a, b, weight);
        graph.push_edge(b, a, weight);
    }
    graph
}

/// Generates a random directed graph with about `edge_factor * n` edges
///
/// Weights are drawn uniformly from `1..=max_weight` and self-loops are
/// skipped. The same seed always produces the same graph.
pub fn generate_random(n: usize, edge_factor: f64, max_weight: u64, seed: u64) -> AdjacencyGraph<u64> {
    let mut graph = AdjacencyGraph::with_vertices(n);
    if n == 0 {
        return graph;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let num_edges = (edge_factor * n as f64) as usize;
    let max_weight = max_weight.max(1);

    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            graph.push_edge(u, v, rng.gen_range(1..=max_weight));
        }
    }

    graph
}

/// Generates a `width x height` grid with unit-weight edges between 4-neighbours
pub fn generate_grid(width: usize, height: usize) -> AdjacencyGraph<u64> {
    let mut graph = AdjacencyGraph::with_vertices(width * height);

    let index = |x: usize, y: usize| -> usize { y * width + x };

    for y in 0..height {
        for x in 0..width {
            let current = index(x, y);
            if x + 1 < width {
                graph.push_edge(current, index(x + 1, y), 1);
                graph.push_edge(index(x + 1, y), current, 1);
            }
            if y + 1 < height {
                graph.push_edge(current, index(x, y + 1), 1);
                graph.push_edge(index(x, y + 1), current, 1);
            }
        }
    }

    graph
}
