use log::{debug, trace};

use crate::graph::{Graph, Weight};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::Frontier;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation
///
/// Label-setting search with a binary-heap frontier, O((V + E) log V).
/// The solver holds no state: every call builds its own frontier and
/// distance vector, so one graph can be solved from several sources at once.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

/// Counters collected while solving
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SolveStats {
    /// Vertices extracted with a current (non-stale) distance
    pub settled: usize,
    /// Successful relaxations, i.e. distance improvements
    pub relaxations: usize,
    /// Frontier entries discarded because a shorter path was already known
    pub stale_skipped: usize,
    /// Largest frontier size reached
    pub frontier_peak: usize,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Computes shortest paths and reports how much work the search did
    pub fn compute_with_stats<W, G>(&self, graph: &G, source: usize) -> Result<(ShortestPathResult<W>, SolveStats)>
    where
        W: Weight,
        G: Graph<W>,
    {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidSource(source));
        }
        graph.validate()?;

        let n = graph.vertex_count();
        debug!("Dijkstra: solving from {} on {} vertices, {} edges", source, n, graph.edge_count());

        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut overflowed = Vec::new();
        let mut stats = SolveStats::default();

        distances[source] = Some(W::zero());

        let mut frontier = Frontier::new();
        frontier.push(source, W::zero());

        while let Some((u, dist_u)) = frontier.pop() {
            // A better path to u was recorded after this entry was queued
            if let Some(best) = distances[u] {
                if dist_u > best {
                    stats.stale_skipped += 1;
                    trace!("skip stale entry ({:?}, {})", dist_u, u);
                    continue;
                }
            }
            stats.settled += 1;

            for (v, weight) in graph.outgoing_edges(u) {
                let candidate = match dist_u.checked_sum(weight) {
                    Some(candidate) => candidate,
                    None => {
                        // Larger than any representable distance, so it can only matter
                        // if v never gets a distance at all
                        if distances[v].is_none() {
                            overflowed.push(v);
                        }
                        continue;
                    }
                };

                let improves = match distances[v] {
                    None => true,
                    Some(current) => candidate < current,
                };

                if improves {
                    trace!("relax {} -> {}: {:?}", u, v, candidate);
                    stats.relaxations += 1;
                    distances[v] = Some(candidate);
                    predecessors[v] = Some(u);
                    frontier.push(v, candidate);
                }
            }
        }

        if let Some(&vertex) = overflowed.iter().find(|&&v| distances[v].is_none()) {
            return Err(Error::DistanceOverflow { vertex });
        }

        stats.frontier_peak = frontier.peak_len();
        debug!(
            "Dijkstra: settled {} vertices, {} relaxations, {} stale entries, frontier peak {}",
            stats.settled, stats.relaxations, stats.stale_skipped, stats.frontier_peak
        );

        Ok((
            ShortestPathResult {
                distances,
                predecessors,
                source,
            },
            stats,
        ))
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        self.compute_with_stats(graph, source).map(|(result, _)| result)
    }
}

/// Computes shortest distances from `source` to every vertex of `graph`
///
/// Fails with [`Error::InvalidSource`] for an out-of-range source and with
/// [`Error::NegativeWeight`] if the graph carries an inadmissible weight.
pub fn solve<W, G>(graph: &G, source: usize) -> Result<ShortestPathResult<W>>
where
    W: Weight,
    G: Graph<W>,
{
    Dijkstra::new().compute_shortest_paths(graph, source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::generators::demo_graph;
    use crate::graph::{AdjacencyGraph, MutableGraph};

    #[test]
    fn test_stats_on_demo_graph() {
        let graph = demo_graph();
        let (result, stats) = Dijkstra::new().compute_with_stats(&graph, 0).unwrap();

        assert_eq!(result.distances, vec![Some(0), Some(2), Some(5), Some(1), Some(4)]);
        assert_eq!(stats.settled, 5);
        // 0 reaches 1 and 3, 3 reaches 4, 1 reaches 2 at 6, 4 improves 2 to 5
        assert_eq!(stats.relaxations, 5);
        assert_eq!(stats.stale_skipped, 1);
    }

    #[test]
    fn test_overflow_is_reported_only_when_unavoidable() {
        let mut graph = AdjacencyGraph::<u8>::with_vertices(3);
        graph.add_edge(0, 1, 200).unwrap();
        graph.add_edge(1, 2, 100).unwrap();
        assert_eq!(solve(&graph, 0), Err(Error::DistanceOverflow { vertex: 2 }));

        graph.add_edge(0, 2, 50).unwrap();
        let result = solve(&graph, 0).unwrap();
        assert_eq!(result.distances, vec![Some(0), Some(200), Some(50)]);
    }

    #[test]
    fn test_invalid_source() {
        let graph = demo_graph();
        let err = solve(&graph, 5).unwrap_err();
        assert_eq!(err, Error::InvalidSource(5));
        assert!(err.is_invalid_argument());
    }
}
