use std::collections::HashSet;
use log::warn;

use crate::graph::{Graph, Weight};
use crate::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of a shortest path algorithm execution
///
/// `distances[v]` is `None` when `v` cannot be reached from `source`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShortestPathResult<W>
where
    W: Weight,
{
    /// Distances from source to each vertex
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Weight,
{
    /// Number of vertices covered by the result
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Shortest distance to `vertex`, or `None` if unreachable or out of range
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.distances.get(vertex).copied().flatten()
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Number of vertices reachable from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// Iterates over `(vertex, distance)` in increasing vertex order
    pub fn iter(&self) -> impl Iterator<Item = (usize, Option<W>)> + '_ {
        self.distances.iter().copied().enumerate()
    }

    /// Reconstructs the vertex sequence from the source to `target`
    ///
    /// Returns `None` if the target is unreachable, out of range, or the
    /// predecessor chain does not lead back to the source.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target;
        let mut visited = HashSet::new();

        // Walk predecessors back to the source
        while current != self.source {
            if !visited.insert(current) {
                warn!("Cycle detected in path reconstruction at vertex {}", current);
                return None;
            }

            path.push(current);
            match self.predecessors.get(current).copied().flatten() {
                Some(pred) => current = pred,
                None => {
                    warn!("Vertex {} has a distance but no predecessor", current);
                    return None;
                }
            }
        }

        path.push(self.source);
        path.reverse();

        Some(path)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        result.path_to(target)
    }
}
