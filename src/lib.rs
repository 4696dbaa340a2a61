//! Dijkstra SSSP - single-source shortest paths on non-negative weighted graphs
//!
//! The crate provides an adjacency-list graph, a binary-heap frontier and the
//! classic label-setting Dijkstra algorithm on top of them. Distances are
//! reported as `Option<W>`, where `None` marks a vertex that cannot be reached
//! from the source.
//!
//! ```
//! use dijkstra_sssp::{solve, AdjacencyGraph, MutableGraph};
//!
//! let mut graph = AdjacencyGraph::<u32>::with_vertices(3);
//! graph.add_edge(0, 1, 4).unwrap();
//! graph.add_edge(1, 2, 1).unwrap();
//!
//! let result = solve(&graph, 0).unwrap();
//! assert_eq!(result.distances, vec![Some(0), Some(4), Some(5)]);
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    batch::{distance_matrix, par_solve_many, solve_many},
    dijkstra::{solve, Dijkstra, SolveStats},
    ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::{AdjacencyGraph, Graph, MutableGraph, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid source vertex: {0}")]
    InvalidSource(usize),

    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Negative or non-finite edge weight on {from} -> {to}: {weight}")]
    NegativeWeight {
        from: usize,
        to: usize,
        weight: String,
    },

    #[error("Shortest distance to vertex {vertex} overflows the weight type")]
    DistanceOverflow { vertex: usize },
}

impl Error {
    /// True for errors caused by a bad argument (vertex or source index)
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::InvalidSource(_) | Error::InvalidVertex(_) | Error::InvalidEdge(..)
        )
    }

    /// True for errors caused by a graph the algorithm cannot handle
    pub fn is_invalid_graph(&self) -> bool {
        matches!(self, Error::NegativeWeight { .. })
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
