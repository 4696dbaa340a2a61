pub mod traits;
pub mod adjacency;
pub mod generators;

pub use traits::{Graph, MutableGraph, Weight};
pub use adjacency::AdjacencyGraph;
