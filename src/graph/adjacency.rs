use crate::graph::traits::{Graph, MutableGraph, Weight};
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A directed graph implementation using adjacency lists
///
/// Vertices are the dense indices `0..vertex_count()`. Each vertex owns the
/// ordered list of its outgoing edges; parallel edges and self-loops are kept
/// as given. An undirected edge is stored as two symmetric directed edges.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AdjacencyGraph<W> {
    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    adjacency: Vec<Vec<(usize, W)>>,
}

impl<W> Default for AdjacencyGraph<W> {
    fn default() -> Self {
        AdjacencyGraph {
            adjacency: Vec::new(),
        }
    }
}

impl<W> AdjacencyGraph<W>
where
    W: Weight,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with `vertices` isolated vertices
    pub fn with_vertices(vertices: usize) -> Self {
        AdjacencyGraph {
            adjacency: vec![Vec::new(); vertices],
        }
    }

    /// Builds a graph with `vertices` vertices from `(from, to, weight)` triples
    pub fn from_edges<I>(vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::with_vertices(vertices);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Builds a graph whose edges all go both ways
    pub fn from_undirected_edges<I>(vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::with_vertices(vertices);
        for (a, b, weight) in edges {
            graph.add_undirected_edge(a, b, weight)?;
        }
        Ok(graph)
    }

    /// Adds `a -> b` and `b -> a` with the same weight
    ///
    /// Both endpoints and the weight are checked before anything is inserted.
    pub fn add_undirected_edge(&mut self, a: usize, b: usize, weight: W) -> Result<()> {
        self.check_edge(a, b, weight)?;
        self.adjacency[a].push((b, weight));
        self.adjacency[b].push((a, weight));
        Ok(())
    }

    /// Outgoing edges of a vertex as a slice (empty for unknown vertices)
    pub fn neighbors(&self, vertex: usize) -> &[(usize, W)] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterates over all edges as `(from, to, weight)`, grouped by source vertex
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, edges)| edges.iter().map(move |&(to, weight)| (from, to, weight)))
    }

    /// Appends an edge without validation; callers guarantee the invariants
    pub(crate) fn push_edge(&mut self, from: usize, to: usize, weight: W) {
        debug_assert!(from < self.adjacency.len() && to < self.adjacency.len());
        debug_assert!(weight.is_admissible());
        self.adjacency[from].push((to, weight));
    }

    fn check_edge(&self, from: usize, to: usize, weight: W) -> Result<()> {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return Err(Error::InvalidEdge(from, to));
        }
        if !weight.is_admissible() {
            return Err(Error::NegativeWeight {
                from,
                to,
                weight: format!("{:?}", weight),
            });
        }
        Ok(())
    }
}

impl<W> Graph<W> for AdjacencyGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        Box::new(self.neighbors(vertex).iter().copied())
    }

    // push_edge skips the insertion checks, so re-run them over stored edges
    fn validate(&self) -> Result<()> {
        for (from, to, weight) in self.edges() {
            self.check_edge(from, to, weight)?;
        }
        Ok(())
    }
}

impl<W> MutableGraph<W> for AdjacencyGraph<W>
where
    W: Weight,
{
    fn add_vertex(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.check_edge(from, to, weight)?;
        self.adjacency[from].push((to, weight));
        Ok(())
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> bool {
        match self.adjacency.get_mut(from) {
            Some(outgoing) => {
                let len_before = outgoing.len();
                outgoing.retain(|(target, _)| *target != to);
                len_before > outgoing.len()
            }
            None => false,
        }
    }

    fn update_edge_weight(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.check_edge(from, to, weight)?;

        let mut updated = false;
        for edge in self.adjacency[from].iter_mut().filter(|(target, _)| *target == to) {
            edge.1 = weight;
            updated = true;
        }

        if updated {
            Ok(())
        } else {
            Err(Error::InvalidEdge(from, to))
        }
    }
}
