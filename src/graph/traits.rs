use std::fmt::Debug;
use num_traits::{CheckedAdd, Zero};
use ordered_float::OrderedFloat;

use crate::{Error, Result};

/// Edge weight usable by the shortest path algorithms
///
/// Weights must be totally ordered and support an addition that reports
/// overflow instead of wrapping. Only weights for which `is_admissible`
/// holds may appear in a graph handed to a solver.
pub trait Weight: Copy + Ord + Zero + Debug + Send + Sync {
    /// Adds two weights, returning `None` if the sum is not representable
    fn checked_sum(self, other: Self) -> Option<Self>;

    /// Returns true if the weight is valid for Dijkstra (non-negative)
    fn is_admissible(&self) -> bool {
        *self >= Self::zero()
    }
}

macro_rules! impl_integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &other)
                }
            }
        )*
    };
}

impl_integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! impl_float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for OrderedFloat<$t> {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    let sum = self.0 + other.0;
                    if sum.is_finite() {
                        Some(OrderedFloat(sum))
                    } else {
                        None
                    }
                }

                // NaN sorts above everything in OrderedFloat, so check it explicitly
                fn is_admissible(&self) -> bool {
                    self.0.is_finite() && self.0 >= 0.0
                }
            }
        )*
    };
}

impl_float_weight!(f32, f64);

/// Trait representing a weighted directed graph with dense vertex indices
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex, in insertion order
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.outgoing_edges(from).any(|(target, _)| target == to)
    }

    /// Gets the weight of the first edge from `from` to `to`, if any
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges(from)
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
    }

    /// Checks that every edge points at a valid vertex and carries an admissible weight
    fn validate(&self) -> Result<()> {
        for from in 0..self.vertex_count() {
            for (to, weight) in self.outgoing_edges(from) {
                if !self.has_vertex(to) {
                    return Err(Error::InvalidEdge(from, to));
                }
                if !weight.is_admissible() {
                    return Err(Error::NegativeWeight {
                        from,
                        to,
                        weight: format!("{:?}", weight),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Adds a vertex to the graph and returns its ID
    fn add_vertex(&mut self) -> usize;

    /// Appends a directed edge to the outgoing list of `from`
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()>;

    /// Removes every edge from `from` to `to`, returning true if one existed
    fn remove_edge(&mut self, from: usize, to: usize) -> bool;

    /// Sets the weight of every edge from `from` to `to`
    fn update_edge_weight(&mut self, from: usize, to: usize, weight: W) -> Result<()>;
}
