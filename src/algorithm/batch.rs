//! Solving one graph from many sources
//!
//! Solving never mutates the graph, so a single `&G` is shared by every
//! search while each search owns its frontier and distance vector.

use log::debug;
use rayon::prelude::*;

use crate::algorithm::dijkstra::solve;
use crate::algorithm::ShortestPathResult;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

fn check_sources<W, G>(graph: &G, sources: &[usize]) -> Result<()>
where
    W: Weight,
    G: Graph<W>,
{
    if let Some(&bad) = sources.iter().find(|&&s| !graph.has_vertex(s)) {
        return Err(Error::InvalidSource(bad));
    }
    graph.validate()
}

/// Solves from each source in turn; results follow the order of `sources`
pub fn solve_many<W, G>(graph: &G, sources: &[usize]) -> Result<Vec<ShortestPathResult<W>>>
where
    W: Weight,
    G: Graph<W>,
{
    check_sources(graph, sources)?;
    sources.iter().map(|&source| solve(graph, source)).collect()
}

/// Parallel version of [`solve_many`] on the rayon thread pool
///
/// Output order matches `sources`. Invalid sources and inadmissible weights
/// are reported before any search starts, naming the first offending source.
pub fn par_solve_many<W, G>(graph: &G, sources: &[usize]) -> Result<Vec<ShortestPathResult<W>>>
where
    W: Weight,
    G: Graph<W> + Sync,
{
    check_sources(graph, sources)?;
    debug!("solving {} sources on {} threads", sources.len(), rayon::current_num_threads());
    sources.par_iter().map(|&source| solve(graph, source)).collect()
}

/// All-pairs distances: row `s` holds the distances from source `s`
pub fn distance_matrix<W, G>(graph: &G) -> Result<Vec<Vec<Option<W>>>>
where
    W: Weight,
    G: Graph<W> + Sync,
{
    let sources: Vec<usize> = (0..graph.vertex_count()).collect();
    let results = par_solve_many(graph, &sources)?;
    Ok(results.into_iter().map(|result| result.distances).collect())
}
