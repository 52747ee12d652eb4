//! Dijkstra's single-source shortest paths.
//!
//! Works on any graph whose weight type is a primitive non-negative integer
//! (`num_traits::PrimInt`). The maximum representable weight doubles as the
//! infinity sentinel: the result maps every unreachable vertex to
//! `W::max_value()`, as a value, not an error.

use std::collections::HashMap;
use std::hash::Hash;

use num_traits::PrimInt;

use crate::collections::MinHeap;
use crate::error::{Error, Result};
use crate::graph::{Graph, Vertex};

/// A queue entry: distance first so the heap pops the closest candidate,
/// vertex id second so the order is total and deterministic.
#[derive(PartialEq, Eq, PartialOrd, Ord)]
struct Candidate<W> {
    distance: W,
    id: usize,
}

/// Computes the shortest distance from `start` to every vertex of `graph`.
///
/// Weights must be non-negative; for unsigned `W` the type guarantees it,
/// for signed `W` it is the caller's contract. Unreachable vertices map to
/// `W::max_value()`, the infinity sentinel. Relaxation uses saturating
/// addition, so an overflowing path cost clamps to the sentinel and can
/// never undercut a real distance.
///
/// The loop terminates when the priority queue empties *or* every vertex
/// has been visited, whichever comes first; stale queue entries for
/// already-visited vertices are skipped by the visited check.
///
/// # Errors
///
/// [`Error::InvalidArgument`] if `start` is not in the graph.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn dijkstra<V, W>(start: &V, graph: &Graph<V, W>) -> Result<HashMap<Vertex<V>, W>>
where
    V: Clone + Eq + Hash,
    W: PrimInt,
{
    let source = graph
        .index_of(start)
        .ok_or(Error::InvalidArgument("start vertex is not in the graph"))?;
    let n = graph.vertex_count();

    let mut dist = vec![W::max_value(); n];
    dist[source] = W::zero();
    let mut visited = vec![false; n];
    let mut visited_count = 0usize;

    let mut queue = MinHeap::new();
    queue.push(Candidate {
        distance: W::zero(),
        id: source,
    });

    while visited_count < n {
        let Ok(Candidate { distance, id }) = queue.pop() else {
            break;
        };
        if !visited[id] {
            visited[id] = true;
            visited_count += 1;
        }
        for &(next, weight) in graph.neighbor_indices(id) {
            let relaxed = distance.saturating_add(weight);
            if !visited[next] && relaxed < dist[next] {
                dist[next] = relaxed;
                queue.push(Candidate {
                    distance: relaxed,
                    id: next,
                });
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(vertices = n, settled = visited_count, "dijkstra finished");

    Ok(graph
        .vertices()
        .iter()
        .enumerate()
        .map(|(id, vertex)| (vertex.clone(), dist[id]))
        .collect())
}
