//! Kruskal's minimum spanning forest.
//!
//! Expects an undirected graph in the crate's symmetric representation
//! (both directions of every edge present, see [`Graph::undirected`]).
//! Edges are considered cheapest-first through a [`MinHeap`] built with
//! Floyd's bulk construction, and a [`DisjointSet`] over the vertices
//! rejects every edge that would close a cycle — which also silently
//! discards self-loops and parallel edges.

use std::hash::Hash;

use crate::collections::{DisjointSet, MinHeap};
use crate::graph::{Edge, Graph};

/// Computes the minimum spanning tree of an undirected graph.
///
/// Returns the MST as a list of directed edges containing **both**
/// directions of every selected edge, mirroring the symmetric input
/// convention, so a spanning tree over `n` vertices yields `2 * (n - 1)`
/// edges. Returns `None` when the graph is disconnected (the edge queue
/// drains before the tree is complete). Graphs with zero or one vertex are
/// trivially connected and yield an empty edge list.
///
/// When several spanning trees share the minimum total weight the selected
/// edges follow the edge order (weight, then endpoint labels); distances
/// and total weight are minimal either way.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn kruskal<V, W>(graph: &Graph<V, W>) -> Option<Vec<Edge<V, W>>>
where
    V: Clone + Eq + Ord + Hash,
    W: Copy + Ord,
{
    let target = 2 * graph.vertex_count().saturating_sub(1);

    let mut classes = DisjointSet::with_capacity(graph.vertex_count());
    for vertex in graph.vertices() {
        classes.make_set(vertex.clone());
    }

    let mut queue = MinHeap::build(graph.edges().to_vec());
    let mut tree = Vec::with_capacity(target);
    while tree.len() < target {
        let edge = queue.pop().ok()?;
        if classes.union(edge.u(), edge.v()) {
            tree.push(edge.clone());
            tree.push(edge.reversed());
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(edges = tree.len() / 2, "kruskal selected a spanning tree");

    Some(tree)
}
