//! Breadth-first and depth-first search.
//!
//! Both traversals visit each vertex's neighbors in adjacency order and
//! return every vertex reachable from the start, each exactly once, so the
//! output is deterministic given the graph. [`bfs`] and [`dfs`] collect the
//! visit order eagerly; [`Bfs`] and [`Dfs`] are the lazy iterator forms.
//!
//! [`dfs`] is the recursive pre-order: emit the vertex, then recurse into
//! each not-yet-visited neighbor in adjacency order. Its recursion depth can
//! reach the number of vertices. The [`Dfs`] iterator produces the same
//! order with an explicit stack (neighbors pushed in reverse, visited
//! checked at pop).

use std::collections::VecDeque;
use std::hash::Hash;

use crate::error::{Error, Result};
use crate::graph::{Graph, Vertex};

/// Visits every vertex reachable from `start` in breadth-first order.
///
/// Vertices are marked visited when enqueued, so each appears once; a
/// vertex's neighbors are explored in adjacency order.
///
/// # Errors
///
/// [`Error::InvalidArgument`] if `start` is not in the graph.
pub fn bfs<'a, V, W>(start: &V, graph: &'a Graph<V, W>) -> Result<Vec<&'a Vertex<V>>>
where
    V: Eq + Hash,
{
    let start = graph
        .index_of(start)
        .ok_or(Error::InvalidArgument("start vertex is not in the graph"))?;
    Ok(Bfs::from_id(graph, start).collect())
}

/// Visits every vertex reachable from `start` in depth-first pre-order.
///
/// # Errors
///
/// [`Error::InvalidArgument`] if `start` is not in the graph.
pub fn dfs<'a, V, W>(start: &V, graph: &'a Graph<V, W>) -> Result<Vec<&'a Vertex<V>>>
where
    V: Eq + Hash,
{
    let start = graph
        .index_of(start)
        .ok_or(Error::InvalidArgument("start vertex is not in the graph"))?;
    let mut visited = vec![false; graph.vertex_count()];
    let mut order = Vec::new();
    dfs_visit(graph, start, &mut visited, &mut order);
    Ok(order)
}

fn dfs_visit<'a, V, W>(
    graph: &'a Graph<V, W>,
    id: usize,
    visited: &mut [bool],
    order: &mut Vec<&'a Vertex<V>>,
) {
    visited[id] = true;
    order.push(graph.vertex(id));
    for &(next, _) in graph.neighbor_indices(id) {
        if !visited[next] {
            dfs_visit(graph, next, visited, order);
        }
    }
}

/// A lazy breadth-first traversal yielding vertices in visit order.
pub struct Bfs<'a, V, W> {
    graph: &'a Graph<V, W>,
    visited: Vec<bool>,
    queue: VecDeque<usize>,
}

impl<'a, V, W> Bfs<'a, V, W> {
    /// Starts a traversal from the vertex with label `start`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `start` is not in the graph.
    pub fn new(start: &V, graph: &'a Graph<V, W>) -> Result<Self>
    where
        V: Eq + Hash,
    {
        let start = graph
            .index_of(start)
            .ok_or(Error::InvalidArgument("start vertex is not in the graph"))?;
        Ok(Self::from_id(graph, start))
    }

    fn from_id(graph: &'a Graph<V, W>, start: usize) -> Self {
        let mut visited = vec![false; graph.vertex_count()];
        let mut queue = VecDeque::new();
        visited[start] = true;
        queue.push_back(start);
        Self {
            graph,
            visited,
            queue,
        }
    }
}

impl<'a, V, W> Iterator for Bfs<'a, V, W> {
    type Item = &'a Vertex<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.queue.pop_front()?;
        for &(next, _) in self.graph.neighbor_indices(id) {
            if !self.visited[next] {
                self.visited[next] = true;
                self.queue.push_back(next);
            }
        }
        Some(self.graph.vertex(id))
    }
}

/// A lazy depth-first traversal yielding vertices in pre-order.
///
/// Matches [`dfs`] exactly: neighbors go onto the stack in reverse
/// adjacency order and the visited mark is taken at pop, which reproduces
/// the recursive visit order without the recursion.
pub struct Dfs<'a, V, W> {
    graph: &'a Graph<V, W>,
    visited: Vec<bool>,
    stack: Vec<usize>,
}

impl<'a, V, W> Dfs<'a, V, W> {
    /// Starts a traversal from the vertex with label `start`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `start` is not in the graph.
    pub fn new(start: &V, graph: &'a Graph<V, W>) -> Result<Self>
    where
        V: Eq + Hash,
    {
        let start = graph
            .index_of(start)
            .ok_or(Error::InvalidArgument("start vertex is not in the graph"))?;
        Ok(Self {
            graph,
            visited: vec![false; graph.vertex_count()],
            stack: vec![start],
        })
    }
}

impl<'a, V, W> Iterator for Dfs<'a, V, W> {
    type Item = &'a Vertex<V>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let id = self.stack.pop()?;
            if self.visited[id] {
                // A vertex can sit on the stack more than once when several
                // of its in-neighbors were expanded before it was popped.
                continue;
            }
            self.visited[id] = true;
            for &(next, _) in self.graph.neighbor_indices(id).iter().rev() {
                if !self.visited[next] {
                    self.stack.push(next);
                }
            }
            return Some(self.graph.vertex(id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(vertices: Vec<&Vertex<char>>) -> Vec<char> {
        vertices.into_iter().map(|v| *v.label()).collect()
    }

    /// A -> B, A -> C, B -> D, C -> D, D -> E, adjacency lists in that order.
    fn sample() -> Graph<char, u32> {
        Graph::directed(
            ['a', 'b', 'c', 'd', 'e'],
            [
                ('a', 'b', 1),
                ('a', 'c', 1),
                ('b', 'd', 1),
                ('c', 'd', 1),
                ('d', 'e', 1),
            ],
        )
        .unwrap()
    }

    #[test]
    fn bfs_visits_level_by_level() {
        let graph = sample();
        assert_eq!(labels(bfs(&'a', &graph).unwrap()), ['a', 'b', 'c', 'd', 'e']);
    }

    #[test]
    fn dfs_is_preorder() {
        let graph = sample();
        assert_eq!(labels(dfs(&'a', &graph).unwrap()), ['a', 'b', 'd', 'e', 'c']);
    }

    #[test]
    fn iterators_match_eager_forms() {
        let graph = sample();
        for start in ['a', 'b', 'c', 'd', 'e'] {
            let lazy: Vec<_> = Bfs::new(&start, &graph).unwrap().collect();
            assert_eq!(lazy, bfs(&start, &graph).unwrap());

            let lazy: Vec<_> = Dfs::new(&start, &graph).unwrap().collect();
            assert_eq!(lazy, dfs(&start, &graph).unwrap());
        }
    }

    #[test]
    fn unreachable_vertices_are_absent() {
        let graph =
            Graph::directed(['a', 'b', 'x'], [('a', 'b', 1u32)]).unwrap();
        assert_eq!(labels(bfs(&'a', &graph).unwrap()), ['a', 'b']);
        assert_eq!(labels(dfs(&'b', &graph).unwrap()), ['b']);
    }

    #[test]
    fn cycles_terminate() {
        let graph = Graph::directed(
            ['a', 'b', 'c'],
            [('a', 'b', 1u32), ('b', 'c', 1), ('c', 'a', 1)],
        )
        .unwrap();
        assert_eq!(labels(bfs(&'a', &graph).unwrap()), ['a', 'b', 'c']);
        assert_eq!(labels(dfs(&'a', &graph).unwrap()), ['a', 'b', 'c']);
    }

    #[test]
    fn missing_start_is_rejected() {
        let graph = sample();
        let err = Error::InvalidArgument("start vertex is not in the graph");
        assert_eq!(bfs(&'z', &graph).err(), Some(err));
        assert_eq!(dfs(&'z', &graph).err(), Some(err));
        assert!(Bfs::new(&'z', &graph).is_err());
        assert!(Dfs::new(&'z', &graph).is_err());
    }

    #[test]
    fn traversal_on_undirected_graph() {
        let graph = Graph::undirected(['a', 'b', 'c'], [('a', 'b', 1u32), ('b', 'c', 2)]).unwrap();
        assert_eq!(labels(bfs(&'c', &graph).unwrap()), ['c', 'b', 'a']);
    }
}
