//! Weighted adjacency-list graphs and the algorithms that run over them.
//!
//! A [`Graph`] is immutable once constructed: a vertex set, an edge list,
//! and for every vertex an **ordered** list of outgoing `(neighbor, weight)`
//! pairs. The adjacency order is the edge insertion order and is part of the
//! contract — [`traversal::bfs`] and [`traversal::dfs`] visit neighbors in
//! exactly that order.
//!
//! Undirected graphs are represented by symmetry: [`Graph::undirected`]
//! materializes both directions of every edge as distinct [`Edge`] values.
//! [`mst::kruskal`] relies on that convention and returns both directions of
//! every selected edge.
//!
//! Internally every vertex gets a dense id in `0..vertex_count`, and the
//! algorithms traverse over ids ([`Graph::neighbor_indices`]) rather than
//! hashing labels in their inner loops.

pub mod mst;
pub mod shortest_path;
pub mod traversal;

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::error::{Error, Result};

/// A graph vertex: an opaque identity wrapping a label.
///
/// Two vertices are equal iff their labels are equal, and the hash follows
/// the label. The wrapper exists so that vertex identity is an explicit
/// capability of the label type rather than an accident of representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex<V>(V);

impl<V> Vertex<V> {
    /// Wraps a label.
    pub fn new(label: V) -> Self {
        Self(label)
    }

    /// Returns the wrapped label.
    pub fn label(&self) -> &V {
        &self.0
    }

    /// Unwraps the label.
    pub fn into_label(self) -> V {
        self.0
    }
}

/// A weighted directed edge `(u, v, w)`.
///
/// Edges are ordered by weight ascending; ties break on the `(u, v)` labels
/// so the order is total and stable. In an undirected graph both `(u, v, w)`
/// and `(v, u, w)` are present as distinct edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<V, W> {
    u: Vertex<V>,
    v: Vertex<V>,
    weight: W,
}

impl<V, W> Edge<V, W> {
    /// Creates the edge from `u` to `v` with weight `weight`.
    pub fn new(u: Vertex<V>, v: Vertex<V>, weight: W) -> Self {
        Self { u, v, weight }
    }

    /// The source vertex.
    pub fn u(&self) -> &Vertex<V> {
        &self.u
    }

    /// The target vertex.
    pub fn v(&self) -> &Vertex<V> {
        &self.v
    }

    /// The edge weight.
    pub fn weight(&self) -> &W {
        &self.weight
    }

    /// The same edge in the opposite direction.
    pub fn reversed(self) -> Self {
        Self {
            u: self.v,
            v: self.u,
            weight: self.weight,
        }
    }
}

impl<V: Ord, W: Ord> PartialOrd for Edge<V, W> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Ord, W: Ord> Ord for Edge<V, W> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.u.cmp(&other.u))
            .then_with(|| self.v.cmp(&other.v))
    }
}

/// A `(vertex, distance)` pair: an adjacency entry, and the element type of
/// Dijkstra's priority queue.
///
/// Ordered by distance ascending, ties on the vertex label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexDistance<V, W> {
    vertex: Vertex<V>,
    distance: W,
}

impl<V, W> VertexDistance<V, W> {
    /// Pairs `vertex` with `distance`.
    pub fn new(vertex: Vertex<V>, distance: W) -> Self {
        Self { vertex, distance }
    }

    /// The vertex.
    pub fn vertex(&self) -> &Vertex<V> {
        &self.vertex
    }

    /// The distance (or weight) component.
    pub fn distance(&self) -> &W {
        &self.distance
    }
}

impl<V: Ord, W: Ord> PartialOrd for VertexDistance<V, W> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Ord, W: Ord> Ord for VertexDistance<V, W> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// An immutable weighted graph in adjacency-list form.
///
/// Construct with [`Graph::directed`] or [`Graph::undirected`]; after that
/// the graph cannot change, so traversals may freely hold references into
/// it. Invariants established at construction:
///
/// - every edge endpoint is a declared vertex;
/// - each vertex's adjacency list is in edge insertion order;
/// - for [`Graph::undirected`], the adjacency structure is symmetric.
pub struct Graph<V, W> {
    vertices: Vec<Vertex<V>>,
    index: HashMap<V, usize>,
    edges: Vec<Edge<V, W>>,
    adj: Vec<Vec<(usize, W)>>,
}

impl<V, W> Graph<V, W>
where
    V: Clone + Eq + Hash,
    W: Copy,
{
    /// Builds a directed graph from vertex labels and `(u, v, weight)`
    /// triples. Duplicate vertex labels collapse to one vertex; edges keep
    /// their given order.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if an edge endpoint is not a declared
    /// vertex.
    pub fn directed<VI, EI>(vertices: VI, edges: EI) -> Result<Self>
    where
        VI: IntoIterator<Item = V>,
        EI: IntoIterator<Item = (V, V, W)>,
    {
        let mut graph = Self::with_vertices(vertices);
        for (u, v, w) in edges {
            graph.push_edge(&u, &v, w)?;
        }
        Ok(graph)
    }

    /// Builds an undirected graph: every `(u, v, weight)` triple produces
    /// the two directed edges `(u, v, w)` and `(v, u, w)`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if an edge endpoint is not a declared
    /// vertex.
    pub fn undirected<VI, EI>(vertices: VI, edges: EI) -> Result<Self>
    where
        VI: IntoIterator<Item = V>,
        EI: IntoIterator<Item = (V, V, W)>,
    {
        let mut graph = Self::with_vertices(vertices);
        for (u, v, w) in edges {
            graph.push_edge(&u, &v, w)?;
            graph.push_edge(&v, &u, w)?;
        }
        Ok(graph)
    }

    fn with_vertices<VI: IntoIterator<Item = V>>(vertices: VI) -> Self {
        let mut graph = Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            adj: Vec::new(),
        };
        for label in vertices {
            let next = graph.vertices.len();
            let id = *graph.index.entry(label.clone()).or_insert(next);
            if id == next {
                graph.vertices.push(Vertex::new(label));
                graph.adj.push(Vec::new());
            }
        }
        graph
    }

    fn push_edge(&mut self, u: &V, v: &V, weight: W) -> Result<()> {
        let from = *self
            .index
            .get(u)
            .ok_or(Error::InvalidArgument("edge endpoint is not a declared vertex"))?;
        let to = *self
            .index
            .get(v)
            .ok_or(Error::InvalidArgument("edge endpoint is not a declared vertex"))?;
        self.adj[from].push((to, weight));
        self.edges.push(Edge::new(
            self.vertices[from].clone(),
            self.vertices[to].clone(),
            weight,
        ));
        Ok(())
    }

    /// Returns the outgoing `(neighbor, weight)` pairs of the vertex with
    /// label `label`, in adjacency order.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] for an unknown label.
    pub fn neighbors<'a>(
        &'a self,
        label: &V,
    ) -> Result<impl Iterator<Item = (&'a Vertex<V>, W)> + 'a> {
        let id = self
            .index_of(label)
            .ok_or(Error::InvalidArgument("vertex is not in the graph"))?;
        Ok(self.adj[id].iter().map(move |&(to, w)| (&self.vertices[to], w)))
    }
}

impl<V, W> Graph<V, W> {
    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of directed edges. An undirected graph counts
    /// each edge twice, once per direction.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The vertices in insertion order.
    pub fn vertices(&self) -> &[Vertex<V>] {
        &self.vertices
    }

    /// The directed edges in insertion order.
    pub fn edges(&self) -> &[Edge<V, W>] {
        &self.edges
    }

    /// The dense id of the vertex with label `label`, if present.
    pub fn index_of(&self, label: &V) -> Option<usize>
    where
        V: Eq + Hash,
    {
        self.index.get(label).copied()
    }

    /// Returns `true` if a vertex with label `label` is present.
    pub fn contains(&self, label: &V) -> bool
    where
        V: Eq + Hash,
    {
        self.index.contains_key(label)
    }

    /// The vertex with dense id `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id >= vertex_count()`.
    pub fn vertex(&self, id: usize) -> &Vertex<V> {
        &self.vertices[id]
    }

    /// The outgoing `(neighbor id, weight)` pairs of vertex `id`, in
    /// adjacency order.
    ///
    /// # Panics
    ///
    /// Panics if `id >= vertex_count()`.
    pub fn neighbor_indices(&self, id: usize) -> &[(usize, W)] {
        &self.adj[id]
    }
}

impl<V: fmt::Debug, W: fmt::Debug> fmt::Debug for Graph<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("vertices", &self.vertices)
            .field("edges", &self.edges)
            .finish()
    }
}
