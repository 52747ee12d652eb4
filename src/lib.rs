//! # `trellis` - Classical Data Structures and Algorithms
//!
//! A small library of classical containers and graph algorithms, written as a
//! teaching reference and as a foundation for higher-level tooling. The crate
//! has two halves:
//!
//! - **Containers** ([`collections`]): a height-balanced ordered set
//!   ([`Avl`]), an array-backed binary min-heap ([`MinHeap`]), and a
//!   union-find structure ([`DisjointSet`]).
//! - **Graph algorithms** ([`graph`]): breadth-first and depth-first search,
//!   Dijkstra's single-source shortest paths, and Kruskal's minimum spanning
//!   forest, all over an immutable adjacency-list [`Graph`].
//!
//! ## Determinism
//!
//! Every algorithm in this crate is deterministic given its input. A
//! [`Graph`] stores each vertex's neighbors in insertion order, and that
//! order is part of the contract: [`graph::traversal::bfs`] and
//! [`graph::traversal::dfs`] visit neighbors exactly in adjacency order.
//! Dijkstra's distances do not depend on tie-breaking; Kruskal's selected
//! edges are deterministic whenever the minimum spanning tree is unique.
//!
//! ## Invariants
//!
//! The containers maintain their structural invariants after every public
//! operation:
//!
//! - [`Avl`]: binary-search-tree order, cached heights, and a balance factor
//!   of at most 1 in magnitude at every node.
//! - [`MinHeap`]: every parent is no greater than its children.
//! - [`DisjointSet`]: every element belongs to exactly one class, and `find`
//!   returns the class representative.
//!
//! Failed operations are atomic: a `remove` or `get` that returns
//! [`Error::NotFound`] leaves the container untouched.
//!
//! ## Example
//!
//! ```rust
//! use trellis::{Avl, Graph};
//! use trellis::graph::traversal::bfs;
//!
//! let mut set = Avl::new();
//! for key in [10, 20, 30, 40, 50, 25] {
//!     set.insert(key);
//! }
//! assert_eq!(set.len(), 6);
//! assert_eq!(set.height(), 2); // rebalanced, not a vine
//!
//! let graph = Graph::directed(
//!     ["a", "b", "c"],
//!     [("a", "b", 1u32), ("a", "c", 2), ("b", "c", 1)],
//! )
//! .unwrap();
//! let order: Vec<_> = bfs(&"a", &graph).unwrap();
//! assert_eq!(order.iter().map(|v| *v.label()).collect::<Vec<_>>(), ["a", "b", "c"]);
//! ```
//!
//! ## Scope
//!
//! Everything here is single-threaded and synchronous: no operation blocks,
//! suspends, or spawns work, and the containers are not safe under concurrent
//! mutation. There is no I/O and no persistence. Optional features:
//!
//! - `serde`: `Serialize`/`Deserialize` for the graph value types.
//! - `tracing`: spans and events on the graph algorithm entry points.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;
pub mod graph;

pub use collections::{Avl, DisjointSet, MinHeap};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, Vertex, VertexDistance};
