//! Container types.
//!
//! - [`avl`]: height-balanced ordered set with augmented per-node metadata.
//! - [`binary_heap`]: array-backed binary min-heap with bulk build.
//! - [`disjoint_set`]: union-find over arbitrary hashable elements.

pub mod avl;
pub mod binary_heap;
pub mod disjoint_set;

pub use avl::Avl;
pub use binary_heap::{heap_sort, MinHeap};
pub use disjoint_set::DisjointSet;
