//! Disjoint Set (Union-Find) keyed by arbitrary hashable elements.
//!
//! Elements are interned into dense ids on [`DisjointSet::make_set`];
//! parent pointers live in a flat vector of `Cell<usize>` so that
//! [`DisjointSet::find`] can apply full path compression through a shared
//! reference. Together with union-by-rank this gives amortized
//! near-constant time per operation.

use std::cell::Cell;
use std::collections::HashMap;
use std::hash::Hash;

/// A partition of elements into disjoint equivalence classes.
///
/// `find` returns a class representative as a dense id; two elements are in
/// the same class iff their representatives are equal.
#[derive(Debug, Default)]
pub struct DisjointSet<T> {
    ids: HashMap<T, usize>,
    /// Parent pointers; `Cell` so `find` can compress paths under `&self`.
    parent: Vec<Cell<usize>>,
    /// Rank (depth upper bound) for union-by-rank.
    rank: Vec<u8>,
}

impl<T: Eq + Hash> DisjointSet<T> {
    /// Creates an empty partition.
    pub fn new() -> Self {
        Self {
            ids: HashMap::new(),
            parent: Vec::new(),
            rank: Vec::new(),
        }
    }

    /// Creates an empty partition with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: HashMap::with_capacity(capacity),
            parent: Vec::with_capacity(capacity),
            rank: Vec::with_capacity(capacity),
        }
    }

    /// Adds `item` as a singleton class and returns its id. Idempotent: an
    /// element that is already present keeps its id and its class.
    pub fn make_set(&mut self, item: T) -> usize {
        let next = self.parent.len();
        let id = *self.ids.entry(item).or_insert(next);
        if id == next {
            self.parent.push(Cell::new(id));
            self.rank.push(0);
        }
        id
    }

    /// Returns the representative id of `item`'s class, or `None` for an
    /// element no `make_set` has seen.
    ///
    /// Logically const but compresses the walked path, so later finds on the
    /// same class are shorter.
    pub fn find(&self, item: &T) -> Option<usize> {
        let id = *self.ids.get(item)?;
        Some(self.find_root(id))
    }

    /// Merges the classes of `a` and `b` by rank. Returns `true` if two
    /// distinct classes were merged, `false` if they already shared a class
    /// or either element is unknown.
    pub fn union(&mut self, a: &T, b: &T) -> bool {
        let (Some(&a), Some(&b)) = (self.ids.get(a), self.ids.get(b)) else {
            return false;
        };
        let root_a = self.find_root(a);
        let root_b = self.find_root(b);
        if root_a == root_b {
            return false;
        }
        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a].set(root_b),
            std::cmp::Ordering::Greater => self.parent[root_b].set(root_a),
            std::cmp::Ordering::Equal => {
                self.parent[root_b].set(root_a);
                self.rank[root_a] += 1;
            }
        }
        true
    }

    /// Returns `true` if `a` and `b` are both known and share a class.
    pub fn same_set(&self, a: &T, b: &T) -> bool {
        match (self.find(a), self.find(b)) {
            (Some(ra), Some(rb)) => ra == rb,
            _ => false,
        }
    }

    /// Two-pass find on dense ids: locate the root, then point every node on
    /// the walked path directly at it.
    fn find_root(&self, id: usize) -> usize {
        let mut root = id;
        loop {
            let parent = self.parent[root].get();
            if parent == root {
                break;
            }
            root = parent;
        }
        let mut cur = id;
        while cur != root {
            let parent = self.parent[cur].get();
            self.parent[cur].set(root);
            cur = parent;
        }
        root
    }
}

impl<T> DisjointSet<T> {
    /// Returns the number of elements across all classes.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if no element has been added.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons_are_distinct() {
        let mut ds = DisjointSet::new();
        for label in ["a", "b", "c"] {
            ds.make_set(label);
        }
        assert_eq!(ds.len(), 3);
        assert!(!ds.same_set(&"a", &"b"));
        assert_ne!(ds.find(&"a"), ds.find(&"c"));
    }

    #[test]
    fn make_set_is_idempotent() {
        let mut ds = DisjointSet::new();
        let first = ds.make_set(7);
        let second = ds.make_set(7);
        assert_eq!(first, second);
        assert_eq!(ds.len(), 1);
    }

    #[test]
    fn union_merges_transitively() {
        let mut ds = DisjointSet::new();
        for x in 0..5 {
            ds.make_set(x);
        }
        assert!(ds.union(&0, &1));
        assert!(ds.union(&2, &3));
        assert!(!ds.same_set(&0, &2));
        assert!(ds.union(&1, &3));
        assert!(ds.same_set(&0, &2));
        assert!(ds.same_set(&0, &3));
        assert!(!ds.same_set(&0, &4));
    }

    #[test]
    fn union_is_idempotent() {
        let mut ds = DisjointSet::new();
        ds.make_set('x');
        ds.make_set('y');
        assert!(ds.union(&'x', &'y'));
        assert!(!ds.union(&'x', &'y'));
        assert!(!ds.union(&'y', &'x'));
    }

    #[test]
    fn unknown_elements() {
        let mut ds = DisjointSet::new();
        ds.make_set(1);
        assert_eq!(ds.find(&2), None);
        assert!(!ds.union(&1, &2));
        assert!(!ds.same_set(&1, &2));
    }

    #[test]
    fn long_chain_collapses() {
        let mut ds = DisjointSet::new();
        for x in 0..64 {
            ds.make_set(x);
        }
        for x in 0..63 {
            assert!(ds.union(&x, &(x + 1)));
        }
        let root = ds.find(&0).unwrap();
        for x in 1..64 {
            assert_eq!(ds.find(&x), Some(root));
        }
    }
}
