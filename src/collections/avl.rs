//! An AVL tree: a height-balanced ordered set.
//!
//! [`Avl`] stores unique keys in binary-search-tree order and keeps itself
//! balanced with single and double rotations, so lookups, insertions, and
//! removals are all `O(log n)`. Each node caches the height of its subtree;
//! the balance factor (left height minus right height) is derived from the
//! children and never exceeds 1 in magnitude after a public operation.
//!
//! Beyond the usual set operations the tree answers two ordered queries:
//! [`Avl::predecessor`], the largest key strictly less than a stored key,
//! and [`Avl::max_deepest`], the rightmost key among those at the maximum
//! depth, which the balance invariant makes answerable in `O(height)`.
//!
//! Removal of a node with two children replaces it with its in-order
//! *predecessor* (the largest key of the left subtree), not its successor.
//!
//! # Example
//!
//! ```rust
//! use trellis::Avl;
//!
//! let mut tree = Avl::new();
//! for key in [20, 10, 30, 5, 15, 25, 35, 12] {
//!     tree.insert(key);
//! }
//!
//! assert_eq!(tree.remove(&20), Ok(20));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [5, 10, 12, 15, 25, 30, 35]);
//! assert_eq!(tree.predecessor(&25), Ok(Some(&15)));
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::mem;

use crate::error::{Error, Result};

/// The height of an absent subtree.
const EMPTY_HEIGHT: i32 = -1;

type Link<K> = Option<Box<Node<K>>>;

struct Node<K> {
    key: K,
    /// Height of the subtree rooted here; a leaf has height 0.
    height: i32,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            height: 0,
            left: None,
            right: None,
        })
    }

    /// Recompute this node's cached height from its children.
    fn update(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// Left height minus right height.
    fn balance_factor(&self) -> i32 {
        height(&self.left) - height(&self.right)
    }
}

fn height<K>(link: &Link<K>) -> i32 {
    link.as_deref().map_or(EMPTY_HEIGHT, |n| n.height)
}

/// A height-balanced ordered set.
///
/// Keys are unique; inserting a key that is already present is a no-op. All
/// mutating operations rebalance on the way back up the search path, so the
/// AVL invariant (`|balance factor| <= 1` at every node) holds after every
/// public call.
pub struct Avl<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Avl<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Avl<K> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the height of the tree in `O(1)` via the root's cached
    /// height, or `-1` for an empty tree. A single node has height 0.
    pub fn height(&self) -> i32 {
        height(&self.root)
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Visits the stored keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(&self.root);
        iter
    }
}

impl<K: Ord> Avl<K> {
    /// Builds a tree from keys, inserted in iteration order.
    pub fn from_iter_ordered<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut tree = Self::new();
        for key in keys {
            tree.insert(key);
        }
        tree
    }

    /// Inserts `key`, returning `true` if it was absent. Inserting a
    /// duplicate changes nothing and returns `false`.
    pub fn insert(&mut self, key: K) -> bool {
        let root = self.root.take();
        let (root, inserted) = insert_in(root, key);
        self.root = Some(root);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes the node whose key equals `key` and returns the *stored* key.
    ///
    /// A node with two children is replaced by its in-order predecessor,
    /// which is recursively removed from the left subtree. On
    /// [`Error::NotFound`] the tree is unchanged.
    pub fn remove(&mut self, key: &K) -> Result<K> {
        let root = self.root.take();
        match remove_in(root, key) {
            Ok((root, removed)) => {
                self.root = root;
                self.len -= 1;
                Ok(removed)
            }
            Err((root, err)) => {
                self.root = root;
                Err(err)
            }
        }
    }

    /// Returns the stored key equal to `key`, or [`Error::NotFound`].
    pub fn get(&self, key: &K) -> Result<&K> {
        let mut cur = &self.root;
        while let Some(node) = cur.as_deref() {
            match key.cmp(&node.key) {
                Ordering::Less => cur = &node.left,
                Ordering::Greater => cur = &node.right,
                Ordering::Equal => return Ok(&node.key),
            }
        }
        Err(Error::NotFound)
    }

    /// Returns `true` if a key equal to `key` is stored.
    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_ok()
    }

    /// Returns the largest stored key strictly less than the stored key
    /// equal to `key`.
    ///
    /// `key` itself must be present, otherwise [`Error::NotFound`]. Returns
    /// `Ok(None)` when `key` is the minimum. Two cases:
    ///
    /// 1. The found node has a left subtree: the predecessor is that
    ///    subtree's rightmost key.
    /// 2. No left subtree: the predecessor is the last ancestor the search
    ///    passed while turning right, if any.
    pub fn predecessor(&self, key: &K) -> Result<Option<&K>> {
        let mut last_right_turn: Option<&K> = None;
        let mut cur = &self.root;
        while let Some(node) = cur.as_deref() {
            match key.cmp(&node.key) {
                Ordering::Less => cur = &node.left,
                Ordering::Greater => {
                    last_right_turn = Some(&node.key);
                    cur = &node.right;
                }
                Ordering::Equal => {
                    return Ok(match node.left.as_deref() {
                        Some(left) => Some(rightmost(left)),
                        None => last_right_turn,
                    });
                }
            }
        }
        Err(Error::NotFound)
    }

    /// Returns the rightmost key among those at the maximum depth, or `None`
    /// on an empty tree.
    ///
    /// Because `|balance factor| <= 1` everywhere, the deepest leaves live
    /// under the taller child, so a single descent suffices: go left when
    /// the balance factor is positive, right when it is negative, and on a
    /// perfectly balanced node go right (the rightmost of the equally deep
    /// candidates) unless the node is a leaf.
    pub fn max_deepest(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        loop {
            let bf = node.balance_factor();
            node = if bf > 0 {
                node.left.as_deref()?
            } else if bf < 0 {
                node.right.as_deref()?
            } else if node.height == 0 {
                return Some(&node.key);
            } else {
                node.right.as_deref()?
            };
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for Avl<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: Ord> FromIterator<K> for Avl<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::from_iter_ordered(iter)
    }
}

/// Largest key of the subtree rooted at `node`.
fn rightmost<K>(mut node: &Node<K>) -> &K {
    while let Some(right) = node.right.as_deref() {
        node = right;
    }
    &node.key
}

/// Inserts `key` below `link`, returning the rebalanced subtree and whether
/// a new node was created.
fn insert_in<K: Ord>(link: Link<K>, key: K) -> (Box<Node<K>>, bool) {
    let Some(mut node) = link else {
        return (Node::new(key), true);
    };
    let inserted = match key.cmp(&node.key) {
        Ordering::Less => {
            let (left, inserted) = insert_in(node.left.take(), key);
            node.left = Some(left);
            inserted
        }
        Ordering::Greater => {
            let (right, inserted) = insert_in(node.right.take(), key);
            node.right = Some(right);
            inserted
        }
        Ordering::Equal => return (node, false),
    };
    node.update();
    (rebalance(node), inserted)
}

/// Removes the key equal to `key` from the subtree at `link`.
///
/// Returns the rebalanced subtree together with the stored key, or gives the
/// subtree back untouched alongside the error.
#[allow(clippy::type_complexity)]
fn remove_in<K: Ord>(link: Link<K>, key: &K) -> core::result::Result<(Link<K>, K), (Link<K>, Error)> {
    let Some(mut node) = link else {
        return Err((None, Error::NotFound));
    };
    let removed = match key.cmp(&node.key) {
        Ordering::Less => match remove_in(node.left.take(), key) {
            Ok((left, removed)) => {
                node.left = left;
                removed
            }
            Err((left, err)) => {
                node.left = left;
                return Err((Some(node), err));
            }
        },
        Ordering::Greater => match remove_in(node.right.take(), key) {
            Ok((right, removed)) => {
                node.right = right;
                removed
            }
            Err((right, err)) => {
                node.right = right;
                return Err((Some(node), err));
            }
        },
        Ordering::Equal => {
            return Ok(match (node.left.take(), node.right.take()) {
                (None, None) => (None, node.key),
                (Some(child), None) | (None, Some(child)) => (Some(child), node.key),
                (Some(left), Some(right)) => {
                    // Two children: promote the in-order predecessor, i.e.
                    // the largest key of the left subtree.
                    let (left, pred) = take_max(left);
                    node.left = left;
                    node.right = Some(right);
                    let removed = mem::replace(&mut node.key, pred);
                    node.update();
                    (Some(rebalance(node)), removed)
                }
            });
        }
    };
    node.update();
    Ok((Some(rebalance(node)), removed))
}

/// Detaches the largest key of the subtree rooted at `node`, rebalancing the
/// nodes along the right spine on the way back up.
fn take_max<K: Ord>(mut node: Box<Node<K>>) -> (Link<K>, K) {
    match node.right.take() {
        None => (node.left.take(), node.key),
        Some(right) => {
            let (right, max) = take_max(right);
            node.right = right;
            node.update();
            (Some(rebalance(node)), max)
        }
    }
}

/// Restores the AVL invariant at `node`, assuming both subtrees already
/// satisfy it and `node`'s cached height is current.
///
/// The four cases, by the node's balance factor `bf` and the relevant
/// child's balance factor:
///
/// - `bf <= -2`, right child `bf <= 0`: left rotation.
/// - `bf <= -2`, right child `bf > 0`: right-rotate the right child, then
///   left rotation (right-left case).
/// - `bf >= 2`, left child `bf >= 0`: right rotation.
/// - `bf >= 2`, left child `bf < 0`: left-rotate the left child, then right
///   rotation (left-right case).
fn rebalance<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let bf = node.balance_factor();
    if bf <= -2 {
        let right = node.right.take().expect("negative balance factor implies a right child");
        if right.balance_factor() > 0 {
            node.right = Some(rotate_right(right));
        } else {
            node.right = Some(right);
        }
        rotate_left(node)
    } else if bf >= 2 {
        let left = node.left.take().expect("positive balance factor implies a left child");
        if left.balance_factor() < 0 {
            node.left = Some(rotate_left(left));
        } else {
            node.left = Some(left);
        }
        rotate_right(node)
    } else {
        node
    }
}

/// Lifts the right child to the subtree root; its left subtree becomes the
/// demoted node's right subtree.
fn rotate_left<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let mut pivot = node.right.take().expect("left rotation requires a right child");
    node.right = pivot.left.take();
    node.update();
    pivot.left = Some(node);
    pivot.update();
    pivot
}

/// Mirror image of [`rotate_left`].
fn rotate_right<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let mut pivot = node.left.take().expect("right rotation requires a left child");
    node.left = pivot.right.take();
    node.update();
    pivot.right = Some(node);
    pivot.update();
    pivot
}

/// In-order borrowing iterator over an [`Avl`].
///
/// Driven by an explicit ancestor stack; creation is `O(height)` and a full
/// traversal is `O(n)`.
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Iter<'a, K> {
    fn push_left_spine(&mut self, mut link: &'a Link<K>) {
        while let Some(node) = link.as_deref() {
            self.stack.push(node);
            link = &node.left;
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(&node.key)
    }
}

impl<'a, K> IntoIterator for &'a Avl<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    impl<K: Ord> Avl<K> {
        /// Walks the whole tree checking BST order, cached heights, and the
        /// balance invariant. Returns the number of reachable nodes.
        fn assert_invariants(&self) -> usize {
            fn check<K: Ord>(link: &Link<K>, lo: Option<&K>, hi: Option<&K>) -> usize {
                let Some(node) = link.as_deref() else { return 0 };
                if let Some(lo) = lo {
                    assert!(node.key > *lo, "BST order violated");
                }
                if let Some(hi) = hi {
                    assert!(node.key < *hi, "BST order violated");
                }
                let count =
                    1 + check(&node.left, lo, Some(&node.key)) + check(&node.right, Some(&node.key), hi);
                assert_eq!(
                    node.height,
                    1 + height(&node.left).max(height(&node.right)),
                    "stale cached height"
                );
                assert!(node.balance_factor().abs() <= 1, "AVL balance violated");
                count
            }
            let count = check(&self.root, None, None);
            assert_eq!(count, self.len, "len out of sync with reachable nodes");
            count
        }

        fn root_key(&self) -> Option<&K> {
            self.root.as_deref().map(|n| &n.key)
        }
    }

    fn tree_of(keys: &[i32]) -> Avl<i32> {
        let tree: Avl<i32> = keys.iter().copied().collect();
        tree.assert_invariants();
        tree
    }

    #[test]
    fn empty_tree() {
        let tree: Avl<i32> = Avl::new();
        assert_eq!(tree.len(), 0);
        assert!(tree.is_empty());
        assert_eq!(tree.height(), -1);
        assert_eq!(tree.max_deepest(), None);
        assert_eq!(tree.get(&1), Err(Error::NotFound));
    }

    #[test]
    fn skewed_insertion_rebalances() {
        // Right-right, right-left, and left-right rotations all fire here.
        let tree = tree_of(&[10, 20, 30, 40, 50, 25]);
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [10, 20, 25, 30, 40, 50]);
        assert_eq!(tree.root_key(), Some(&30));
        assert_eq!(tree.height(), 2);
    }

    #[test]
    fn duplicate_insert_is_noop() {
        let mut tree = tree_of(&[3, 1, 4]);
        assert!(!tree.insert(4));
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.height(), 1);
        tree.assert_invariants();
    }

    #[test]
    fn remove_leaf_and_one_child() {
        let mut tree = tree_of(&[2, 1, 3, 4]);
        assert_eq!(tree.remove(&3), Ok(3)); // one child: 4 is promoted
        assert_eq!(tree.remove(&4), Ok(4)); // leaf
        tree.assert_invariants();
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2]);
    }

    #[test]
    fn remove_two_children_uses_predecessor() {
        let mut tree = tree_of(&[20, 10, 30, 5, 15, 25, 35, 12]);
        assert_eq!(tree.remove(&20), Ok(20));
        tree.assert_invariants();
        assert_eq!(
            tree.iter().copied().collect::<Vec<_>>(),
            [5, 10, 12, 15, 25, 30, 35]
        );
        // The in-order predecessor, not the successor, takes the root.
        assert_eq!(tree.root_key(), Some(&15));
    }

    #[test]
    fn remove_absent_leaves_tree_unchanged() {
        let mut tree = tree_of(&[2, 1, 3]);
        assert_eq!(tree.remove(&9), Err(Error::NotFound));
        assert_eq!(tree.len(), 3);
        tree.assert_invariants();
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    }

    #[test]
    fn remove_triggers_rebalance() {
        // Deleting from the shallow side must rotate.
        let mut tree = tree_of(&[4, 2, 6, 1, 3, 5, 7, 0]);
        assert_eq!(tree.remove(&7), Ok(7));
        assert_eq!(tree.remove(&5), Ok(5));
        assert_eq!(tree.remove(&6), Ok(6));
        tree.assert_invariants();
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
    }

    #[test]
    fn get_returns_stored_key() {
        let tree = tree_of(&[7, 3, 9]);
        assert_eq!(tree.get(&3), Ok(&3));
        assert!(tree.contains(&9));
        assert!(!tree.contains(&8));
    }

    #[test]
    fn predecessor_both_cases() {
        //     76
        //   /    \
        // 34      90
        //  \     /
        //  40   81
        let tree = tree_of(&[76, 34, 90, 40, 81]);
        // Left subtree present: rightmost of the left subtree.
        assert_eq!(tree.predecessor(&76), Ok(Some(&40)));
        // No left subtree: last ancestor passed while turning right.
        assert_eq!(tree.predecessor(&81), Ok(Some(&76)));
        assert_eq!(tree.predecessor(&40), Ok(Some(&34)));
        // Minimum has no predecessor.
        assert_eq!(tree.predecessor(&34), Ok(None));
        // The probe must be present.
        assert_eq!(tree.predecessor(&50), Err(Error::NotFound));
    }

    #[test]
    fn predecessor_of_leaf_without_left_sibling() {
        let tree = tree_of(&[2, 1, 3]);
        assert_eq!(tree.predecessor(&3), Ok(Some(&2)));
        assert_eq!(tree.predecessor(&1), Ok(None));
    }

    #[test]
    fn max_deepest_prefers_right_on_ties() {
        //   2
        //  / \
        // 0   3
        //  \
        //   1
        let tree = tree_of(&[2, 0, 3, 1]);
        assert_eq!(tree.max_deepest(), Some(&1));

        //   2
        //  / \
        // 0   4
        //  \ /
        //  1 3
        let tree = tree_of(&[2, 0, 4, 1, 3]);
        assert_eq!(tree.max_deepest(), Some(&3));

        let tree = tree_of(&[5]);
        assert_eq!(tree.max_deepest(), Some(&5));
    }

    #[test]
    fn clear_resets() {
        let mut tree = tree_of(&[1, 2, 3]);
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.height(), -1);
        assert!(tree.insert(1));
    }

    proptest! {
        #[test]
        fn invariants_hold_under_mixed_ops(ops in proptest::collection::vec((any::<bool>(), 0i32..64), 0..200)) {
            let mut tree = Avl::new();
            for (is_insert, key) in ops {
                if is_insert {
                    tree.insert(key);
                } else if let Ok(stored) = tree.remove(&key) {
                    prop_assert_eq!(stored, key);
                }
                tree.assert_invariants();
            }
            let sorted: Vec<_> = tree.iter().copied().collect();
            prop_assert!(sorted.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn height_is_logarithmic(keys in proptest::collection::btree_set(any::<i32>(), 1..256)) {
            let len = keys.len();
            let tree: Avl<i32> = keys.into_iter().collect();
            tree.assert_invariants();
            // An AVL of n nodes is no taller than 1.44 * log2(n + 2).
            let bound = (1.44 * ((len + 2) as f64).log2()).ceil() as i32;
            prop_assert!(tree.height() <= bound);
        }
    }
}
