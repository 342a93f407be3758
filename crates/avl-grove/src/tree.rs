//! AVL tree handle and the recursive insert/remove engine.

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::node::{AvlNode, height, Link};
use crate::print;
use crate::rotate::{rebalance_after_insert, rebalance_after_remove};
use crate::verify::{self, ValidationError};

/// Self-balancing binary search tree with owned child links.
///
/// Keys are unique, totally ordered scalars kept in their natural order.
/// Every mutating operation restores the AVL balance invariant before it
/// returns, so lookups and traversals stay logarithmic.
///
/// # Example
///
/// ```
/// use avl_grove::AvlTree;
///
/// let mut tree = AvlTree::new();
/// assert!(tree.insert(2));
/// assert!(tree.insert(1));
/// assert!(tree.insert(3));
/// assert!(!tree.insert(2));
///
/// assert_eq!(tree.in_order(), vec![1, 2, 3]);
/// assert!(tree.remove(2));
/// assert!(tree.is_balanced());
/// ```
pub struct AvlTree<K> {
    pub root: Link<K>,
    len: usize,
}

impl<K> AvlTree<K>
where
    K: Ord + Copy,
{
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Insert a key. Returns `false` when the key is already present;
    /// duplicate insertions leave the tree untouched.
    pub fn insert(&mut self, key: K) -> bool {
        if self.contains(key) {
            return false;
        }
        self.root = insert_at(self.root.take(), key);
        self.len += 1;
        true
    }

    /// Remove a key. Returns `false` when the key is absent; removing a
    /// missing key leaves the tree untouched.
    pub fn remove(&mut self, key: K) -> bool {
        if !self.contains(key) {
            return false;
        }
        self.root = remove_at(self.root.take(), key);
        self.len -= 1;
        true
    }

    pub fn contains(&self, key: K) -> bool {
        let mut curr = &self.root;
        while let Some(node) = curr {
            match key.cmp(&node.key) {
                Ordering::Less => curr = &node.left,
                Ordering::Greater => curr = &node.right,
                Ordering::Equal => return true,
            }
        }
        false
    }

    /// Whether every node satisfies the AVL balance invariant.
    ///
    /// Walks cached heights only; see [`AvlTree::assert_valid`] for the
    /// deep check that recomputes heights from scratch.
    pub fn is_balanced(&self) -> bool {
        verify::is_balanced(&self.root)
    }

    /// Deep structural validation of the whole tree.
    ///
    /// # Errors
    ///
    /// Returns the first violation found: a stale cached height, a balance
    /// factor out of range, keys out of order, or a length mismatch.
    pub fn assert_valid(&self) -> Result<(), ValidationError> {
        verify::assert_avl_tree(&self.root, self.len)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Height of the tree. An empty tree has height 0.
    pub fn height(&self) -> u32 {
        height(&self.root)
    }

    /// Keys in ascending order.
    pub fn in_order(&self) -> Vec<K> {
        let mut keys = Vec::with_capacity(self.len);
        collect_in_order(&self.root, &mut keys);
        keys
    }
}

impl<K> AvlTree<K>
where
    K: Ord + Copy + Debug,
{
    /// Render the tree for debugging.
    pub fn print(&self) -> String {
        print::print(&self.root, "")
    }
}

impl<K> Default for AvlTree<K>
where
    K: Ord + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Insert `key` into the subtree, returning its new root.
///
/// The only allocating case is the empty subtree; a duplicate key returns
/// the subtree unchanged.
fn insert_at<K>(link: Link<K>, key: K) -> Link<K>
where
    K: Ord + Copy,
{
    let Some(mut node) = link else {
        return Some(Box::new(AvlNode::new(key)));
    };

    match key.cmp(&node.key) {
        Ordering::Less => node.left = insert_at(node.left.take(), key),
        Ordering::Greater => node.right = insert_at(node.right.take(), key),
        Ordering::Equal => return Some(node),
    }

    node.update_height();
    Some(rebalance_after_insert(node, &key))
}

/// Remove `key` from the subtree, returning its new root.
///
/// A node with two children is not unlinked: its key is overwritten with
/// the in-order successor's key, then the successor is removed from the
/// right subtree.
fn remove_at<K>(link: Link<K>, key: K) -> Link<K>
where
    K: Ord + Copy,
{
    let mut node = link?;

    match key.cmp(&node.key) {
        Ordering::Less => node.left = remove_at(node.left.take(), key),
        Ordering::Greater => node.right = remove_at(node.right.take(), key),
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, None) => return None,
            (Some(child), None) | (None, Some(child)) => node = child,
            (Some(left), Some(right)) => {
                node.key = min_key(&right);
                node.left = Some(left);
                node.right = remove_at(Some(right), node.key);
            }
        },
    }

    node.update_height();
    Some(rebalance_after_remove(node))
}

/// Smallest key in the subtree, by leftmost descent.
fn min_key<K: Copy>(node: &AvlNode<K>) -> K {
    let mut curr = node;
    while let Some(left) = curr.left.as_deref() {
        curr = left;
    }
    curr.key
}

fn collect_in_order<K: Copy>(node: &Link<K>, keys: &mut Vec<K>) {
    if let Some(node) = node.as_deref() {
        collect_in_order(&node.left, keys);
        keys.push(node.key);
        collect_in_order(&node.right, keys);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_reports_duplicates() {
        let mut tree = AvlTree::new();
        assert!(tree.insert(5));
        assert!(tree.insert(3));
        assert!(!tree.insert(5));
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.in_order(), vec![3, 5]);
    }

    #[test]
    fn test_remove_reports_missing_keys() {
        let mut tree = AvlTree::new();
        tree.insert(5);
        assert!(!tree.remove(4));
        assert!(tree.remove(5));
        assert!(!tree.remove(5));
        assert!(tree.is_empty());
    }

    #[test]
    fn test_remove_leaf_and_single_child() {
        let mut tree = AvlTree::new();
        for key in [10, 5, 15, 3] {
            tree.insert(key);
        }

        assert!(tree.remove(3));
        assert_eq!(tree.in_order(), vec![5, 10, 15]);

        assert!(tree.remove(5));
        assert_eq!(tree.in_order(), vec![10, 15]);
        tree.assert_valid().unwrap();
    }

    #[test]
    fn test_remove_single_child_promotes_subtree() {
        let mut tree = AvlTree::new();
        for key in [10, 5, 15, 12] {
            tree.insert(key);
        }

        // 15 has only the left child 12.
        assert!(tree.remove(15));
        assert_eq!(tree.in_order(), vec![5, 10, 12]);
        tree.assert_valid().unwrap();
    }

    #[test]
    fn test_remove_two_children_overwrites_with_successor() {
        let mut tree = AvlTree::new();
        for key in [2, 1, 4, 3, 5] {
            tree.insert(key);
        }

        assert!(tree.remove(2));
        assert_eq!(tree.in_order(), vec![1, 3, 4, 5]);
        // The root node kept its position; only its key changed.
        assert_eq!(tree.root.as_deref().map(|n| n.key), Some(3));
        tree.assert_valid().unwrap();
    }

    #[test]
    fn test_contains_walks_without_mutating() {
        let mut tree = AvlTree::new();
        for key in [8, 4, 12, 2, 6] {
            tree.insert(key);
        }
        assert!(tree.contains(6));
        assert!(!tree.contains(7));
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn test_height_tracks_growth() {
        let mut tree = AvlTree::new();
        assert_eq!(tree.height(), 0);
        tree.insert(1);
        assert_eq!(tree.height(), 1);
        tree.insert(2);
        tree.insert(3);
        // The ladder is rotated into a balanced triangle.
        assert_eq!(tree.height(), 2);
    }

    #[test]
    fn test_clear_resets_the_tree() {
        let mut tree = AvlTree::new();
        for key in [1, 2, 3] {
            tree.insert(key);
        }
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);

        assert!(tree.insert(7));
        assert_eq!(tree.in_order(), vec![7]);
    }
}
