//! Rotation primitives and the rebalancing rules built on them.

use crate::node::{AvlNode, balance_factor};

/// Rotate the subtree left. The right child becomes the new root.
pub fn rotate_left<K>(mut node: Box<AvlNode<K>>) -> Box<AvlNode<K>> {
    let mut new_root = node.right.take().expect("rotate_left requires right child");
    node.right = new_root.left.take();
    node.update_height();
    new_root.left = Some(node);
    new_root.update_height();
    new_root
}

/// Rotate the subtree right. The left child becomes the new root.
pub fn rotate_right<K>(mut node: Box<AvlNode<K>>) -> Box<AvlNode<K>> {
    let mut new_root = node.left.take().expect("rotate_right requires left child");
    node.left = new_root.right.take();
    node.update_height();
    new_root.right = Some(node);
    new_root.update_height();
    new_root
}

/// Rotate the right child right, then the subtree itself left.
pub fn double_rotate_left<K>(mut node: Box<AvlNode<K>>) -> Box<AvlNode<K>> {
    let right = node
        .right
        .take()
        .expect("double_rotate_left requires right child");
    node.right = Some(rotate_right(right));
    rotate_left(node)
}

/// Rotate the left child left, then the subtree itself right.
pub fn double_rotate_right<K>(mut node: Box<AvlNode<K>>) -> Box<AvlNode<K>> {
    let left = node
        .left
        .take()
        .expect("double_rotate_right requires left child");
    node.left = Some(rotate_left(left));
    rotate_right(node)
}

/// Restore the balance invariant after an insertion into this subtree.
///
/// The single/double choice is anchored on where the inserted key landed
/// relative to the heavier child's key.
pub fn rebalance_after_insert<K: Ord>(node: Box<AvlNode<K>>, key: &K) -> Box<AvlNode<K>> {
    let bf = node.balance_factor();
    if bf > 1 {
        return if *key < node.left.as_deref().expect("left child exists").key {
            rotate_right(node)
        } else {
            double_rotate_right(node)
        };
    }
    if bf < -1 {
        return if *key > node.right.as_deref().expect("right child exists").key {
            rotate_left(node)
        } else {
            double_rotate_left(node)
        };
    }
    node
}

/// Restore the balance invariant after a removal from this subtree.
///
/// Removal has no inserted key to anchor on, so the single/double choice
/// reads the heavier child's own balance factor instead.
pub fn rebalance_after_remove<K>(node: Box<AvlNode<K>>) -> Box<AvlNode<K>> {
    let bf = node.balance_factor();
    if bf > 1 {
        return if balance_factor(&node.left) >= 0 {
            rotate_right(node)
        } else {
            double_rotate_right(node)
        };
    }
    if bf < -1 {
        return if balance_factor(&node.right) <= 0 {
            rotate_left(node)
        } else {
            double_rotate_left(node)
        };
    }
    node
}
