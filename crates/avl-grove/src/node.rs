//! AVL node type and height bookkeeping.

/// Owned, possibly absent subtree handle.
pub type Link<K> = Option<Box<AvlNode<K>>>;

/// Single tree entry.
///
/// A node exclusively owns its children; there are no parent or back
/// pointers anywhere in the tree.
#[derive(Clone, Debug)]
pub struct AvlNode<K> {
    pub key: K,
    pub left: Link<K>,
    pub right: Link<K>,
    /// Cached height of the subtree rooted here. A leaf has height 1.
    pub height: u32,
}

impl<K> AvlNode<K> {
    pub fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// Balance factor, `height(left) - height(right)`.
    pub fn balance_factor(&self) -> i32 {
        height(&self.left) as i32 - height(&self.right) as i32
    }

    /// Recompute the cached height from the children's cached heights.
    pub fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }
}

/// Cached height of a subtree. An absent subtree has height 0.
pub fn height<K>(node: &Link<K>) -> u32 {
    node.as_ref().map(|n| n.height).unwrap_or(0)
}

/// Balance factor of a subtree. An absent subtree reports 0.
pub fn balance_factor<K>(node: &Link<K>) -> i32 {
    node.as_ref().map(|n| n.balance_factor()).unwrap_or(0)
}
