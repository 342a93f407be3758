//! Recursive AVL tree keyed on totally ordered scalars.
//!
//! The tree owns its nodes through plain `Option<Box<..>>` child links;
//! there are no parent or back pointers. Insert and remove descend to the
//! target position recursively and reattach the returned subtree root on
//! the way back up, restoring the balance invariant with at most one
//! single or double rotation per level.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`node`] | [`AvlNode`], [`Link`], height bookkeeping |
//! [`rotate`] | Rotation primitives and the two rebalance rules |
//! [`tree`] | [`AvlTree`] handle wrapping the recursive engine |
//! [`verify`] | Balance check and deep structural validation |
//! [`print`] | Debug rendering |

pub mod node;
pub mod print;
pub mod rotate;
pub mod tree;
pub mod verify;

pub use node::{AvlNode, balance_factor, height, Link};
pub use print::print;
pub use rotate::{double_rotate_left, double_rotate_right, rotate_left, rotate_right};
pub use tree::AvlTree;
pub use verify::{assert_avl_tree, is_balanced, ValidationError};
