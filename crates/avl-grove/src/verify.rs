//! Structural validation of AVL trees.

use thiserror::Error;

use crate::node::{AvlNode, Link};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Height mismatch: expected {expected}, got {actual}")]
    HeightMismatch { expected: u32, actual: u32 },
    #[error("AVL balance violated: balance factor {bf}")]
    BalanceViolated { bf: i32 },
    #[error("Node order violated")]
    OrderViolated,
    #[error("Size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// Check the balance invariant using cached heights only.
///
/// Returns `true` for an absent subtree. Insert and remove maintain the
/// invariant themselves; this walk is a read-only diagnostic for callers
/// and tests.
pub fn is_balanced<K>(node: &Link<K>) -> bool {
    match node.as_deref() {
        None => true,
        Some(node) => {
            (-1..=1).contains(&node.balance_factor())
                && is_balanced(&node.left)
                && is_balanced(&node.right)
        }
    }
}

/// Deep structural validation of a subtree.
///
/// Recomputes true heights from scratch, then checks the cached height of
/// every node, the balance invariant, strict in-order key ordering, and
/// the expected node count.
///
/// # Errors
///
/// Returns the first violation found.
pub fn assert_avl_tree<K: Ord>(root: &Link<K>, expected_len: usize) -> Result<(), ValidationError> {
    fn validate_heights_and_bf<K>(node: &AvlNode<K>) -> Result<u32, ValidationError> {
        let lh = match node.left.as_deref() {
            Some(left) => validate_heights_and_bf(left)?,
            None => 0,
        };
        let rh = match node.right.as_deref() {
            Some(right) => validate_heights_and_bf(right)?,
            None => 0,
        };

        let expected = 1 + lh.max(rh);
        if node.height != expected {
            return Err(ValidationError::HeightMismatch {
                expected,
                actual: node.height,
            });
        }

        let bf = lh as i32 - rh as i32;
        if !(-1..=1).contains(&bf) {
            return Err(ValidationError::BalanceViolated { bf });
        }

        Ok(expected)
    }

    fn validate_order<'a, K: Ord>(
        node: &'a AvlNode<K>,
        prev: &mut Option<&'a K>,
    ) -> Result<usize, ValidationError> {
        let mut count = 0;
        if let Some(left) = node.left.as_deref() {
            count += validate_order(left, prev)?;
        }

        if let Some(prev_key) = *prev {
            if *prev_key >= node.key {
                return Err(ValidationError::OrderViolated);
            }
        }
        *prev = Some(&node.key);
        count += 1;

        if let Some(right) = node.right.as_deref() {
            count += validate_order(right, prev)?;
        }
        Ok(count)
    }

    let Some(node) = root.as_deref() else {
        if expected_len != 0 {
            return Err(ValidationError::SizeMismatch {
                expected: expected_len,
                actual: 0,
            });
        }
        return Ok(());
    };

    validate_heights_and_bf(node)?;

    let mut prev = None;
    let count = validate_order(node, &mut prev)?;
    if count != expected_len {
        return Err(ValidationError::SizeMismatch {
            expected: expected_len,
            actual: count,
        });
    }

    Ok(())
}
