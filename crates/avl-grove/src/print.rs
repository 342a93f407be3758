//! Debug printer for AVL trees.

use std::fmt::Debug;

use crate::node::Link;

/// Render a subtree one node per line, children indented under `L=`/`R=`.
///
/// Absent subtrees print as `∅`. Cached heights are shown as stored, so
/// the output is also useful when chasing a staleness bug.
pub fn print<K: Debug>(node: &Link<K>, tab: &str) -> String {
    match node.as_deref() {
        None => "∅".to_string(),
        Some(n) => {
            let left = print(&n.left, &format!("{tab}  "));
            let right = print(&n.right, &format!("{tab}  "));
            format!(
                "Node [h={}] {{ {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.height, n.key
            )
        }
    }
}
