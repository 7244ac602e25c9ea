use std::fmt::Debug;

use crate::types::KeyNode;

use super::RbNodeLike;

/// Debug printer for red-black trees.
pub fn print<K, N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    K: Debug,
    N: RbNodeLike + KeyNode<K>,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let color = if n.is_black() { "black" } else { "red" };
            let child_tab = format!("{tab}  ");
            let left = print::<K, N>(arena, n.l(), &child_tab);
            let right = print::<K, N>(arena, n.r(), &child_tab);
            format!(
                "Node[{i}] {color} {:?}\n{tab}L={left}\n{tab}R={right}",
                n.key()
            )
        }
    }
}
