use crate::types::{KeyNode, Node};

use super::{get_l, get_p, get_r, set_l, set_p, set_r};

/// Exchanges the keys stored at `x` and `y`; links are untouched.
pub fn swap_keys<K, N: KeyNode<K>>(arena: &mut [N], x: u32, y: u32) {
    if x == y {
        return;
    }
    let (lo, hi) = if x < y { (x, y) } else { (y, x) };
    let (head, tail) = arena.split_at_mut(hi as usize);
    std::mem::swap(head[lo as usize].key_mut(), tail[0].key_mut());
}

/// Removes the detached node at `hole` from the arena.
///
/// The last node of the arena is moved into `hole` and every link that
/// referenced its old index (parent's child slot, children's parent, the
/// root) is rewritten. No link may point at `hole` when this is called.
///
/// Returns the removed node and the (possibly renumbered) root.
pub fn swap_remove<N: Node>(arena: &mut Vec<N>, root: Option<u32>, hole: u32) -> (N, Option<u32>) {
    let last = (arena.len() - 1) as u32;
    let removed = arena.swap_remove(hole as usize);
    if hole == last {
        return (removed, root);
    }

    if let Some(p) = get_p(arena, hole) {
        if get_l(arena, p) == Some(last) {
            set_l(arena, p, Some(hole));
        } else {
            set_r(arena, p, Some(hole));
        }
    }
    if let Some(l) = get_l(arena, hole) {
        set_p(arena, l, Some(hole));
    }
    if let Some(r) = get_r(arena, hole) {
        set_p(arena, r, Some(hole));
    }

    let root = if root == Some(last) { Some(hole) } else { root };
    (removed, root)
}
