//! Elementary rotations.
//!
//! Both keep the in-order sequence, rewrite every parent link they touch,
//! and return the (possibly new) root. Rotating without a pivot child is a
//! programming error and panics.

use crate::util::{get_l, get_p, get_r, replace_child, set_l, set_p, set_r};

use super::RbNodeLike;

/// Lifts the right child of `n` into its place; `n` becomes its left child.
pub fn rotate_left<N: RbNodeLike>(arena: &mut [N], root: Option<u32>, n: u32) -> Option<u32> {
    let pivot = get_r(arena, n).expect("rotate_left needs a right child");
    let p = get_p(arena, n);
    let inner = get_l(arena, pivot);

    set_r(arena, n, inner);
    if let Some(inner) = inner {
        set_p(arena, inner, Some(n));
    }
    set_l(arena, pivot, Some(n));
    set_p(arena, n, Some(pivot));
    set_p(arena, pivot, p);
    replace_child(arena, root, p, n, Some(pivot))
}

/// Lifts the left child of `n` into its place; `n` becomes its right child.
pub fn rotate_right<N: RbNodeLike>(arena: &mut [N], root: Option<u32>, n: u32) -> Option<u32> {
    let pivot = get_l(arena, n).expect("rotate_right needs a left child");
    let p = get_p(arena, n);
    let inner = get_r(arena, pivot);

    set_l(arena, n, inner);
    if let Some(inner) = inner {
        set_p(arena, inner, Some(n));
    }
    set_r(arena, pivot, Some(n));
    set_p(arena, n, Some(pivot));
    set_p(arena, pivot, p);
    replace_child(arena, root, p, n, Some(pivot))
}
