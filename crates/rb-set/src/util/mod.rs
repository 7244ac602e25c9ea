//! Binary-tree (p / l / r) utility functions.
//!
//! - `bound.rs` -> ordered descent (`outer_left`, `outer_right`, `floor`,
//!   `insertion_point`)
//! - `swap.rs` -> arena slot surgery (`swap_keys`, `swap_remove`)
//! - this module -> link accessors and in-order walking

pub mod bound;
pub mod swap;

use crate::types::Node;

pub use bound::{floor, insertion_point, outer_left, outer_right, InsertionPoint};
pub use swap::{swap_keys, swap_remove};

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Points whichever child slot of `p` holds `old` at `new`.
///
/// With no parent, `new` becomes the root. Returns the (possibly new) root.
/// The back-link of `new` is left to the caller.
pub(crate) fn replace_child<N: Node>(
    arena: &mut [N],
    root: Option<u32>,
    p: Option<u32>,
    old: u32,
    new: Option<u32>,
) -> Option<u32> {
    let Some(p) = p else {
        return new;
    };
    if get_l(arena, p) == Some(old) {
        set_l(arena, p, new);
    } else {
        set_r(arena, p, new);
    }
    root
}

/// Leftmost node in the tree.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node in the tree.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, curr) {
        return first(arena, Some(r));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, curr) {
        return last(arena, Some(l));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

fn size_inner<N: Node>(arena: &[N], root: u32) -> usize {
    1 + get_l(arena, root).map_or(0, |l| size_inner(arena, l))
        + get_r(arena, root).map_or(0, |r| size_inner(arena, r))
}

/// Number of nodes reachable from `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    root.map_or(0, |r| size_inner(arena, r))
}
