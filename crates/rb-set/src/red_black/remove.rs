use crate::types::KeyNode;
use crate::util::{first, get_l, get_p, get_r, outer_right, replace_child, set_l, set_p, set_r, swap_keys};

use super::rotate::{rotate_left, rotate_right};
use super::{color, is_black, is_red, set_color, Color, RbNodeLike};

/// Outcome of [`remove`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Removal {
    /// New root of the tree.
    pub root: Option<u32>,
    /// Node that was physically unlinked. It now carries the removed key and
    /// has no links; the caller owns its slot.
    pub detached: u32,
}

/// Removes the key stored at `n`.
///
/// A node with two children keeps its place in the tree: it receives its
/// in-order successor's key and the successor node is unlinked instead, so
/// `detached` may differ from `n`.
pub fn remove<K, N, C>(arena: &mut [N], root: Option<u32>, n: u32, comparator: &C) -> Removal
where
    N: RbNodeLike + KeyNode<K>,
    C: Fn(&K, &K) -> i32,
{
    let mut target = n;
    if let (Some(_), Some(r)) = (get_l(arena, n), get_r(arena, n)) {
        let successor = outer_right(arena, Some(r), arena[n as usize].key(), comparator)
            .expect("right subtree holds the successor");
        debug_assert_eq!(Some(successor), first(arena, Some(r)));
        swap_keys(arena, n, successor);
        target = successor;
    }

    let root = unlink(arena, root, target);
    Removal {
        root,
        detached: target,
    }
}

/// Unlinks `x`, which has at most one child.
fn unlink<N: RbNodeLike>(arena: &mut [N], mut root: Option<u32>, x: u32) -> Option<u32> {
    let l = get_l(arena, x);
    let r = get_r(arena, x);
    debug_assert!(l.is_none() || r.is_none(), "unlink of a node with two children");

    match l.or(r) {
        Some(child) => {
            // A lone child is a red leaf under a black node.
            debug_assert!(is_red(arena, Some(child)));
            let p = get_p(arena, x);
            set_p(arena, child, p);
            root = replace_child(arena, root, p, x, Some(child));
            set_color(arena, child, Color::Black);
        }
        None => {
            if arena[x as usize].is_black() && get_p(arena, x).is_some() {
                root = fix_before_remove(arena, root, x);
            }
            let p = get_p(arena, x);
            root = replace_child(arena, root, p, x, None);
        }
    }

    set_p(arena, x, None);
    set_l(arena, x, None);
    set_r(arena, x, None);
    if let Some(root) = root {
        set_color(arena, root, Color::Black);
    }
    root
}

/// Restores equal black-height before the black node `x` loses one black
/// from its paths.
///
/// `x` stays attached throughout; rotations only ever happen at or above
/// its parent, so it keeps its side relative to the parent.
fn fix_before_remove<N: RbNodeLike>(arena: &mut [N], mut root: Option<u32>, mut x: u32) -> Option<u32> {
    loop {
        if arena[x as usize].is_red() {
            return root;
        }
        let Some(p) = get_p(arena, x) else {
            return root;
        };

        let x_is_left = get_l(arena, p) == Some(x);
        let s = if x_is_left { get_r(arena, p) } else { get_l(arena, p) };
        let s = s.expect("a black non-root node has a sibling");

        if arena[s as usize].is_red() {
            debug_assert!(arena[p as usize].is_black());
            debug_assert!(is_black(arena, get_l(arena, s)) && is_black(arena, get_r(arena, s)));
            set_color(arena, s, Color::Black);
            set_color(arena, p, Color::Red);
            root = if x_is_left {
                rotate_left(arena, root, p)
            } else {
                rotate_right(arena, root, p)
            };
            continue;
        }

        let (near, far) = if x_is_left {
            (get_l(arena, s), get_r(arena, s))
        } else {
            (get_r(arena, s), get_l(arena, s))
        };

        if is_red(arena, far) || is_red(arena, near) {
            let s = if is_red(arena, far) {
                s
            } else {
                let near = near.expect("red near nephew exists");
                set_color(arena, near, Color::Black);
                set_color(arena, s, Color::Red);
                root = if x_is_left {
                    rotate_right(arena, root, s)
                } else {
                    rotate_left(arena, root, s)
                };
                near
            };
            let far = if x_is_left { get_r(arena, s) } else { get_l(arena, s) };
            let far = far.expect("far nephew is red");
            debug_assert!(arena[far as usize].is_red());

            let parent_color = color(arena, p);
            set_color(arena, s, parent_color);
            set_color(arena, p, Color::Black);
            set_color(arena, far, Color::Black);
            return if x_is_left {
                rotate_left(arena, root, p)
            } else {
                rotate_right(arena, root, p)
            };
        }

        set_color(arena, s, Color::Red);
        if arena[p as usize].is_red() {
            set_color(arena, p, Color::Black);
            return root;
        }
        x = p;
    }
}
