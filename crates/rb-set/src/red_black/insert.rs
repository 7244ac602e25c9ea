use crate::types::{KeyNode, Side};
use crate::util::{get_l, get_p, get_r, insertion_point, set_l, set_p, set_r, InsertionPoint};

use super::rotate::{rotate_left, rotate_right};
use super::{is_red, set_color, Color, RbNodeLike};

/// Inserts the detached node `n` by key.
///
/// Returns the new root, or `Err` with the index of the node already
/// holding an equal key (the tree is left untouched).
pub fn insert<K, N, C>(
    arena: &mut [N],
    root: Option<u32>,
    n: u32,
    comparator: &C,
) -> Result<Option<u32>, u32>
where
    N: RbNodeLike + KeyNode<K>,
    C: Fn(&K, &K) -> i32,
{
    match insertion_point(arena, root, arena[n as usize].key(), comparator) {
        InsertionPoint::Occupied(existing) => Err(existing),
        InsertionPoint::Vacant(at) => Ok(insert_at(arena, root, n, at)),
    }
}

/// Links the detached node `n` as a red leaf below `at` and rebalances.
///
/// `at == None` makes `n` the (black) root of an empty tree. Returns the
/// new root.
pub fn insert_at<N: RbNodeLike>(
    arena: &mut [N],
    root: Option<u32>,
    n: u32,
    at: Option<(u32, Side)>,
) -> Option<u32> {
    let Some((p, side)) = at else {
        debug_assert!(root.is_none(), "parentless insert into a non-empty tree");
        set_color(arena, n, Color::Black);
        return Some(n);
    };

    set_color(arena, n, Color::Red);
    set_p(arena, n, Some(p));
    match side {
        Side::Left => set_l(arena, p, Some(n)),
        Side::Right => set_r(arena, p, Some(n)),
    }
    fix_after_insert(arena, root, n)
}

/// Pushes a red-red conflict at `n` upwards until it is absorbed.
fn fix_after_insert<N: RbNodeLike>(arena: &mut [N], mut root: Option<u32>, mut n: u32) -> Option<u32> {
    loop {
        let Some(mut p) = get_p(arena, n) else {
            set_color(arena, n, Color::Black);
            return Some(n);
        };
        if arena[p as usize].is_black() {
            return root;
        }
        let g = get_p(arena, p).expect("a red node is never the root");

        let parent_is_left = get_l(arena, g) == Some(p);
        let uncle = if parent_is_left {
            get_r(arena, g)
        } else {
            get_l(arena, g)
        };

        if is_red(arena, uncle) {
            set_color(arena, p, Color::Black);
            set_color(arena, uncle.expect("red uncle exists"), Color::Black);
            set_color(arena, g, Color::Red);
            n = g;
            continue;
        }

        // zig-zag: straighten so that n, p, g lie on one side
        if parent_is_left && get_r(arena, p) == Some(n) {
            root = rotate_left(arena, root, p);
            n = p;
            p = get_p(arena, n).expect("rotated node has a parent");
        } else if !parent_is_left && get_l(arena, p) == Some(n) {
            root = rotate_right(arena, root, p);
            n = p;
            p = get_p(arena, n).expect("rotated node has a parent");
        }

        set_color(arena, p, Color::Black);
        set_color(arena, g, Color::Red);
        return if parent_is_left {
            rotate_right(arena, root, g)
        } else {
            rotate_left(arena, root, g)
        };
    }
}
