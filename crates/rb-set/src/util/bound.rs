//! Iterative bound search over key-ordered trees.
//!
//! None of these allocate; all run in O(height).

use crate::types::{KeyNode, Side};

use super::{get_l, get_r};

/// Where a key would live in the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertionPoint {
    /// A node already holds an equal key.
    Occupied(u32),
    /// Attach below `(parent, side)`; `None` means the tree is empty.
    Vacant(Option<(u32, Side)>),
}

/// Node with the smallest key `>= key`.
pub fn outer_left<K, N, C>(arena: &[N], root: Option<u32>, key: &K, comparator: &C) -> Option<u32>
where
    N: KeyNode<K>,
    C: Fn(&K, &K) -> i32,
{
    let mut curr = root;
    let mut candidate = None;
    while let Some(i) = curr {
        if comparator(key, arena[i as usize].key()) <= 0 {
            candidate = Some(i);
            curr = get_l(arena, i);
        } else {
            curr = get_r(arena, i);
        }
    }
    candidate
}

/// Node with the smallest key strictly `> key`.
pub fn outer_right<K, N, C>(arena: &[N], root: Option<u32>, key: &K, comparator: &C) -> Option<u32>
where
    N: KeyNode<K>,
    C: Fn(&K, &K) -> i32,
{
    let mut curr = root;
    let mut candidate = None;
    while let Some(i) = curr {
        if comparator(key, arena[i as usize].key()) < 0 {
            candidate = Some(i);
            curr = get_l(arena, i);
        } else {
            curr = get_r(arena, i);
        }
    }
    candidate
}

/// Node with the largest key `<= key`.
pub fn floor<K, N, C>(arena: &[N], root: Option<u32>, key: &K, comparator: &C) -> Option<u32>
where
    N: KeyNode<K>,
    C: Fn(&K, &K) -> i32,
{
    let mut curr = root;
    let mut candidate = None;
    while let Some(i) = curr {
        let cmp = comparator(arena[i as usize].key(), key);
        if cmp == 0 {
            return Some(i);
        }
        if cmp > 0 {
            curr = get_l(arena, i);
        } else {
            candidate = Some(i);
            curr = get_r(arena, i);
        }
    }
    candidate
}

/// Descends towards `key`, stopping at an equal key or at the empty child
/// slot where it would be attached.
pub fn insertion_point<K, N, C>(
    arena: &[N],
    root: Option<u32>,
    key: &K,
    comparator: &C,
) -> InsertionPoint
where
    N: KeyNode<K>,
    C: Fn(&K, &K) -> i32,
{
    let mut curr = root;
    let mut at = None;
    while let Some(i) = curr {
        let cmp = comparator(key, arena[i as usize].key());
        if cmp == 0 {
            return InsertionPoint::Occupied(i);
        }
        if cmp < 0 {
            at = Some((i, Side::Left));
            curr = get_l(arena, i);
        } else {
            at = Some((i, Side::Right));
            curr = get_r(arena, i);
        }
    }
    InsertionPoint::Vacant(at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::red_black::RbNode;

    fn cmp(a: &i32, b: &i32) -> i32 {
        a.cmp(b) as i32
    }

    //       20
    //      /  \
    //    10    30
    //      \
    //       15
    fn sample() -> Vec<RbNode<i32>> {
        let mut arena = vec![
            RbNode::new(20),
            RbNode::new(10),
            RbNode::new(30),
            RbNode::new(15),
        ];
        arena[0].l = Some(1);
        arena[0].r = Some(2);
        arena[1].p = Some(0);
        arena[1].r = Some(3);
        arena[2].p = Some(0);
        arena[3].p = Some(1);
        arena
    }

    #[test]
    fn outer_left_is_inclusive_ceiling() {
        let arena = sample();
        assert_eq!(outer_left(&arena, Some(0), &15, &cmp), Some(3));
        assert_eq!(outer_left(&arena, Some(0), &16, &cmp), Some(0));
        assert_eq!(outer_left(&arena, Some(0), &0, &cmp), Some(1));
        assert_eq!(outer_left(&arena, Some(0), &31, &cmp), None);
        assert_eq!(outer_left(&arena, None, &1, &cmp), None);
    }

    #[test]
    fn outer_right_is_strict_successor() {
        let arena = sample();
        assert_eq!(outer_right(&arena, Some(0), &15, &cmp), Some(0));
        assert_eq!(outer_right(&arena, Some(0), &10, &cmp), Some(3));
        assert_eq!(outer_right(&arena, Some(0), &30, &cmp), None);
        // restricted to the right subtree of 10, as two-child removal does
        assert_eq!(outer_right(&arena, Some(3), &10, &cmp), Some(3));
    }

    #[test]
    fn floor_is_inclusive_predecessor() {
        let arena = sample();
        assert_eq!(floor(&arena, Some(0), &15, &cmp), Some(3));
        assert_eq!(floor(&arena, Some(0), &19, &cmp), Some(3));
        assert_eq!(floor(&arena, Some(0), &9, &cmp), None);
        assert_eq!(floor(&arena, Some(0), &100, &cmp), Some(2));
    }

    #[test]
    fn insertion_point_reports_parent_and_side() {
        let arena = sample();
        assert_eq!(
            insertion_point(&arena, Some(0), &15, &cmp),
            InsertionPoint::Occupied(3)
        );
        assert_eq!(
            insertion_point(&arena, Some(0), &12, &cmp),
            InsertionPoint::Vacant(Some((3, Side::Left)))
        );
        assert_eq!(
            insertion_point(&arena, Some(0), &40, &cmp),
            InsertionPoint::Vacant(Some((2, Side::Right)))
        );
        assert_eq!(
            insertion_point::<i32, RbNode<i32>, _>(&[], None, &1, &cmp),
            InsertionPoint::Vacant(None)
        );
    }
}
