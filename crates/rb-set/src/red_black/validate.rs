use crate::error::InvariantViolation;
use crate::types::KeyNode;
use crate::util::{first, get_l, get_p, get_r, next};

use super::RbNodeLike;

/// Checks every red-black and search-tree property of the tree at `root`.
///
/// On success returns the black-height: the number of black nodes on any
/// path from the root down to an absent child, counting the root.
pub fn assert_red_black_tree<K, N, C>(
    arena: &[N],
    root: Option<u32>,
    comparator: &C,
) -> Result<usize, InvariantViolation>
where
    N: RbNodeLike + KeyNode<K>,
    C: Fn(&K, &K) -> i32,
{
    let Some(root) = root else {
        return Ok(0);
    };

    if get_p(arena, root).is_some() {
        return Err(InvariantViolation::RootHasParent(root));
    }
    if !arena[root as usize].is_black() {
        return Err(InvariantViolation::RedRoot(root));
    }

    let height = black_height(arena, root)?;

    let mut curr = first(arena, Some(root));
    let mut prev: Option<u32> = None;
    while let Some(i) = curr {
        if let Some(prev) = prev {
            if comparator(arena[prev as usize].key(), arena[i as usize].key()) >= 0 {
                return Err(InvariantViolation::Order(i));
            }
        }
        prev = Some(i);
        curr = next(arena, i);
    }

    Ok(height)
}

fn black_height<N: RbNodeLike>(arena: &[N], node: u32) -> Result<usize, InvariantViolation> {
    let l = get_l(arena, node);
    let r = get_r(arena, node);

    for child in [l, r].into_iter().flatten() {
        if get_p(arena, child) != Some(node) {
            return Err(InvariantViolation::BrokenParentLink {
                parent: node,
                child,
            });
        }
        if arena[node as usize].is_red() && arena[child as usize].is_red() {
            return Err(InvariantViolation::RedRed(node));
        }
    }

    let left = l.map_or(Ok(0), |l| black_height(arena, l))?;
    let right = r.map_or(Ok(0), |r| black_height(arena, r))?;
    if left != right {
        return Err(InvariantViolation::BlackHeight { node, left, right });
    }

    Ok(left + usize::from(arena[node as usize].is_black()))
}
