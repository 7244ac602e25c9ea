use std::fmt;

use log::{debug, trace};

use crate::error::InvariantViolation;
use crate::red_black::{self, insert_at, remove, RbNode, Removal};
use crate::types::KeyNode;
use crate::util::{self, insertion_point, swap_remove, InsertionPoint};

fn default_comparator<K: Ord>(a: &K, b: &K) -> i32 {
    a.cmp(b) as i32
}

/// Ordered set of unique keys backed by a red-black tree.
///
/// The arena is kept compact: every slot holds a live node, so a deletion
/// frees its node immediately by moving the last node into the vacated
/// slot. Node indices are therefore not stable across deletions.
pub struct RbSet<K, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    arena: Vec<RbNode<K>>,
    root: Option<u32>,
    comparator: C,
}

impl<K: Ord> RbSet<K, fn(&K, &K) -> i32> {
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut set = Self::new();
        set.arena.reserve(capacity);
        set
    }
}

impl<K: Ord> Default for RbSet<K, fn(&K, &K) -> i32> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> RbSet<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    /// Orders keys by `comparator`, which must be a total order returning a
    /// negative, zero or positive value.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            arena: Vec::new(),
            root: None,
            comparator,
        }
    }

    /// Adds `key`. Returns `false`, leaving the set untouched, if an equal
    /// key is already present.
    pub fn insert(&mut self, key: K) -> bool {
        let at = match insertion_point(&self.arena, self.root, &key, &self.comparator) {
            InsertionPoint::Occupied(existing) => {
                trace!("insert: key already held by node {existing}");
                return false;
            }
            InsertionPoint::Vacant(at) => at,
        };

        let idx = u32::try_from(self.arena.len()).expect("node index space exhausted");
        self.arena.push(RbNode::new(key));
        self.root = insert_at(&mut self.arena, self.root, idx, at);
        trace!("insert: linked node {idx}, {} nodes", self.arena.len());
        true
    }

    pub fn lookup(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Removes `key`. Returns `false` if it was not present.
    pub fn delete(&mut self, key: &K) -> bool {
        self.take(key).is_some()
    }

    /// Removes `key` and hands back the stored key.
    pub fn take(&mut self, key: &K) -> Option<K> {
        let node = self.find(key)?;
        let Removal { root, detached } = remove(&mut self.arena, self.root, node, &self.comparator);
        let (removed, root) = swap_remove(&mut self.arena, root, detached);
        self.root = root;
        trace!(
            "delete: detached node {detached} (found at {node}), {} nodes",
            self.arena.len()
        );
        Some(removed.k)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        debug!("clear: dropping {} nodes", self.arena.len());
        self.arena.clear();
        self.root = None;
    }

    pub fn first(&self) -> Option<&K> {
        util::first(&self.arena, self.root).map(|i| self.key(i))
    }

    pub fn last(&self) -> Option<&K> {
        util::last(&self.arena, self.root).map(|i| self.key(i))
    }

    /// Smallest key `>= key`.
    pub fn ceil(&self, key: &K) -> Option<&K> {
        util::outer_left(&self.arena, self.root, key, &self.comparator).map(|i| self.key(i))
    }

    /// Smallest key `> key`.
    pub fn higher(&self, key: &K) -> Option<&K> {
        util::outer_right(&self.arena, self.root, key, &self.comparator).map(|i| self.key(i))
    }

    /// Largest key `<= key`.
    pub fn floor(&self, key: &K) -> Option<&K> {
        util::floor(&self.arena, self.root, key, &self.comparator).map(|i| self.key(i))
    }

    /// Keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            arena: &self.arena,
            curr: util::first(&self.arena, self.root),
            remaining: self.arena.len(),
        }
    }

    /// Number of black nodes on every root-to-leaf path, counting the root.
    pub fn black_height(&self) -> usize {
        let mut height = 0;
        let mut curr = self.root;
        while let Some(i) = curr {
            let node = &self.arena[i as usize];
            height += usize::from(node.c == red_black::Color::Black);
            curr = node.l;
        }
        height
    }

    /// Checks all tree invariants and that every stored node is reachable.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        red_black::assert_red_black_tree(&self.arena, self.root, &self.comparator)?;
        let reachable = util::size(&self.arena, self.root);
        if reachable != self.arena.len() {
            return Err(InvariantViolation::Length {
                expected: self.arena.len(),
                actual: reachable,
            });
        }
        Ok(())
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn node(&self, idx: u32) -> &RbNode<K> {
        &self.arena[idx as usize]
    }

    pub fn arena(&self) -> &[RbNode<K>] {
        &self.arena
    }

    fn key(&self, idx: u32) -> &K {
        self.arena[idx as usize].key()
    }

    fn find(&self, key: &K) -> Option<u32> {
        util::outer_left(&self.arena, self.root, key, &self.comparator)
            .filter(|&i| (self.comparator)(key, self.key(i)) == 0)
    }
}

impl<K: fmt::Debug, C> RbSet<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    /// Multi-line dump of the tree shape and colors.
    pub fn print(&self) -> String {
        red_black::print(&self.arena, self.root, "")
    }
}

impl<K: fmt::Debug, C> fmt::Debug for RbSet<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K, C> Extend<K> for RbSet<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for RbSet<K, fn(&K, &K) -> i32> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a, K, C> IntoIterator for &'a RbSet<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over the keys of an [`RbSet`].
pub struct Iter<'a, K> {
    arena: &'a [RbNode<K>],
    curr: Option<u32>,
    remaining: usize,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.curr?;
        self.curr = util::next(self.arena, i);
        self.remaining -= 1;
        Some(&self.arena[i as usize].k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set() {
        let mut set = RbSet::<i32>::new();
        assert!(set.is_empty());
        assert!(!set.lookup(&1));
        assert!(!set.delete(&1));
        assert_eq!(set.first(), None);
        assert_eq!(set.black_height(), 0);
        set.validate().unwrap();
    }

    #[test]
    fn first_root_is_black() {
        let mut set = RbSet::new();
        assert!(set.insert(7));
        let root = set.root_index().unwrap();
        assert_eq!(set.node(root).c, red_black::Color::Black);
        assert_eq!(set.black_height(), 1);
    }

    #[test]
    fn take_returns_stored_key() {
        let mut set: RbSet<String> = ["b", "a", "c"].iter().map(|s| s.to_string()).collect();
        assert_eq!(set.take(&"a".to_string()), Some("a".to_string()));
        assert_eq!(set.take(&"a".to_string()), None);
        assert_eq!(set.len(), 2);
        set.validate().unwrap();
    }

    #[test]
    fn bounds() {
        let set: RbSet<i32> = [10, 20, 30].into_iter().collect();
        assert_eq!(set.ceil(&20), Some(&20));
        assert_eq!(set.ceil(&21), Some(&30));
        assert_eq!(set.higher(&20), Some(&30));
        assert_eq!(set.higher(&30), None);
        assert_eq!(set.floor(&25), Some(&20));
        assert_eq!(set.floor(&5), None);
        assert_eq!(set.first(), Some(&10));
        assert_eq!(set.last(), Some(&30));
    }

    #[test]
    fn debug_formats_as_set() {
        let set: RbSet<i32> = [3, 1, 2].into_iter().collect();
        assert_eq!(format!("{set:?}"), "{1, 2, 3}");
    }

    #[test]
    fn reversed_comparator() {
        let mut set = RbSet::with_comparator(|a: &i32, b: &i32| b.cmp(a) as i32);
        set.extend([1, 5, 3]);
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![5, 3, 1]);
        assert!(set.delete(&5));
        assert_eq!(set.first(), Some(&3));
        set.validate().unwrap();
    }
}
