//! Node trait definitions.
//!
//! Each "pointer" is an `Option<u32>` index into a [`Vec`]-backed arena.
//! All tree-manipulation functions take the arena as a slice and work with
//! indices.

/// Tree links (`p`, `l`, `r`).
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Key access for ordered nodes.
///
/// `key_mut` exists for the two-child removal path, which moves the
/// successor's key into the node being deleted.
pub trait KeyNode<K>: Node {
    fn key(&self) -> &K;
    fn key_mut(&mut self) -> &mut K;
}

/// Which child slot of a parent a node occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}
