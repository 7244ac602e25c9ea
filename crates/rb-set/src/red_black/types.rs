use crate::types::{KeyNode, Node};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// Red-black tree node. Absent children count as black.
#[derive(Clone, Debug)]
pub struct RbNode<K> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    pub c: Color,
}

impl<K> RbNode<K> {
    /// A detached red node.
    pub fn new(k: K) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            c: Color::Red,
        }
    }
}

impl<K> Node for RbNode<K> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<K> KeyNode<K> for RbNode<K> {
    fn key(&self) -> &K {
        &self.k
    }

    fn key_mut(&mut self) -> &mut K {
        &mut self.k
    }
}

/// Red-black specific node behavior.
pub trait RbNodeLike: Node {
    fn color(&self) -> Color;
    fn set_color(&mut self, color: Color);

    fn is_black(&self) -> bool {
        self.color() == Color::Black
    }

    fn is_red(&self) -> bool {
        self.color() == Color::Red
    }
}

impl<K> RbNodeLike for RbNode<K> {
    fn color(&self) -> Color {
        self.c
    }

    fn set_color(&mut self, color: Color) {
        self.c = color;
    }
}
