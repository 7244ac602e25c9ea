//! Red-black tree primitives over an index arena.

pub mod insert;
pub mod print;
pub mod remove;
pub mod rotate;
pub mod types;
pub mod validate;

pub use insert::{insert, insert_at};
pub use print::print;
pub use remove::{remove, Removal};
pub use rotate::{rotate_left, rotate_right};
pub use types::{Color, RbNode, RbNodeLike};
pub use validate::assert_red_black_tree;

#[inline]
fn is_red<N: RbNodeLike>(arena: &[N], i: Option<u32>) -> bool {
    i.is_some_and(|i| arena[i as usize].is_red())
}

#[inline]
fn is_black<N: RbNodeLike>(arena: &[N], i: Option<u32>) -> bool {
    !is_red(arena, i)
}

#[inline]
fn color<N: RbNodeLike>(arena: &[N], i: u32) -> Color {
    arena[i as usize].color()
}

#[inline]
fn set_color<N: RbNodeLike>(arena: &mut [N], i: u32, c: Color) {
    arena[i as usize].set_color(c);
}
