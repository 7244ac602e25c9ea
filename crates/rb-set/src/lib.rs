//! Arena-based red-black tree ordered set.
//!
//! Nodes are stored in a `Vec` owned by [`RbSet`]; every "pointer" is an
//! `Option<u32>` index into that arena. Child links own their subtree, the
//! parent link is a plain back-index used only for climbing during fixups.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] / [`KeyNode`] link traits, [`Side`] |
//! [`util`] | in-order walking, bound search, arena slot surgery |
//! [`red_black`] | node type, rotations, insert/remove fixups, validator |
//! [`set`] | the [`RbSet`] facade |
//! [`error`] | [`InvariantViolation`] |
//! `fuzzer` | seeded operation replay against `BTreeSet` (feature `fuzzer`) |

pub mod error;
#[cfg(feature = "fuzzer")]
pub mod fuzzer;
pub mod red_black;
pub mod set;
pub mod types;
pub mod util;

pub use error::InvariantViolation;
pub use red_black::{Color, RbNode, RbNodeLike};
pub use set::{Iter, RbSet};
pub use types::{KeyNode, Node, Side};
