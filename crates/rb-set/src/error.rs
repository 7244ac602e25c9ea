use thiserror::Error;

/// A broken red-black or binary-search-tree property.
///
/// Returned by the structural validator. The boolean set operations never
/// produce this; seeing one means the rebalancing code has a defect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("root node {0} has a parent link")]
    RootHasParent(u32),
    #[error("root node {0} is red")]
    RedRoot(u32),
    #[error("node {child} does not link back to its parent {parent}")]
    BrokenParentLink { parent: u32, child: u32 },
    #[error("red node {0} has a red child")]
    RedRed(u32),
    #[error("black height mismatch under node {node}: left={left}, right={right}")]
    BlackHeight { node: u32, left: usize, right: usize },
    #[error("keys out of order at node {0}")]
    Order(u32),
    #[error("tree reaches {actual} nodes but {expected} are stored")]
    Length { expected: usize, actual: usize },
}
