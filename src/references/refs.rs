use core::fmt::Debug;

/// References among nodes.
///
/// References are positions of the referenced nodes in the underlying storage.
pub trait Refs: Clone + Debug {
    /// Creates an empty references.
    fn empty() -> Self;

    /// Returns true if the references collection is empty.
    fn is_empty(&self) -> bool;

    /// Clears the references.
    fn clear(&mut self);

    /// Rewrites every reference through the `relocation` table, where
    /// `relocation[old_position]` is the new position of the node.
    ///
    /// Referenced nodes are always active, hence always present in the table.
    fn relocate(&mut self, relocation: &[usize]);
}
