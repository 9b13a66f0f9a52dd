use core::fmt::Display;

/// Reasons why a [`NodeIdx`](crate::NodeIdx), such as a [`ListIdx`](crate::ListIdx)
/// returned by `find`, no longer resolves to an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeIdxError {
    /// RemovedNode => The element has been removed, e.g. by `remove_all`, and its slot
    /// is a hole which has not been reclaimed yet.
    RemovedNode,
    /// OutOfBounds => The position lies beyond the storage of the collection; typically
    /// the index was created for another collection.
    OutOfBounds,
    /// ReorganizedCollection => The collection reorganized its storage since the index was created:
    /// * holes were reclaimed after a removal, as decided by the memory policy, whether
    ///   by moving nodes or by dropping trailing holes whose slots may be reused,
    /// * the collection was cleared or sorted,
    /// * `reclaim_closed_nodes` was called explicitly.
    ReorganizedCollection,
}

impl Display for NodeIdxError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::RemovedNode => write!(f, "element of the index has been removed"),
            Self::OutOfBounds => write!(f, "index is out of the bounds of the collection"),
            Self::ReorganizedCollection => {
                write!(f, "collection has been reorganized since the index was created")
            }
        }
    }
}

impl core::error::Error for NodeIdxError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_reason() {
        assert_eq!(
            NodeIdxError::RemovedNode.to_string(),
            "element of the index has been removed"
        );
        assert!(NodeIdxError::ReorganizedCollection.to_string().contains("reorganized"));
    }
}
