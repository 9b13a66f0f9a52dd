use core::fmt::Display;
use std::io::ErrorKind;

/// Error cases of the container operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerError {
    /// EmptyContainer => An element is requested from an empty stack or queue
    /// by `pop`, `dequeue` or `peek`.
    EmptyContainer,
    /// NotFound => No element of the circular list is equal to the key of `remove_all`.
    NotFound,
    /// IoFailure => A stack could not be saved to or loaded from a file.
    /// * `NotFound`, `PermissionDenied`, etc. when the file could not be opened,
    /// * `UnexpectedEof` when the file holds fewer elements than its header declares,
    /// * `InvalidData` when an element could not be decoded.
    IoFailure(ErrorKind),
}

impl Display for ContainerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EmptyContainer => write!(f, "container is empty"),
            Self::NotFound => write!(f, "element not found"),
            Self::IoFailure(kind) => write!(f, "file operation failed: {kind}"),
        }
    }
}

impl core::error::Error for ContainerError {}

impl From<std::io::Error> for ContainerError {
    fn from(error: std::io::Error) -> Self {
        Self::IoFailure(error.kind())
    }
}
