#![doc = include_str!("../README.md")]
#![warn(
    missing_docs,
    clippy::unwrap_in_result,
    clippy::unwrap_used,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::float_cmp,
    clippy::float_cmp_const,
    clippy::missing_panics_doc,
    clippy::todo
)]

/// Node references.
pub mod references;

pub mod console;
pub mod persist;
pub mod sort;

mod circular;
mod common_traits;
mod core_col;
mod element;
mod error;
mod memory;
mod node;
mod queue;
mod selfref_col;
mod stack;
mod variant;

pub use circular::{CircularList, Doubly, ListIdx};
pub use core_col::CoreCol;
pub use element::{Element, ElementKind, ascending, descending};
pub use error::ContainerError;
pub use memory::{
    MemoryPolicy, MemoryReclaimNever, MemoryReclaimOnThreshold, MemoryState, Utilization,
};
pub use node::Node;
pub use queue::{Queue, SinglyQueue};
pub use references::{NodeIdx, NodeIdxError, NodePos};
pub use references::{Refs, RefsArray, RefsNone, RefsSingle};
pub use selfref_col::{DefaultMemory, SelfRefCol};
pub use stack::{Singly, Stack};
pub use variant::Variant;

/// Iterators of the containers.
pub mod iter {
    pub use crate::circular::Iter as CircularListIter;
    pub use crate::queue::Iter as QueueIter;
    pub use crate::stack::Iter as StackIter;
}
