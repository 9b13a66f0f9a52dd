mod array;
mod node_idx;
mod node_idx_error;
mod node_pos;
mod none;
mod refs;
mod single;

pub use array::RefsArray;
pub use node_idx::NodeIdx;
pub use node_idx_error::NodeIdxError;
pub use node_pos::NodePos;
pub use none::RefsNone;
pub use refs::Refs;
pub use single::RefsSingle;
