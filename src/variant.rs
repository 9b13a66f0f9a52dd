use crate::Refs;

/// Variant defining the link shape of a container built on `SelfRefCol`.
pub trait Variant: Sized {
    /// Elements of the collection.
    type Item;

    /// The way the previous node references will be stored.
    /// * `RefsNone` if there is no reference, as in a stack or a queue.
    /// * `RefsSingle` if there is zero or one reference, as in a doubly linked ring.
    type Prev: Refs;

    /// The way the next node references will be stored.
    /// * `RefsNone` if there is no reference.
    /// * `RefsSingle` if there is zero or one reference.
    type Next: Refs;

    /// The way the ends of the collection will be stored,
    /// such as the top of a stack, the front and rear of a queue,
    /// or the head of a ring.
    /// * `RefsSingle` if there is zero or one end.
    /// * `RefsArray` if there is a constant number of ends.
    type Ends: Refs;
}
