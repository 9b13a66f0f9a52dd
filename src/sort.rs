//! Sort-by-extraction protocol shared by all containers.
//!
//! None of the containers sorts its links in place. Instead, all elements are drained
//! out of the container into a vector, the vector is sorted with a stable sort, and the
//! container is refilled from the sorted vector. The container decides both the drain
//! order and the refill order, so that its first element afterwards is the smallest one
//! with respect to the comparator.

use core::cmp::Ordering;

/// Drains all elements with `drain`, sorts them stably by `compare` and passes the
/// sorted elements to `refill`.
///
/// Elements which compare equal keep the order in which `drain` produced them.
pub fn sort_by_extraction<T, D, C, R>(drain: D, mut compare: C, refill: R)
where
    D: IntoIterator<Item = T>,
    C: FnMut(&T, &T) -> Ordering,
    R: FnOnce(Vec<T>),
{
    let mut elements: Vec<T> = drain.into_iter().collect();
    elements.sort_by(|a, b| compare(a, b));
    refill(elements);
}
