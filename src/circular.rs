use crate::{
    ContainerError, DefaultMemory, Element, MemoryPolicy, NodeIdx, NodeIdxError, NodePos,
    RefsSingle, SelfRefCol, Variant,
    element::{ascending, write_separated},
    sort::sort_by_extraction,
};
use core::{cmp::Ordering, fmt::Display, marker::PhantomData};

/// Link shape of the circular list: every node knows both neighbors; the single end is the head.
pub struct Doubly<T>(PhantomData<T>);

impl<T> Variant for Doubly<T> {
    type Item = T;

    type Prev = RefsSingle<Self>;

    type Next = RefsSingle<Self>;

    type Ends = RefsSingle<Self>;
}

/// Handle to an element of a [`CircularList`], as returned by [`CircularList::find`].
pub type ListIdx<T> = NodeIdx<Doubly<T>>;

/// A circular doubly linked list.
///
/// Elements are inserted at the back, which is the node right before the head.
/// Following the links forward from the head visits every element once and
/// returns to the head; so does following them backward.
///
/// ```
/// use selfref_containers::CircularList;
///
/// let mut list: CircularList<_> = [2, 7, 2, 9, 2].into_iter().collect();
///
/// assert_eq!(list.remove_all(&2), Ok(3));
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![7, 9]);
/// assert!(list.remove_all(&2).is_err());
/// ```
pub struct CircularList<T, M = DefaultMemory>
where
    M: MemoryPolicy,
{
    col: SelfRefCol<Doubly<T>, M>,
}

impl<T, M: MemoryPolicy> Default for CircularList<T, M> {
    /// Creates a new empty list with the memory policy `M`.
    fn default() -> Self {
        Self {
            col: SelfRefCol::new(),
        }
    }
}

impl<T> CircularList<T> {
    /// Creates a new empty list with the default memory policy.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T, M: MemoryPolicy> CircularList<T, M> {
    /// Number of elements in the list.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.col.len()
    }

    /// Returns true if the list has no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.col.is_empty()
    }

    /// Returns a reference to the element at the head; None if the list is empty.
    pub fn first(&self) -> Option<&T> {
        self.head().and_then(|head| self.col.data(head))
    }

    fn head(&self) -> Option<NodePos<Doubly<T>>> {
        self.col.ends().get()
    }

    // a node which lost its link is its own neighbor
    fn next_of(&self, pos: NodePos<Doubly<T>>) -> NodePos<Doubly<T>> {
        self.col.node(pos).next().get().unwrap_or(pos)
    }

    fn prev_of(&self, pos: NodePos<Doubly<T>>) -> NodePos<Doubly<T>> {
        self.col.node(pos).prev().get().unwrap_or(pos)
    }

    fn link(&mut self, left: NodePos<Doubly<T>>, right: NodePos<Doubly<T>>) {
        self.col.node_mut(left).next_mut().set_some(right);
        self.col.node_mut(right).prev_mut().set_some(left);
    }

    /// Inserts `value` at the back of the list, between the current tail and the head.
    pub fn insert_back(&mut self, value: T) {
        let pos = self.col.push(value);
        match self.head() {
            None => {
                self.link(pos, pos);
                self.col.ends_mut().set_some(pos);
            }
            Some(head) => {
                let tail = self.prev_of(head);
                self.link(tail, pos);
                self.link(pos, head);
            }
        }
    }

    fn positions(&self) -> impl Iterator<Item = NodePos<Doubly<T>>> + '_ {
        let mut current = self.head();
        (0..self.len()).filter_map(move |_| {
            let pos = current?;
            current = Some(self.next_of(pos));
            Some(pos)
        })
    }

    /// Returns the index of the first element equal to `key`, searching forward
    /// from the head; None if there is no such element.
    ///
    /// The index stays valid until the element is removed or the list reclaims memory.
    pub fn find(&self, key: &T) -> Option<ListIdx<T>>
    where
        T: PartialEq,
    {
        self.positions()
            .find(|pos| self.col.data(*pos) == Some(key))
            .map(|pos| self.col.node_idx(pos))
    }

    /// Returns true if any element is equal to `key`.
    pub fn contains(&self, key: &T) -> bool
    where
        T: PartialEq,
    {
        self.find(key).is_some()
    }

    /// Returns a reference to the element with the given `idx`;
    /// or the reason why the index is no longer valid.
    pub fn get(&self, idx: &ListIdx<T>) -> Result<&T, NodeIdxError> {
        self.col.get(idx)
    }

    /// Returns a mutable reference to the element with the given `idx`;
    /// or the reason why the index is no longer valid.
    pub fn get_mut(&mut self, idx: &ListIdx<T>) -> Result<&mut T, NodeIdxError> {
        self.col.get_mut(idx)
    }

    fn unlink(&mut self, pos: NodePos<Doubly<T>>) {
        let next = self.next_of(pos);
        match next == pos {
            true => self.col.ends_mut().set_none(),
            false => {
                let prev = self.prev_of(pos);
                self.link(prev, next);
                if self.head() == Some(pos) {
                    self.col.ends_mut().set_some(next);
                }
            }
        }
    }

    /// Removes every element equal to `key` and returns the number of removed elements.
    ///
    /// The ring is traversed exactly once starting from the head. If the head is removed,
    /// its successor becomes the new head.
    ///
    /// Returns `NotFound` and leaves the list untouched if no element is equal to `key`.
    pub fn remove_all(&mut self, key: &T) -> Result<usize, ContainerError>
    where
        T: PartialEq,
    {
        let mut current = self.head().ok_or(ContainerError::NotFound)?;
        let mut num_removed = 0;

        for _ in 0..self.len() {
            let next = self.next_of(current);
            if self.col.data(current) == Some(key) {
                self.unlink(current);
                _ = self.col.close(current);
                num_removed += 1;
            }
            current = next;
        }

        match num_removed {
            0 => Err(ContainerError::NotFound),
            n => {
                self.col.reclaim_by_policy();
                Ok(n)
            }
        }
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.col.clear();
    }

    /// Returns an iterator over the elements, starting at the head and moving forward
    /// once around the ring.
    pub fn iter(&self) -> Iter<'_, T, M> {
        Iter {
            list: self,
            current: self.head(),
            remaining: self.len(),
            forward: true,
        }
    }

    /// Returns an iterator over the elements, starting at the node right before the head
    /// and moving backward once around the ring.
    pub fn iter_rev(&self) -> Iter<'_, T, M> {
        Iter {
            list: self,
            current: self.head().map(|head| self.prev_of(head)),
            remaining: self.len(),
            forward: false,
        }
    }

    /// Sorts the list with the given `compare` function so that the smallest element
    /// is at the head and the elements follow in order in the forward direction.
    ///
    /// The sort is stable with respect to the forward order starting at the head.
    pub fn sort_by<C>(&mut self, compare: C)
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        if self.len() < 2 {
            return;
        }

        let order: Vec<_> = self.positions().collect();
        let drained: Vec<_> = order
            .into_iter()
            .filter_map(|pos| self.col.close(pos))
            .collect();
        self.col.clear();

        sort_by_extraction(drained, compare, |sorted| {
            for x in sorted {
                self.insert_back(x);
            }
        });
    }

    /// Sorts the list in ascending order so that the smallest element is at the head.
    ///
    /// Equivalent to `self.sort_by(ascending)`.
    pub fn sort(&mut self)
    where
        T: Element,
    {
        self.sort_by(ascending)
    }
}

impl<T: Display, M: MemoryPolicy> Display for CircularList<T, M> {
    /// Writes the elements from the head separated by spaces; `<empty>` if there is none.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.is_empty() {
            true => write!(f, "<empty>"),
            false => write_separated(f, self.iter()),
        }
    }
}

/// Iterator once around a circular list, forward or backward.
pub struct Iter<'a, T, M: MemoryPolicy> {
    list: &'a CircularList<T, M>,
    current: Option<NodePos<Doubly<T>>>,
    remaining: usize,
    forward: bool,
}

impl<T, M: MemoryPolicy> Clone for Iter<'_, T, M> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            current: self.current,
            remaining: self.remaining,
            forward: self.forward,
        }
    }
}

impl<'a, T, M: MemoryPolicy> Iterator for Iter<'a, T, M> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.remaining {
            0 => None,
            _ => {
                let current = self.current?;
                self.remaining -= 1;
                self.current = Some(match self.forward {
                    true => self.list.next_of(current),
                    false => self.list.prev_of(current),
                });
                self.list.col.data(current)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, M: MemoryPolicy> ExactSizeIterator for Iter<'_, T, M> {}

impl<'a, T, M: MemoryPolicy> IntoIterator for &'a CircularList<T, M> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, M: MemoryPolicy> FromIterator<T> for CircularList<T, M> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::default();
        for x in iter {
            list.insert_back(x);
        }
        list
    }
}

impl<T: core::fmt::Debug, M: MemoryPolicy> core::fmt::Debug for CircularList<T, M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
