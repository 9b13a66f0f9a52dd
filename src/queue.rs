use crate::{
    ContainerError, DefaultMemory, Element, MemoryPolicy, NodePos, Refs, RefsArray, RefsNone,
    RefsSingle, SelfRefCol, Variant,
    element::{ascending, write_separated},
    sort::sort_by_extraction,
};
use core::{cmp::Ordering, fmt::Display, marker::PhantomData};

const FRONT: usize = 0;
const REAR: usize = 1;

/// Link shape of the queue: every node knows the node behind it; ends are `[front, rear]`.
pub struct SinglyQueue<T>(PhantomData<T>);

impl<T> Variant for SinglyQueue<T> {
    type Item = T;

    type Prev = RefsNone;

    type Next = RefsSingle<Self>;

    type Ends = RefsArray<2, Self>;
}

/// A first-in-first-out singly linked queue.
///
/// ```
/// use selfref_containers::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue('a');
/// queue.enqueue('b');
///
/// assert_eq!(queue.peek(), Ok(&'a'));
/// assert_eq!(queue.dequeue(), Ok('a'));
/// assert_eq!(queue.dequeue(), Ok('b'));
/// assert!(queue.dequeue().is_err());
/// ```
pub struct Queue<T, M = DefaultMemory>
where
    M: MemoryPolicy,
{
    col: SelfRefCol<SinglyQueue<T>, M>,
}

impl<T, M: MemoryPolicy> Default for Queue<T, M> {
    /// Creates a new empty queue with the memory policy `M`.
    fn default() -> Self {
        Self {
            col: SelfRefCol::new(),
        }
    }
}

impl<T> Queue<T> {
    /// Creates a new empty queue with the default memory policy.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T, M: MemoryPolicy> Queue<T, M> {
    /// Number of elements in the queue.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.col.len()
    }

    /// Returns true if the queue has no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.col.is_empty()
    }

    fn front(&self) -> Option<NodePos<SinglyQueue<T>>> {
        self.col.ends().get(FRONT)
    }

    fn rear(&self) -> Option<NodePos<SinglyQueue<T>>> {
        self.col.ends().get(REAR)
    }

    /// Appends `value` at the rear of the queue.
    pub fn enqueue(&mut self, value: T) {
        let pos = self.col.push(value);
        match self.rear() {
            Some(old_rear) => self.col.node_mut(old_rear).next_mut().set_some(pos),
            None => self.col.ends_mut().set(FRONT, Some(pos)),
        }
        self.col.ends_mut().set(REAR, Some(pos));
    }

    /// Removes the front element and returns it; `EmptyContainer` if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T, ContainerError> {
        let front = self.front().ok_or(ContainerError::EmptyContainer)?;
        match self.col.node(front).next().get() {
            Some(new_front) => self.col.ends_mut().set(FRONT, Some(new_front)),
            None => self.col.ends_mut().clear(),
        }
        self.col
            .close_and_reclaim(front)
            .ok_or(ContainerError::EmptyContainer)
    }

    /// Returns a reference to the front element; `EmptyContainer` if the queue is empty.
    pub fn peek(&self) -> Result<&T, ContainerError> {
        self.front()
            .and_then(|front| self.col.data(front))
            .ok_or(ContainerError::EmptyContainer)
    }

    /// Returns a mutable reference to the front element; `EmptyContainer` if the queue is empty.
    pub fn peek_mut(&mut self) -> Result<&mut T, ContainerError> {
        let front = self.front().ok_or(ContainerError::EmptyContainer)?;
        self.col
            .data_mut(front)
            .ok_or(ContainerError::EmptyContainer)
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.col.clear();
    }

    /// Returns an iterator over the elements from the front to the rear.
    pub fn iter(&self) -> Iter<'_, T, M> {
        Iter {
            queue: self,
            current: self.front(),
            remaining: self.len(),
        }
    }

    /// Sorts the queue with the given `compare` function so that the smallest element
    /// is at the front.
    ///
    /// The sort is stable; equal elements keep their arrival order.
    pub fn sort_by<C>(&mut self, compare: C)
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        let drained: Vec<_> = core::iter::from_fn(|| self.dequeue().ok()).collect();
        sort_by_extraction(drained, compare, |sorted| {
            for x in sorted {
                self.enqueue(x);
            }
        });
    }

    /// Sorts the queue in ascending order so that the smallest element is at the front.
    ///
    /// Equivalent to `self.sort_by(ascending)`.
    pub fn sort(&mut self)
    where
        T: Element,
    {
        self.sort_by(ascending)
    }
}

impl<T: Display, M: MemoryPolicy> Display for Queue<T, M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write_separated(f, self.iter())
    }
}

/// Iterator over the elements of a queue from the front to the rear.
pub struct Iter<'a, T, M: MemoryPolicy> {
    queue: &'a Queue<T, M>,
    current: Option<NodePos<SinglyQueue<T>>>,
    remaining: usize,
}

impl<T, M: MemoryPolicy> Clone for Iter<'_, T, M> {
    fn clone(&self) -> Self {
        Self {
            queue: self.queue,
            current: self.current,
            remaining: self.remaining,
        }
    }
}

impl<'a, T, M: MemoryPolicy> Iterator for Iter<'a, T, M> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        let node = self.queue.col.node(current);
        self.current = node.next().get();
        self.remaining -= 1;
        node.data()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, M: MemoryPolicy> ExactSizeIterator for Iter<'_, T, M> {}

impl<'a, T, M: MemoryPolicy> IntoIterator for &'a Queue<T, M> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, M: MemoryPolicy> FromIterator<T> for Queue<T, M> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::default();
        for x in iter {
            queue.enqueue(x);
        }
        queue
    }
}

impl<T: core::fmt::Debug, M: MemoryPolicy> core::fmt::Debug for Queue<T, M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::MemoryReclaimNever;
    use test_case::test_case;

    fn front_to_rear<T: Clone, M: MemoryPolicy>(queue: &Queue<T, M>) -> Vec<T> {
        queue.iter().cloned().collect()
    }

    /// The rear must be reachable from the front, have no successor, and both ends
    /// must be set or unset together.
    fn assert_ends<T, M: MemoryPolicy>(queue: &Queue<T, M>) {
        match (queue.front(), queue.rear()) {
            (None, None) => assert_eq!(queue.len(), 0),
            (Some(front), Some(rear)) => {
                assert!(queue.col.node(rear).next().get().is_none());
                let mut count = 1;
                let mut current = front;
                while current != rear {
                    current = queue.col.node(current).next().get().unwrap();
                    count += 1;
                    assert!(count <= queue.len(), "rear is not reachable");
                }
                assert_eq!(count, queue.len());
            }
            _ => panic!("exactly one of front and rear is set"),
        }
    }

    #[test_case(0)]
    #[test_case(1)]
    #[test_case(2)]
    #[test_case(33)]
    #[test_case(1000)]
    fn fifo(n: usize) {
        let mut queue = Queue::new();
        for i in 0..n {
            queue.enqueue(i.to_string());
            assert_ends(&queue);
        }
        for i in 0..n {
            assert_eq!(queue.dequeue(), Ok(i.to_string()));
            assert_ends(&queue);
        }
        assert_eq!(queue.dequeue(), Err(ContainerError::EmptyContainer));
    }

    #[test]
    fn emptied_queue_accepts_new_elements() {
        let mut queue = Queue::<i32, MemoryReclaimNever>::default();
        queue.enqueue(1);
        assert_eq!(queue.dequeue(), Ok(1));
        assert_ends(&queue);

        queue.enqueue(2);
        queue.enqueue(3);
        assert_ends(&queue);
        assert_eq!(front_to_rear(&queue), vec![2, 3]);
    }

    #[test]
    fn peek_mut_changes_front_only() {
        let mut queue: Queue<_> = ['a', 'b'].into_iter().collect();
        *queue.peek_mut().unwrap() = 'z';
        assert_eq!(front_to_rear(&queue), vec!['z', 'b']);
    }

    #[test]
    fn sort_keeps_arrival_order_among_equals() {
        let mut queue: Queue<_> = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')].into_iter().collect();
        queue.sort_by(|x, y| x.0.cmp(&y.0));
        assert_eq!(
            front_to_rear(&queue),
            vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]
        );
        assert_ends(&queue);
    }

    #[test]
    fn display() {
        let queue: Queue<_> = ["x y".to_string(), "z".to_string()].into_iter().collect();
        assert_eq!(queue.to_string(), "x y z");
    }
}
