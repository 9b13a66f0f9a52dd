use crate::{
    ContainerError, DefaultMemory, Element, MemoryPolicy, NodePos, RefsNone, RefsSingle,
    SelfRefCol, Variant,
    element::{ascending, write_separated},
    persist::{self, FixedWidth},
    sort::sort_by_extraction,
};
use core::{cmp::Ordering, fmt::Display, marker::PhantomData};
use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

/// Link shape of the stack: every node knows the node below it; the single end is the top.
pub struct Singly<T>(PhantomData<T>);

impl<T> Variant for Singly<T> {
    type Item = T;

    type Prev = RefsNone;

    type Next = RefsSingle<Self>;

    type Ends = RefsSingle<Self>;
}

/// A last-in-first-out singly linked stack.
///
/// ```
/// use selfref_containers::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(10);
/// stack.push(20);
///
/// assert_eq!(stack.peek(), Ok(&20));
/// assert_eq!(stack.pop(), Ok(20));
/// assert_eq!(stack.pop(), Ok(10));
/// assert!(stack.pop().is_err());
/// ```
pub struct Stack<T, M = DefaultMemory>
where
    M: MemoryPolicy,
{
    col: SelfRefCol<Singly<T>, M>,
}

impl<T, M: MemoryPolicy> Default for Stack<T, M> {
    /// Creates a new empty stack with the memory policy `M`.
    fn default() -> Self {
        Self {
            col: SelfRefCol::new(),
        }
    }
}

impl<T> Stack<T> {
    /// Creates a new empty stack with the default memory policy.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T, M: MemoryPolicy> Stack<T, M> {
    /// Number of elements in the stack.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.col.len()
    }

    /// Returns true if the stack has no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.col.is_empty()
    }

    fn top(&self) -> Option<NodePos<Singly<T>>> {
        self.col.ends().get()
    }

    /// Pushes `value` on top of the stack.
    pub fn push(&mut self, value: T) {
        let pos = self.col.push(value);
        let old_top = self.top();
        self.col.node_mut(pos).next_mut().set(old_top);
        self.col.ends_mut().set_some(pos);
    }

    /// Removes the top element and returns it; `EmptyContainer` if the stack is empty.
    pub fn pop(&mut self) -> Result<T, ContainerError> {
        let top = self.top().ok_or(ContainerError::EmptyContainer)?;
        let below = self.col.node(top).next().get();
        self.col.ends_mut().set(below);
        self.col
            .close_and_reclaim(top)
            .ok_or(ContainerError::EmptyContainer)
    }

    /// Returns a reference to the top element; `EmptyContainer` if the stack is empty.
    pub fn peek(&self) -> Result<&T, ContainerError> {
        self.top()
            .and_then(|top| self.col.data(top))
            .ok_or(ContainerError::EmptyContainer)
    }

    /// Returns a mutable reference to the top element; `EmptyContainer` if the stack is empty.
    pub fn peek_mut(&mut self) -> Result<&mut T, ContainerError> {
        let top = self.top().ok_or(ContainerError::EmptyContainer)?;
        self.col.data_mut(top).ok_or(ContainerError::EmptyContainer)
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.col.clear();
    }

    /// Returns an iterator over the elements from the top to the bottom.
    pub fn iter(&self) -> Iter<'_, T, M> {
        Iter {
            stack: self,
            current: self.top(),
            remaining: self.len(),
        }
    }

    /// Sorts the stack with the given `compare` function so that the smallest element
    /// is on top, and popping yields the elements in order.
    ///
    /// The sort is stable; among equal elements, the one which was closer to the top
    /// stays closer to the top.
    pub fn sort_by<C>(&mut self, compare: C)
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        let drained: Vec<_> = core::iter::from_fn(|| self.pop().ok()).collect();
        sort_by_extraction(drained, compare, |sorted| {
            for x in sorted.into_iter().rev() {
                self.push(x);
            }
        });
    }

    /// Sorts the stack in ascending order so that the smallest element is on top.
    ///
    /// Equivalent to `self.sort_by(ascending)`.
    pub fn sort(&mut self)
    where
        T: Element,
    {
        self.sort_by(ascending)
    }
}

impl<T: FixedWidth, M: MemoryPolicy> Stack<T, M> {
    /// Saves the elements from the top to the bottom to the file at `path`,
    /// creating or truncating the file.
    ///
    /// See [`persist`](crate::persist) for the file layout.
    pub fn save_to_file<Q: AsRef<Path>>(&self, path: Q) -> Result<(), ContainerError> {
        let mut writer = BufWriter::new(File::create(path)?);
        persist::write_elements(&mut writer, self.iter())
    }

    /// Replaces the elements of the stack with those read from the file at `path`,
    /// keeping the top to bottom order of the file.
    ///
    /// The stack is not modified unless the entire file could be read.
    pub fn load_from_file<Q: AsRef<Path>>(&mut self, path: Q) -> Result<(), ContainerError> {
        let mut reader = BufReader::new(File::open(path)?);
        let elements: Vec<T> = persist::read_elements(&mut reader)?;

        self.clear();
        for x in elements.into_iter().rev() {
            self.push(x);
        }
        Ok(())
    }
}

impl<T: Display, M: MemoryPolicy> Display for Stack<T, M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write_separated(f, self.iter())
    }
}

/// Iterator over the elements of a stack from the top to the bottom.
pub struct Iter<'a, T, M: MemoryPolicy> {
    stack: &'a Stack<T, M>,
    current: Option<NodePos<Singly<T>>>,
    remaining: usize,
}

impl<T, M: MemoryPolicy> Clone for Iter<'_, T, M> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack,
            current: self.current,
            remaining: self.remaining,
        }
    }
}

impl<'a, T, M: MemoryPolicy> Iterator for Iter<'a, T, M> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        let node = self.stack.col.node(current);
        self.current = node.next().get();
        self.remaining -= 1;
        node.data()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, M: MemoryPolicy> ExactSizeIterator for Iter<'_, T, M> {}

impl<'a, T, M: MemoryPolicy> IntoIterator for &'a Stack<T, M> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, M: MemoryPolicy> FromIterator<T> for Stack<T, M> {
    /// Pushes the elements in iteration order; the last one ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::default();
        for x in iter {
            stack.push(x);
        }
        stack
    }
}

impl<T: core::fmt::Debug, M: MemoryPolicy> core::fmt::Debug for Stack<T, M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
