use std::fmt;

use crate::collections::{
    ContainerCommon, Stack, StackLike,
    bounded::{Capacity, CapacityExceeded, ContainerKind, EmptyContainer, ItemNotFound},
};

const KIND: ContainerKind = ContainerKind::Stack;

/// LIFO stack holding at most [`Capacity`] elements.
///
/// Iteration, `search` and `describe` walk from the bottom (oldest) to the
/// top, matching the queue's front-to-back order.
pub struct BoundedStack<T, Container: StackLike<T> = Vec<T>> {
    stack: Stack<T, Container>,
    capacity: Capacity,
}

impl<T> BoundedStack<T> {
    /// Unbounded stack.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(Capacity::Unbounded)
    }

    #[inline]
    pub fn bounded(max: usize) -> Self {
        Self::with_capacity(Capacity::Bounded(max))
    }

    #[inline]
    pub fn with_capacity(capacity: Capacity) -> Self {
        Self {
            stack: Stack::default(),
            capacity,
        }
    }
}

impl<T, Container: StackLike<T>> BoundedStack<T, Container> {
    /// Wraps an existing sequence, bottom first.
    pub fn from_container(
        container: Container,
        capacity: Capacity,
    ) -> Result<Self, CapacityExceeded> {
        super::ensure_fits(KIND, capacity, 0, container.len())?;
        Ok(Self {
            stack: Stack::new(container),
            capacity,
        })
    }

    /// Pushes `items` in iteration order, so the last item ends on top.
    ///
    /// Nothing is pushed if the whole batch does not fit.
    pub fn push<I>(&mut self, items: I) -> Result<(), CapacityExceeded>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let items = items.into_iter();
        let additional = items.len();
        super::ensure_fits(KIND, self.capacity, self.stack.len(), additional)?;
        items
            .take(additional)
            .for_each(|item| self.stack.push(item));
        Ok(())
    }

    #[inline]
    pub fn push_one(&mut self, item: T) -> Result<(), CapacityExceeded> {
        super::ensure_fits(KIND, self.capacity, self.stack.len(), 1)?;
        self.stack.push(item);
        Ok(())
    }

    #[inline]
    pub fn pop(&mut self) -> Result<T, EmptyContainer> {
        self.stack.pop().ok_or_else(|| super::empty(KIND))
    }

    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.stack.top()
    }

    #[inline]
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.stack.top_mut()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.stack.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        !self.capacity.fits(self.stack.len(), 1)
    }

    #[inline]
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    #[inline]
    pub fn remaining(&self) -> Option<usize> {
        self.capacity.remaining(self.stack.len())
    }

    #[inline]
    pub fn clear(&mut self) {
        self.stack.clear();
    }

    #[inline]
    pub fn iter(&self) -> Container::Iter<'_> {
        self.stack.iter_from_bottom()
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|x| x == item)
    }

    /// 1-based position of the first match, counted from the bottom.
    pub fn search(&self, item: &T) -> Result<usize, ItemNotFound>
    where
        T: PartialEq,
    {
        super::position(KIND, self.iter(), item)
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Bottom-to-top.
    pub fn into_vec(mut self) -> Vec<T> {
        let mut items: Vec<T> = std::iter::from_fn(|| self.stack.pop()).collect();
        items.reverse();
        items
    }

    pub fn describe(&self) -> String
    where
        T: fmt::Display,
    {
        self.to_string()
    }

    #[inline]
    pub fn inner(&self) -> &Container {
        self.stack.inner()
    }

    #[inline]
    pub fn into_inner(self) -> Container {
        self.stack.into_inner()
    }
}

impl<T, Container: StackLike<T> + Default> Default for BoundedStack<T, Container> {
    #[inline]
    fn default() -> Self {
        Self {
            stack: Stack::default(),
            capacity: Capacity::Unbounded,
        }
    }
}

impl<T, Container: StackLike<T> + Clone> Clone for BoundedStack<T, Container> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            capacity: self.capacity,
        }
    }
}

impl<T, Container: StackLike<T> + fmt::Debug> fmt::Debug for BoundedStack<T, Container> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedStack")
            .field("capacity", &self.capacity)
            .field("container", self.stack.inner())
            .finish()
    }
}

impl<T: fmt::Display, Container: StackLike<T>> fmt::Display for BoundedStack<T, Container> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::write_joined(f, self.iter())
    }
}

impl<T, Container: StackLike<T>> ContainerCommon for BoundedStack<T, Container> {
    #[inline]
    fn len(&self) -> usize {
        self.stack.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity.as_usize()
    }

    #[inline]
    fn clear(&mut self) {
        self.stack.clear();
    }

    #[inline]
    fn is_full(&self) -> bool {
        !self.capacity.fits(self.stack.len(), 1)
    }
}

impl<'a, T, Container: StackLike<T>> IntoIterator for &'a BoundedStack<T, Container> {
    type Item = &'a T;
    type IntoIter = Container::Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
