use std::{
    collections::{LinkedList, VecDeque, linked_list, vec_deque},
    marker::PhantomData,
    slice,
};

use crate::collections::adapter::ContainerCommon;

/// Backing sequence for LIFO containers. The top is the newest element.
pub trait StackLike<T>: ContainerCommon {
    type Iter<'a>: DoubleEndedIterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    fn push(&mut self, value: T);

    fn pop(&mut self) -> Option<T>;

    fn top(&self) -> Option<&T>;

    fn top_mut(&mut self) -> Option<&mut T>;

    /// Insertion order, so the top comes last.
    fn iter_from_bottom(&self) -> Self::Iter<'_>;
}

pub struct Stack<T, Container: StackLike<T> = Vec<T>> {
    container: Container,
    _phanom_data: PhantomData<T>,
}

impl<T, Container: StackLike<T>> Stack<T, Container> {
    #[inline]
    pub fn new(container: Container) -> Self {
        Self {
            container,
            _phanom_data: PhantomData,
        }
    }

    #[inline]
    pub fn inner(&self) -> &Container {
        &self.container
    }

    #[inline]
    pub fn inner_mut(&mut self) -> &mut Container {
        &mut self.container
    }

    #[inline]
    pub fn into_inner(self) -> Container {
        self.container
    }
}

impl<T, Container: StackLike<T>> From<Container> for Stack<T, Container> {
    #[inline]
    fn from(value: Container) -> Self {
        Self::new(value)
    }
}

impl<T, Container: StackLike<T> + Default> Default for Stack<T, Container> {
    #[inline]
    fn default() -> Self {
        Self::new(Default::default())
    }
}

impl<T, Container: StackLike<T> + Clone> Clone for Stack<T, Container> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.container.clone())
    }
}

impl<T, Container: StackLike<T> + std::fmt::Debug> std::fmt::Debug for Stack<T, Container> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stack")
            .field("container", &self.container)
            .finish()
    }
}

impl<T, Container: StackLike<T>> ContainerCommon for Stack<T, Container> {
    #[inline]
    fn len(&self) -> usize {
        self.container.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.container.capacity()
    }

    #[inline]
    fn clear(&mut self) {
        self.container.clear();
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.container.is_empty()
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.container.is_full()
    }
}

impl<T, Container: StackLike<T>> StackLike<T> for Stack<T, Container> {
    type Iter<'a>
        = Container::Iter<'a>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn push(&mut self, value: T) {
        self.container.push(value);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.container.pop()
    }

    #[inline]
    fn top(&self) -> Option<&T> {
        self.container.top()
    }

    #[inline]
    fn top_mut(&mut self) -> Option<&mut T> {
        self.container.top_mut()
    }

    #[inline]
    fn iter_from_bottom(&self) -> Self::Iter<'_> {
        self.container.iter_from_bottom()
    }
}

impl<T> StackLike<T> for Vec<T> {
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        T: 'a;

    #[inline]
    fn push(&mut self, value: T) {
        self.push(value);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }

    #[inline]
    fn top(&self) -> Option<&T> {
        self.last()
    }

    #[inline]
    fn top_mut(&mut self) -> Option<&mut T> {
        self.last_mut()
    }

    #[inline]
    fn iter_from_bottom(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }
}

impl<T> StackLike<T> for VecDeque<T> {
    type Iter<'a>
        = vec_deque::Iter<'a, T>
    where
        T: 'a;

    #[inline]
    fn push(&mut self, value: T) {
        self.push_back(value);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.pop_back()
    }

    #[inline]
    fn top(&self) -> Option<&T> {
        self.back()
    }

    #[inline]
    fn top_mut(&mut self) -> Option<&mut T> {
        self.back_mut()
    }

    #[inline]
    fn iter_from_bottom(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<T> StackLike<T> for LinkedList<T> {
    type Iter<'a>
        = linked_list::Iter<'a, T>
    where
        T: 'a;

    #[inline]
    fn push(&mut self, value: T) {
        self.push_back(value);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.pop_back()
    }

    #[inline]
    fn top(&self) -> Option<&T> {
        self.back()
    }

    #[inline]
    fn top_mut(&mut self) -> Option<&mut T> {
        self.back_mut()
    }

    #[inline]
    fn iter_from_bottom(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lifo<C: StackLike<i32> + Default>() {
        let mut s = Stack::<i32, C>::default();
        s.push(1);
        s.push(2);
        s.push(3);
        assert_eq!(s.top(), Some(&3));
        assert_eq!(s.iter_from_bottom().copied().collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(s.pop(), Some(3));
        assert_eq!(s.pop(), Some(2));
        assert_eq!(s.pop(), Some(1));
        assert_eq!(s.pop(), None);
        assert!(s.is_empty());
    }

    #[test]
    fn t_lifo() {
        lifo::<Vec<i32>>();
        lifo::<VecDeque<i32>>();
        lifo::<LinkedList<i32>>();
    }

    #[test]
    fn t_top_mut() {
        let mut s = Stack::new(VecDeque::from([1, 2]));
        *s.top_mut().unwrap() += 40;
        assert_eq!(s.into_inner(), [1, 42]);
    }
}
