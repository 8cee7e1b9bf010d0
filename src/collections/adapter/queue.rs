use std::{
    collections::{LinkedList, VecDeque, linked_list, vec_deque},
    marker::PhantomData,
    slice,
};

use crate::collections::adapter::ContainerCommon;

/// Backing sequence for FIFO containers. The front is the oldest element.
pub trait QueueLike<T>: ContainerCommon {
    type Iter<'a>: DoubleEndedIterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    fn push_back(&mut self, value: T);

    fn pop_front(&mut self) -> Option<T>;

    fn front(&self) -> Option<&T>;

    fn front_mut(&mut self) -> Option<&mut T>;

    fn back(&self) -> Option<&T>;

    fn back_mut(&mut self) -> Option<&mut T>;

    fn iter_from_front(&self) -> Self::Iter<'_>;
}

pub struct Queue<T, Container: QueueLike<T> = VecDeque<T>> {
    container: Container,
    _phantom_data: PhantomData<T>,
}

impl<T, Container: QueueLike<T>> Queue<T, Container> {
    #[inline]
    pub fn new(container: Container) -> Self {
        Self {
            container,
            _phantom_data: PhantomData,
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

impl<T, Container: QueueLike<T>> From<Container> for Queue<T, Container> {
    #[inline]
    fn from(value: Container) -> Self {
        Self::new(value)
    }
}

impl<T, Container: QueueLike<T> + Default> Default for Queue<T, Container> {
    #[inline]
    fn default() -> Self {
        Self::new(Default::default())
    }
}

impl<T, Container: QueueLike<T> + Clone> Clone for Queue<T, Container> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.container.clone())
    }
}

impl<T, Container: QueueLike<T> + std::fmt::Debug> std::fmt::Debug for Queue<T, Container> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Queue")
            .field("container", &self.container)
            .finish()
    }
}

impl<T, Container: QueueLike<T>> ContainerCommon for Queue<T, Container> {
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

impl<T, Container: QueueLike<T>> QueueLike<T> for Queue<T, Container> {
    type Iter<'a>
        = Container::Iter<'a>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn push_back(&mut self, value: T) {
        self.container.push_back(value);
    }

    #[inline]
    fn pop_front(&mut self) -> Option<T> {
        self.container.pop_front()
    }

    #[inline]
    fn front(&self) -> Option<&T> {
        self.container.front()
    }

    #[inline]
    fn front_mut(&mut self) -> Option<&mut T> {
        self.container.front_mut()
    }

    #[inline]
    fn back(&self) -> Option<&T> {
        self.container.back()
    }

    #[inline]
    fn back_mut(&mut self) -> Option<&mut T> {
        self.container.back_mut()
    }

    #[inline]
    fn iter_from_front(&self) -> Self::Iter<'_> {
        self.container.iter_from_front()
    }
}

/// Dequeue shifts every remaining element toward the front.
impl<T> QueueLike<T> for Vec<T> {
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        T: 'a;

    #[inline]
    fn push_back(&mut self, value: T) {
        self.push(value);
    }

    #[inline]
    fn pop_front(&mut self) -> Option<T> {
        (!self.is_empty()).then(|| self.remove(0))
    }

    #[inline]
    fn front(&self) -> Option<&T> {
        self.first()
    }

    #[inline]
    fn front_mut(&mut self) -> Option<&mut T> {
        self.first_mut()
    }

    #[inline]
    fn back(&self) -> Option<&T> {
        self.last()
    }

    #[inline]
    fn back_mut(&mut self) -> Option<&mut T> {
        self.last_mut()
    }

    #[inline]
    fn iter_from_front(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }
}

impl<T> QueueLike<T> for VecDeque<T> {
    type Iter<'a>
        = vec_deque::Iter<'a, T>
    where
        T: 'a;

    #[inline]
    fn push_back(&mut self, value: T) {
        self.push_back(value);
    }

    #[inline]
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }

    #[inline]
    fn front(&self) -> Option<&T> {
        self.front()
    }

    #[inline]
    fn front_mut(&mut self) -> Option<&mut T> {
        self.front_mut()
    }

    #[inline]
    fn back(&self) -> Option<&T> {
        self.back()
    }

    #[inline]
    fn back_mut(&mut self) -> Option<&mut T> {
        self.back_mut()
    }

    #[inline]
    fn iter_from_front(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<T> QueueLike<T> for LinkedList<T> {
    type Iter<'a>
        = linked_list::Iter<'a, T>
    where
        T: 'a;

    #[inline]
    fn push_back(&mut self, value: T) {
        self.push_back(value);
    }

    #[inline]
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }

    #[inline]
    fn front(&self) -> Option<&T> {
        self.front()
    }

    #[inline]
    fn front_mut(&mut self) -> Option<&mut T> {
        self.front_mut()
    }

    #[inline]
    fn back(&self) -> Option<&T> {
        self.back()
    }

    #[inline]
    fn back_mut(&mut self) -> Option<&mut T> {
        self.back_mut()
    }

    #[inline]
    fn iter_from_front(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fifo<C: QueueLike<i32> + Default>() {
        let mut q = Queue::<i32, C>::default();
        q.push_back(1);
        q.push_back(2);
        q.push_back(3);
        assert_eq!(q.front(), Some(&1));
        assert_eq!(q.back(), Some(&3));
        assert_eq!(q.iter_from_front().copied().collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(q.pop_front(), Some(1));
        assert_eq!(q.pop_front(), Some(2));
        assert_eq!(q.pop_front(), Some(3));
        assert_eq!(q.pop_front(), None);
        assert!(q.is_empty());
    }

    #[test]
    fn t_fifo() {
        fifo::<VecDeque<i32>>();
        fifo::<Vec<i32>>();
        fifo::<LinkedList<i32>>();
    }

    #[test]
    fn t_front_mut() {
        let mut q = Queue::new(vec![1, 2]);
        *q.front_mut().unwrap() = 10;
        *q.back_mut().unwrap() = 20;
        assert_eq!(q.into_inner(), [10, 20]);
    }
}
