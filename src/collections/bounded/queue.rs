use std::{collections::VecDeque, fmt};

use crate::collections::{
    ContainerCommon, Queue, QueueLike,
    bounded::{Capacity, CapacityExceeded, ContainerKind, EmptyContainer, ItemNotFound},
};

const KIND: ContainerKind = ContainerKind::Queue;

/// FIFO queue holding at most [`Capacity`] elements.
///
/// The default backing sequence is a [`VecDeque`], so `dequeue` is O(1).
/// A `Vec` backing shifts the remaining elements on every `dequeue`.
pub struct BoundedQueue<T, Container: QueueLike<T> = VecDeque<T>> {
    queue: Queue<T, Container>,
    capacity: Capacity,
}

impl<T> BoundedQueue<T> {
    /// Unbounded queue.
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
            queue: Queue::default(),
            capacity,
        }
    }
}

impl<T, Container: QueueLike<T>> BoundedQueue<T, Container> {
    /// Wraps an existing sequence, front first. Fails if it already holds
    /// more than `capacity` elements.
    pub fn from_container(
        container: Container,
        capacity: Capacity,
    ) -> Result<Self, CapacityExceeded> {
        super::ensure_fits(KIND, capacity, 0, container.len())?;
        Ok(Self {
            queue: Queue::new(container),
            capacity,
        })
    }

    /// Appends `items` to the back in iteration order.
    ///
    /// Nothing is inserted if the whole batch does not fit.
    pub fn enqueue<I>(&mut self, items: I) -> Result<(), CapacityExceeded>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let items = items.into_iter();
        let additional = items.len();
        super::ensure_fits(KIND, self.capacity, self.queue.len(), additional)?;
        items
            .take(additional)
            .for_each(|item| self.queue.push_back(item));
        Ok(())
    }

    #[inline]
    pub fn enqueue_one(&mut self, item: T) -> Result<(), CapacityExceeded> {
        super::ensure_fits(KIND, self.capacity, self.queue.len(), 1)?;
        self.queue.push_back(item);
        Ok(())
    }

    #[inline]
    pub fn dequeue(&mut self) -> Result<T, EmptyContainer> {
        self.queue.pop_front().ok_or_else(|| super::empty(KIND))
    }

    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.queue.front()
    }

    #[inline]
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.queue.front_mut()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        !self.capacity.fits(self.queue.len(), 1)
    }

    #[inline]
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Free slots left, `None` when unbounded.
    #[inline]
    pub fn remaining(&self) -> Option<usize> {
        self.capacity.remaining(self.queue.len())
    }

    #[inline]
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    #[inline]
    pub fn iter(&self) -> Container::Iter<'_> {
        self.queue.iter_from_front()
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|x| x == item)
    }

    /// 1-based position of the first match, counted from the front.
    pub fn search(&self, item: &T) -> Result<usize, ItemNotFound>
    where
        T: PartialEq,
    {
        super::position(KIND, self.iter(), item)
    }

    /// Front-to-back copy of the contents.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    pub fn into_vec(mut self) -> Vec<T> {
        std::iter::from_fn(|| self.queue.pop_front()).collect()
    }

    /// Comma separated contents, front first.
    pub fn describe(&self) -> String
    where
        T: fmt::Display,
    {
        self.to_string()
    }

    #[inline]
    pub fn inner(&self) -> &Container {
        self.queue.inner()
    }

    #[inline]
    pub fn into_inner(self) -> Container {
        self.queue.into_inner()
    }
}

impl<T, Container: QueueLike<T> + Default> Default for BoundedQueue<T, Container> {
    #[inline]
    fn default() -> Self {
        Self {
            queue: Queue::default(),
            capacity: Capacity::Unbounded,
        }
    }
}

impl<T, Container: QueueLike<T> + Clone> Clone for BoundedQueue<T, Container> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            queue: self.queue.clone(),
            capacity: self.capacity,
        }
    }
}

impl<T, Container: QueueLike<T> + fmt::Debug> fmt::Debug for BoundedQueue<T, Container> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedQueue")
            .field("capacity", &self.capacity)
            .field("container", self.queue.inner())
            .finish()
    }
}

impl<T: fmt::Display, Container: QueueLike<T>> fmt::Display for BoundedQueue<T, Container> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::write_joined(f, self.iter())
    }
}

impl<T, Container: QueueLike<T>> ContainerCommon for BoundedQueue<T, Container> {
    #[inline]
    fn len(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity.as_usize()
    }

    #[inline]
    fn clear(&mut self) {
        self.queue.clear();
    }

    #[inline]
    fn is_full(&self) -> bool {
        !self.capacity.fits(self.queue.len(), 1)
    }
}

impl<'a, T, Container: QueueLike<T>> IntoIterator for &'a BoundedQueue<T, Container> {
    type Item = &'a T;
    type IntoIter = Container::Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::LinkedList;

    use super::*;

    #[test]
    fn t_fifo_order() {
        let mut q = BoundedQueue::new();
        q.enqueue([1, 2, 3]).unwrap();
        assert_eq!(q.dequeue(), Ok(1));
        assert_eq!(q.dequeue(), Ok(2));
        assert_eq!(q.dequeue(), Ok(3));
        assert!(q.is_empty());
    }

    #[test]
    fn t_interleaved() {
        let mut q = BoundedQueue::bounded(3);
        q.enqueue([1, 2]).unwrap();
        assert_eq!(q.dequeue(), Ok(1));
        q.enqueue_one(3).unwrap();
        q.enqueue_one(4).unwrap();
        assert_eq!(q.to_vec(), [2, 3, 4]);
        assert!(q.is_full());
        assert_eq!(q.size(), 3);
    }

    #[test]
    fn t_capacity_exceeded_is_atomic() {
        let mut q = BoundedQueue::bounded(2);
        let err = q.enqueue([1, 2, 3]).unwrap_err();
        assert_eq!(
            err,
            CapacityExceeded {
                kind: ContainerKind::Queue,
                capacity: Capacity::Bounded(2),
                len: 0,
                additional: 3,
            }
        );
        assert_eq!(q.size(), 0);

        q.enqueue([1]).unwrap();
        assert!(q.enqueue(vec![2, 3]).is_err());
        assert_eq!(q.to_vec(), [1]);
        assert_eq!(q.remaining(), Some(1));
        q.enqueue_one(2).unwrap();
        assert!(q.enqueue_one(3).is_err());
        assert_eq!(q.size(), 2);
    }

    #[test]
    fn t_empty() {
        let mut q = BoundedQueue::<i32>::new();
        assert_eq!(q.peek(), None);
        assert_eq!(
            q.dequeue(),
            Err(EmptyContainer {
                kind: ContainerKind::Queue
            })
        );
        assert_eq!(q.size(), 0);
    }

    #[test]
    fn t_peek() {
        let mut q = BoundedQueue::new();
        q.enqueue(["a", "b"]).unwrap();
        assert_eq!(q.peek(), Some(&"a"));
        *q.peek_mut().unwrap() = "z";
        assert_eq!(q.dequeue(), Ok("z"));
        assert_eq!(q.size(), 1);
    }

    #[test]
    fn t_clear() {
        let mut q = BoundedQueue::bounded(4);
        q.enqueue([1, 2, 3, 4]).unwrap();
        q.clear();
        assert_eq!(q.size(), 0);
        assert!(q.is_empty());
        assert_eq!(q.capacity(), Capacity::Bounded(4));
        q.enqueue([5, 6, 7, 8]).unwrap();
        assert_eq!(q.size(), 4);
    }

    #[test]
    fn t_contains_and_search() {
        let mut q = BoundedQueue::new();
        assert_eq!(
            q.search(&1),
            Err(ItemNotFound {
                kind: ContainerKind::Queue
            })
        );
        q.enqueue_one(7).unwrap();
        assert_eq!(q.search(&7), Ok(1));

        q.clear();
        q.enqueue([1, 2, 3, 4, 2]).unwrap();
        assert!(q.contains(&2));
        assert!(!q.contains(&5));
        assert_eq!(q.search(&4), Ok(4));
        assert_eq!(q.search(&2), Ok(2));
        assert!(q.search(&5).is_err());
    }

    #[test]
    fn t_to_vec_is_a_copy() {
        let mut q = BoundedQueue::new();
        q.enqueue([1, 2, 3]).unwrap();
        let mut snapshot = q.to_vec();
        snapshot.push(4);
        snapshot[0] = 100;
        assert_eq!(q.size(), 3);
        assert_eq!(q.dequeue(), Ok(1));
        assert_eq!(q.into_vec(), [2, 3]);
    }

    #[test]
    fn t_describe() {
        let mut q = BoundedQueue::new();
        assert_eq!(q.describe(), "");
        q.enqueue([1, 2, 3, 4]).unwrap();
        assert_eq!(q.describe(), "1, 2, 3, 4");
        q.dequeue().unwrap();
        assert_eq!(format!("Queue content: {q}"), "Queue content: 2, 3, 4");

        let mut repeated = BoundedQueue::new();
        repeated.enqueue([3, 1, 3]).unwrap();
        assert_eq!(repeated.describe(), "3, 1, 3");
    }

    #[test]
    fn t_other_backings() {
        let mut q: BoundedQueue<i32, Vec<i32>> =
            BoundedQueue::from_container(Vec::from([1, 2]), Capacity::Bounded(3)).unwrap();
        q.enqueue_one(3).unwrap();
        assert_eq!(q.dequeue(), Ok(1));
        assert_eq!(q.inner(), &[2, 3]);

        let mut q: BoundedQueue<i32, LinkedList<i32>> =
            BoundedQueue::from_container(LinkedList::new(), Capacity::Unbounded).unwrap();
        q.enqueue(0..100).unwrap();
        assert_eq!(q.search(&99), Ok(100));
        assert_eq!(q.dequeue(), Ok(0));

        let err = BoundedQueue::<i32, Vec<i32>>::from_container(vec![1, 2, 3], Capacity::Bounded(2))
            .unwrap_err();
        assert_eq!(err.additional, 3);
    }

    #[test]
    fn t_size_tracks_net_operations() {
        let mut q = BoundedQueue::bounded(5);
        let mut expected = 0;
        for round in 0..10 {
            if q.enqueue([round, round]).is_ok() {
                expected += 2;
            }
            if round % 3 == 0 && q.dequeue().is_ok() {
                expected -= 1;
            }
            assert_eq!(q.size(), expected);
        }
        q.clear();
        assert_eq!(q.size(), 0);
    }

    #[test]
    fn t_container_common() {
        let mut q = BoundedQueue::<char>::bounded(1);
        assert_eq!(ContainerCommon::capacity(&q), 1);
        q.enqueue_one('x').unwrap();
        assert!(ContainerCommon::is_full(&q));
        assert_eq!(ContainerCommon::capacity(&BoundedQueue::<u8>::new()), usize::MAX);
        assert_eq!((&q).into_iter().collect::<Vec<_>>(), [&'x']);
        assert_eq!(format!("{q:?}"), "BoundedQueue { capacity: Bounded(1), container: ['x'] }");
    }
}
