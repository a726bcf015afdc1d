//! Fixed-capacity circular FIFO with front insertion for undo restoration.

use std::iter::FusedIterator;

use crate::error::{InventoryError, InventoryResult};

/// Circular buffer of at most `capacity` items.
///
/// `len` is the only source of truth for empty/full; `head == tail` is
/// ambiguous on its own and never consulted.
#[derive(Debug)]
pub struct BoundedQueue<T> {
    slots: Vec<Option<T>>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> BoundedQueue<T> {
    /// Create an empty queue holding at most `capacity` items.
    pub fn new(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Append at the logical back.
    pub fn enqueue_back(&mut self, item: T) -> InventoryResult<()> {
        if self.is_full() {
            return Err(InventoryError::CapacityExceeded);
        }
        self.slots[self.tail] = Some(item);
        self.tail = (self.tail + 1) % self.capacity();
        self.len += 1;
        Ok(())
    }

    /// Insert before the current front, so the next dequeue returns `item`.
    pub fn enqueue_front(&mut self, item: T) -> InventoryResult<()> {
        if self.is_full() {
            return Err(InventoryError::CapacityExceeded);
        }
        let capacity = self.capacity();
        self.head = (self.head + capacity - 1) % capacity;
        self.slots[self.head] = Some(item);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the front item.
    pub fn dequeue_front(&mut self) -> InventoryResult<T> {
        if self.is_empty() {
            return Err(InventoryError::Empty);
        }
        let item = self.slots[self.head].take();
        debug_assert!(item.is_some(), "occupied queue slot was empty");
        self.head = (self.head + 1) % self.capacity();
        self.len -= 1;
        item.ok_or(InventoryError::Empty)
    }

    pub fn front(&self) -> InventoryResult<&T> {
        if self.is_empty() {
            return Err(InventoryError::Empty);
        }
        self.slots[self.head].as_ref().ok_or(InventoryError::Empty)
    }

    pub fn front_mut(&mut self) -> InventoryResult<&mut T> {
        if self.is_empty() {
            return Err(InventoryError::Empty);
        }
        self.slots[self.head].as_mut().ok_or(InventoryError::Empty)
    }

    /// Drop every item and reset both cursors.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }

    /// Lazy front-to-back view. Never mutates the queue; clone it to walk
    /// the same contents again.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            queue: self,
            offset: 0,
        }
    }
}

/// Front-to-back iterator over a [`BoundedQueue`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    queue: &'a BoundedQueue<T>,
    offset: usize,
}

// Manual impl: deriving would require `T: Clone`.
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            queue: self.queue,
            offset: self.offset,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.queue.len {
            return None;
        }
        let idx = (self.queue.head + self.offset) % self.queue.capacity();
        self.offset += 1;
        self.queue.slots[idx].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.len - self.offset.min(self.queue.len);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a BoundedQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
