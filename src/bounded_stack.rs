//! Fixed-capacity LIFO stack.

use crate::error::{InventoryError, InventoryResult};

/// Stack of at most `capacity` items; the top is the last element of `items`.
#[derive(Debug)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    /// Create an empty stack holding at most `capacity` items.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn push(&mut self, item: T) -> InventoryResult<()> {
        if self.is_full() {
            return Err(InventoryError::CapacityExceeded);
        }
        self.items.push(item);
        Ok(())
    }

    pub fn pop(&mut self) -> InventoryResult<T> {
        self.items.pop().ok_or(InventoryError::Empty)
    }

    /// Read the top without removing it.
    pub fn peek_top(&self) -> InventoryResult<&T> {
        self.items.last().ok_or(InventoryError::Empty)
    }

    pub fn top_mut(&mut self) -> InventoryResult<&mut T> {
        self.items.last_mut().ok_or(InventoryError::Empty)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Top-to-bottom view.
    pub fn iter_top_down(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + Clone {
        self.items.iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_returns_last_push() {
        let mut stack = BoundedStack::new(3);
        stack.push("a").expect("stack full");
        stack.push("b").expect("stack full");
        assert_eq!(stack.pop(), Ok("b"));
        stack.push("c").expect("stack full");
        assert_eq!(stack.pop(), Ok("c"));
        assert_eq!(stack.pop(), Ok("a"));
        assert_eq!(stack.pop(), Err(InventoryError::Empty));
    }

    #[test]
    fn push_beyond_capacity_is_rejected() {
        let mut stack = BoundedStack::new(2);
        stack.push(1).expect("stack full");
        stack.push(2).expect("stack full");
        assert_eq!(stack.push(3), Err(InventoryError::CapacityExceeded));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.peek_top(), Ok(&2));
    }

    #[test]
    fn peek_does_not_mutate() {
        let mut stack = BoundedStack::new(2);
        assert_eq!(stack.peek_top(), Err(InventoryError::Empty));
        stack.push(5).expect("stack full");
        assert_eq!(stack.peek_top(), Ok(&5));
        assert_eq!(stack.peek_top(), Ok(&5));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn iter_top_down_starts_at_top() {
        let mut stack = BoundedStack::new(3);
        for value in [1, 2, 3] {
            stack.push(value).expect("stack full");
        }
        let order: Vec<_> = stack.iter_top_down().copied().collect();
        assert_eq!(order, vec![3, 2, 1]);
    }
}
