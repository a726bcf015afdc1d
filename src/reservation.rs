//! Single-piece reservation slot fed from and drained into the stack.

use crate::bounded_stack::BoundedStack;
use crate::error::{InventoryError, InventoryResult};

/// Holds zero or one item.
#[derive(Debug)]
pub struct SingleSlot<T> {
    held: Option<T>,
}

impl<T> Default for SingleSlot<T> {
    fn default() -> Self {
        Self { held: None }
    }
}

impl<T> SingleSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_occupied(&self) -> bool {
        self.held.is_some()
    }

    pub fn held(&self) -> Option<&T> {
        self.held.as_ref()
    }

    /// Pop the stack's top into the slot.
    pub fn reserve_from(&mut self, stack: &mut BoundedStack<T>) -> InventoryResult<&T> {
        if self.is_occupied() {
            return Err(InventoryError::AlreadyReserved);
        }
        let item = stack.pop()?;
        let held: &T = self.held.insert(item);
        Ok(held)
    }

    /// Push the held item back onto the stack and empty the slot. The slot
    /// keeps its item if the stack cannot take it.
    pub fn release_into(&mut self, stack: &mut BoundedStack<T>) -> InventoryResult<()> {
        if !self.is_occupied() {
            return Err(InventoryError::NotReserved);
        }
        if stack.is_full() {
            return Err(InventoryError::CapacityExceeded);
        }
        let item = self.held.take().ok_or(InventoryError::NotReserved)?;
        stack.push(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserve_then_release_restores_stack_top() {
        let mut stack = BoundedStack::new(3);
        stack.push("X").expect("stack full");
        stack.push("Y").expect("stack full");
        let mut slot = SingleSlot::new();

        assert_eq!(slot.reserve_from(&mut stack), Ok(&"Y"));
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.peek_top(), Ok(&"X"));

        slot.release_into(&mut stack).expect("release failed");
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.peek_top(), Ok(&"Y"));
        assert!(!slot.is_occupied());
    }

    #[test]
    fn second_reserve_is_rejected() {
        let mut stack = BoundedStack::new(3);
        stack.push("X").expect("stack full");
        stack.push("Y").expect("stack full");
        let mut slot = SingleSlot::new();
        slot.reserve_from(&mut stack).expect("reserve failed");
        assert_eq!(
            slot.reserve_from(&mut stack),
            Err(InventoryError::AlreadyReserved)
        );
        assert_eq!(stack.len(), 1);
        assert_eq!(slot.held(), Some(&"Y"));
    }

    #[test]
    fn reserve_from_empty_stack_leaves_slot_empty() {
        let mut stack: BoundedStack<&str> = BoundedStack::new(1);
        let mut slot = SingleSlot::new();
        assert_eq!(slot.reserve_from(&mut stack), Err(InventoryError::Empty));
        assert!(!slot.is_occupied());
    }

    #[test]
    fn release_into_full_stack_keeps_piece() {
        let mut stack = BoundedStack::new(1);
        stack.push("A").expect("stack full");
        let mut slot = SingleSlot::new();
        slot.reserve_from(&mut stack).expect("reserve failed");
        stack.push("B").expect("stack full");

        assert_eq!(
            slot.release_into(&mut stack),
            Err(InventoryError::CapacityExceeded)
        );
        assert_eq!(slot.held(), Some(&"A"));
        assert_eq!(stack.peek_top(), Ok(&"B"));
    }

    #[test]
    fn release_without_reservation_fails() {
        let mut stack: BoundedStack<&str> = BoundedStack::new(1);
        let mut slot = SingleSlot::new();
        assert_eq!(
            slot.release_into(&mut stack),
            Err(InventoryError::NotReserved)
        );
    }
}
