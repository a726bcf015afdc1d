//! Depth-one history of the last played piece.

use crate::bounded_queue::BoundedQueue;
use crate::error::{InventoryError, InventoryResult};

/// At most one pending undo record. A new record replaces the old one.
#[derive(Debug)]
pub struct UndoLog<T> {
    pending: Option<T>,
}

impl<T> Default for UndoLog<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> UndoLog<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite any unconsumed record.
    pub fn record(&mut self, item: T) {
        self.pending = Some(item);
    }

    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref()
    }

    /// Put the recorded item back at the queue's front and clear the record.
    /// The record survives a full queue so the caller can retry later.
    pub fn restore_into<'q>(&mut self, queue: &'q mut BoundedQueue<T>) -> InventoryResult<&'q T> {
        if self.pending.is_none() {
            return Err(InventoryError::NoPendingUndo);
        }
        if queue.is_full() {
            return Err(InventoryError::CapacityExceeded);
        }
        let item = self.pending.take().ok_or(InventoryError::NoPendingUndo)?;
        queue.enqueue_front(item)?;
        queue.front()
    }
}
