//! Orchestrator owning the queue, the stack, the reservation and the undo log.
//!
//! Every operation either completes or returns an [`InventoryError`] with all
//! four structures unchanged.

use crate::bounded_queue::BoundedQueue;
use crate::bounded_stack::BoundedStack;
use crate::display::StateSnapshot;
use crate::error::{InventoryError, InventoryResult};
use crate::log_dev;
use crate::reservation::SingleSlot;
use crate::types::{Capacities, Piece};
use crate::undo_log::UndoLog;

/// One independent inventory session.
#[derive(Debug)]
pub struct GameState {
    queue: BoundedQueue<Piece>,
    stack: BoundedStack<Piece>,
    reservation: SingleSlot<Piece>,
    undo: UndoLog<Piece>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Capacities::default())
    }
}

impl GameState {
    /// Create empty containers with the given fixed capacities.
    pub fn new(capacities: Capacities) -> Self {
        log_dev!(
            "[GAME] new session queue_capacity={} stack_capacity={}",
            capacities.queue,
            capacities.stack
        );
        Self {
            queue: BoundedQueue::new(capacities.queue),
            stack: BoundedStack::new(capacities.stack),
            reservation: SingleSlot::new(),
            undo: UndoLog::new(),
        }
    }

    pub fn queue(&self) -> &BoundedQueue<Piece> {
        &self.queue
    }

    pub fn stack(&self) -> &BoundedStack<Piece> {
        &self.stack
    }

    pub fn reserved(&self) -> Option<&Piece> {
        self.reservation.held()
    }

    pub fn pending_undo(&self) -> Option<&Piece> {
        self.undo.pending()
    }

    /// Read-only view of all four structures for rendering.
    pub fn snapshot(&self) -> StateSnapshot<'_> {
        StateSnapshot::new(&self.queue, &self.stack, self.reserved(), self.pending_undo())
    }

    /// Add a piece at the back of the queue.
    pub fn enqueue_piece(&mut self, piece: Piece) -> InventoryResult<()> {
        log_dev!("[QUEUE] enqueue '{piece}' len={}", self.queue.len());
        self.queue.enqueue_back(piece)
    }

    /// Add a piece on top of the stack.
    pub fn push_piece(&mut self, piece: Piece) -> InventoryResult<()> {
        log_dev!("[STACK] push '{piece}' len={}", self.stack.len());
        self.stack.push(piece)
    }

    /// Remove the queue's front piece, remembering it for a later undo.
    pub fn play(&mut self) -> InventoryResult<Piece> {
        let piece = self.queue.dequeue_front()?;
        if let Some(previous) = self.undo.pending() {
            log_dev!("[UNDO] discarding unconsumed record '{previous}'");
        }
        self.undo.record(piece.clone());
        log_dev!("[QUEUE] played '{piece}' remaining={}", self.queue.len());
        Ok(piece)
    }

    /// Move the stack's top piece into the reservation slot.
    pub fn reserve(&mut self) -> InventoryResult<&Piece> {
        let piece = self.reservation.reserve_from(&mut self.stack)?;
        log_dev!("[RESERVE] reserved '{piece}'");
        Ok(piece)
    }

    /// Put the reserved piece back on top of the stack.
    pub fn use_reservation(&mut self) -> InventoryResult<()> {
        self.reservation.release_into(&mut self.stack)?;
        log_dev!("[RESERVE] released onto stack len={}", self.stack.len());
        Ok(())
    }

    /// Exchange the stack's top piece with the queue's front piece.
    pub fn swap_top_and_front(&mut self) -> InventoryResult<()> {
        if self.stack.is_empty() || self.queue.is_empty() {
            return Err(InventoryError::InsufficientElements);
        }
        let top = self.stack.top_mut()?;
        let front = self.queue.front_mut()?;
        std::mem::swap(top, front);
        log_dev!("[SWAP] stack top='{top}' queue front='{front}'");
        Ok(())
    }

    /// Move the stack into the queue (top first) and the queue into the
    /// stack (front ends on top).
    pub fn invert_queue_and_stack(&mut self) -> InventoryResult<()> {
        let queue_len = self.queue.len();
        let stack_len = self.stack.len();
        let queue_capacity = self.queue.capacity();
        let stack_capacity = self.stack.capacity();
        if stack_len > queue_capacity || queue_len > stack_capacity {
            log_dev!(
                "[INVERT] rejected queue={queue_len}/{queue_capacity} stack={stack_len}/{stack_capacity}"
            );
            return Err(InventoryError::WouldExceedCapacity {
                queue_len,
                queue_capacity,
                stack_len,
                stack_capacity,
            });
        }

        let from_stack: Vec<Piece> = self.stack.iter_top_down().cloned().collect();
        let from_queue: Vec<Piece> = self.queue.iter().cloned().collect();
        self.queue.clear();
        self.stack.clear();

        for piece in from_stack {
            self.queue.enqueue_back(piece)?;
        }
        for piece in from_queue.into_iter().rev() {
            self.stack.push(piece)?;
        }
        debug_assert_eq!(self.queue.len(), stack_len, "invert lost queue pieces");
        debug_assert_eq!(self.stack.len(), queue_len, "invert lost stack pieces");
        log_dev!(
            "[INVERT] queue_len={} stack_len={}",
            self.queue.len(),
            self.stack.len()
        );
        Ok(())
    }

    /// Put the last played piece back at the queue's front.
    pub fn undo(&mut self) -> InventoryResult<&Piece> {
        let piece = self.undo.restore_into(&mut self.queue)?;
        log_dev!("[UNDO] restored '{piece}' to queue front");
        Ok(piece)
    }
}
